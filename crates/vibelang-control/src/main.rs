//! vibe-cc - look up MIDI controller names
//!
//! Prints General MIDI names for controller numbers, alongside any labels
//! from the user's config file.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use vibelang_control::{config::Config, general_midi_controllers, Controller};

#[derive(Parser)]
#[command(name = "vibe-cc")]
#[command(author, version, about = "MIDI controller names for VibeLang", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (default: ~/.config/vibe-cc/config.toml)
    #[arg(short, long, global = true)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the name of one or more controller numbers
    Name {
        /// Controller numbers (0-127)
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<String>,
    },
    /// List General MIDI controllers
    List {
        /// List all 128 controllers, not only General MIDI ones
        #[arg(long)]
        all: bool,
    },
    /// Create a default configuration file
    Init,
    /// Show the configuration file path
    ConfigPath,
}

fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();

    let load_config = || -> Result<Config> {
        Ok(match cli.config.as_deref() {
            Some(path) => Config::load_from(path.as_ref())?,
            None => Config::load_or_default()?,
        })
    };

    match cli.command {
        Commands::Name { ref numbers } => {
            let config = load_config()?;
            let mut failed = false;
            for line in run_name(&config, numbers) {
                match line {
                    Ok(line) => println!("{}", line),
                    Err(line) => {
                        eprintln!("{}", line);
                        failed = true;
                    }
                }
            }
            if failed {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::List { all } => {
            let config = load_config()?;
            if all {
                for controller in Controller::all() {
                    println!("{}", format_line(&config, controller));
                }
            } else {
                for (controller, _) in general_midi_controllers() {
                    println!("{}", format_line(&config, controller));
                }
            }
        }
        Commands::Init => {
            let path = Config::create_default_config_file()?;
            println!("Created default config at: {}", path.display());
        }
        Commands::ConfigPath => {
            let path = Config::config_path()?;
            println!("{}", path.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Resolve every argument; bad ones become `Err` lines without stopping the rest
fn run_name(config: &Config, numbers: &[String]) -> Vec<std::result::Result<String, String>> {
    numbers
        .iter()
        .map(|arg| match arg.parse::<Controller>() {
            Ok(controller) => Ok(format_line(config, controller)),
            Err(e) => Err(format!("{}: {}", arg, e)),
        })
        .collect()
}

fn format_line(config: &Config, controller: Controller) -> String {
    match config.label(controller) {
        Some(label) => format!("{:>3}: {} [{}]", controller.number(), controller.name(), label),
        None => format!("{:>3}: {}", controller.number(), controller.name()),
    }
}
