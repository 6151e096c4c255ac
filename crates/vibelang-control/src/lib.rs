//! vibelang-control - MIDI controller numbers for VibeLang
//!
//! Controller Change messages address one of 128 controllers (0-127). This
//! crate provides:
//!
//! - [`Controller`], a controller number that is always in range
//! - validation of untrusted numbers ([`is_valid`], [`validate`])
//! - General MIDI names with a fallback for unassigned numbers ([`name`])
//! - optional user labels for device-specific controllers ([`Config`])
//!
//! # Usage as a Library
//!
//! ```
//! use vibelang_control::{name, Controller, OTHER_CONTROL};
//!
//! assert_eq!(name(64).unwrap(), "Sustain pedal");
//! assert_eq!(name(50).unwrap(), OTHER_CONTROL);
//! assert!(name(128).is_err());
//!
//! let cc = Controller::new(7).unwrap();
//! assert_eq!(cc, Controller::VOLUME);
//! assert_eq!(cc.name(), "Volume");
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod names;

// Re-export main types
pub use config::{Config, ControllerLabel};
pub use controller::{is_valid, validate, Controller};
pub use error::{Error, InvalidControllerError, Result};
pub use names::{general_midi_controllers, name, OTHER_CONTROL};
