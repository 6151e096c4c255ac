//! General MIDI controller names
//!
//! Only a handful of the 128 controller numbers have a General MIDI meaning.
//! Every other number is still a legal controller and resolves to
//! [`OTHER_CONTROL`].

use crate::controller::{validate, Controller};
use crate::error::InvalidControllerError;

/// Name returned for legal controllers without a General MIDI meaning
pub const OTHER_CONTROL: &str = "Other Control (see MIDI spec for details).";

/// General MIDI controller names, sorted by number. 122 is reserved and
/// deliberately absent.
static GENERAL_MIDI_NAMES: &[(u8, &str)] = &[
    (1, "Modulation wheel"),
    (6, "Data Entry MSB"),
    (7, "Volume"),
    (10, "Pan"),
    (11, "Expression"),
    (38, "Data Entry LSB"),
    (64, "Sustain pedal"),
    (91, "Reverb level"),
    (92, "Tremolo level"),
    (93, "Chorus level"),
    (94, "Celeste level"),
    (95, "Phaser level"),
    (98, "Non-registered Parameter LSB"),
    (99, "Non-registered Parameter MSB"),
    (100, "Registered Parameter Number LSB"),
    (101, "Registered Parameter Number MSB"),
    (121, "All controllers off"),
    (123, "All notes off"),
];

/// Resolve the name of a raw controller number.
///
/// Out-of-range numbers are an error; in-range numbers without a General
/// MIDI meaning get [`OTHER_CONTROL`].
pub fn name(id: i32) -> Result<&'static str, InvalidControllerError> {
    validate(id)?;
    Ok(Controller(id as u8).name())
}

/// Iterate the General MIDI controllers in ascending order
pub fn general_midi_controllers() -> impl Iterator<Item = (Controller, &'static str)> {
    GENERAL_MIDI_NAMES
        .iter()
        .map(|&(number, name)| (Controller::cc(number), name))
}

impl Controller {
    /// Human-readable name, falling back to [`OTHER_CONTROL`]
    pub fn name(self) -> &'static str {
        self.general_midi_name().unwrap_or(OTHER_CONTROL)
    }

    /// The General MIDI name, if this controller has one
    pub fn general_midi_name(self) -> Option<&'static str> {
        GENERAL_MIDI_NAMES
            .binary_search_by_key(&self.number(), |&(number, _)| number)
            .ok()
            .map(|index| GENERAL_MIDI_NAMES[index].1)
    }

    /// Whether General MIDI assigns this controller a meaning
    pub fn is_general_midi(self) -> bool {
        self.general_midi_name().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sorted_and_in_range() {
        assert!(GENERAL_MIDI_NAMES.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(GENERAL_MIDI_NAMES.iter().all(|&(n, _)| n <= Controller::MAX));
    }

    #[test]
    fn test_every_valid_number_resolves() {
        for id in 0..=127 {
            assert!(name(id).is_ok(), "{} should resolve", id);
        }
    }

    #[test]
    fn test_out_of_range_fails_with_value() {
        assert_eq!(name(128), Err(InvalidControllerError::new(128)));
        assert_eq!(name(-1), Err(InvalidControllerError::new(-1)));
        assert_eq!(name(1000), Err(InvalidControllerError::new(1000)));
    }

    #[test]
    fn test_known_names() {
        assert_eq!(name(64), Ok("Sustain pedal"));
        assert_eq!(name(7), Ok("Volume"));
        assert_eq!(name(121), Ok("All controllers off"));
        assert_eq!(name(123), Ok("All notes off"));
    }

    #[test]
    fn test_unassigned_falls_back() {
        assert_eq!(name(50), Ok(OTHER_CONTROL));
        assert_eq!(name(0), Ok(OTHER_CONTROL));
        assert_eq!(name(122), Ok(OTHER_CONTROL));
        assert_eq!(name(127), Ok(OTHER_CONTROL));
    }

    #[test]
    fn test_alias_does_not_matter() {
        let semantic = Controller::MODULATION_WHEEL.name();
        let raw = Controller::cc(1).name();
        assert_eq!(semantic, raw);
        assert_eq!(name(1), Ok(semantic));
    }

    #[test]
    fn test_name_is_idempotent() {
        for id in [1, 50, 64, 122] {
            assert_eq!(name(id), name(id));
        }
    }

    #[test]
    fn test_general_midi_membership() {
        assert!(Controller::SUSTAIN_PEDAL.is_general_midi());
        assert!(!Controller::cc(2).is_general_midi());
        assert_eq!(Controller::cc(2).general_midi_name(), None);
        assert_eq!(general_midi_controllers().count(), 18);
    }
}
