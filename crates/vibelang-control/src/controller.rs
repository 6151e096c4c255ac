//! MIDI controller numbers
//!
//! A Control Change message addresses one of 128 controllers with a 7-bit
//! data byte. [`Controller`] wraps that number and can only hold 0-127.
//! Well-known General MIDI controllers are available as associated
//! constants; [`Controller::cc`] gives the raw-number form of the same
//! values (`Controller::cc(64) == Controller::SUSTAIN_PEDAL`).

use crate::error::{Error, InvalidControllerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Returns true if `id` is a legal controller number (0-127).
pub fn is_valid(id: i32) -> bool {
    (Controller::MIN as i32..=Controller::MAX as i32).contains(&id)
}

/// Checks that `id` is a legal controller number.
pub fn validate(id: i32) -> Result<(), InvalidControllerError> {
    if is_valid(id) {
        Ok(())
    } else {
        Err(InvalidControllerError::new(id))
    }
}

/// A validated MIDI controller number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "u8")]
pub struct Controller(pub(crate) u8);

impl Controller {
    /// Lowest controller number
    pub const MIN: u8 = 0;
    /// Highest controller number (7 bits)
    pub const MAX: u8 = 127;

    /// Modulation wheel (CC1)
    pub const MODULATION_WHEEL: Controller = Controller(1);
    /// Data entry, most significant byte (CC6)
    pub const DATA_ENTRY_MSB: Controller = Controller(6);
    /// Channel volume (CC7)
    pub const VOLUME: Controller = Controller(7);
    /// Stereo pan (CC10)
    pub const PAN: Controller = Controller(10);
    /// Expression (CC11)
    pub const EXPRESSION: Controller = Controller(11);
    /// Data entry, least significant byte (CC38)
    pub const DATA_ENTRY_LSB: Controller = Controller(38);
    /// Sustain (damper) pedal (CC64)
    pub const SUSTAIN_PEDAL: Controller = Controller(64);
    /// Reverb send level (CC91)
    pub const REVERB_LEVEL: Controller = Controller(91);
    /// Tremolo depth (CC92)
    pub const TREMOLO_LEVEL: Controller = Controller(92);
    /// Chorus send level (CC93)
    pub const CHORUS_LEVEL: Controller = Controller(93);
    /// Celeste (detune) depth (CC94)
    pub const CELESTE_LEVEL: Controller = Controller(94);
    /// Phaser depth (CC95)
    pub const PHASER_LEVEL: Controller = Controller(95);
    /// NRPN select, least significant byte (CC98)
    pub const NON_REGISTERED_PARAMETER_LSB: Controller = Controller(98);
    /// NRPN select, most significant byte (CC99)
    pub const NON_REGISTERED_PARAMETER_MSB: Controller = Controller(99);
    /// RPN select, least significant byte (CC100)
    pub const REGISTERED_PARAMETER_NUMBER_LSB: Controller = Controller(100);
    /// RPN select, most significant byte (CC101)
    pub const REGISTERED_PARAMETER_NUMBER_MSB: Controller = Controller(101);
    /// Reset all controllers (CC121)
    pub const ALL_CONTROLLERS_OFF: Controller = Controller(121);
    /// All notes off (CC123)
    pub const ALL_NOTES_OFF: Controller = Controller(123);

    /// Create a controller from an untrusted integer.
    pub fn new(id: i32) -> Result<Self, InvalidControllerError> {
        validate(id)?;
        Ok(Self(id as u8))
    }

    /// Controller by raw number, for literals.
    ///
    /// Fails to compile when used in a const context with a number above
    /// 127 and panics otherwise. Use [`Controller::new`] for untrusted input.
    pub const fn cc(number: u8) -> Self {
        assert!(number <= Self::MAX, "controller number out of range (expected 0-127)");
        Self(number)
    }

    /// The raw controller number
    pub const fn number(self) -> u8 {
        self.0
    }

    /// All 128 controllers in ascending order
    pub fn all() -> impl Iterator<Item = Controller> {
        (Self::MIN..=Self::MAX).map(Controller)
    }
}

impl TryFrom<i32> for Controller {
    type Error = InvalidControllerError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl TryFrom<u8> for Controller {
    type Error = InvalidControllerError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::new(byte as i32)
    }
}

impl From<Controller> for u8 {
    fn from(controller: Controller) -> Self {
        controller.0
    }
}

impl From<Controller> for i32 {
    fn from(controller: Controller) -> Self {
        controller.0 as i32
    }
}

impl FromStr for Controller {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let id: i64 = trimmed
            .parse()
            .map_err(|_| Error::Parse(format!("'{}' is not a controller number", trimmed)))?;
        // Numbers beyond i32 are still out of range, not malformed
        let id = id.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        Ok(Self::new(id)?)
    }
}

impl fmt::Display for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CC{}", self.0)
    }
}
