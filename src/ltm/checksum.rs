//! # LTM Checksum
//!
//! LTM protects each payload with a single XOR byte. The receiver folds every
//! payload byte and the trailing checksum byte into one accumulator; a valid
//! frame leaves it at zero.

/// Running XOR accumulator for one frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct XorChecksum {
    value: u8,
}

impl XorChecksum {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self { value: 0 }
    }

    /// Clear the accumulator before a new frame
    pub fn reset(&mut self) {
        self.value = 0;
    }

    /// Fold one byte into the accumulator
    pub fn update(&mut self, byte: u8) {
        self.value ^= byte;
    }

    /// Current accumulated value
    pub fn value(&self) -> u8 {
        self.value
    }

    /// True once the received checksum byte cancels the payload bytes
    pub fn is_valid(&self) -> bool {
        self.value == 0
    }
}

/// Compute the checksum byte to append after `payload`
///
/// # Examples
///
/// ```
/// use ltm_bridge::ltm::checksum::xor_checksum;
///
/// assert_eq!(xor_checksum(&[0xE8, 0x0C, 0, 0, 0, 0, 0]), 0xE4);
/// ```
pub fn xor_checksum(payload: &[u8]) -> u8 {
    payload.iter().fold(0, |acc, &byte| acc ^ byte)
}
