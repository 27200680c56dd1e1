//! Debug formatting
//!
//! Human-readable renderings of words and generator state. Nothing here
//! touches the state; generators are deliberately not serializable.

use std::fmt;

use crate::rng::{OutputVariant, Xoshiro256};

/// Render `x` as 64 binary digits, most-significant bit first
///
/// # Example
/// ```
/// use xoshiro256_core_rs::format_binary;
///
/// assert_eq!(format_binary(5), format!("{}101", "0".repeat(61)));
/// ```
pub fn format_binary(x: u64) -> String {
    format!("{:064b}", x)
}

/// Multi-line dump of a generator: variant, then each word in hex and binary
///
/// # Example
/// ```
/// use xoshiro256_core_rs::{StateDump, Xoshiro256};
///
/// let rng = Xoshiro256::new([1, 2, 3, 4]).unwrap();
/// let dump = StateDump::new(&rng).to_string();
/// assert!(dump.starts_with("xoshiro256**"));
/// assert_eq!(dump.lines().count(), 5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StateDump {
    words: [u64; 4],
    variant: OutputVariant,
}

impl StateDump {
    pub fn new(rng: &Xoshiro256) -> Self {
        Self {
            words: rng.words(),
            variant: rng.variant(),
        }
    }
}

impl fmt::Display for StateDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.variant)?;
        for (i, word) in self.words.iter().enumerate() {
            write!(f, "\ns{} = {:#018x} {}", i, word, format_binary(*word))?;
        }
        Ok(())
    }
}
