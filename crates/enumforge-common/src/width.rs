//! Unsigned base widths for flag sets.

use serde::{Deserialize, Serialize};

/// Storage width of a flag set.
///
/// Values are carried as `u64` at runtime; the width bounds which bits may be
/// declared and how many bytes the encoded form takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseWidth {
    U8,
    U16,
    #[default]
    U32,
    U64,
}

impl BaseWidth {
    pub const fn bits(self) -> u32 {
        match self {
            Self::U8 => 8,
            Self::U16 => 16,
            Self::U32 => 32,
            Self::U64 => 64,
        }
    }

    pub const fn bytes(self) -> usize {
        (self.bits() / 8) as usize
    }

    /// Largest value representable in this width.
    pub const fn max_value(self) -> u64 {
        match self {
            Self::U64 => u64::MAX,
            other => (1u64 << other.bits()) - 1,
        }
    }

    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(Self::U8),
            16 => Some(Self::U16),
            32 => Some(Self::U32),
            64 => Some(Self::U64),
            _ => None,
        }
    }

    /// Resolve an unsigned type name such as `u16`, `uint16`, or `uint16_t`.
    ///
    /// Signed and non-integer names return `None`.
    pub fn from_type_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let digits = name
            .strip_prefix("uint")
            .or_else(|| name.strip_prefix('u'))?;
        let digits = digits.strip_suffix("_t").unwrap_or(digits);
        match digits.parse::<u32>() {
            Ok(bits) => Self::from_bits(bits),
            Err(_) => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
        }
    }
}

impl std::fmt::Display for BaseWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
