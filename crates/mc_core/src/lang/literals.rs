//! Literal vocabulary: integer radixes.
//!
//! ## Examples
//! ```rust
//! use mc_core::lang::literals::Radix;
//!
//! assert_eq!(Radix::from_prefix('x'), Some(Radix::Hexadecimal));
//! assert_eq!(Radix::Binary.base(), 2);
//! ```

/// The base an integer literal was written in.
///
/// ## Notes
/// - The discriminant is the numeric base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    Binary = 2,
    Decimal = 10,
    Hexadecimal = 16,
}

impl Radix {
    /// The numeric base (2, 10, or 16).
    pub fn base(self) -> u32 {
        self as u32
    }

    /// The source prefix, empty for decimal.
    pub fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => "0b",
            Radix::Decimal => "",
            Radix::Hexadecimal => "0x",
        }
    }

    /// Hyphenated name used in token dumps (`binary-integer`, ...).
    pub fn token_name(self) -> &'static str {
        match self {
            Radix::Binary => "binary-integer",
            Radix::Decimal => "decimal-integer",
            Radix::Hexadecimal => "hexadecimal-integer",
        }
    }

    /// Resolve the letter following a leading `0` (case-insensitive).
    pub fn from_prefix(letter: char) -> Option<Radix> {
        match letter {
            'b' | 'B' => Some(Radix::Binary),
            'x' | 'X' => Some(Radix::Hexadecimal),
            _ => None,
        }
    }

    /// Whether `c` is a digit in this radix.
    pub fn is_digit(self, c: char) -> bool {
        c.is_digit(self.base())
    }
}
