//! Conversion between `#rrggbb` strings and channel triples.

use std::fmt;
use std::str::FromStr;

/// An sRGB color as three 8-bit channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Formats the color as `#` followed by six lowercase hex digits.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum HexParseError {
    #[error("empty color string")]
    Empty,
    #[error("expected 6 hex digits, found {found} characters")]
    InvalidLength { found: usize },
    #[error("invalid hex digit {digit:?} at offset {offset}")]
    InvalidDigit { digit: char, offset: usize },
}

/// Parses `RRGGBB` or `#RRGGBB` (case-insensitive).
///
/// Shorthand (`#abc`), alpha (`#rrggbbaa`), surrounding whitespace and named
/// colors are all rejected.
pub fn parse_hex(input: &str) -> Result<Rgb, HexParseError> {
    if input.is_empty() {
        return Err(HexParseError::Empty);
    }

    let digits = input.strip_prefix('#').unwrap_or(input);
    let found = digits.chars().count();
    if found != 6 {
        return Err(HexParseError::InvalidLength { found });
    }

    if let Some((offset, digit)) = digits
        .char_indices()
        .find(|(_, digit)| !digit.is_ascii_hexdigit())
    {
        return Err(HexParseError::InvalidDigit { digit, offset });
    }

    // Every character is an ASCII hex digit, so byte slicing is safe here.
    let channel = |start: usize| -> Result<u8, HexParseError> {
        u8::from_str_radix(&digits[start..start + 2], 16).map_err(|_| {
            HexParseError::InvalidDigit {
                digit: digits[start..].chars().next().unwrap_or_default(),
                offset: start,
            }
        })
    };

    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

impl FromStr for Rgb {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl TryFrom<&str> for Rgb {
    type Error = HexParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_hex(value)
    }
}
