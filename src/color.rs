//! sRGB colors written as `#RRGGBB`, used for text-card fills.

use core::fmt;

/// An opaque sRGB color.
///
/// Parses `#RGB` / `RGB` and `#RRGGBB` / `RRGGBB` (case-insensitive) and
/// always formats as uppercase `#RRGGBB`.
///
/// ```
/// use zenshowcase::HexColor;
///
/// let teal = HexColor::parse("#00897b").unwrap();
/// assert_eq!(teal, HexColor::rgb(0x00, 0x89, 0x7B));
/// assert_eq!(teal.to_string(), "#00897B");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    /// Ink (near black).
    pub const INK: Self = Self::rgb(0x1A, 0x1A, 0x1A);
    /// Graphite.
    pub const GRAPHITE: Self = Self::rgb(0x3A, 0x3A, 0x3A);
    /// Gunmetal.
    pub const GUNMETAL: Self = Self::rgb(0x2C, 0x2C, 0x2E);
    /// Walnut.
    pub const WALNUT: Self = Self::rgb(0x5C, 0x40, 0x33);
    /// Cognac.
    pub const COGNAC: Self = Self::rgb(0x9A, 0x63, 0x24);
    /// Signal red.
    pub const SIGNAL: Self = Self::rgb(0xD3, 0x2F, 0x2F);
    /// Teal.
    pub const TEAL: Self = Self::rgb(0x00, 0x89, 0x7B);
    /// Mustard.
    pub const MUSTARD: Self = Self::rgb(0xF9, 0xA8, 0x25);
    /// Persimmon.
    pub const PERSIMMON: Self = Self::rgb(0xE6, 0x4A, 0x19);

    /// Default text-card palette, in draw order.
    pub const PALETTE: [Self; 9] = [
        Self::INK,
        Self::GRAPHITE,
        Self::GUNMETAL,
        Self::WALNUT,
        Self::COGNAC,
        Self::SIGNAL,
        Self::TEAL,
        Self::MUSTARD,
        Self::PERSIMMON,
    ];

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color. Returns `None` for anything but 3 or 6 hex digits,
    /// with an optional leading `#`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let bytes = hex.as_bytes();
        match bytes.len() {
            3 => Some(Self {
                r: expand_nibble(bytes[0])?,
                g: expand_nibble(bytes[1])?,
                b: expand_nibble(bytes[2])?,
            }),
            6 => Some(Self {
                r: parse_byte(bytes[0], bytes[1])?,
                g: parse_byte(bytes[2], bytes[3])?,
                b: parse_byte(bytes[4], bytes[5])?,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Expand a single hex nibble: 'f' → 0xFF, 'a' → 0xAA.
fn expand_nibble(ch: u8) -> Option<u8> {
    let n = hex_val(ch)?;
    Some(n << 4 | n)
}

fn parse_byte(hi: u8, lo: u8) -> Option<u8> {
    Some(hex_val(hi)? << 4 | hex_val(lo)?)
}

fn hex_val(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::HexColor;
    use core::fmt;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for HexColor {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    struct HexColorVisitor;

    impl Visitor<'_> for HexColorVisitor {
        type Value = HexColor;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a hex color like \"#1A1A1A\"")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<HexColor, E> {
            HexColor::parse(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }

    impl<'de> Deserialize<'de> for HexColor {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_str(HexColorVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn parse_six_digit() {
        assert_eq!(HexColor::parse("#D32F2F"), Some(HexColor::SIGNAL));
        assert_eq!(HexColor::parse("d32f2f"), Some(HexColor::SIGNAL));
        assert_eq!(HexColor::parse("  #F9A825 "), Some(HexColor::MUSTARD));
    }

    #[test]
    fn parse_three_digit_expands() {
        assert_eq!(HexColor::parse("#fa0"), Some(HexColor::rgb(0xFF, 0xAA, 0x00)));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(HexColor::parse(""), None);
        assert_eq!(HexColor::parse("#"), None);
        assert_eq!(HexColor::parse("#12345"), None);
        assert_eq!(HexColor::parse("#1A1A1A1A"), None);
        assert_eq!(HexColor::parse("#GG0000"), None);
        assert_eq!(HexColor::parse("teal"), None);
    }

    #[test]
    fn display_is_uppercase_hash_form() {
        assert_eq!(HexColor::INK.to_string(), "#1A1A1A");
        assert_eq!(HexColor::rgb(0, 0x89, 0x7b).to_string(), "#00897B");
    }

    #[test]
    fn palette_round_trips_through_display() {
        for c in HexColor::PALETTE {
            assert_eq!(HexColor::parse(&c.to_string()), Some(c));
        }
    }
}
