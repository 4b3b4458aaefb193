//! Brand Palette - fixed role to color mapping
//!
//! Defined once, never mutated. Variants (monochrome) are new values.

use image::{Rgb, Rgba};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An sRGB color written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: HexColor = HexColor::new(0x00, 0x00, 0x00);
    pub const WHITE: HexColor = HexColor::new(0xFF, 0xFF, 0xFF);

    /// Parse `#RRGGBB` or `RRGGBB`, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_rgb(self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 0xFF])
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        HexColor::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color: {s}")))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Primary,
    Secondary,
    Accent,
    Background,
    Text,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Primary,
        Role::Secondary,
        Role::Accent,
        Role::Background,
        Role::Text,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Role::Primary => "Primary",
            Role::Secondary => "Secondary",
            Role::Accent => "Accent",
            Role::Background => "Background",
            Role::Text => "Text",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Palette {
    pub primary: HexColor,
    pub secondary: HexColor,
    pub accent: HexColor,
    pub background: HexColor,
    pub text: HexColor,
}

impl Palette {
    /// The brand palette.
    pub const fn brand() -> Self {
        Self {
            primary: HexColor::new(0xFF, 0x00, 0x50),
            secondary: HexColor::BLACK,
            accent: HexColor::new(0x00, 0xC8, 0x53),
            background: HexColor::WHITE,
            text: HexColor::new(0x21, 0x21, 0x21),
        }
    }

    pub fn color(&self, role: Role) -> HexColor {
        match role {
            Role::Primary => self.primary,
            Role::Secondary => self.secondary,
            Role::Accent => self.accent,
            Role::Background => self.background,
            Role::Text => self.text,
        }
    }

    /// Human description shown on the reference sheet.
    pub fn description(&self, role: Role) -> &'static str {
        match role {
            Role::Primary => "Brand Pink",
            Role::Secondary => "Black",
            Role::Accent => "Success Green",
            Role::Background => "White",
            Role::Text => "Dark Gray",
        }
    }

    /// Single-ink variant: primary and secondary both become `ink`.
    pub fn monochrome(&self, ink: HexColor) -> Self {
        Self {
            primary: ink,
            secondary: ink,
            ..*self
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (Role, HexColor)> + '_ {
        Role::ALL.into_iter().map(move |role| (role, self.color(role)))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::brand()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_hex_codes() {
        let p = Palette::brand();
        assert_eq!(p.primary.to_string(), "#FF0050");
        assert_eq!(p.secondary.to_string(), "#000000");
        assert_eq!(p.accent.to_string(), "#00C853");
        assert_eq!(p.background.to_string(), "#FFFFFF");
        assert_eq!(p.text.to_string(), "#212121");
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(HexColor::parse("#ff0050"), Some(Palette::brand().primary));
        assert_eq!(HexColor::parse("00C853"), Some(Palette::brand().accent));
        assert_eq!(HexColor::parse("#12345"), None);
        assert_eq!(HexColor::parse("#GG0000"), None);
        assert_eq!(HexColor::parse("#+F0050"), None);
    }

    #[test]
    fn test_monochrome_keeps_other_roles() {
        let mono = Palette::brand().monochrome(HexColor::WHITE);
        assert_eq!(mono.primary, HexColor::WHITE);
        assert_eq!(mono.secondary, HexColor::WHITE);
        assert_eq!(mono.accent, Palette::brand().accent);
        assert_eq!(mono.text, Palette::brand().text);
    }

    #[test]
    fn test_entries_in_role_order() {
        let roles: Vec<_> = Palette::brand().entries().map(|(r, _)| r).collect();
        assert_eq!(roles, Role::ALL.to_vec());
    }
}
