//! Style: Colours and text modifiers for terminal rendering.

use crate::error::DiffError;
use bitflags::bitflags;
use std::str::FromStr;

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl FromStr for Rgb {
    type Err = DiffError;

    /// Parse `#rrggbb` (the leading `#` is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().strip_prefix('#').unwrap_or_else(|| s.trim());
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DiffError::InvalidColor(s.to_string()));
        }
        u32::from_str_radix(hex, 16)
            .map(Self::from_u32)
            .map_err(|_| DiffError::InvalidColor(s.to_string()))
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// # Example
    /// ```
    /// use diffcheck::Modifiers;
    /// let style = Modifiers::BOLD | Modifiers::DIM;
    /// assert!(style.contains(Modifiers::BOLD));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0001_0000;
        /// Strikethrough text
        const STRIKETHROUGH = 0b0010_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// Foreground, optional background and modifiers for one span of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground color.
    pub fg: Rgb,
    /// Background color; `None` keeps the terminal default.
    pub bg: Option<Rgb>,
    /// Text modifiers.
    pub modifiers: Modifiers,
}

impl Style {
    /// Plain style with the given foreground.
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: None,
            modifiers: Modifiers::empty(),
        }
    }

    /// Builder: set background.
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Builder: add modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = self.modifiers.union(modifiers);
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::fg(Rgb::new(220, 220, 220))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(Rgb::from_u32(0xFF5500), Rgb::new(255, 85, 0));
    }

    #[test]
    fn test_rgb_parse() {
        assert_eq!("#2ea043".parse::<Rgb>().unwrap(), Rgb::new(0x2e, 0xa0, 0x43));
        assert_eq!("F85149".parse::<Rgb>().unwrap(), Rgb::new(0xf8, 0x51, 0x49));
    }

    #[test]
    fn test_rgb_parse_rejects_garbage() {
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#gg0000".parse::<Rgb>().is_err());
        assert!("+12345".parse::<Rgb>().is_err());
        assert!(matches!("red".parse::<Rgb>(), Err(DiffError::InvalidColor(s)) if s == "red"));
    }

    #[test]
    fn test_rgb_display() {
        assert_eq!(Rgb::new(1, 2, 255).to_string(), "#0102ff");
    }

    #[test]
    fn test_style_builder() {
        let style = Style::fg(Rgb::WHITE)
            .with_bg(Rgb::BLACK)
            .with_modifiers(Modifiers::BOLD)
            .with_modifiers(Modifiers::ITALIC);
        assert_eq!(style.bg, Some(Rgb::BLACK));
        assert_eq!(style.modifiers, Modifiers::BOLD | Modifiers::ITALIC);
    }
}
