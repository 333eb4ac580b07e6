use bytemuck::{Pod, Zeroable};

use crate::error::CounterError;

/// Number of entries in the palette
pub const PALETTE_SIZE: usize = 16;

/// RGB values for each palette index
pub const PALETTE: [[u8; 3]; PALETTE_SIZE] = [
    [0x00, 0x00, 0x00], // 0 transparent
    [0xff, 0xff, 0xff], // 1 white
    [0xff, 0x21, 0x21], // 2 red
    [0xff, 0x93, 0xc4], // 3 pink
    [0xff, 0x81, 0x35], // 4 orange
    [0xff, 0xf6, 0x09], // 5 yellow
    [0x24, 0x9c, 0xa3], // 6 teal
    [0x78, 0xdc, 0x52], // 7 green
    [0x00, 0x3f, 0xad], // 8 blue
    [0x87, 0xf2, 0xff], // 9 light blue
    [0x8e, 0x2e, 0xc4], // 10 purple
    [0xa4, 0x83, 0x9f], // 11 light purple
    [0x5c, 0x40, 0x6c], // 12 dark purple
    [0xe5, 0xcd, 0xc4], // 13 tan
    [0x91, 0x46, 0x3d], // 14 brown
    [0x00, 0x00, 0x00], // 15 black
];

/// Palette-indexed color
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Color(u8);

impl Color {
    /// Key color - never painted by transparent blits
    pub const TRANSPARENT: Color = Color(0);
    pub const WHITE: Color = Color(1);
    pub const RED: Color = Color(2);
    pub const YELLOW: Color = Color(5);
    pub const BLUE: Color = Color(8);
    pub const LIGHT_BLUE: Color = Color(9);
    pub const BLACK: Color = Color(15);

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn is_transparent(self) -> bool {
        self == Color::TRANSPARENT
    }

    /// RGB value of this palette entry
    pub fn to_rgb(self) -> [u8; 3] {
        PALETTE[self.0 as usize]
    }

    /// Parse a single hex digit as used in image literals
    pub fn from_hex_digit(c: char) -> Option<Color> {
        c.to_digit(16).map(|d| Color(d as u8))
    }

    /// Hex digit for this index, `.` for transparent
    pub fn to_art_char(self) -> char {
        if self.is_transparent() {
            '.'
        } else {
            char::from_digit(self.0 as u32, 16).unwrap_or('?')
        }
    }
}

impl TryFrom<u8> for Color {
    type Error = CounterError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if (index as usize) < PALETTE_SIZE {
            Ok(Color(index))
        } else {
            Err(CounterError::InvalidColor(index))
        }
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        color.0
    }
}
