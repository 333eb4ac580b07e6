//! Fixed-width bitmap font.
//!
//! Glyphs are 5x5 pixels, one `u8` per row with bit 4 as the leftmost column.
//! Each character cell is one column wider than its glyph so consecutive
//! characters never touch.

const GLYPH_BITS: u32 = 5;
const FIRST_CHAR: u32 = 0x20;
const LAST_CHAR: u32 = 0x7e;

/// Drawn for characters outside printable ASCII
const MISSING_GLYPH: [u8; 5] = [0x1f, 0x1f, 0x1f, 0x1f, 0x1f];

#[rustfmt::skip]
const FONT5_GLYPHS: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x04, 0x04, 0x04, 0x00, 0x04], // !
    [0x0a, 0x0a, 0x00, 0x00, 0x00], // "
    [0x0a, 0x1f, 0x0a, 0x1f, 0x0a], // #
    [0x0f, 0x14, 0x0e, 0x05, 0x1e], // $
    [0x19, 0x1a, 0x04, 0x0b, 0x13], // %
    [0x0c, 0x12, 0x0d, 0x12, 0x0d], // &
    [0x04, 0x04, 0x00, 0x00, 0x00], // '
    [0x02, 0x04, 0x04, 0x04, 0x02], // (
    [0x08, 0x04, 0x04, 0x04, 0x08], // )
    [0x00, 0x0a, 0x04, 0x0a, 0x00], // *
    [0x00, 0x04, 0x0e, 0x04, 0x00], // +
    [0x00, 0x00, 0x00, 0x04, 0x08], // ,
    [0x00, 0x00, 0x0e, 0x00, 0x00], // -
    [0x00, 0x00, 0x00, 0x00, 0x04], // .
    [0x01, 0x02, 0x04, 0x08, 0x10], // /
    [0x0e, 0x13, 0x15, 0x19, 0x0e], // 0
    [0x04, 0x0c, 0x04, 0x04, 0x0e], // 1
    [0x1e, 0x01, 0x0e, 0x10, 0x1f], // 2
    [0x1e, 0x01, 0x06, 0x01, 0x1e], // 3
    [0x12, 0x12, 0x1f, 0x02, 0x02], // 4
    [0x1f, 0x10, 0x1e, 0x01, 0x1e], // 5
    [0x0e, 0x10, 0x1e, 0x11, 0x0e], // 6
    [0x1f, 0x02, 0x04, 0x08, 0x08], // 7
    [0x0e, 0x11, 0x0e, 0x11, 0x0e], // 8
    [0x0e, 0x11, 0x0f, 0x01, 0x0e], // 9
    [0x00, 0x04, 0x00, 0x04, 0x00], // :
    [0x00, 0x04, 0x00, 0x04, 0x08], // ;
    [0x02, 0x04, 0x08, 0x04, 0x02], // <
    [0x00, 0x0e, 0x00, 0x0e, 0x00], // =
    [0x08, 0x04, 0x02, 0x04, 0x08], // >
    [0x0e, 0x01, 0x06, 0x00, 0x04], // ?
    [0x0e, 0x17, 0x16, 0x10, 0x0e], // @
    [0x0e, 0x11, 0x1f, 0x11, 0x11], // A
    [0x1e, 0x11, 0x1e, 0x11, 0x1e], // B
    [0x0f, 0x10, 0x10, 0x10, 0x0f], // C
    [0x1e, 0x11, 0x11, 0x11, 0x1e], // D
    [0x1f, 0x10, 0x1e, 0x10, 0x1f], // E
    [0x1f, 0x10, 0x1e, 0x10, 0x10], // F
    [0x0f, 0x10, 0x13, 0x11, 0x0f], // G
    [0x11, 0x11, 0x1f, 0x11, 0x11], // H
    [0x0e, 0x04, 0x04, 0x04, 0x0e], // I
    [0x07, 0x02, 0x02, 0x12, 0x0c], // J
    [0x12, 0x14, 0x18, 0x14, 0x12], // K
    [0x10, 0x10, 0x10, 0x10, 0x1f], // L
    [0x11, 0x1b, 0x15, 0x11, 0x11], // M
    [0x11, 0x19, 0x15, 0x13, 0x11], // N
    [0x0e, 0x11, 0x11, 0x11, 0x0e], // O
    [0x1e, 0x11, 0x1e, 0x10, 0x10], // P
    [0x0e, 0x11, 0x15, 0x12, 0x0d], // Q
    [0x1e, 0x11, 0x1e, 0x12, 0x11], // R
    [0x0f, 0x10, 0x0e, 0x01, 0x1e], // S
    [0x1f, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x0e], // U
    [0x11, 0x11, 0x11, 0x0a, 0x04], // V
    [0x11, 0x11, 0x15, 0x1b, 0x11], // W
    [0x11, 0x0a, 0x04, 0x0a, 0x11], // X
    [0x11, 0x0a, 0x04, 0x04, 0x04], // Y
    [0x1f, 0x02, 0x04, 0x08, 0x1f], // Z
    [0x0e, 0x08, 0x08, 0x08, 0x0e], // [
    [0x10, 0x08, 0x04, 0x02, 0x01], // \
    [0x0e, 0x02, 0x02, 0x02, 0x0e], // ]
    [0x04, 0x0a, 0x11, 0x00, 0x00], // ^
    [0x00, 0x00, 0x00, 0x00, 0x1f], // _
    [0x08, 0x04, 0x00, 0x00, 0x00], // `
    // a-z share the uppercase glyphs, see `glyph`
    [0x0e, 0x11, 0x1f, 0x11, 0x11],
    [0x1e, 0x11, 0x1e, 0x11, 0x1e],
    [0x0f, 0x10, 0x10, 0x10, 0x0f],
    [0x1e, 0x11, 0x11, 0x11, 0x1e],
    [0x1f, 0x10, 0x1e, 0x10, 0x1f],
    [0x1f, 0x10, 0x1e, 0x10, 0x10],
    [0x0f, 0x10, 0x13, 0x11, 0x0f],
    [0x11, 0x11, 0x1f, 0x11, 0x11],
    [0x0e, 0x04, 0x04, 0x04, 0x0e],
    [0x07, 0x02, 0x02, 0x12, 0x0c],
    [0x12, 0x14, 0x18, 0x14, 0x12],
    [0x10, 0x10, 0x10, 0x10, 0x1f],
    [0x11, 0x1b, 0x15, 0x11, 0x11],
    [0x11, 0x19, 0x15, 0x13, 0x11],
    [0x0e, 0x11, 0x11, 0x11, 0x0e],
    [0x1e, 0x11, 0x1e, 0x10, 0x10],
    [0x0e, 0x11, 0x15, 0x12, 0x0d],
    [0x1e, 0x11, 0x1e, 0x12, 0x11],
    [0x0f, 0x10, 0x0e, 0x01, 0x1e],
    [0x1f, 0x04, 0x04, 0x04, 0x04],
    [0x11, 0x11, 0x11, 0x11, 0x0e],
    [0x11, 0x11, 0x11, 0x0a, 0x04],
    [0x11, 0x11, 0x15, 0x1b, 0x11],
    [0x11, 0x0a, 0x04, 0x0a, 0x11],
    [0x11, 0x0a, 0x04, 0x04, 0x04],
    [0x1f, 0x02, 0x04, 0x08, 0x1f],
    [0x06, 0x04, 0x08, 0x04, 0x06], // {
    [0x04, 0x04, 0x04, 0x04, 0x04], // |
    [0x0c, 0x04, 0x02, 0x04, 0x0c], // }
    [0x00, 0x08, 0x15, 0x02, 0x00], // ~
];

/// Fixed-width bitmap font descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFont {
    /// Horizontal advance per character, in pixels
    pub glyph_width: u32,
    /// Height of every character, in pixels
    pub glyph_height: u32,
    glyphs: &'static [[u8; 5]; 95],
}

impl BitmapFont {
    /// The 6x5 font every counter uses
    pub const fn font5() -> Self {
        Self {
            glyph_width: 6,
            glyph_height: 5,
            glyphs: &FONT5_GLYPHS,
        }
    }

    /// Width of `text` in pixels - one cell per character
    pub fn text_width(&self, text: &str) -> u32 {
        self.glyph_width * text.chars().count() as u32
    }

    /// Row bitmask for `c`
    pub fn glyph(&self, c: char) -> &[u8; 5] {
        let code = c as u32;
        if (FIRST_CHAR..=LAST_CHAR).contains(&code) {
            &self.glyphs[(code - FIRST_CHAR) as usize]
        } else {
            &MISSING_GLYPH
        }
    }

    /// Visit every set pixel of `c`, relative to the glyph's top-left corner
    pub fn for_each_pixel(&self, c: char, mut f: impl FnMut(u32, u32)) {
        for (row, bits) in self.glyph(c).iter().enumerate() {
            for col in 0..GLYPH_BITS {
                if (bits >> (GLYPH_BITS - 1 - col)) & 1 == 1 {
                    f(col, row as u32);
                }
            }
        }
    }
}

impl Default for BitmapFont {
    fn default() -> Self {
        Self::font5()
    }
}
