use std::io::{self, Write};

use crate::core::{Bitmap, PALETTE_SIZE};

/// Write a frame as binary PPM (P6), each pixel scaled to `scale`x`scale`
pub fn write_ppm<W: Write>(frame: &Bitmap, scale: u32, out: &mut W) -> io::Result<()> {
    let scale = scale.max(1);
    let (width, height) = frame.dimensions();
    writeln!(out, "P6\n{} {}\n255", width * scale, height * scale)?;

    for row in frame.rows() {
        let line: Vec<u8> = row
            .iter()
            .flat_map(|c| std::iter::repeat(c.to_rgb()).take(scale as usize))
            .flatten()
            .collect();
        for _ in 0..scale {
            out.write_all(&line)?;
        }
    }
    Ok(())
}

/// Write a frame as binary PGM (P5) holding raw palette indices, maxval 15
pub fn write_indexed_pgm<W: Write>(frame: &Bitmap, out: &mut W) -> io::Result<()> {
    let (width, height) = frame.dimensions();
    writeln!(out, "P5\n{} {}\n{}", width, height, PALETTE_SIZE - 1)?;
    out.write_all(frame.as_bytes())
}

/// Write a frame as text art, one hex digit per pixel
pub fn write_text<W: Write>(frame: &Bitmap, out: &mut W) -> io::Result<()> {
    out.write_all(frame.to_art().as_bytes())
}
