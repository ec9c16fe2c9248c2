//! Mapping of indexed pixel data through a palette.

use war2_dat::{Color, Palette};

use crate::error::{Error, Result};

/// Color `indices` through `palette` into `out`, one color per pixel.
///
/// The output buffer is cleared first, one buffer can serve many images.
pub(crate) fn colorize(palette: &Palette, indices: &[u8], out: &mut Vec<Color>) -> Result<()> {
    out.clear();
    out.reserve(indices.len());

    for &index in indices {
        let index = usize::from(index);
        let color = palette
            .color(index)
            .ok_or(Error::PaletteIndexOutOfRange { index })?;
        out.push(color);
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use war2_dat::{Color, Palette};

    use crate::pixels::colorize;

    #[test]
    fn colors_every_pixel() {
        let mut raw = vec![0u8; Palette::BYTES];
        raw[3] = 0x3F;

        let palette = Palette::from_raw(&raw).unwrap();

        let mut out = Vec::new();
        colorize(&palette, &[1, 0, 1], &mut out).unwrap();

        assert_eq!(
            out,
            vec![
                Color::rgb(252, 0, 0),
                Color::rgb(0, 0, 0),
                Color::rgb(252, 0, 0),
            ]
        );
    }

    #[test]
    fn clears_previous_image() {
        let palette = Palette::from_raw(&[0u8; Palette::BYTES]).unwrap();

        let mut out = Vec::new();
        colorize(&palette, &[0; 16], &mut out).unwrap();
        colorize(&palette, &[0; 4], &mut out).unwrap();

        assert_eq!(out.len(), 4);
    }
}
