//! Framebuffer to escape-sequence stream.
//!
//! Each cell becomes one glyph:
//!
//! | top | bottom | glyph | fg | bg |
//! |-----|--------|-------|----|----|
//! | -   | -      | `' '` | -  | default |
//! | set | -      | `▀`   | top | default |
//! | -   | set    | `▄`   | bottom | default |
//! | set | set    | `▀`   | top | bottom |
//!
//! Colors are only emitted when they differ from what the terminal already
//! has, which keeps a frame of large flat faces to a few escapes per row.

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};

use crate::core::FrameBuffer;
use crate::types::Rgb;

pub const UPPER_HALF: char = '▀';
pub const LOWER_HALF: char = '▄';

/// Colors currently active on the terminal; `None` is the terminal default.
#[derive(Debug, Default)]
struct Pen {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
}

impl Pen {
    fn fg(&mut self, out: &mut Vec<u8>, rgb: Rgb) -> Result<()> {
        if self.fg != Some(rgb) {
            out.queue(SetForegroundColor(rgb_to_color(rgb)))?;
            self.fg = Some(rgb);
        }
        Ok(())
    }

    fn bg(&mut self, out: &mut Vec<u8>, rgb: Rgb) -> Result<()> {
        if self.bg != Some(rgb) {
            out.queue(SetBackgroundColor(rgb_to_color(rgb)))?;
            self.bg = Some(rgb);
        }
        Ok(())
    }

    fn default_bg(&mut self, out: &mut Vec<u8>) -> Result<()> {
        if self.bg.is_some() {
            out.queue(SetBackgroundColor(Color::Reset))?;
            self.bg = None;
        }
        Ok(())
    }
}

/// Encode a full frame into `out`, starting from the top-left corner.
///
/// This builds a sequence of crossterm commands without writing to stdout.
/// Every row ends with a full reset and `"\r\n"`; raw mode turns off the
/// terminal's newline translation, so the carriage return is explicit.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(SetAttribute(Attribute::Reset))?;

    for y in 0..fb.height() {
        // The reset at the end of each row returns both colors to default.
        let mut pen = Pen::default();
        for x in 0..fb.width() {
            let cell = fb.cell(x, y).unwrap_or_default();
            let glyph = match (cell.top, cell.bottom) {
                (None, None) => {
                    pen.default_bg(out)?;
                    ' '
                }
                (Some(top), None) => {
                    pen.default_bg(out)?;
                    pen.fg(out, top)?;
                    UPPER_HALF
                }
                (None, Some(bottom)) => {
                    pen.default_bg(out)?;
                    pen.fg(out, bottom)?;
                    LOWER_HALF
                }
                (Some(top), Some(bottom)) => {
                    pen.fg(out, top)?;
                    pen.bg(out, bottom)?;
                    UPPER_HALF
                }
            };
            out.queue(Print(glyph))?;
        }
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(Print("\r\n"))?;
    }

    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Half;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    fn encode(fb: &FrameBuffer) -> String {
        let mut out = Vec::new();
        encode_frame_into(fb, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn rgb_maps_to_truecolor() {
        assert_eq!(
            rgb_to_color(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn repeated_color_is_emitted_once_per_row() {
        let mut fb = FrameBuffer::try_new(4, 1).unwrap();
        for x in 0..4 {
            fb.put(x, 0, Half::Top, RED, -5.0);
        }
        let s = encode(&fb);
        assert_eq!(s.matches("\x1b[38;2;255;0;0m").count(), 1);
        assert_eq!(s.matches(UPPER_HALF).count(), 4);
    }

    #[test]
    fn color_is_reemitted_after_row_reset() {
        let mut fb = FrameBuffer::try_new(1, 2).unwrap();
        fb.put(0, 0, Half::Top, RED, -5.0);
        fb.put(0, 1, Half::Top, RED, -5.0);
        let s = encode(&fb);
        assert_eq!(s.matches("\x1b[38;2;255;0;0m").count(), 2);
    }

    #[test]
    fn background_returns_to_default_before_empty_cell() {
        let mut fb = FrameBuffer::try_new(3, 1).unwrap();
        fb.put(0, 0, Half::Top, RED, -5.0);
        fb.put(0, 0, Half::Bottom, BLUE, -5.0);
        fb.put(2, 0, Half::Top, RED, -5.0);
        fb.put(2, 0, Half::Bottom, BLUE, -5.0);
        let s = encode(&fb);
        // bg set, reset for the gap, then set again.
        assert_eq!(s.matches("\x1b[48;2;0;0;255m").count(), 2);
        assert_eq!(s.matches("\x1b[49m").count(), 1);
    }
}
