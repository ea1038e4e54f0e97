//! 24-bit color.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `brightness` clamped into `[0, 1]`, truncating.
    pub fn shade(self, brightness: f64) -> Rgb {
        // NaN survives clamp, and `NaN as u8` is 0, so it shades to black.
        let k = brightness.clamp(0.0, 1.0);
        Rgb::new(
            (self.r as f64 * k) as u8,
            (self.g as f64 * k) as u8,
            (self.b as f64 * k) as u8,
        )
    }
}
