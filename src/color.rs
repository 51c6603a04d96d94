// Particle and link color, packed as 0xRRGGBBAA
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// The page's accent green, `#00ff88`.
    pub const NEON: Color = Color::from_rgba(0x00ff_88ff);

    pub const fn from_rgba(packed: u32) -> Color {
        let [r, g, b, a] = packed.to_be_bytes();
        Color { r, g, b, a }
    }

    // CSS color string for canvas fill/stroke styles. The stored alpha byte
    // scales the requested opacity.
    pub fn to_css(&self, alpha: f64) -> String {
        let alpha = if self.a == u8::MAX {
            alpha
        } else {
            alpha * self.a as f64 / 255.0
        };
        let alpha = alpha.max(0.0).min(1.0);
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}
