#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Same level on all three channels.
    #[must_use]
    pub const fn grey(level: u8) -> Self {
        Self {
            r: level,
            g: level,
            b: level,
        }
    }
}
