use crate::core::data::complex::Complex;

/// The four affine maps of the Barnsley fern, with their selection
/// probabilities 1%, 85%, 7% and 7%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FernTransform {
    Stem,
    Leaflets,
    LeftLeaflet,
    RightLeaflet,
}

impl FernTransform {
    pub const ALL: [Self; 4] = [
        Self::Stem,
        Self::Leaflets,
        Self::LeftLeaflet,
        Self::RightLeaflet,
    ];

    /// Picks the map for a uniform draw in `[0, 1)`.
    #[must_use]
    pub fn choose(draw: f64) -> Self {
        if draw < 0.01 {
            Self::Stem
        } else if draw < 0.86 {
            Self::Leaflets
        } else if draw < 0.93 {
            Self::LeftLeaflet
        } else {
            Self::RightLeaflet
        }
    }

    #[must_use]
    pub fn apply(self, p: Complex) -> Complex {
        match self {
            Self::Stem => Complex::new(0.0, 0.16 * p.imag),
            Self::Leaflets => Complex::new(
                0.85 * p.real + 0.04 * p.imag,
                -0.04 * p.real + 0.85 * p.imag + 1.6,
            ),
            Self::LeftLeaflet => Complex::new(
                0.2 * p.real - 0.26 * p.imag,
                0.23 * p.real + 0.22 * p.imag + 1.6,
            ),
            Self::RightLeaflet => Complex::new(
                -0.15 * p.real + 0.28 * p.imag,
                0.26 * p.real + 0.24 * p.imag + 0.44,
            ),
        }
    }
}
