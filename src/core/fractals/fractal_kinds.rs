use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FractalKinds {
    Mandelbrot,
    Julia,
    KochCurve,
    BarnsleyFern,
    SierpinskiTriangle,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia,
        Self::KochCurve,
        Self::BarnsleyFern,
        Self::SierpinskiTriangle,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::KochCurve => "Koch curve",
            Self::BarnsleyFern => "Barnsley fern",
            Self::SierpinskiTriangle => "Sierpinski triangle",
        }
    }

    /// Output file name without extension.
    #[must_use]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
            Self::KochCurve => "koch_curve",
            Self::BarnsleyFern => "barnsley_fern",
            Self::SierpinskiTriangle => "sierpinski_triangle",
        }
    }

    /// Name accepted on the command line.
    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
            Self::KochCurve => "koch",
            Self::BarnsleyFern => "fern",
            Self::SierpinskiTriangle => "sierpinski",
        }
    }
}

impl fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFractalKind(pub String);

impl fmt::Display for UnknownFractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = FractalKinds::ALL.iter().map(|k| k.cli_name()).collect();
        write!(
            f,
            "unknown fractal '{}', expected one of: {}",
            self.0,
            names.join(", ")
        )
    }
}

impl Error for UnknownFractalKind {}

impl FromStr for FractalKinds {
    type Err = UnknownFractalKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.cli_name() == wanted || kind.file_stem() == wanted)
            .ok_or_else(|| UnknownFractalKind(s.to_string()))
    }
}
