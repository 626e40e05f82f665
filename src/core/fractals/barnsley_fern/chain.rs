use rand::Rng;

use crate::core::data::complex::Complex;
use crate::core::fractals::barnsley_fern::transform::FernTransform;

/// The fern's Markov chain as an iterator: yields the origin first, then
/// each point is one randomly chosen transform of the point before it.
///
/// Exactly `len` points are produced and one draw is taken from `rng` per
/// point after the first, so a seeded generator replays the same chain.
pub struct FernChain<'r, R: Rng> {
    rng: &'r mut R,
    next_point: Complex,
    remaining: usize,
}

impl<'r, R: Rng> FernChain<'r, R> {
    pub fn new(rng: &'r mut R, len: usize) -> Self {
        Self {
            rng,
            next_point: Complex::ZERO,
            remaining: len,
        }
    }
}

impl<R: Rng> Iterator for FernChain<'_, R> {
    type Item = Complex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let point = self.next_point;
        if self.remaining > 0 {
            let draw: f64 = self.rng.random();
            self.next_point = FernTransform::choose(draw).apply(point);
        }

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng> ExactSizeIterator for FernChain<'_, R> {}
