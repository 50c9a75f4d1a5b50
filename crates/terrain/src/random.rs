use rand::Rng;

/// Source of uniformly distributed floats for terrain generation.
///
/// Every [`rand::Rng`] is a source, so a seeded `StdRng` makes generation reproducible.
pub trait RandomSource {
    /// A value in `[min, max)`. Returns `min` when the range is empty.
    fn uniform(&mut self, min: f64, max: f64) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        if !(min < max) {
            return min;
        }
        self.random_range(min..max)
    }
}
