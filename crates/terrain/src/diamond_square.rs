//! Diamond-square midpoint displacement.

use bevy::log::debug;

use crate::error::LandscapeError;
use crate::heightmap::Heightmap;
use crate::random::RandomSource;
use crate::types::GenerationParams;

/// Fills a `(2^iterations + 1)²` heightmap from four random corner seeds.
///
/// Params are sanitized first, so out-of-range smoothness or iterations fall back to
/// defaults. Draws happen in a fixed order: the same seeded source gives the same map.
pub fn generate(
    params: &GenerationParams,
    rng: &mut impl RandomSource,
) -> Result<Heightmap, LandscapeError> {
    let params = params.sanitized();
    params.validate()?;

    let mut generator = HeightmapGenerator {
        map: Heightmap::flat(params.grid_side())?,
        half_limit: params.height_limit * 0.5,
        smoothness: params.smoothness,
        rng,
    };
    generator.seed_corners();
    generator.subdivide();
    Ok(generator.map)
}

struct HeightmapGenerator<'a, R: RandomSource> {
    map: Heightmap,
    half_limit: f64,
    smoothness: f64,
    rng: &'a mut R,
}

impl<R: RandomSource> HeightmapGenerator<'_, R> {
    fn random_offset(&mut self) -> f64 {
        self.rng.uniform(-self.half_limit, self.half_limit)
    }

    fn seed_corners(&mut self) {
        let last = self.map.side() - 1;
        for (i, j) in [(0, 0), (0, last), (last, 0), (last, last)] {
            let h = self.random_offset();
            self.map.set(i, j, h);
        }
    }

    fn subdivide(&mut self) {
        let side = self.map.side();
        let mut step = (side - 1) / 2;
        while step >= 1 {
            debug!("diamond-square pass, step {step} on a {side}x{side} grid");
            self.diamond_pass(step);
            self.square_pass(step);
            step /= 2;
        }
    }

    /// Centre of every `2*step` square gets the mean of its four corners.
    fn diamond_pass(&mut self, step: usize) {
        let side = self.map.side();
        for i in (step..side).step_by(2 * step) {
            for j in (step..side).step_by(2 * step) {
                let avg = (self.map.get(i - step, j - step)
                    + self.map.get(i - step, j + step)
                    + self.map.get(i + step, j - step)
                    + self.map.get(i + step, j + step))
                    / 4.0;
                let h = avg + self.weighted_offset(step);
                self.map.set(i, j, h);
            }
        }
    }

    /// Edge midpoints get the mean of their axis neighbours; three on the border.
    fn square_pass(&mut self, step: usize) {
        let side = self.map.side();
        for i in (0..side).step_by(step) {
            for j in ((i + step) % (2 * step)..side).step_by(2 * step) {
                let (sum, count) = axis_neighbours(i, j, step, side)
                    .fold((0.0, 0usize), |(sum, count), (ni, nj)| {
                        (sum + self.map.get(ni, nj), count + 1)
                    });
                let h = sum / count as f64 + self.weighted_offset(step);
                self.map.set(i, j, h);
            }
        }
    }

    fn weighted_offset(&mut self, step: usize) -> f64 {
        let weight = offset_weight(step, self.map.side(), self.smoothness);
        weight * self.random_offset()
    }
}

/// Axis-aligned cells at distance `step` from `(i, j)` that fall inside the grid.
fn axis_neighbours(
    i: usize,
    j: usize,
    step: usize,
    side: usize,
) -> impl Iterator<Item = (usize, usize)> {
    [
        (i.checked_sub(step), Some(j)),
        (Some(i + step), Some(j)),
        (Some(i), j.checked_sub(step)),
        (Some(i), Some(j + step)),
    ]
    .into_iter()
    .filter_map(move |(ni, nj)| match (ni, nj) {
        (Some(ni), Some(nj)) if ni < side && nj < side => Some((ni, nj)),
        _ => None,
    })
}

/// Scale applied to the random offset at a given step.
///
/// Below 0.5 smoothness the weight starts at 1 and falls off steeply; above 0.5 it starts
/// lower and falls off gently.
pub fn offset_weight(step: usize, side: usize, smoothness: f64) -> f64 {
    let base = 2.0 * step as f64 / (side - 1) as f64;
    let gradient = 1.0 - (1.0 - 2.0 * smoothness).abs();
    let intercept = (1.0 - 2.0 * smoothness).max(0.0);
    gradient * base + intercept
}
