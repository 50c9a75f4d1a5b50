use crate::error::LandscapeError;

/// Square grid of elevations, row-major with `i` as the row (x axis) and `j` as the column (z axis).
#[derive(Clone, Debug, PartialEq)]
pub struct Heightmap {
    side: usize,
    heights: Vec<f64>,
}

impl Heightmap {
    pub fn flat(side: usize) -> Result<Self, LandscapeError> {
        Self::from_heights(side, vec![0.0; side * side])
    }

    pub fn from_heights(side: usize, heights: Vec<f64>) -> Result<Self, LandscapeError> {
        if side == 0 {
            return Err(LandscapeError::invalid("side", "heightmap must have at least one sample"));
        }
        if heights.len() != side * side {
            return Err(LandscapeError::HeightmapShape {
                side,
                expected: side * side,
                len: heights.len(),
            });
        }
        Ok(Self { side, heights })
    }

    #[inline]
    fn idx(&self, i: usize, j: usize) -> usize {
        i * self.side + j
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.heights[self.idx(i, j)]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, h: f64) {
        let idx = self.idx(i, j);
        self.heights[idx] = h;
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn mean(&self) -> f64 {
        self.heights.iter().sum::<f64>() / self.heights.len() as f64
    }

    pub fn min_max(&self) -> (f64, f64) {
        self.heights
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &h| {
                (lo.min(h), hi.max(h))
            })
    }

    /// Shifts every height so the grid mean is zero.
    pub fn normalize_zero_mean(&mut self) {
        let mean = self.mean();
        for h in &mut self.heights {
            *h -= mean;
        }
    }

    pub fn normalized(mut self) -> Self {
        self.normalize_zero_mean();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(side: usize) -> Heightmap {
        let heights = (0..side * side).map(|k| k as f64 * 1.5 + 7.0).collect();
        Heightmap::from_heights(side, heights).unwrap()
    }

    #[test]
    fn rejects_empty_grid() {
        assert!(matches!(
            Heightmap::flat(0),
            Err(LandscapeError::InvalidParameter { name: "side", .. })
        ));
    }

    #[test]
    fn rejects_sample_count_mismatch() {
        assert!(matches!(
            Heightmap::from_heights(3, vec![0.0; 8]),
            Err(LandscapeError::HeightmapShape {
                side: 3,
                expected: 9,
                len: 8
            })
        ));
    }

    #[test]
    fn get_and_set_address_rows_then_columns() {
        let mut map = Heightmap::flat(3).unwrap();
        map.set(2, 0, 5.0);
        assert_eq!(map.get(2, 0), 5.0);
        assert_eq!(map.get(0, 2), 0.0);
        assert_eq!(map.heights()[6], 5.0);
    }

    #[test]
    fn normalize_centres_mean_on_zero() {
        let mut map = ramp(5);
        assert!(map.mean() > 1.0);
        map.normalize_zero_mean();
        assert!(map.mean().abs() < 1e-9);
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = ramp(9).normalized();
        let twice = once.clone().normalized();
        for (a, b) in once.heights().iter().zip(twice.heights()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn normalize_keeps_relative_shape() {
        let before = ramp(3);
        let after = before.clone().normalized();
        let delta = before.get(0, 0) - after.get(0, 0);
        for (a, b) in before.heights().iter().zip(after.heights()) {
            assert!((a - b - delta).abs() < 1e-9);
        }
    }

    #[test]
    fn min_max_spans_samples() {
        let map = ramp(2);
        assert_eq!(map.min_max(), (7.0, 7.0 + 3.0 * 1.5));
    }
}
