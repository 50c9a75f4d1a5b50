use serde::Deserialize;

use crate::error::LandscapeError;

/// Height-banded vertex palette.
///
/// Thresholds are fractions of the height limit. Heights inside a blend band fade linearly
/// between the neighbouring colours, so there is no seam at any boundary.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorBands {
    pub sand: [u8; 3],
    pub grass: [u8; 3],
    pub snow: [u8; 3],
    /// Sand below this.
    pub shore_upper: f64,
    /// Width of the sand to grass fade above `shore_upper`.
    pub shore_blend: f64,
    /// Grass below this, once past the shore fade.
    pub grass_upper: f64,
    /// Width of the grass to snow fade above `grass_upper`.
    pub snow_blend: f64,
}

impl Default for ColorBands {
    fn default() -> Self {
        Self {
            sand: [191, 165, 86],
            grass: [40, 89, 40],
            snow: [235, 235, 240],
            shore_upper: 0.05,
            shore_blend: 0.05,
            grass_upper: 0.25,
            snow_blend: 0.05,
        }
    }
}

impl ColorBands {
    pub fn color_for(&self, height: f64, height_limit: f64) -> [u8; 3] {
        let shore_start = self.shore_upper * height_limit;
        let shore_width = self.shore_blend * height_limit;
        let snow_start = self.grass_upper * height_limit;
        let snow_width = self.snow_blend * height_limit;

        if height < shore_start {
            self.sand
        } else if height < shore_start + shore_width {
            lerp_rgb(self.sand, self.grass, (height - shore_start) / shore_width)
        } else if height < snow_start {
            self.grass
        } else if height < snow_start + snow_width {
            lerp_rgb(self.grass, self.snow, (height - snow_start) / snow_width)
        } else {
            self.snow
        }
    }

    pub fn validate(&self) -> Result<(), LandscapeError> {
        let fields = [
            ("colors.shore_upper", self.shore_upper),
            ("colors.shore_blend", self.shore_blend),
            ("colors.grass_upper", self.grass_upper),
            ("colors.snow_blend", self.snow_blend),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(LandscapeError::invalid(name, format!("must be finite, got {value}")));
            }
        }

        if self.shore_blend < 0.0 || self.snow_blend < 0.0 {
            return Err(LandscapeError::invalid(
                "colors",
                "blend widths must not be negative",
            ));
        }
        if self.shore_upper + self.shore_blend > self.grass_upper {
            return Err(LandscapeError::invalid(
                "colors.grass_upper",
                format!(
                    "grass band ends at {} but the shore fade runs to {}",
                    self.grass_upper,
                    self.shore_upper + self.shore_blend
                ),
            ));
        }
        Ok(())
    }
}

fn lerp_rgb(from: [u8; 3], to: [u8; 3], t: f64) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let mut out = [0u8; 3];
    for (c, (a, b)) in out.iter_mut().zip(from.into_iter().zip(to)) {
        let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
        *c = v.round().clamp(0.0, 255.0) as u8;
    }
    out
}
