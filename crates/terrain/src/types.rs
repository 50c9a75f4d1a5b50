use bevy::log::debug;
use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;

use crate::color::ColorBands;
use crate::error::LandscapeError;
use crate::heightmap::Heightmap;

pub const DEFAULT_SIZE: f64 = 100.0;
pub const DEFAULT_ITERATIONS: u32 = 6;
pub const DEFAULT_HEIGHT_LIMIT: f64 = 80.0;
pub const DEFAULT_SMOOTHNESS: f64 = 0.6;

/// Highest accepted subdivision exponent; a 65x65 grid.
pub const MAX_ITERATIONS: u32 = 6;

// --- Generation ---

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// World-space footprint of the square landscape.
    pub size: f64,
    /// Grid side is `2^iterations + 1`.
    pub iterations: u32,
    /// Corner seeds and offsets are drawn from `[-height_limit / 2, height_limit / 2)`.
    pub height_limit: f64,
    /// In `(0, 1)`. Low values keep early passes rough, high values roll the terrain.
    pub smoothness: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            iterations: DEFAULT_ITERATIONS,
            height_limit: DEFAULT_HEIGHT_LIMIT,
            smoothness: DEFAULT_SMOOTHNESS,
        }
    }
}

impl GenerationParams {
    /// Replaces an out-of-range smoothness or iteration count with its default.
    pub fn sanitized(self) -> Self {
        let mut params = self;

        if !(params.smoothness > 0.0 && params.smoothness < 1.0) {
            debug!(
                "smoothness {} outside (0, 1), using {}",
                params.smoothness, DEFAULT_SMOOTHNESS
            );
            params.smoothness = DEFAULT_SMOOTHNESS;
        }

        if params.iterations > MAX_ITERATIONS {
            debug!(
                "iterations {} above {}, using {}",
                params.iterations, MAX_ITERATIONS, DEFAULT_ITERATIONS
            );
            params.iterations = DEFAULT_ITERATIONS;
        }

        params
    }

    /// Rejects values no fallback can repair.
    pub fn validate(&self) -> Result<(), LandscapeError> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(LandscapeError::invalid(
                "size",
                format!("must be finite and positive, got {}", self.size),
            ));
        }
        if !self.height_limit.is_finite() || self.height_limit <= 0.0 {
            return Err(LandscapeError::invalid(
                "height_limit",
                format!("must be finite and positive, got {}", self.height_limit),
            ));
        }
        Ok(())
    }

    /// Side length of the generated grid.
    pub fn grid_side(&self) -> usize {
        (1usize << self.iterations) + 1
    }
}

// --- Config file ---

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LandscapeConfig {
    /// Fixed seed for reproducible landscapes; a fresh one is drawn when absent.
    pub seed: Option<u64>,
    pub params: GenerationParams,
    pub colors: ColorBands,
}

impl LandscapeConfig {
    pub fn from_ron_str(text: &str) -> Result<Self, LandscapeError> {
        let config: LandscapeConfig = ron::from_str(text)?;
        config.colors.validate()?;
        Ok(config)
    }

    pub fn load_from_ron_file(path: impl AsRef<Path>) -> Result<Self, LandscapeError> {
        let bytes = std::fs::read(path)?;
        let text = std::str::from_utf8(&bytes)?;
        Self::from_ron_str(text)
    }
}

// --- Resources ---

/// Heightmap behind the spawned landscape, kept for collision and height queries.
#[derive(Resource, Clone, Debug)]
pub struct GeneratedLandscape {
    pub seed: u64,
    pub params: GenerationParams,
    pub heightmap: Heightmap,
}
