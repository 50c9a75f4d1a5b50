use thiserror::Error;

#[derive(Debug, Error)]
pub enum LandscapeError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("heightmap of side {side} needs {expected} samples, got {len}")]
    HeightmapShape {
        side: usize,
        expected: usize,
        len: usize,
    },

    #[error("failed to read landscape config: {0}")]
    Io(#[from] std::io::Error),

    #[error("landscape config was not valid utf-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("failed to parse landscape config ron: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

impl LandscapeError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
