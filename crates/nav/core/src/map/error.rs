use crate::error::{ErrorSeverity, NavError};

/// Errors raised while building an [`OccupancyMap`](super::OccupancyMap) from raw pixels.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("raster has zero area ({width}x{height})")]
    EmptyRaster { width: u32, height: u32 },

    #[error("pixel buffer holds {actual} bytes, expected {expected} for {width}x{height}")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

impl NavError for MapError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            MapError::EmptyRaster { .. } => "MAP_EMPTY_RASTER",
            MapError::BufferSize { .. } => "MAP_BUFFER_SIZE",
        }
    }
}
