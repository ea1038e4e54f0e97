//! Render error types.

use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("framebuffer dimensions {width}x{height} overflow")]
    Dimensions { width: u16, height: u16 },

    #[error("failed to allocate framebuffer of {cells} cells: {source}")]
    Allocation {
        cells: usize,
        #[source]
        source: TryReserveError,
    },
}
