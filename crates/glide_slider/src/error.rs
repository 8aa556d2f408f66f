//! Error types for glide_slider

use thiserror::Error;

/// Errors that can occur when building or driving a slider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SliderError {
    /// The container selector did not resolve to a view
    #[error("slider container not found: {0}")]
    ContainerNotFound(String),

    /// The container holds no slides
    #[error("slider container has no slides")]
    EmptyContainer,

    /// `go_to` was called with an index outside the slide range
    #[error("slide index {index} out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },

    /// A programmatic configuration failed validation
    #[error("invalid slider configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for slider operations
pub type Result<T> = std::result::Result<T, SliderError>;
