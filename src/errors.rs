// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the frame pipeline and presenter

use std::fmt;

/// Errors raised while constructing or validating a frame buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Byte storage does not match width x height x channels
    LengthMismatch { expected: usize, actual: usize },
}

/// Errors raised by the ingest path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Input buffer was empty or null-length
    EmptyInput,
    /// Frame dimensions are zero or odd (chroma is subsampled 2x2)
    InvalidDimensions { width: u32, height: u32 },
    /// Input buffer is shorter than the planar layout requires
    ShortBuffer { expected: usize, actual: usize },
    /// Frame buffer invariant violation
    Frame(FrameError),
}

/// Errors raised by the pure image transforms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Transform cannot operate on a zero-sized frame
    EmptyFrame,
    /// Frame buffer invariant violation
    Frame(FrameError),
}

/// Errors raised by the GPU presenter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentError {
    /// Presenter has no GPU resources (before init or after destroy)
    NotReady,
    /// Upload buffer length does not match the texture dimensions
    SizeMismatch { expected: usize, actual: usize },
    /// Underlying GPU call failed
    Gpu(String),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::LengthMismatch { expected, actual } => write!(
                f,
                "frame byte length mismatch: expected {}, got {}",
                expected, actual
            ),
        }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::EmptyInput => write!(f, "input frame buffer is empty"),
            PipelineError::InvalidDimensions { width, height } => {
                write!(f, "invalid frame dimensions: {}x{}", width, height)
            }
            PipelineError::ShortBuffer { expected, actual } => write!(
                f,
                "input buffer too short: expected {} bytes, got {}",
                expected, actual
            ),
            PipelineError::Frame(e) => write!(f, "frame error: {}", e),
        }
    }
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::EmptyFrame => write!(f, "transform input frame is empty"),
            TransformError::Frame(e) => write!(f, "frame error: {}", e),
        }
    }
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresentError::NotReady => write!(f, "presenter is not initialized"),
            PresentError::SizeMismatch { expected, actual } => write!(
                f,
                "upload size mismatch: expected {} bytes, got {}",
                expected, actual
            ),
            PresentError::Gpu(msg) => write!(f, "GPU error: {}", msg),
        }
    }
}

impl std::error::Error for FrameError {}
impl std::error::Error for PipelineError {}
impl std::error::Error for TransformError {}
impl std::error::Error for PresentError {}

impl From<FrameError> for PipelineError {
    fn from(err: FrameError) -> Self {
        PipelineError::Frame(err)
    }
}

impl From<FrameError> for TransformError {
    fn from(err: FrameError) -> Self {
        TransformError::Frame(err)
    }
}

impl From<String> for PresentError {
    fn from(msg: String) -> Self {
        PresentError::Gpu(msg)
    }
}
