//! Shared data models for the VCam auto-framing pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - Normalized and pixel-space rectangles
//! - Per-frame candidate detections from the external detector/tracker
//! - Frame timing helpers

pub mod detection;
pub mod rect;

// Re-export common types
pub use detection::{dt_for_fps, CandidateDetection, FrameDetections, DEFAULT_FRAME_DT};
pub use rect::{NormalizedRect, PixelRect};
