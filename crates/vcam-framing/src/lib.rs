//! Adaptive auto-framing controller for a virtual camera.
//!
//! Given per-frame subject detections, this crate evolves a stable cropped
//! sub-rectangle that keeps the subject framed at a target size and position,
//! panning and zooming smoothly instead of jittering with every raw
//! detection. Video decode, subject detection, and pixel cropping are
//! external collaborators; their only contract with this crate is
//! "supply detections and a time delta, consume a crop rectangle".
//!
//! # Architecture
//!
//! ```text
//! Frame detections
//!     │
//!     ▼
//! ┌───────────────────┐
//! │ TargetAcquisition │ ← pick the candidate to follow (lock / re-acquire)
//! └─────────┬─────────┘
//!           │
//!           ▼
//! ┌───────────────────┐
//! │ Feedback transform│ ← re-express the rect inside the previous crop
//! └─────────┬─────────┘
//!           │
//!           ▼
//! ┌───────────────────┐
//! │ Framing controller│ ← smooth, zoom, pan, clamp
//! └─────────┬─────────┘
//!           │
//!           ▼
//!   Crop rectangle (next frame's "previous crop")
//! ```
//!
//! The returned crop feeds the next frame's feedback transform, so frames
//! must be processed strictly in order against one [`FramingSession`].

pub mod acquisition;
pub mod config;
pub mod control;
pub mod controller;
pub mod error;
pub mod feedback;
pub mod render;
pub mod session;
pub mod smoothing;

pub use acquisition::{Selection, TargetAcquisition};
pub use config::FramingConfig;
pub use control::PdController;
pub use controller::{AutoFramingController, CropGeometry};
pub use error::{FramingError, FramingResult};
pub use feedback::to_crop_space;
pub use render::to_pixel_rect;
pub use session::{FrameUpdate, FramingSession, FramingStatus};
pub use smoothing::{ExponentialSmoother, RateLimiter};
