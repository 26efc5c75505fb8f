//! Capture stream contracts
//!
//! Device-side abstractions: acquisition yields a stream of stoppable
//! media tracks.

pub mod traits;

// Re-export the acquisition contract types
pub use traits::{DeviceAcquisition, MediaConstraints, MediaStream, MediaTrack, TrackKind};
