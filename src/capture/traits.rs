//! Capture trait definitions
//!
//! Backend-agnostic contracts for device acquisition. A platform backend
//! (or a test double) yields a `MediaStream` of stoppable tracks.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::utils::error::AcquisitionError;

/// Kind of media carried by a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Audio,
    Video,
}

/// A single live media track handle
pub trait MediaTrack: Send + Sync {
    /// Kind of media this track carries
    fn kind(&self) -> TrackKind;

    /// Human-readable device label
    fn label(&self) -> &str;

    /// Stop the track and release its device resources. Idempotent.
    fn stop(&self);
}

/// A live capture stream: the set of tracks yielded by one acquisition
pub struct MediaStream {
    tracks: Vec<Box<dyn MediaTrack>>,
}

impl MediaStream {
    pub fn new(tracks: Vec<Box<dyn MediaTrack>>) -> Self {
        Self { tracks }
    }

    /// Tracks carried by this stream
    pub fn tracks(&self) -> &[Box<dyn MediaTrack>] {
        &self.tracks
    }

    /// Stop every track, audio and video alike
    pub fn stop_all(&self) {
        tracing::debug!("Stopping {} media track(s)", self.tracks.len());
        for track in &self.tracks {
            track.stop();
        }
    }
}

/// Constraints passed to device acquisition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaConstraints {
    /// Request an audio track
    pub audio: bool,

    /// Request a video track
    pub video: bool,
}

impl Default for MediaConstraints {
    fn default() -> Self {
        Self {
            audio: true,
            video: true,
        }
    }
}

/// Source of capture streams
///
/// The request is a single-outcome asynchronous operation: it yields a
/// stream or fails, exactly once. No retry is attempted by the caller.
#[async_trait]
pub trait DeviceAcquisition: Send + Sync {
    async fn request(
        &self,
        constraints: &MediaConstraints,
    ) -> Result<MediaStream, AcquisitionError>;
}
