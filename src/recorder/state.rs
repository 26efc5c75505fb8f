//! Recording state management
//!
//! Defines the recording state machine and the session output types.

use serde::{Deserialize, Serialize};

use crate::capture::traits::MediaConstraints;

/// Current state of the recording system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingState {
    /// No session in progress
    Idle,
    /// Waiting on the device acquisition request
    Acquiring,
    /// Capture running, elapsed clock ticking
    Recording,
}

impl Default for RecordingState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Opaque encoded payload produced by the recording engine
///
/// The encoding is determined entirely by the engine; the coordinator
/// passes it through unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaBlob {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Final artifact of a completed session
#[derive(Debug, Clone)]
pub struct RecordedOutput {
    /// Encoded payload from the engine
    pub blob: MediaBlob,

    /// Generated file name, percent-encoded
    pub title: String,
}

/// Output format requested from the recording engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingFormat {
    pub mime_type: String,
}

impl Default for RecordingFormat {
    fn default() -> Self {
        Self {
            mime_type: "video/mp4".to_string(),
        }
    }
}

/// Configuration for capture sessions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Constraints passed to device acquisition
    pub constraints: MediaConstraints,

    /// Format handed to the recording engine at bind time
    pub format: RecordingFormat,
}
