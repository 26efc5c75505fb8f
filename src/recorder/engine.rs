//! Recording engine contract
//!
//! The encoder-side collaborator: binds a live stream into a recorder
//! that produces the finished payload when stopped. Any implementation
//! satisfying the contract (hardware encoder, test double) is
//! interchangeable.

use async_trait::async_trait;

use crate::capture::traits::MediaStream;
use crate::recorder::state::{MediaBlob, RecordingFormat};
use crate::utils::error::EngineError;

/// A recorder bound to one stream, producing one payload
#[async_trait]
pub trait Recorder: Send {
    /// Begin consuming the stream
    fn start(&mut self);

    /// Stop encoding and yield the finished payload
    ///
    /// Consumes the recorder: at most one finalize per session, by
    /// construction.
    async fn stop_and_finalize(self: Box<Self>) -> Result<MediaBlob, EngineError>;
}

/// Factory for recorders
pub trait RecordingEngine: Send + Sync {
    /// Bind a recorder to the given stream and output format
    fn bind(
        &self,
        stream: &MediaStream,
        format: &RecordingFormat,
    ) -> Result<Box<dyn Recorder>, EngineError>;
}
