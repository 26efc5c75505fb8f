//! Error types and handling
//!
//! Common error types used across the capture session lifecycle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while acquiring a capture device
#[derive(Error, Debug, Clone)]
pub enum AcquisitionError {
    #[error("No capture device available: {0}")]
    DeviceUnavailable(String),

    #[error("Capture permission denied: {0}")]
    PermissionDenied(String),

    #[error("Device backend error: {0}")]
    Backend(String),
}

/// Errors raised by the recording engine
#[derive(Error, Debug, Clone)]
pub enum EngineError {
    #[error("Unsupported stream or format: {0}")]
    Unsupported(String),

    #[error("Failed to finalize recording: {0}")]
    Finalize(String),
}

/// Capture-wide error type
#[derive(Error, Debug, Clone)]
pub enum CaptureError {
    #[error("Acquisition error: {0}")]
    Acquisition(#[from] AcquisitionError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
}

/// Failure payload published on the failure channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureNotification {
    pub code: String,
    pub message: String,
}

impl From<CaptureError> for FailureNotification {
    fn from(error: CaptureError) -> Self {
        let code = match &error {
            CaptureError::Acquisition(AcquisitionError::DeviceUnavailable(_)) => {
                "DEVICE_UNAVAILABLE"
            }
            CaptureError::Acquisition(AcquisitionError::PermissionDenied(_)) => "PERMISSION_DENIED",
            CaptureError::Acquisition(AcquisitionError::Backend(_)) => "ACQUISITION_FAILED",
            CaptureError::Engine(EngineError::Unsupported(_)) => "ENGINE_REJECTED",
            CaptureError::Engine(EngineError::Finalize(_)) => "FINALIZE_FAILED",
        };

        FailureNotification {
            code: code.to_string(),
            message: error.to_string(),
        }
    }
}
