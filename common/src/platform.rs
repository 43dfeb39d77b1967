//! Seams between the page logic and the browser.
//!
//! The browser client implements these with `web-sys`; tests use in-memory
//! fakes.

use crate::device::{DeviceDescriptor, StreamConstraints};
use crate::error::{PageError, Result};
use crate::panel::Panel;
use crate::stream::StreamDescriptor;

/// Returned by a chunk handler to keep or drop its `dataavailable` listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listen {
    Keep,
    Detach,
}

pub type ChunkHandler<C> = Box<dyn FnMut(C) -> Listen>;

/// Media capabilities of the platform.
#[allow(async_fn_in_trait)]
pub trait MediaPlatform {
    /// Live stream handle
    type Stream: Clone + 'static;
    /// One recorded data chunk
    type Chunk: 'static;

    async fn enumerate_devices(&self) -> Result<Vec<DeviceDescriptor>>;

    async fn get_user_media(&self, constraints: &StreamConstraints) -> Result<Self::Stream>;

    fn describe_stream(&self, stream: &Self::Stream) -> Result<StreamDescriptor>;

    /// Blocking text prompt. `None` when the user cancels.
    fn prompt(&self, message: &str) -> Option<String>;

    /// Starts a recorder emitting a chunk every `timeslice_ms`. `on_chunk` is
    /// called for each chunk until it returns [`Listen::Detach`].
    fn start_recorder(
        &self,
        stream: &Self::Stream,
        timeslice_ms: u32,
        on_chunk: ChunkHandler<Self::Chunk>,
    ) -> Result<()>;

    /// Saves a chunk as a file download.
    fn download(&self, chunk: &Self::Chunk, file_name: &str) -> Result<()>;
}

/// The two display containers of the page.
pub trait Surface {
    /// Empties both the device list and the stream info container.
    fn clear(&self) -> Result<()>;

    fn show_device(&self, panel: &Panel) -> Result<()>;

    fn show_stream(&self, panel: &Panel) -> Result<()>;
}

/// Payload handed to the error reporter
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    pub function_name: String,
    pub error: String,
}

impl ErrorReport {
    pub fn new(function_name: &str, error: &PageError) -> Self {
        Self {
            function_name: function_name.to_string(),
            error: error.to_string(),
        }
    }
}

/// Collaborator that logs an error and re-raises it.
pub trait ErrorReporter {
    /// Reports the error and returns the error to propagate.
    fn rethrow(&self, report: ErrorReport) -> PageError;
}

/// Reporter used when no external error log is available
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn rethrow(&self, report: ErrorReport) -> PageError {
        log::error!("[{}] {}", report.function_name, report.error);
        PageError::Reported {
            function_name: report.function_name,
            message: report.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_reporter_returns_reported_error() {
        let err = LogReporter.rethrow(ErrorReport::new(
            "show_stream",
            &PageError::Render("no body".to_string()),
        ));
        assert_eq!(
            err,
            PageError::Reported {
                function_name: "show_stream".to_string(),
                message: "Render error: no body".to_string(),
            }
        );
    }
}
