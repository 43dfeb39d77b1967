//! Page flow: list devices, open a stream, record one chunk of it.
//!
//! [`PageController`] owns the platform, the display surface and the error
//! reporter; button clicks come back to it as [`PanelAction`]s.

use std::cell::RefCell;
use std::rc::Rc;

use crate::device::{DeviceDescriptor, MediaKind, StreamAction, StreamConstraints};
use crate::error::{PageError, Result};
use crate::panel::{device_panel, stream_panel, PanelAction};
use crate::platform::{ChunkHandler, ErrorReport, ErrorReporter, Listen, MediaPlatform, Surface};
use crate::recording::{
    parse_interval, IntervalInput, RecordOutcome, SingleShot, DEFAULT_RECORD_PROMPT,
    RECORDER_OUTPUT_NAME,
};

pub struct PageController<P: MediaPlatform, S: Surface> {
    platform: Rc<P>,
    surface: S,
    reporter: Box<dyn ErrorReporter>,
    record_prompt: String,
    /// Stream currently on display, keyed by its id
    current_stream: RefCell<Option<(String, P::Stream)>>,
}

impl<P: MediaPlatform + 'static, S: Surface> PageController<P, S> {
    pub fn new(platform: P, surface: S, reporter: Box<dyn ErrorReporter>) -> Self {
        Self {
            platform: Rc::new(platform),
            surface,
            reporter,
            record_prompt: DEFAULT_RECORD_PROMPT.to_string(),
            current_stream: RefCell::new(None),
        }
    }

    pub fn with_record_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.record_prompt = prompt.into();
        self
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Replaces the device list with one panel per enumerated device.
    /// Returns the number of devices shown.
    pub async fn list_devices(&self) -> Result<usize> {
        self.try_list_devices()
            .await
            .map_err(|e| self.report("list_devices", e))
    }

    async fn try_list_devices(&self) -> Result<usize> {
        let devices = self.platform.enumerate_devices().await?;
        log::debug!("Enumerated {} media devices", devices.len());

        self.surface.clear()?;
        for device in &devices {
            self.surface.show_device(&device_panel(device))?;
        }
        Ok(devices.len())
    }

    /// "Get Stream" click. Failures are logged here and never reported.
    pub async fn acquire_stream(&self, device: &DeviceDescriptor) {
        match StreamAction::for_kind(&device.kind) {
            StreamAction::Display(media) => match self.open(media, device).await {
                Ok(stream) => {
                    if let Err(e) = self.show_stream(stream) {
                        log::error!("Showing stream of {} failed: {}", device.device_id, e);
                    }
                }
                Err(e) => log::error!("getUserMedia for {} failed: {}", device.device_id, e),
            },
            StreamAction::AcquireOnly(media) => match self.open(media, device).await {
                Ok(_) => {
                    log::info!(
                        "Acquired stream for {} device {}, discarding it",
                        device.kind,
                        device.device_id
                    );
                }
                Err(e) => log::error!("getUserMedia for {} failed: {}", device.device_id, e),
            },
            StreamAction::Ignore => log::info!("unknown"),
        }
    }

    async fn open(&self, media: MediaKind, device: &DeviceDescriptor) -> Result<P::Stream> {
        let constraints = StreamConstraints::exact_device(media, &device.device_id);
        self.platform.get_user_media(&constraints).await
    }

    /// Clears both containers and shows the stream with one sub-panel per track.
    pub fn show_stream(&self, stream: P::Stream) -> Result<()> {
        self.try_show_stream(stream)
            .map_err(|e| self.report("show_stream", e))
    }

    fn try_show_stream(&self, stream: P::Stream) -> Result<()> {
        let descriptor = self.platform.describe_stream(&stream)?;

        self.surface.clear()?;
        self.surface.show_stream(&stream_panel(&descriptor))?;

        *self.current_stream.borrow_mut() = Some((descriptor.id, stream));
        Ok(())
    }

    /// "Record Stream" click: ask for a timeslice and save the first chunk
    /// the recorder produces.
    pub fn record_stream(&self, stream_id: &str) -> Result<RecordOutcome> {
        let stream = match self.current_stream.borrow().as_ref() {
            Some((id, stream)) if id == stream_id => stream.clone(),
            _ => {
                log::debug!("Stream {} is no longer displayed, ignoring record click", stream_id);
                return Ok(RecordOutcome::Stale);
            }
        };

        let answer = self.platform.prompt(&self.record_prompt);
        let timeslice_ms = match parse_interval(answer.as_deref()) {
            IntervalInput::Cancelled => return Ok(RecordOutcome::Cancelled),
            IntervalInput::Millis(ms) => ms,
        };

        self.platform
            .start_recorder(&stream, timeslice_ms, self.first_chunk_download())
            .map_err(|e| self.report("record_stream", e))?;

        log::info!("Recording stream {} with {} ms timeslice", stream_id, timeslice_ms);
        Ok(RecordOutcome::Started { timeslice_ms })
    }

    fn first_chunk_download(&self) -> ChunkHandler<P::Chunk> {
        let platform = Rc::clone(&self.platform);
        let mut shot = SingleShot::new();
        Box::new(move |chunk| {
            if shot.fire() {
                if let Err(e) = platform.download(&chunk, RECORDER_OUTPUT_NAME) {
                    log::error!("Saving recorder output failed: {}", e);
                }
            }
            Listen::Detach
        })
    }

    pub async fn dispatch(&self, action: PanelAction) {
        match action {
            PanelAction::GetStream(device) => self.acquire_stream(&device).await,
            PanelAction::RecordStream { stream_id } => match self.record_stream(&stream_id) {
                Ok(outcome) => log::debug!("Record click on {}: {:?}", stream_id, outcome),
                Err(e) => log::debug!("Record click on {} failed: {}", stream_id, e),
            },
        }
    }

    fn report(&self, function_name: &str, error: PageError) -> PageError {
        self.reporter
            .rethrow(ErrorReport::new(function_name, &error))
    }
}
