//! `web-sys` implementation of the media platform.

use std::cell::RefCell;
use std::rc::Rc;

use common::{
    ChunkHandler, DeviceDescriptor, DeviceKind, Listen, MediaPlatform, PageError, Result,
    StreamConstraints, StreamDescriptor, TrackDescriptor,
};
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobEvent, Document, HtmlAnchorElement, MediaDevices, MediaRecorder, MediaStream,
    MediaStreamConstraints, MediaStreamTrack, Url, Window,
};

use crate::js_error::platform_error;

/// How long a download's object URL stays valid after the click
const REVOKE_DELAY_MS: u32 = 1000;

pub struct BrowserPlatform {
    window: Window,
    document: Document,
    media_devices: MediaDevices,
}

impl BrowserPlatform {
    pub fn new(window: Window) -> Result<Self> {
        let document = window
            .document()
            .ok_or_else(|| PageError::Platform("No document".to_string()))?;
        let media_devices = window.navigator().media_devices().map_err(platform_error)?;
        Ok(Self {
            window,
            document,
            media_devices,
        })
    }
}

fn string_prop(target: &JsValue, key: &str) -> Result<String> {
    js_sys::Reflect::get(target, &key.into())
        .map_err(platform_error)?
        .as_string()
        .ok_or_else(|| PageError::Platform(format!("{} is not a string", key)))
}

fn device_descriptor(info: &JsValue) -> Result<DeviceDescriptor> {
    Ok(DeviceDescriptor {
        device_id: string_prop(info, "deviceId")?,
        group_id: string_prop(info, "groupId")?,
        kind: DeviceKind::parse(&string_prop(info, "kind")?),
        label: string_prop(info, "label")?,
    })
}

fn track_descriptor(value: &JsValue) -> Result<TrackDescriptor> {
    let track = value
        .dyn_ref::<MediaStreamTrack>()
        .ok_or_else(|| PageError::Platform("Not a MediaStreamTrack".to_string()))?;
    Ok(TrackDescriptor {
        label: track.label(),
        id: track.id(),
        kind: track.kind(),
        // Not every engine implements contentHint
        content_hint: string_prop(value, "contentHint").unwrap_or_default(),
        enabled: track.enabled(),
        muted: track.muted(),
        ready_state: string_prop(value, "readyState")?,
    })
}

impl MediaPlatform for BrowserPlatform {
    type Stream = MediaStream;
    type Chunk = Blob;

    async fn enumerate_devices(&self) -> Result<Vec<DeviceDescriptor>> {
        let promise = self.media_devices.enumerate_devices().map_err(platform_error)?;
        let devices: js_sys::Array = JsFuture::from(promise)
            .await
            .map_err(platform_error)?
            .dyn_into()
            .map_err(platform_error)?;

        devices.iter().map(|info| device_descriptor(&info)).collect()
    }

    async fn get_user_media(&self, constraints: &StreamConstraints) -> Result<MediaStream> {
        let constraints: MediaStreamConstraints = serde_wasm_bindgen::to_value(constraints)
            .map_err(|e| PageError::Platform(e.to_string()))?
            .unchecked_into();

        let promise = self
            .media_devices
            .get_user_media_with_constraints(&constraints)
            .map_err(platform_error)?;
        JsFuture::from(promise)
            .await
            .map_err(platform_error)?
            .dyn_into()
            .map_err(platform_error)
    }

    fn describe_stream(&self, stream: &MediaStream) -> Result<StreamDescriptor> {
        let tracks = stream
            .get_tracks()
            .iter()
            .map(|track| track_descriptor(&track))
            .collect::<Result<Vec<_>>>()?;

        Ok(StreamDescriptor {
            id: stream.id(),
            active: stream.active(),
            tracks,
        })
    }

    fn prompt(&self, message: &str) -> Option<String> {
        match self.window.prompt_with_message(message) {
            Ok(answer) => answer,
            Err(e) => {
                log::error!("prompt() failed: {}", crate::js_error::message(&e));
                None
            }
        }
    }

    fn start_recorder(
        &self,
        stream: &MediaStream,
        timeslice_ms: u32,
        mut on_chunk: ChunkHandler<Blob>,
    ) -> Result<()> {
        let recorder = MediaRecorder::new_with_media_stream(stream).map_err(platform_error)?;

        // Filled in once the closure exists so the listener can remove itself
        let listener: Rc<RefCell<Option<js_sys::Function>>> = Rc::new(RefCell::new(None));

        let detach = {
            let recorder = recorder.clone();
            let listener = Rc::clone(&listener);
            move || {
                if let Some(callback) = listener.borrow_mut().take() {
                    if let Err(e) =
                        recorder.remove_event_listener_with_callback("dataavailable", &callback)
                    {
                        log::warn!(
                            "Removing dataavailable listener failed: {}",
                            crate::js_error::message(&e)
                        );
                    }
                }
            }
        };

        let closure = Closure::wrap(Box::new(move |event: BlobEvent| {
            let Some(blob) = event.data() else {
                return;
            };
            if on_chunk(blob) == Listen::Detach {
                detach();
            }
        }) as Box<dyn FnMut(BlobEvent)>);

        let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
        recorder
            .add_event_listener_with_callback("dataavailable", callback)
            .map_err(platform_error)?;
        *listener.borrow_mut() = Some(callback.clone());
        closure.forget();

        recorder
            // Same bits; the binding converts back to `unsigned long`.
            .start_with_time_slice(timeslice_ms as i32)
            .map_err(platform_error)
    }

    fn download(&self, chunk: &Blob, file_name: &str) -> Result<()> {
        let url = Url::create_object_url_with_blob(chunk).map_err(platform_error)?;

        let anchor: HtmlAnchorElement = self
            .document
            .create_element("a")
            .map_err(platform_error)?
            .dyn_into()
            .map_err(|_| PageError::Platform("Created element is not an anchor".to_string()))?;
        anchor
            .style()
            .set_property("display", "none")
            .map_err(platform_error)?;
        anchor.set_href(&url);
        anchor.set_download(file_name);

        let body = self
            .document
            .body()
            .ok_or_else(|| PageError::Platform("No body".to_string()))?;
        body.append_child(&anchor).map_err(platform_error)?;
        anchor.click();
        anchor.remove();

        Timeout::new(REVOKE_DELAY_MS, move || {
            let _ = Url::revoke_object_url(&url);
        })
        .forget();

        log::info!("Saved {} bytes as {}", chunk.size(), file_name);
        Ok(())
    }
}
