use serde::{Deserialize, Serialize};

/// Kind of a media endpoint as reported by device enumeration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeviceKind {
    VideoInput,
    AudioInput,
    AudioOutput,
    /// Anything the platform reports that we do not know how to open
    Unknown(String),
}

impl DeviceKind {
    pub fn parse(kind: &str) -> Self {
        match kind {
            "videoinput" => DeviceKind::VideoInput,
            "audioinput" => DeviceKind::AudioInput,
            "audiooutput" => DeviceKind::AudioOutput,
            other => DeviceKind::Unknown(other.to_string()),
        }
    }

    /// The platform string this kind was parsed from
    pub fn as_str(&self) -> &str {
        match self {
            DeviceKind::VideoInput => "videoinput",
            DeviceKind::AudioInput => "audioinput",
            DeviceKind::AudioOutput => "audiooutput",
            DeviceKind::Unknown(other) => other,
        }
    }
}

impl From<String> for DeviceKind {
    fn from(kind: String) -> Self {
        DeviceKind::parse(&kind)
    }
}

impl From<DeviceKind> for String {
    fn from(kind: DeviceKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of `enumerateDevices()`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDescriptor {
    pub device_id: String,
    pub group_id: String,
    pub kind: DeviceKind,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
}

/// What a "Get Stream" click does for a given device kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamAction {
    /// Acquire a stream of this media kind and show its tracks
    Display(MediaKind),
    /// Acquire a stream of this media kind but show nothing
    AcquireOnly(MediaKind),
    /// Log and do nothing
    Ignore,
}

impl StreamAction {
    pub fn for_kind(kind: &DeviceKind) -> Self {
        match kind {
            DeviceKind::VideoInput => StreamAction::Display(MediaKind::Video),
            DeviceKind::AudioInput => StreamAction::Display(MediaKind::Audio),
            // Outputs cannot be captured; this asks for an audio input with the
            // output's id, which browsers normally refuse.
            DeviceKind::AudioOutput => StreamAction::AcquireOnly(MediaKind::Audio),
            DeviceKind::Unknown(_) => StreamAction::Ignore,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExactMatch {
    pub exact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceConstraint {
    pub device_id: ExactMatch,
}

/// `getUserMedia()` constraints pinning one track type to one device:
/// `{video|audio: {deviceId: {exact: <id>}}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<DeviceConstraint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<DeviceConstraint>,
}

impl StreamConstraints {
    pub fn exact_device(media: MediaKind, device_id: &str) -> Self {
        let constraint = Some(DeviceConstraint {
            device_id: ExactMatch {
                exact: device_id.to_string(),
            },
        });
        match media {
            MediaKind::Video => Self {
                video: constraint,
                audio: None,
            },
            MediaKind::Audio => Self {
                video: None,
                audio: constraint,
            },
        }
    }

    pub fn device_id(&self) -> Option<&str> {
        self.video
            .as_ref()
            .or(self.audio.as_ref())
            .map(|c| c.device_id.exact.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_kind_parse_known_and_unknown() {
        assert_eq!(DeviceKind::parse("videoinput"), DeviceKind::VideoInput);
        assert_eq!(DeviceKind::parse("audioinput"), DeviceKind::AudioInput);
        assert_eq!(DeviceKind::parse("audiooutput"), DeviceKind::AudioOutput);
        let other = DeviceKind::parse("midiinput");
        assert_eq!(other, DeviceKind::Unknown("midiinput".to_string()));
        assert_eq!(other.as_str(), "midiinput");
    }

    #[test]
    fn test_stream_action_mapping() {
        assert_eq!(
            StreamAction::for_kind(&DeviceKind::VideoInput),
            StreamAction::Display(MediaKind::Video)
        );
        assert_eq!(
            StreamAction::for_kind(&DeviceKind::AudioInput),
            StreamAction::Display(MediaKind::Audio)
        );
        assert_eq!(
            StreamAction::for_kind(&DeviceKind::AudioOutput),
            StreamAction::AcquireOnly(MediaKind::Audio)
        );
        assert_eq!(
            StreamAction::for_kind(&DeviceKind::Unknown(String::new())),
            StreamAction::Ignore
        );
    }

    #[test]
    fn test_device_descriptor_uses_platform_field_names() {
        let json = r#"{"deviceId":"abc","groupId":"g1","kind":"audioinput","label":"Mic"}"#;
        let device: DeviceDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(device.device_id, "abc");
        assert_eq!(device.group_id, "g1");
        assert_eq!(device.kind, DeviceKind::AudioInput);
        assert_eq!(device.label, "Mic");

        let back = serde_json::to_value(&device).unwrap();
        assert_eq!(back["kind"], "audioinput");
    }

    #[test]
    fn test_constraints_pin_exact_device() {
        let video = StreamConstraints::exact_device(MediaKind::Video, "cam-1");
        assert_eq!(
            serde_json::to_value(&video).unwrap(),
            serde_json::json!({"video": {"deviceId": {"exact": "cam-1"}}})
        );

        let audio = StreamConstraints::exact_device(MediaKind::Audio, "mic-1");
        assert_eq!(
            serde_json::to_value(&audio).unwrap(),
            serde_json::json!({"audio": {"deviceId": {"exact": "mic-1"}}})
        );
        assert_eq!(audio.device_id(), Some("mic-1"));
    }
}
