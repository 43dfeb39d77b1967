//! DOM-independent description of what the page shows.
//!
//! A [`Panel`] is a bordered box of text lines, optional nested panels and an
//! optional button. The browser surface turns it into `div`/`p`/`button`
//! elements; tests inspect it directly.

use crate::device::DeviceDescriptor;
use crate::stream::{StreamDescriptor, TrackDescriptor};

pub const GET_STREAM_CAPTION: &str = "Get Stream";
pub const RECORD_STREAM_CAPTION: &str = "Record Stream";

/// What a panel button asks the controller to do when clicked
#[derive(Debug, Clone, PartialEq)]
pub enum PanelAction {
    GetStream(DeviceDescriptor),
    RecordStream { stream_id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelButton {
    pub caption: &'static str,
    pub action: PanelAction,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Panel {
    pub lines: Vec<String>,
    pub children: Vec<Panel>,
    pub button: Option<PanelButton>,
}

impl Panel {
    fn field(&mut self, name: &str, value: impl std::fmt::Display) {
        self.lines.push(format!("{}: {}", name, value));
    }
}

pub fn device_panel(device: &DeviceDescriptor) -> Panel {
    let mut panel = Panel::default();
    panel.field("deviceId", &device.device_id);
    panel.field("groupId", &device.group_id);
    panel.field("kind", &device.kind);
    panel.field("label", &device.label);
    panel.button = Some(PanelButton {
        caption: GET_STREAM_CAPTION,
        action: PanelAction::GetStream(device.clone()),
    });
    panel
}

pub fn stream_panel(stream: &StreamDescriptor) -> Panel {
    let mut panel = Panel::default();
    panel.field("id", &stream.id);
    panel.field("active", stream.active);
    panel.children = stream.tracks.iter().map(track_panel).collect();
    panel.button = Some(PanelButton {
        caption: RECORD_STREAM_CAPTION,
        action: PanelAction::RecordStream {
            stream_id: stream.id.clone(),
        },
    });
    panel
}

fn track_panel(track: &TrackDescriptor) -> Panel {
    let mut panel = Panel::default();
    panel.field("label", &track.label);
    panel.field("id", &track.id);
    panel.field("kind", &track.kind);
    panel.field("contentHint", &track.content_hint);
    panel.field("enabled", track.enabled);
    panel.field("muted", track.muted);
    panel.field("readyState", &track.ready_state);
    panel
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DeviceKind;

    #[test]
    fn test_device_panel_fields_verbatim() {
        let device = DeviceDescriptor {
            device_id: "d:1".to_string(),
            group_id: "grp".to_string(),
            kind: DeviceKind::VideoInput,
            label: "USB Camera (046d:0825)".to_string(),
        };
        let panel = device_panel(&device);
        assert_eq!(
            panel.lines,
            vec![
                "deviceId: d:1",
                "groupId: grp",
                "kind: videoinput",
                "label: USB Camera (046d:0825)",
            ]
        );
        let button = panel.button.unwrap();
        assert_eq!(button.caption, "Get Stream");
        assert_eq!(button.action, PanelAction::GetStream(device));
    }

    #[test]
    fn test_stream_panel_one_child_per_track() {
        let track = |id: &str, kind: &str| TrackDescriptor {
            label: format!("{} label", id),
            id: id.to_string(),
            kind: kind.to_string(),
            content_hint: String::new(),
            enabled: true,
            muted: true,
            ready_state: "ended".to_string(),
        };
        let stream = StreamDescriptor {
            id: "s1".to_string(),
            active: false,
            tracks: vec![track("a", "audio"), track("v", "video")],
        };
        let panel = stream_panel(&stream);
        assert_eq!(panel.lines, vec!["id: s1", "active: false"]);
        assert_eq!(panel.children.len(), 2);
        assert_eq!(
            panel.children[1].lines,
            vec![
                "label: v label",
                "id: v",
                "kind: video",
                "contentHint: ",
                "enabled: true",
                "muted: true",
                "readyState: ended",
            ]
        );
        assert!(panel.children.iter().all(|c| c.button.is_none()));
        assert_eq!(
            panel.button.unwrap().action,
            PanelAction::RecordStream {
                stream_id: "s1".to_string()
            }
        );
    }
}
