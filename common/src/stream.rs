use serde::{Deserialize, Serialize};

/// Snapshot of one `MediaStreamTrack`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackDescriptor {
    pub label: String,
    pub id: String,
    pub kind: String,
    pub content_hint: String,
    pub enabled: bool,
    pub muted: bool,
    pub ready_state: String,
}

/// Snapshot of a `MediaStream` and its tracks, in `getTracks()` order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    pub id: String,
    pub active: bool,
    pub tracks: Vec<TrackDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_descriptor_platform_field_names() {
        let track = TrackDescriptor {
            label: "FaceTime HD".to_string(),
            id: "t1".to_string(),
            kind: "video".to_string(),
            content_hint: "motion".to_string(),
            enabled: true,
            muted: false,
            ready_state: "live".to_string(),
        };
        let json = serde_json::to_value(&track).unwrap();
        assert_eq!(json["contentHint"], "motion");
        assert_eq!(json["readyState"], "live");
    }
}
