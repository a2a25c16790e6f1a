//! Media gallery catalog.
//!
//! Four fixed items from the digital-twin footage set. The terminal does
//! not play media; the gallery presents the metadata and where each clip
//! lives, which is all the pitch needs.

/// What kind of asset an item points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Video => "VIDEO",
            MediaKind::Image => "IMAGE",
        }
    }
}

/// Corner badge shown on each card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Live,
    Rec,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Live => "LIVE",
            Badge::Rec => "REC",
        }
    }
}

/// One gallery card.
#[derive(Debug, Clone)]
pub struct MediaItem {
    pub title: &'static str,
    pub desc: &'static str,
    pub kind: MediaKind,
    pub badge: Badge,
    /// Asset path relative to the media bundle.
    pub source: &'static str,
    /// Where the footage's telemetry originates.
    pub feed_label: &'static str,
}

/// The gallery, in display order.
pub fn gallery() -> Vec<MediaItem> {
    vec![
        MediaItem {
            title: "Vibration Sensor Install - SAG Mill",
            desc: "IP67 sensor mounted on the stator housing, streaming \
                   vibration telemetry in real time.",
            kind: MediaKind::Video,
            badge: Badge::Live,
            source: "assets/simulation/sag_sensor_install.mp4",
            feed_label: "IoT Hub Primary Node",
        },
        MediaItem {
            title: "Air Quality Monitoring - Tunnel Level 2",
            desc: "NOx dispersion simulation and automatic ventilation \
                   trigger per supreme decree 28.",
            kind: MediaKind::Image,
            badge: Badge::Rec,
            source: "assets/simulation/gateway.png",
            feed_label: "IoT Hub Primary Node",
        },
        MediaItem {
            title: "LoRaWAN Gateway - Crusher Zone",
            desc: "Industrial comms node with LTE fallback operating under \
                   heavy dust.",
            kind: MediaKind::Video,
            badge: Badge::Live,
            source: "assets/simulation/crusher.mp4",
            feed_label: "IoT Hub Primary Node",
        },
        MediaItem {
            title: "Integrated Control Centre",
            desc: "Operators analysing predictive alerts on the corporate \
                   dashboard.",
            kind: MediaKind::Video,
            badge: Badge::Rec,
            source: "assets/simulation/operators.mp4",
            feed_label: "IoT Hub Primary Node",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_catalog() {
        let items = gallery();
        assert_eq!(items.len(), 4);
        assert!(items.iter().any(|i| i.kind == MediaKind::Image));
        assert!(items.iter().any(|i| i.badge == Badge::Live));
        assert!(items.iter().all(|i| !i.source.is_empty()));
    }
}
