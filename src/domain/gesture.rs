/// Discrete one-shot gestures reported by the hand classifier.
///
/// Debouncing happens upstream; the core reacts to every trigger it receives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    None,
    Fist,
    OpenPalm,
    PointingUp,
    ThumbUp,
    ThumbDown,
    Victory,
    ILoveYou,
}

impl GestureKind {
    /// Parse a classifier label (`Closed_Fist`, `Thumb_Up`, ...).
    /// Unrecognised labels map to `None`.
    pub fn from_label(label: &str) -> Self {
        let norm: String = label
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match norm.as_str() {
            "closedfist" | "fist" => GestureKind::Fist,
            "openpalm" | "palm" => GestureKind::OpenPalm,
            "pointingup" => GestureKind::PointingUp,
            "thumbup" | "thumbsup" => GestureKind::ThumbUp,
            "thumbdown" | "thumbsdown" => GestureKind::ThumbDown,
            "victory" | "peace" => GestureKind::Victory,
            "iloveyou" => GestureKind::ILoveYou,
            _ => GestureKind::None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GestureKind::None => "None",
            GestureKind::Fist => "Closed_Fist",
            GestureKind::OpenPalm => "Open_Palm",
            GestureKind::PointingUp => "Pointing_Up",
            GestureKind::ThumbUp => "Thumb_Up",
            GestureKind::ThumbDown => "Thumb_Down",
            GestureKind::Victory => "Victory",
            GestureKind::ILoveYou => "ILoveYou",
        }
    }
}
