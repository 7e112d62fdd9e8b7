//! Client-only live preview of pending GUI modifications.
//!
//! A pure function from the current form input to a display patch; the
//! view applies only the `Some` fields, so anything the input does not
//! mention keeps its previous rendering. No network, no blocking.

pub const BUTTON_CHANGE_MESSAGE: &str = "Button changes will be applied";
pub const COLOR_CHANGE_MESSAGE: &str = "Color scheme changes will be applied";
pub const GENERIC_CHANGE_MESSAGE: &str = "GUI changes will be applied";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Disconnected => "Disconnected",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewPatch {
    pub button_color: Option<&'static str>,
    pub message: Option<&'static str>,
    pub status: Option<ConnectionStatus>,
}

/// Primary colors of the server's fixed scheme table. Anything outside
/// the enumeration maps to `None` and leaves the preview color alone.
pub fn scheme_color(scheme: &str) -> Option<&'static str> {
    match scheme {
        "blue" => Some("#007bff"),
        "green" => Some("#28a745"),
        "red" => Some("#dc3545"),
        "purple" => Some("#6f42c1"),
        "orange" => Some("#fd7e14"),
        "dark" => Some("#343a40"),
        "light" => Some("#f8f9fa"),
        _ => None,
    }
}

/// Derives the preview patch from the GUI-changes text and the selected
/// color scheme.
///
/// Text classification is case-insensitive and checked in fixed order:
/// "button" wins over "color", which wins over the generic message for
/// any other non-empty text. "disconnect" always wins over a bare
/// "connect" mention, since the former contains the latter.
pub fn preview_patch(text: &str, scheme: &str) -> PreviewPatch {
    let lower = text.to_lowercase();

    let message = if lower.contains("button") {
        Some(BUTTON_CHANGE_MESSAGE)
    } else if lower.contains("color") {
        Some(COLOR_CHANGE_MESSAGE)
    } else if !lower.trim().is_empty() {
        Some(GENERIC_CHANGE_MESSAGE)
    } else {
        None
    };

    let status = if lower.contains("disconnect") {
        Some(ConnectionStatus::Disconnected)
    } else if lower.contains("connect") {
        Some(ConnectionStatus::Connected)
    } else {
        None
    };

    PreviewPatch {
        button_color: scheme_color(scheme),
        message,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_scheme_maps_to_its_exact_color() {
        let expected = [
            ("blue", "#007bff"),
            ("green", "#28a745"),
            ("red", "#dc3545"),
            ("purple", "#6f42c1"),
            ("orange", "#fd7e14"),
            ("dark", "#343a40"),
            ("light", "#f8f9fa"),
        ];
        for (scheme, color) in expected {
            assert_eq!(scheme_color(scheme), Some(color), "scheme {scheme}");
        }
    }

    #[test]
    fn unknown_or_empty_scheme_leaves_color_untouched() {
        assert_eq!(scheme_color(""), None);
        assert_eq!(scheme_color("magenta"), None);
        assert_eq!(preview_patch("", "magenta").button_color, None);
    }

    #[test]
    fn button_wins_over_color_and_generic() {
        let patch = preview_patch("change the Button color", "");
        assert_eq!(patch.message, Some(BUTTON_CHANGE_MESSAGE));
    }

    #[test]
    fn color_wins_over_generic() {
        let patch = preview_patch("use a darker COLOR everywhere", "");
        assert_eq!(patch.message, Some(COLOR_CHANGE_MESSAGE));
    }

    #[test]
    fn other_text_gets_the_generic_message() {
        let patch = preview_patch("make the knob bigger", "");
        assert_eq!(patch.message, Some(GENERIC_CHANGE_MESSAGE));
    }

    #[test]
    fn empty_text_updates_nothing() {
        assert_eq!(preview_patch("", "").message, None);
        assert_eq!(preview_patch("   ", "").message, None);
        assert_eq!(preview_patch("", "").status, None);
    }

    #[test]
    fn disconnect_always_wins_over_connect() {
        let patch = preview_patch("add a connect button then disconnect", "");
        assert_eq!(patch.status, Some(ConnectionStatus::Disconnected));
        // "button" is checked before "color"/generic.
        assert_eq!(patch.message, Some(BUTTON_CHANGE_MESSAGE));
    }

    #[test]
    fn bare_connect_reads_connected() {
        let patch = preview_patch("show Connect state", "");
        assert_eq!(patch.status, Some(ConnectionStatus::Connected));
    }

    #[test]
    fn no_connectivity_mention_leaves_status_unchanged() {
        let patch = preview_patch("bigger dpad please", "");
        assert_eq!(patch.status, None);
    }

    #[test]
    fn scheme_applies_independently_of_text() {
        let patch = preview_patch("", "green");
        assert_eq!(patch.button_color, Some("#28a745"));
        assert_eq!(patch.message, None);
        assert_eq!(patch.status, None);
    }
}
