//! Shared color constants for the UI.

use egui::Color32;
use syc_business::management::list::Tone;

/// Forest green color for active/success status.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red color for errors and destructive actions.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber color for pending/warning status.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Blue color for informational badges.
pub const COLOR_BLUE: Color32 = Color32::from_rgb(13, 110, 253);

/// Gray color for neutral badges and secondary text.
pub const COLOR_GRAY: Color32 = Color32::from_rgb(108, 117, 125);

/// Text color of a badge with the given tone.
pub fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Positive => COLOR_GREEN,
        Tone::Warning => COLOR_AMBER,
        Tone::Neutral => COLOR_GRAY,
        Tone::Danger => COLOR_RED,
        Tone::Info => COLOR_BLUE,
    }
}
