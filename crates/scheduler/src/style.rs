use egui::Color32;
use scheduler_lib::MergeColor;

pub fn merge_fill(color: MergeColor) -> Color32 {
    let [r, g, b] = color.rgb();
    Color32::from_rgb(r, g, b)
}

/// Pending selections are drawn as a stronger version of the colour they'll be merged with.
pub fn selection_fill(color: MergeColor) -> Color32 {
    let [r, g, b] = color.rgb().map(|c| (u16::from(c) * 4 / 5) as u8);
    Color32::from_rgb(r, g, b)
}

/// Merge tints are light, so text on them stays dark even in dark mode.
pub const TINTED_TEXT: Color32 = Color32::from_rgb(0x1f, 0x29, 0x37);
