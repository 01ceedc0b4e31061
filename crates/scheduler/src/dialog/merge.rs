use scheduler_command::merge::MergeApply;
use scheduler_lib::{Id, MergeColor, Track};

use super::DialogStatus;
use crate::{Context, style};

/// Picks the colour and label for the cells selected in the section table.
#[derive(Debug)]
pub struct MergeDialog {
    track_id: Id<Track>,
    color: MergeColor,
    label: String,
}

impl MergeDialog {
    pub fn new(track_id: Id<Track>, color: MergeColor) -> Self {
        Self {
            track_id,
            color,
            label: String::new(),
        }
    }

    pub fn ui(&mut self, ctx: &mut Context, ui: &mut egui::Ui) -> DialogStatus {
        ui.label("Colour");
        ui.horizontal_wrapped(|ui| {
            for color in MergeColor::ALL {
                let text = egui::RichText::new(color.label()).color(style::TINTED_TEXT);
                let button = egui::Button::new(text)
                    .fill(style::merge_fill(color))
                    .selected(self.color == color);
                if ui.add(button).clicked() {
                    self.color = color;
                    // preview on the selected cells
                    ctx.ephemeral_state.merge.set_color(color);
                }
            }
        });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Label");
            ui.add(egui::TextEdit::singleline(&mut self.label).hint_text("Shown when hovering"));
        });

        match super::buttons(ui, "Apply") {
            (true, _) => self.apply(ctx),
            (_, true) => DialogStatus::Closed,
            _ => DialogStatus::Open,
        }
    }

    /// Merges every selected cell and ends the selection.
    pub fn apply(&mut self, ctx: &mut Context) -> DialogStatus {
        if ctx.ephemeral_state.merge_track() != Some(self.track_id) {
            tracing::warn!("merge dialog for {:?} outlived its selection", self.track_id);
            return DialogStatus::Closed;
        }

        let patches = ctx
            .ephemeral_state
            .merge
            .apply(self.color, self.label.trim());
        ctx.ephemeral_state.cancel_merge();

        if !patches.is_empty() {
            tracing::debug!(
                "merging {} section(s) as {}",
                patches.len(),
                self.color.class_name()
            );
            ctx.tracker.add(MergeApply::new(self.track_id, patches));
        }
        DialogStatus::Closed
    }
}
