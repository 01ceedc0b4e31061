//! Modal dialogs. At most one is open at a time; it lives in [`crate::EphemeralState`] and is
//! drawn over the dock every frame until it closes.

pub mod headers;
pub mod merge;
pub mod section;
pub mod track;

use crate::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogStatus {
    Open,
    Closed,
}

#[derive(Debug)]
pub enum Dialog {
    Section(section::SectionDialog),
    Track(track::TrackDialog),
    Merge(merge::MergeDialog),
    Headers(headers::HeaderDialog),
}

impl Dialog {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Section(dialog) => dialog.title(),
            Self::Track(_) => "Add Track",
            Self::Merge(_) => "Merge Cells",
            Self::Headers(_) => "Customize Headers",
        }
    }

    fn ui(&mut self, ctx: &mut Context, ui: &mut egui::Ui) -> DialogStatus {
        match self {
            Self::Section(dialog) => dialog.ui(ctx, ui),
            Self::Track(dialog) => dialog.ui(ctx, ui),
            Self::Merge(dialog) => dialog.ui(ctx, ui),
            Self::Headers(dialog) => dialog.ui(ctx, ui),
        }
    }
}

/// Draws the open dialog, if any. Clicking outside it or pressing Escape closes it, except while
/// one of its fields has keyboard focus: then Escape only leaves the field.
pub fn show(ctx: &mut Context, egui_ctx: &egui::Context) {
    let Some(mut dialog) = ctx.ephemeral_state.dialog.take() else {
        return;
    };

    let modal_id = egui::Id::new("scheduler_dialog");
    // whether a field had focus when the last frame ended. egui may already have dropped the
    // focus by the time this frame's Escape is seen.
    let editing_id = modal_id.with("editing");
    let was_editing = egui_ctx
        .data(|data| data.get_temp::<bool>(editing_id))
        .unwrap_or(false);

    let modal = egui::Modal::new(modal_id).show(egui_ctx, |ui| {
        ui.set_width(360.0);
        ui.heading(dialog.title());
        ui.add_space(8.0);
        dialog.ui(ctx, ui)
    });

    let status = if modal.should_close() && !was_editing {
        DialogStatus::Closed
    } else {
        modal.inner
    };

    if status == DialogStatus::Open {
        let editing = egui_ctx.memory(|mem| mem.focused().is_some());
        egui_ctx.data_mut(|data| data.insert_temp(editing_id, editing));
        // the dialog may have opened another one in its place
        if ctx.ephemeral_state.dialog.is_none() {
            ctx.ephemeral_state.dialog = Some(dialog);
        }
    } else {
        egui_ctx.data_mut(|data| data.remove::<bool>(editing_id));
    }
}

/// Shows `error` in the error colour, or nothing.
fn error_label(ui: &mut egui::Ui, error: Option<&impl std::fmt::Display>) {
    if let Some(error) = error {
        ui.colored_label(ui.visuals().error_fg_color, error.to_string());
    }
}

/// The confirm and cancel buttons at the bottom of every dialog. Returns `(confirmed, cancelled)`.
fn buttons(ui: &mut egui::Ui, confirm: &str) -> (bool, bool) {
    ui.add_space(8.0);
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        let confirmed = ui.button(confirm).clicked();
        let cancelled = ui.button("Cancel").clicked();
        (confirmed, cancelled)
    })
    .inner
}
