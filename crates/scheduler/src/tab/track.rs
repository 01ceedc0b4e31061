use anyhow::Result;
use scheduler_command::track::TrackRename;
use scheduler_lib::{Id, Track};

use crate::{Context, app::Tab, dialog::Dialog, dialog::track::TrackDialog, widget::EditableLabel};

pub struct TrackTab {
    id: Id<Tab>,
}

impl crate::Screen for TrackTab {
    fn create(_ctx: &mut Context) -> Self
    where
        Self: Sized,
    {
        Self {
            id: Id::arbitrary(),
        }
    }

    fn id(&self) -> Id<Tab> {
        self.id
    }

    fn title(&self) -> egui::WidgetText {
        "Tracks".into()
    }

    fn update(&mut self, ctx: &mut Context, ui: &mut egui::Ui) -> Result<()> {
        let _measurement = ctx.perf.measure("TrackTab");
        let state = ctx.state;

        ui.horizontal(|ui| {
            ui.heading("Tracks");
            if ui.button("Add Track").clicked() {
                ctx.ephemeral_state
                    .open_dialog(Dialog::Track(TrackDialog::default()));
            }
        });
        ui.separator();

        if state.track_list().is_empty() {
            ui.label("No tracks yet.");
            return Ok(());
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for track in state.tracks() {
                let track_id = track.id();
                let selected = ctx.ui_state.selected_track == Some(track_id);

                let mut frame = egui::Frame::group(ui.style());
                if selected {
                    frame = frame.fill(ui.visuals().selection.bg_fill.gamma_multiply(0.3));
                }
                frame.show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        let mut name = track.name.clone();
                        if ui
                            .add(EditableLabel::new(&mut name).id_salt(track_id).strong())
                            .changed()
                        {
                            rename(ctx, track_id, &name);
                        }
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.selectable_label(selected, "Open").clicked() && !selected {
                                ctx.ui_state.selected_track = Some(track_id);
                            }
                        });
                    });
                    let count = track.sections().len();
                    ui.weak(if count == 1 {
                        "1 section".to_owned()
                    } else {
                        format!("{count} sections")
                    });
                });
            }
        });

        Ok(())
    }
}

/// Blank names are ignored, so the label snaps back to the old one.
fn rename(ctx: &mut Context, track_id: Id<Track>, name: &str) {
    let name = name.trim();
    if name.is_empty() {
        tracing::debug!("ignoring blank name for track {track_id:?}");
        return;
    }
    ctx.tracker.add(TrackRename::new(track_id, name));
}
