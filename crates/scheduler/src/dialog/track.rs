use scheduler_command::track::TrackAdd;

use super::DialogStatus;
use crate::Context;

#[derive(Debug, Default)]
pub struct TrackDialog {
    name: String,
}

impl TrackDialog {
    pub fn ui(&mut self, ctx: &mut Context, ui: &mut egui::Ui) -> DialogStatus {
        ui.horizontal(|ui| {
            ui.label("Name");
            ui.add(egui::TextEdit::singleline(&mut self.name).hint_text("Track name"));
        });

        match super::buttons(ui, "Add") {
            (true, _) => self.submit(ctx),
            (_, true) => DialogStatus::Closed,
            _ => DialogStatus::Open,
        }
    }

    /// A blank name is fine; the track gets a numbered default. The new track is opened unless
    /// another one already is.
    pub fn submit(&mut self, ctx: &mut Context) -> DialogStatus {
        let command = TrackAdd::new(core::mem::take(&mut self.name));
        ctx.ui_state.selected_track.get_or_insert(command.id());
        ctx.tracker.add(command);
        DialogStatus::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::TrackDialog;
    use crate::{dialog::DialogStatus, test_util::Harness};

    #[test]
    fn test_add_track() {
        let mut harness = Harness::new();

        let mut dialog = TrackDialog::default();
        assert_eq!(harness.frame(|ctx| dialog.submit(ctx)), DialogStatus::Closed);
        let first = harness.ui_state.selected_track.unwrap();
        assert_eq!(harness.state.track(first).unwrap().name, "Track 1");

        let mut dialog = TrackDialog {
            name: "Workshops".into(),
        };
        harness.frame(|ctx| dialog.submit(ctx));
        assert_eq!(harness.state.track_list().len(), 2);
        // the open track doesn't change
        assert_eq!(harness.ui_state.selected_track, Some(first));
        let names: Vec<&str> = harness.state.tracks().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Track 1", "Workshops"]);
    }
}
