use scheduler_command::section::{SectionAdd, SectionUpdate, SubsectionAdd};
use scheduler_lib::{FormError, Id, MergedColumns, Section, SectionForm, Track};

use super::DialogStatus;
use crate::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    TopLevel,
    ChildOf(Id<Section>),
    Existing(Id<Section>),
}

#[derive(Debug)]
pub struct SectionDialog {
    track_id: Id<Track>,
    target: Target,
    form: SectionForm,
    error: Option<FormError>,
}

impl SectionDialog {
    fn new(track_id: Id<Track>, target: Target, form: SectionForm) -> Self {
        Self {
            track_id,
            target,
            form,
            error: None,
        }
    }

    pub fn add(track_id: Id<Track>) -> Self {
        Self::new(track_id, Target::TopLevel, SectionForm::new())
    }
    pub fn add_subsection(track_id: Id<Track>, parent_id: Id<Section>) -> Self {
        Self::new(track_id, Target::ChildOf(parent_id), SectionForm::new())
    }
    pub fn edit(track_id: Id<Track>, section: &Section) -> Self {
        Self::new(
            track_id,
            Target::Existing(section.id()),
            SectionForm::from_section(section),
        )
    }

    pub fn title(&self) -> &'static str {
        match self.target {
            Target::TopLevel => "Add Section",
            Target::ChildOf(_) => "Add Subsection",
            Target::Existing(_) => "Edit Section",
        }
    }

    /// Whether the input for `field` is replaced by the parent's value (or, when editing, by the
    /// merged value) and so can't be typed into.
    fn locked(&self, field: MergedColumns) -> bool {
        match self.target {
            Target::TopLevel => false,
            Target::ChildOf(_) => self.form.inherit.contains(field),
            Target::Existing(_) => {
                field == MergedColumns::TIME_SLOT && self.form.inherit.contains(field)
            }
        }
    }

    pub fn ui(&mut self, ctx: &mut Context, ui: &mut egui::Ui) -> DialogStatus {
        let speaker_locked = self.locked(MergedColumns::SPEAKER);
        let role_locked = self.locked(MergedColumns::ROLE);
        let time_locked = self.locked(MergedColumns::TIME_SLOT);

        egui::Grid::new("section_dialog_fields")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                let form = &mut self.form;

                ui.label("Name");
                ui.text_edit_singleline(&mut form.name);
                ui.end_row();

                ui.label("Speaker");
                ui.add_enabled(!speaker_locked, egui::TextEdit::singleline(&mut form.speaker));
                ui.end_row();

                ui.label("Role");
                ui.add_enabled(!role_locked, egui::TextEdit::singleline(&mut form.role));
                ui.end_row();

                ui.label("Start");
                ui.add_enabled(
                    !time_locked,
                    egui::TextEdit::singleline(&mut form.start).hint_text("HH:MM"),
                );
                ui.end_row();

                ui.label("End");
                ui.add_enabled(
                    !time_locked,
                    egui::TextEdit::singleline(&mut form.end).hint_text("HH:MM"),
                );
                ui.end_row();
            });

        if let Target::ChildOf(_) = self.target {
            ui.add_space(4.0);
            ui.label("Use the parent's:");
            ui.horizontal(|ui| {
                for (flag, label) in [
                    (MergedColumns::SPEAKER, "Speaker"),
                    (MergedColumns::ROLE, "Role"),
                    (MergedColumns::TIME_SLOT, "Time slot"),
                ] {
                    let mut inherit = self.form.inherit.contains(flag);
                    if ui.checkbox(&mut inherit, label).changed() {
                        self.form.inherit.set(flag, inherit);
                    }
                }
            });
        }

        super::error_label(ui, self.error.as_ref());

        let confirm = match self.target {
            Target::Existing(_) => "Save",
            _ => "Add",
        };
        match super::buttons(ui, confirm) {
            (true, _) => self.submit(ctx),
            (_, true) => DialogStatus::Closed,
            _ => DialogStatus::Open,
        }
    }

    /// Queues the matching command if the form is valid. Otherwise the dialog stays open showing
    /// the error.
    pub fn submit(&mut self, ctx: &mut Context) -> DialogStatus {
        let draft = match self.form.submit() {
            Ok(draft) => draft,
            Err(err) => {
                tracing::debug!("section form rejected: {err}");
                self.error = Some(err);
                return DialogStatus::Open;
            }
        };

        match self.target {
            Target::TopLevel => ctx.tracker.add(SectionAdd::new(self.track_id, draft)),
            Target::ChildOf(parent_id) => {
                ctx.tracker
                    .add(SubsectionAdd::new(self.track_id, parent_id, draft))
            }
            Target::Existing(section_id) => ctx.tracker.add(SectionUpdate::new(
                self.track_id,
                section_id,
                draft.into_patch(),
            )),
        }
        DialogStatus::Closed
    }
}

#[cfg(test)]
mod tests {
    use scheduler_lib::{
        ClockTime, FormError, MergedColumns, SectionDraft, TimeSlot, TimeSlotError,
    };

    use super::SectionDialog;
    use crate::{dialog::DialogStatus, test_util::Harness};

    #[test]
    fn test_invalid_times_keep_dialog_open() {
        let mut harness = Harness::new();
        let track_id = harness.state.add_track("Main hall");

        let mut dialog = SectionDialog::add(track_id);
        dialog.form.name = "Keynote".into();
        dialog.form.start = "10:00".into();
        dialog.form.end = "09:00".into();

        let status = harness.frame(|ctx| dialog.submit(ctx));
        assert_eq!(status, DialogStatus::Open);
        assert_eq!(
            dialog.error,
            Some(FormError::TimeSlot(TimeSlotError::EndNotAfterStart {
                start: ClockTime::new(10, 0).unwrap(),
                end: ClockTime::new(9, 0).unwrap(),
            }))
        );
        assert!(harness.state.track(track_id).unwrap().sections().is_empty());

        dialog.form.end = "11:30".into();
        let status = harness.frame(|ctx| dialog.submit(ctx));
        assert_eq!(status, DialogStatus::Closed);

        let track = harness.state.track(track_id).unwrap();
        assert_eq!(track.sections().len(), 1);
        assert_eq!(track.sections()[0].name, "Keynote");
        assert_eq!(
            track.sections()[0].time_slot,
            TimeSlot::new(ClockTime::new(10, 0).unwrap(), ClockTime::new(11, 30).unwrap())
        );
    }

    #[test]
    fn test_subsection_inherits_time_slot() {
        let mut harness = Harness::new();
        let track_id = harness.state.add_track("Main hall");
        let parent_id = harness
            .state
            .track_mut(track_id)
            .unwrap()
            .push_section(SectionDraft {
                name: "Workshop".into(),
                ..Default::default()
            });

        let mut dialog = SectionDialog::add_subsection(track_id, parent_id);
        dialog.form.name = "Hands-on".into();
        // ignored, since the parent's slot is used
        dialog.form.start = "nonsense".into();
        dialog.form.inherit = MergedColumns::TIME_SLOT;
        assert_eq!(harness.frame(|ctx| dialog.submit(ctx)), DialogStatus::Closed);

        let track = harness.state.track(track_id).unwrap();
        let parent = track.section(parent_id).unwrap();
        let child = &parent.subsections()[0];
        assert_eq!(child.name, "Hands-on");
        assert_eq!(child.time_slot, parent.time_slot);
        assert!(child.merged.is_merged(scheduler_lib::ColumnType::TimeSlot));
    }

    #[test]
    fn test_edit_prefills_and_updates() {
        let mut harness = Harness::new();
        let track_id = harness.state.add_track("Main hall");
        let track = harness.state.track_mut(track_id).unwrap();
        let section_id = track.push_section(SectionDraft {
            name: "Lunch".into(),
            speaker: "Catering".into(),
            ..Default::default()
        });

        let section = harness.state.track(track_id).unwrap().section(section_id).unwrap();
        let mut dialog = SectionDialog::edit(track_id, section);
        assert_eq!(dialog.title(), "Edit Section");
        assert_eq!(dialog.form.speaker, "Catering");

        dialog.form.name = "  ".into();
        assert_eq!(harness.frame(|ctx| dialog.submit(ctx)), DialogStatus::Open);
        assert_eq!(dialog.error, Some(FormError::MissingName));

        dialog.form.name = "Long lunch".into();
        dialog.form.end = "11:00".into();
        assert_eq!(harness.frame(|ctx| dialog.submit(ctx)), DialogStatus::Closed);

        let section = harness.state.track(track_id).unwrap().section(section_id).unwrap();
        assert_eq!(section.name, "Long lunch");
        assert_eq!(section.speaker, "Catering");
        assert_eq!(section.time_slot.end, ClockTime::new(11, 0).unwrap());
    }
}
