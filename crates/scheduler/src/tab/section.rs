use std::sync::Arc;

use anyhow::{Context as _, Result};
use scheduler_command::section::SectionRemove;
use scheduler_lib::{ColumnType, HeaderKind, Id, Section, Track, group_by_speaker_role};
use smallvec::SmallVec;

use crate::{
    Context,
    app::Tab,
    dialog::{Dialog, headers::HeaderDialog, merge::MergeDialog, section::SectionDialog},
    style,
};

const INDENT_PER_LEVEL: f32 = 16.0;

pub struct SectionTab {
    id: Id<Tab>,
}

impl crate::Screen for SectionTab {
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
        "Sections".into()
    }

    fn update(&mut self, ctx: &mut Context, ui: &mut egui::Ui) -> Result<()> {
        let _measurement = ctx.perf.measure("SectionTab");
        let state = ctx.state;

        let Some(track_id) = ctx.ui_state.selected_track else {
            ui.label("Open a track to see its sections.");
            return Ok(());
        };
        let track = state
            .track(track_id)
            .with_context(|| format!("selected track {track_id:?} doesn't exist"))?;
        let selecting = ctx.ephemeral_state.merge_track() == Some(track_id);

        toolbar(ctx, ui, track, selecting);
        ui.separator();

        if track.sections().is_empty() {
            ui.label("No sections yet.");
            return Ok(());
        }

        let headers: SmallVec<[(HeaderKind, String); 8]> = ctx
            .ui_state
            .headers
            .visible()
            .map(|header| (header.kind, header.label.clone()))
            .collect();
        if headers.is_empty() {
            ui.label("Every column is hidden. Use \"Customize Headers\" to show some.");
            return Ok(());
        }

        let grid_id = self.id;
        egui::ScrollArea::both().show(ui, |ui| {
            egui::Grid::new(grid_id)
                .striped(true)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    for (_, label) in &headers {
                        ui.strong(label.as_str());
                    }
                    ui.end_row();

                    SectionTable {
                        ctx,
                        track_id,
                        headers: &headers,
                        selecting,
                    }
                    .rows(ui, track.sections());
                });
        });

        Ok(())
    }
}

fn toolbar(ctx: &mut Context, ui: &mut egui::Ui, track: &Track, selecting: bool) {
    let track_id = track.id();
    ui.horizontal(|ui| {
        ui.heading(track.name.as_str());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Customize Headers").clicked() {
                ctx.ephemeral_state
                    .open_dialog(Dialog::Headers(HeaderDialog::new(&ctx.ui_state.headers)));
            }
            if selecting {
                if ui.button("Cancel").clicked() {
                    ctx.ephemeral_state.cancel_merge();
                }
                let count = ctx.ephemeral_state.merge.selected().len();
                if ui
                    .add_enabled(count > 0, egui::Button::new("Apply"))
                    .clicked()
                {
                    let color = ctx.ephemeral_state.merge.color();
                    ctx.ephemeral_state
                        .open_dialog(Dialog::Merge(MergeDialog::new(track_id, color)));
                }
                ui.label(match count {
                    0 => "Click cells to select them".to_owned(),
                    1 => "1 cell selected".to_owned(),
                    n => format!("{n} cells selected"),
                });
            } else {
                if ui.button("Add Section").clicked() {
                    ctx.ephemeral_state
                        .open_dialog(Dialog::Section(SectionDialog::add(track_id)));
                }
                if ui.button("Merge columns").clicked() {
                    ctx.ephemeral_state.begin_merge(track_id);
                }
            }
        });
    });
}

#[derive(Debug, Clone, Copy)]
struct TableRow<'a> {
    section: &'a Section,
    depth: usize,
    show_people: bool,
}

/// Flattens the tree into display order. Top-level sections are grouped by speaker and role, and
/// only the first row of a group shows them. Subsections keep their stored order and show speaker
/// and role exactly when their top-level ancestor does.
fn table_rows(sections: &[Arc<Section>]) -> Vec<TableRow<'_>> {
    fn subtree<'a>(
        rows: &mut Vec<TableRow<'a>>,
        section: &'a Section,
        depth: usize,
        show_people: bool,
    ) {
        rows.push(TableRow {
            section,
            depth,
            show_people,
        });
        for child in section.subsections() {
            subtree(rows, child, depth + 1, show_people);
        }
    }

    let mut rows = Vec::new();
    for group in group_by_speaker_role(sections) {
        for (i, &section) in group.sections.iter().enumerate() {
            subtree(&mut rows, section, 0, i == 0);
        }
    }
    rows
}

struct SectionTable<'a, 'b> {
    ctx: &'a mut Context<'b>,
    track_id: Id<Track>,
    headers: &'a [(HeaderKind, String)],
    selecting: bool,
}

impl SectionTable<'_, '_> {
    fn rows(&mut self, ui: &mut egui::Ui, sections: &[Arc<Section>]) {
        for row in table_rows(sections) {
            self.row(ui, row.section, row.depth, row.show_people);
        }
    }

    fn row(&mut self, ui: &mut egui::Ui, section: &Section, depth: usize, show_people: bool) {
        let headers = self.headers;
        for (kind, _) in headers {
            let Some(column) = kind.column() else {
                self.actions(ui, section);
                continue;
            };
            let (text, indent) = match column {
                ColumnType::TimeSlot => (section.time_slot.to_string(), 0.0),
                ColumnType::Name => (section.name.clone(), depth as f32 * INDENT_PER_LEVEL),
                ColumnType::Speaker if show_people => (section.speaker.clone(), 0.0),
                ColumnType::Role if show_people => (section.role.clone(), 0.0),
                ColumnType::Speaker | ColumnType::Role => (String::new(), 0.0),
            };
            self.cell(ui, section, column, text, indent);
        }
        ui.end_row();
    }

    fn cell(
        &mut self,
        ui: &mut egui::Ui,
        section: &Section,
        column: ColumnType,
        text: String,
        indent: f32,
    ) {
        let merge = &self.ctx.ephemeral_state.merge;
        let fill = if self.selecting && merge.is_selected(section.id(), column) {
            Some(style::selection_fill(merge.color()))
        } else {
            section.merged.tint(column).map(style::merge_fill)
        };

        let mut text = egui::RichText::new(text);
        if fill.is_some() {
            text = text.color(style::TINTED_TEXT);
        }

        let response = egui::Frame::default()
            .fill(fill.unwrap_or(egui::Color32::TRANSPARENT))
            .inner_margin(egui::Margin::symmetric(4, 2))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.add_space(indent);
                    ui.add(
                        egui::Label::new(text)
                            .selectable(false)
                            .sense(egui::Sense::click()),
                    )
                })
                .inner
            })
            .inner;

        if self.selecting {
            if response
                .on_hover_cursor(egui::CursorIcon::PointingHand)
                .clicked()
            {
                self.ctx.ephemeral_state.merge.toggle(section.id(), column);
            }
        } else if let Some(label) = section.merged.name.as_deref().filter(|_| fill.is_some()) {
            response.on_hover_text(format!("Merged: {label}"));
        }
    }

    fn actions(&mut self, ui: &mut egui::Ui, section: &Section) {
        if self.selecting {
            // keeps the grid aligned
            ui.label("");
            return;
        }
        let track_id = self.track_id;
        let ctx = &mut *self.ctx;
        ui.horizontal(|ui| {
            if ui.small_button("Add Sub").clicked() {
                ctx.ephemeral_state.open_dialog(Dialog::Section(
                    SectionDialog::add_subsection(track_id, section.id()),
                ));
            }
            if ui.small_button("Edit").clicked() {
                ctx.ephemeral_state
                    .open_dialog(Dialog::Section(SectionDialog::edit(track_id, section)));
            }
            if ui.small_button("Delete").clicked() {
                ctx.tracker.add(SectionRemove::new(track_id, section.id()));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use scheduler_lib::{ClockTime, Id, SectionDraft, TimeSlot, Track};

    use super::table_rows;

    fn draft(name: &str, hour: u8, speaker: &str, role: &str) -> SectionDraft {
        SectionDraft {
            name: name.into(),
            time_slot: Some(TimeSlot::new(
                ClockTime::new(hour, 0).unwrap(),
                ClockTime::new(hour + 1, 0).unwrap(),
            )),
            speaker: speaker.into(),
            role: role.into(),
            ..Default::default()
        }
    }

    fn rows(track: &Track) -> Vec<(&str, usize, bool)> {
        table_rows(track.sections())
            .iter()
            .map(|row| (row.section.name.as_str(), row.depth, row.show_people))
            .collect()
    }

    #[test]
    fn test_subsections_keep_their_order() {
        let mut track = Track::new(Id::arbitrary(), "Main hall");
        let parent = track.push_section(draft("Workshop", 8, "Ada", "Host"));
        track.add_subsection(parent, draft("X", 11, "A", "Talk"));
        track.add_subsection(parent, draft("Y", 9, "B", "Talk"));

        assert_eq!(rows(&track), [("Workshop", 0, true), ("X", 1, true), ("Y", 1, true)]);
    }

    #[test]
    fn test_top_level_rows_are_grouped() {
        let mut track = Track::new(Id::arbitrary(), "Main hall");
        let opening = track.push_section(draft("Opening", 9, "Ada", "Chair"));
        track.add_subsection(opening, draft("Welcome", 9, "", ""));
        track.push_section(draft("Talk", 10, "Bo", "Speaker"));
        let closing = track.push_section(draft("Closing", 12, "Ada", "Chair"));
        track.add_subsection(closing, draft("Thanks", 12, "Cy", "Guest"));

        assert_eq!(
            rows(&track),
            [
                ("Opening", 0, true),
                ("Welcome", 1, true),
                ("Closing", 0, false),
                ("Thanks", 1, false),
                ("Talk", 0, true),
            ]
        );
    }
}
