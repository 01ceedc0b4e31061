use scheduler_lib::{HeaderKind, HeaderSettings, Id, TableHeader};
use smallvec::SmallVec;

use super::DialogStatus;
use crate::{Context, widget::EditableLabel};

/// Edits a copy of the table headers. Nothing changes in the table until Save.
#[derive(Debug)]
pub struct HeaderDialog {
    headers: HeaderSettings,
    new_label: String,
    new_kind: HeaderKind,
}

impl HeaderDialog {
    pub fn new(headers: &HeaderSettings) -> Self {
        Self {
            headers: headers.clone(),
            new_label: String::new(),
            new_kind: HeaderKind::Name,
        }
    }

    pub fn ui(&mut self, ctx: &mut Context, ui: &mut egui::Ui) -> DialogStatus {
        let rows: SmallVec<[(Id<TableHeader>, String, HeaderKind, bool); 8]> = self
            .headers
            .headers()
            .iter()
            .map(|h| (h.id, h.label.clone(), h.kind, h.visible))
            .collect();

        egui::Grid::new("header_dialog_rows")
            .num_columns(3)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                for (id, mut label, kind, mut visible) in rows {
                    if ui.checkbox(&mut visible, "").changed() {
                        self.headers.toggle_visibility(id);
                    }
                    if ui.add(EditableLabel::new(&mut label).id_salt(id)).changed()
                        && !label.trim().is_empty()
                    {
                        self.headers.rename(id, label.trim());
                    }
                    ui.weak(kind.label());
                    ui.end_row();
                }
            });

        ui.separator();
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.new_label)
                    .id(new_label_id())
                    .hint_text("New header")
                    .desired_width(140.0),
            );
            egui::ComboBox::from_id_salt("new_header_kind")
                .selected_text(self.new_kind.label())
                .show_ui(ui, |ui| {
                    for kind in HeaderKind::ADDABLE {
                        ui.selectable_value(&mut self.new_kind, kind, kind.label());
                    }
                });
            if ui
                .add_enabled(!self.new_label.trim().is_empty(), egui::Button::new("Add"))
                .clicked()
            {
                self.add_header();
            }
        });

        match super::buttons(ui, "Save") {
            (true, _) => self.save(ctx),
            (_, true) => DialogStatus::Closed,
            _ => DialogStatus::Open,
        }
    }

    pub fn add_header(&mut self) -> Option<Id<TableHeader>> {
        let id = self.headers.add(&self.new_label, self.new_kind)?;
        self.new_label.clear();
        Some(id)
    }

    pub fn save(&mut self, ctx: &mut Context) -> DialogStatus {
        ctx.ui_state.headers = core::mem::take(&mut self.headers);
        DialogStatus::Closed
    }
}

fn new_label_id() -> egui::Id {
    egui::Id::new("header_dialog_new_label")
}
