/// A label that turns into a single-line text edit when double-clicked.
///
/// Enter or clicking away commits the edit, Escape throws it away. The response is marked as
/// changed on the frame a different string is committed.
pub struct EditableLabel<'a> {
    string: &'a mut String,

    id_salt: Option<egui::Id>,
    strong: bool,
}

impl<'a> EditableLabel<'a> {
    pub fn new(string: &'a mut String) -> Self {
        Self {
            string,
            id_salt: None,
            strong: false,
        }
    }

    pub fn id_salt(mut self, id_salt: impl std::hash::Hash) -> Self {
        self.id_salt = Some(egui::Id::new(id_salt));
        self
    }

    pub fn strong(mut self) -> Self {
        self.strong = true;
        self
    }
}

impl egui::Widget for EditableLabel<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let Self {
            string,
            id_salt,
            strong,
        } = self;

        let id = match id_salt {
            Some(id_salt) => ui.make_persistent_id(id_salt),
            None => ui.next_auto_id(),
        };

        let mut response;

        let state = match EditState::load(ui.ctx(), id).unwrap_or_default() {
            EditState::Idle => {
                let mut text = egui::RichText::new(string.as_str());
                if strong {
                    text = text.strong();
                }
                response = ui
                    .add(egui::Label::new(text).sense(egui::Sense::click()))
                    .on_hover_text("Double-click to rename");

                if response.double_clicked() {
                    let mut text_edit_state = egui::text_edit::TextEditState::default();
                    text_edit_state
                        .cursor
                        .set_char_range(Some(egui::text::CCursorRange::two(
                            egui::text::CCursor::new(0),
                            egui::text::CCursor::new(string.chars().count()),
                        )));
                    text_edit_state.store(ui.ctx(), id);

                    EditState::Editing(string.clone())
                } else {
                    EditState::Idle
                }
            }
            EditState::Editing(mut draft) => {
                response = ui.add(egui::TextEdit::singleline(&mut draft).id(id));

                if response.lost_focus() {
                    if !ui.input(|i| i.key_pressed(egui::Key::Escape)) && draft != *string {
                        *string = draft;
                        response.mark_changed();
                    }
                    EditState::Idle
                } else {
                    if !response.has_focus() {
                        response.request_focus();
                    }
                    EditState::Editing(draft)
                }
            }
        };

        state.store(ui.ctx(), id);

        response
    }
}

#[derive(Clone, Default)]
enum EditState {
    #[default]
    Idle,
    Editing(String),
}

impl EditState {
    fn load(ctx: &egui::Context, id: egui::Id) -> Option<Self> {
        ctx.data(|d| d.get_temp(id))
    }

    fn store(self, ctx: &egui::Context, id: egui::Id) {
        ctx.data_mut(|d| d.insert_temp(id, self))
    }
}
