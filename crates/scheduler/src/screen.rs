use anyhow::Result;
use scheduler_lib::Id;

use crate::{Context, app::Tab};

pub trait Screen {
    fn create(ctx: &mut Context) -> Self
    where
        Self: Sized;

    fn id(&self) -> Id<Tab>;

    fn title(&self) -> egui::WidgetText;

    /// An error replaces the tab's contents with a fallback message for this frame.
    fn update(&mut self, ctx: &mut Context, ui: &mut egui::Ui) -> Result<()>;
}
