use egui_dock::{DockArea, DockState, NodeIndex};
use scheduler_lib::{Id, State};
use smallvec::SmallVec;

use crate::{
    AppConfig, Context, EphemeralState, Screen, UiState,
    context::{DockEvent, Tabs},
    dialog,
    perf::PerfReporter,
    tab::{section::SectionTab, track::TrackTab},
};

pub struct SchedulerApp {
    state: State,
    ui_state: UiState,
    ephemeral_state: EphemeralState,
    tabs: Tabs,
    perf: PerfReporter,

    dock_state: DockState<Id<Tab>>,
}

impl SchedulerApp {
    pub fn new(_: &eframe::CreationContext, config: AppConfig) -> Self {
        let mut state = State::new();
        let track_id = state.add_track("");

        let mut ui_state = UiState::new();
        ui_state.selected_track = Some(track_id);
        let mut ephemeral_state = EphemeralState::new();
        let mut tabs = Tabs::default();
        let perf = PerfReporter::new(config.perf);

        let (track_tab, section_tab) = {
            let mut ctx = Context::new(
                &state,
                &mut ui_state,
                &mut ephemeral_state,
                &mut tabs,
                &perf,
            );
            let track_tab = ctx.create_tab::<TrackTab>();
            let section_tab = ctx.create_tab::<SectionTab>();
            (track_tab, section_tab)
        };

        let mut dock_state = DockState::new(vec![section_tab]);
        dock_state
            .main_surface_mut()
            .split_left(NodeIndex::root(), 0.3, vec![track_tab]);

        Self {
            state,
            ui_state,
            ephemeral_state,
            tabs,
            perf,

            dock_state,
        }
    }
}

impl eframe::App for SchedulerApp {
    fn update(&mut self, egui_ctx: &egui::Context, _egui_frame: &mut eframe::Frame) {
        let _measurement = self.perf.measure("SchedulerApp");

        let mut ctx = Context::new(
            &self.state,
            &mut self.ui_state,
            &mut self.ephemeral_state,
            &mut self.tabs,
            &self.perf,
        );

        egui::TopBottomPanel::top("top_panel").show(egui_ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        egui_ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Window", |ui| {
                    if ui.button("Tracks").clicked() {
                        ctx.open_tab::<TrackTab>();
                        ui.close_menu();
                    }
                    if ui.button("Sections").clicked() {
                        ctx.open_tab::<SectionTab>();
                        ui.close_menu();
                    }
                });
                #[cfg(debug_assertions)]
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::warn_if_debug_build(ui);
                });
            });
        });
        let deleted_tabs = egui::CentralPanel::default()
            .show(egui_ctx, |ui| {
                let mut tab_viewer = SchedulerTabViewer {
                    ctx: &mut ctx,
                    deleted_tabs: SmallVec::new(),
                };
                DockArea::new(&mut self.dock_state)
                    .style(egui_dock::Style::from_egui(ui.style().as_ref()))
                    .show_inside(ui, &mut tab_viewer);
                tab_viewer.deleted_tabs
            })
            .inner;

        dialog::show(&mut ctx, egui_ctx);

        let result = ctx.finish();

        for tab in deleted_tabs {
            tracing::debug!("closing tab {tab:?}");
            self.tabs.remove(tab);
        }
        for event in result.dock_events {
            match event {
                DockEvent::AddTabToDockState(id) => self.dock_state.push_to_focused_leaf(id),
                DockEvent::FocusTab(id) => {
                    if let Some(location) = self.dock_state.find_tab(&id) {
                        self.dock_state.set_active_tab(location);
                    }
                }
            }
        }

        result.tracker.execute(&mut self.state);
        self.ui_state.on_frame_end(&self.state);
        self.ephemeral_state.on_frame_end(&self.ui_state);
    }
}

pub type Tab = Box<dyn Screen>;

pub struct SchedulerTabViewer<'a, 'b> {
    ctx: &'a mut Context<'b>,
    deleted_tabs: SmallVec<[Id<Tab>; 2]>,
}

impl egui_dock::TabViewer for SchedulerTabViewer<'_, '_> {
    type Tab = Id<Tab>;

    fn title(&mut self, id: &mut Self::Tab) -> egui::WidgetText {
        match self.ctx.tabs.map.get(id) {
            Some(tab) => tab.title(),
            None => "(closed)".into(),
        }
    }

    fn id(&mut self, id: &mut Self::Tab) -> egui::Id {
        (*id).into()
    }

    fn ui(&mut self, ui: &mut egui::Ui, &mut id: &mut Self::Tab) {
        let Some(mut tab) = self.ctx.tabs.map.remove(&id) else {
            tracing::warn!("dock has tab {id:?} but the tab map doesn't");
            return;
        };
        if let Err(err) = tab.update(self.ctx, ui) {
            let title = tab.title();
            tracing::error!("failed to draw tab {:?}: {err:#}", title.text());
            ui.colored_label(
                ui.visuals().error_fg_color,
                "Something went wrong while drawing this tab.",
            );
        }
        self.ctx.tabs.map.insert(id, tab);
    }

    fn on_close(&mut self, id: &mut Self::Tab) -> bool {
        self.deleted_tabs.push(*id);
        true
    }
}
