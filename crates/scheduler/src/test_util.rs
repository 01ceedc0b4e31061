use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use scheduler_lib::State;
use tracing_subscriber::{
    Layer,
    layer::{self, SubscriberExt},
};

use crate::{
    Context, EphemeralState, UiState,
    context::Tabs,
    perf::{PerfMode, PerfReporter},
};

/// Everything a [`Context`] borrows, owned by the test.
pub struct Harness {
    pub state: State,
    pub ui_state: UiState,
    pub ephemeral_state: EphemeralState,
    pub tabs: Tabs,
    pub perf: PerfReporter,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            state: State::new(),
            ui_state: UiState::new(),
            ephemeral_state: EphemeralState::new(),
            tabs: Tabs::default(),
            perf: PerfReporter::new(PerfMode::Off),
        }
    }

    /// Runs `f` with a fresh context, then executes whatever it queued.
    pub fn frame<R>(&mut self, f: impl FnOnce(&mut Context) -> R) -> R {
        let mut ctx = Context::new(
            &self.state,
            &mut self.ui_state,
            &mut self.ephemeral_state,
            &mut self.tabs,
            &self.perf,
        );
        let ret = f(&mut ctx);
        ctx.finish().tracker.execute(&mut self.state);
        self.ui_state.on_frame_end(&self.state);
        self.ephemeral_state.on_frame_end(&self.ui_state);
        ret
    }

    /// Like [`Harness::frame`], but inside a full egui pass over an 800x600 screen receiving
    /// `events`. egui may run more than one pass per call.
    pub fn egui_frame(
        &mut self,
        egui_ctx: &egui::Context,
        events: Vec<egui::Event>,
        mut f: impl FnMut(&mut Context, &egui::Context),
    ) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(800.0, 600.0),
            )),
            events,
            ..Default::default()
        };
        let _ = egui_ctx.run(input, |egui_ctx| self.frame(|ctx| f(ctx, egui_ctx)));
    }
}

pub fn key_press(key: egui::Key) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::NONE,
    }
}

struct LevelCounter {
    level: tracing::Level,
    count: Arc<AtomicUsize>,
}

impl<S: tracing::Subscriber> Layer<S> for LevelCounter {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: layer::Context<'_, S>) {
        if *event.metadata().level() == self.level {
            self.count.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// Runs `f` and counts the events it logged at exactly `level`.
pub fn count_events<R>(level: tracing::Level, f: impl FnOnce() -> R) -> (R, usize) {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(LevelCounter {
        level,
        count: count.clone(),
    });
    let ret = tracing::subscriber::with_default(subscriber, f);
    (ret, count.load(Ordering::Relaxed))
}
