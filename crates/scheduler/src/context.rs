use std::any::TypeId;

use ahash::HashMap;
use scheduler_command::StateTracker;
use scheduler_lib::{Id, State};

use crate::{EphemeralState, Screen, UiState, app::Tab, perf::PerfReporter};

pub struct Context<'a> {
    // State: the document itself; tracks and their sections.
    // This can't be mutated directly, but instead done through commands queued in `tracker`.
    pub state: &'a State,

    // Ui State: which track is open, table headers. Mutated directly.
    pub ui_state: &'a mut UiState,

    // Ephemeral State: merge selection and open dialogs. Mutated directly.
    pub ephemeral_state: &'a mut EphemeralState,

    pub tabs: &'a mut Tabs,

    pub perf: &'a PerfReporter,

    // Commands that mutate state, executed once the frame is drawn.
    pub tracker: StateTracker,

    dock_events: Vec<DockEvent>,
}

impl<'a> Context<'a> {
    pub fn new(
        state: &'a State,
        ui_state: &'a mut UiState,
        ephemeral_state: &'a mut EphemeralState,
        tabs: &'a mut Tabs,
        perf: &'a PerfReporter,
    ) -> Self {
        Self {
            state,
            ui_state,
            ephemeral_state,
            tabs,
            perf,

            tracker: StateTracker::new(),
            dock_events: Vec::new(),
        }
    }

    pub fn create_tab<T: Screen + 'static>(&mut self) -> Id<Tab> {
        let tab = T::create(self);
        let id = tab.id();

        self.dock_events.push(DockEvent::AddTabToDockState(id));
        self.tabs.insert(id, TypeId::of::<T>(), Box::new(tab));
        id
    }

    /// Focuses the open tab of this type, or creates one if there isn't any.
    pub fn open_tab<T: Screen + 'static>(&mut self) -> Id<Tab> {
        match self.tabs.find::<T>() {
            Some(id) => {
                self.dock_events.push(DockEvent::FocusTab(id));
                id
            }
            None => self.create_tab::<T>(),
        }
    }

    pub fn finish(self) -> ContextResult {
        ContextResult {
            dock_events: self.dock_events,
            tracker: self.tracker,
        }
    }
}

#[derive(Default)]
pub struct Tabs {
    pub map: HashMap<Id<Tab>, Tab>,
    kinds: HashMap<Id<Tab>, TypeId>,
}

impl Tabs {
    fn insert(&mut self, id: Id<Tab>, kind: TypeId, tab: Tab) {
        self.map.insert(id, tab);
        self.kinds.insert(id, kind);
    }

    pub fn remove(&mut self, id: Id<Tab>) -> Option<Tab> {
        self.kinds.remove(&id);
        self.map.remove(&id)
    }

    pub fn find<T: Screen + 'static>(&self) -> Option<Id<Tab>> {
        let kind = TypeId::of::<T>();
        self.kinds
            .iter()
            .find_map(|(&id, &k)| (k == kind).then_some(id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockEvent {
    AddTabToDockState(Id<Tab>),
    FocusTab(Id<Tab>),
}

pub struct ContextResult {
    pub dock_events: Vec<DockEvent>,
    pub tracker: StateTracker,
}
