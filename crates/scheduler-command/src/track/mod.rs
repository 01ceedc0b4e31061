use scheduler_lib::{Id, Track};

use crate::StateCommand;

#[derive(Clone, Debug)]
pub struct TrackAdd {
    id: Id<Track>,
    name: String,
}

impl TrackAdd {
    /// The id is picked now so the caller can refer to the track before the command runs.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Id::arbitrary(),
            name: name.into(),
        }
    }

    pub const fn id(&self) -> Id<Track> {
        self.id
    }
}

impl StateCommand for TrackAdd {
    fn execute(&mut self, state: &mut scheduler_lib::State) {
        if state.track(self.id).is_some() {
            tracing::warn!("track {:?} added twice", self.id);
            return;
        }
        let track = state.new_track(self.id, &self.name);
        state.insert_track(track);
    }
}

pub struct TrackRename {
    id: Id<Track>,
    name: String,
}

impl TrackRename {
    pub fn new(id: Id<Track>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl StateCommand for TrackRename {
    fn execute(&mut self, state: &mut scheduler_lib::State) {
        match state.track_mut(self.id) {
            Some(track) => track.name.clone_from(&self.name),
            None => tracing::warn!("tried to rename nonexistent track {:?}", self.id),
        }
    }
}
