use crate::{Id, IdMap, Track};

/// The whole document: every track, plus the order they're shown in.
#[derive(Debug, Default, Clone)]
pub struct State {
    pub tracks: IdMap<Track>,

    // kept in sync with `tracks`
    track_list: Vec<Id<Track>>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a track. An empty name becomes `Track N`.
    pub fn add_track(&mut self, name: &str) -> Id<Track> {
        let track = self.new_track(Id::arbitrary(), name);
        let id = track.id();
        self.insert_track(track);
        id
    }

    /// Builds (but doesn't insert) the track `add_track` would create.
    pub fn new_track(&self, id: Id<Track>, name: &str) -> Track {
        let name = name.trim();
        if name.is_empty() {
            Track::new(id, format!("Track {}", self.track_list.len() + 1))
        } else {
            Track::new(id, name)
        }
    }

    /// Panics if the track's id is already taken.
    pub fn insert_track(&mut self, track: Track) {
        let id = track.id();
        self.tracks.insert(id, track);
        self.track_list.push(id);
    }

    pub fn track(&self, id: Id<Track>) -> Option<&Track> {
        self.tracks.get(id)
    }
    pub fn track_mut(&mut self, id: Id<Track>) -> Option<&mut Track> {
        self.tracks.get_mut(id)
    }

    pub fn track_list(&self) -> &[Id<Track>] {
        &self.track_list
    }

    /// Tracks in display order.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.track_list.iter().map(|&id| self.tracks.force_get(id))
    }
}
