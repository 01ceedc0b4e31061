//! Command system for the scheduler. Separate from `scheduler-lib` because it's not strictly needed to store state.
//!
//! The UI never mutates a [`State`] directly. It queues commands in a [`StateTracker`] while drawing
//! a frame, and the app executes them once the frame is done.

use scheduler_lib::State;

pub mod merge;
pub mod section;
pub mod track;
mod tracker;
pub use tracker::StateTracker;

pub trait StateCommand: 'static + Send {
    fn execute(&mut self, state: &mut State);
}

// convenience impl for one-off commands
impl<F: FnMut(&mut State) + Send + 'static> StateCommand for F {
    fn execute(&mut self, state: &mut State) {
        self(state)
    }
}
