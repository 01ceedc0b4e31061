use scheduler_lib::State;

use crate::StateCommand;

#[derive(Default)]
pub struct StateTracker(Vec<Box<dyn StateCommand>>);

impl StateTracker {
    pub fn new() -> Self {
        Self(Vec::new())
    }
    pub fn add(&mut self, command: impl StateCommand) {
        self.0.push(Box::new(command));
    }

    /// Runs every queued command in the order it was added.
    pub fn execute(self, state: &mut State) {
        let count = self.0.len();
        for mut command in self.0 {
            command.execute(state);
        }
        if count > 0 {
            tracing::debug!("executed {count} state command(s)");
        }
    }
}

impl std::fmt::Debug for StateTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("StateTracker").field(&self.0.len()).finish()
    }
}
