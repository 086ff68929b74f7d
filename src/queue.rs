/// Ordered list of finished subcommand strings awaiting execution.
///
/// Insertion order is execution order; entries are never reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandQueue {
    commands: Vec<String>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: String) {
        self.commands.push(command);
    }

    /// Remove and return every queued command, leaving the queue empty.
    pub fn drain_all(&mut self) -> Vec<String> {
        std::mem::take(&mut self.commands)
    }

    /// Remove the most recent entry. Used to re-wrap a just-built subcommand.
    pub(crate) fn pop(&mut self) -> Option<String> {
        self.commands.pop()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.commands
    }
}
