mod prompt;
mod store;

pub(crate) use prompt::{Prompter, TerminalPrompter};
pub(crate) use store::SessionStore;
