mod classify_project;
mod continue_chat;
mod remote_call;

#[cfg(test)]
pub(crate) mod test_support;

pub use classify_project::*;
pub use continue_chat::*;
