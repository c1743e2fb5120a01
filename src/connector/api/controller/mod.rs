pub mod chat_controller;
pub mod template_controller;

pub use chat_controller::{ChatController, ChatRequest, ChatResponse};
pub use template_controller::{TemplateController, TemplateRequest};
