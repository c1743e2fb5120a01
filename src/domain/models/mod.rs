mod chat_turn;
mod model_request;
mod template_bundle;

pub use chat_turn::*;
pub use model_request::*;
pub use template_bundle::*;
