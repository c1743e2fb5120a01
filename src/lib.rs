pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{ClassifyProjectUseCase, ContinueChatUseCase, ModelClient};

pub use cli::Commands;

pub use connector::{
    build_router, serve, AnthropicClient, AnthropicConfig, ApiError, Container,
};

pub use domain::{
    ChatTurn, ContentBlock, DomainError, ModelRequest, ModelResponse, ProjectKind, Role,
    TemplateBundle,
};
