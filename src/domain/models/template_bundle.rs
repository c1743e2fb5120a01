use serde::Serialize;

use crate::domain::prompts::{
    BASE_PROMPT, NODE_BASE_PROMPT, NODE_PROJECT_PROMPT, REACT_BASE_PROMPT, REACT_PROJECT_PROMPT,
};
use crate::domain::DomainError;

/// The project kinds the classifier may answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectKind {
    React,
    Node,
}

impl ProjectKind {
    /// Parses a raw model answer. Only the exact strings `"react"` and `"node"`
    /// are accepted; anything else is a routing rejection.
    pub fn from_answer(answer: &str) -> Result<Self, DomainError> {
        match answer {
            "react" => Ok(ProjectKind::React),
            "node" => Ok(ProjectKind::Node),
            other => Err(DomainError::unrecognized(other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectKind::React => "react",
            ProjectKind::Node => "node",
        }
    }

    pub fn bundle(&self) -> TemplateBundle {
        match self {
            ProjectKind::React => TemplateBundle {
                prompts: vec![BASE_PROMPT.clone(), REACT_PROJECT_PROMPT.clone()],
                ui_prompts: vec![REACT_BASE_PROMPT.clone()],
            },
            ProjectKind::Node => TemplateBundle {
                prompts: vec![NODE_PROJECT_PROMPT.clone()],
                ui_prompts: vec![NODE_BASE_PROMPT.clone()],
            },
        }
    }
}

impl std::fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Setup and UI prompts handed back to the scaffolding client.
///
/// Only the two values produced by [`ProjectKind::bundle`] exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateBundle {
    prompts: Vec<String>,
    #[serde(rename = "uiPrompts")]
    ui_prompts: Vec<String>,
}

impl TemplateBundle {
    /// Resolves a classification answer to its bundle.
    pub fn resolve(answer: &str) -> Result<Self, DomainError> {
        ProjectKind::from_answer(answer).map(|kind| kind.bundle())
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn ui_prompts(&self) -> &[String] {
        &self.ui_prompts
    }
}
