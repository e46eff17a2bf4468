use std::fmt;

use thiserror::Error;

use vyos_core::ConnectionField;

use crate::resolve::env_var;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// No tier supplied a value.
    Missing,
    /// The explicit value is not known yet.
    Deferred,
}

/// One connection field that blocked resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: ConnectionField,
    pub kind: IssueKind,
}

impl FieldIssue {
    pub fn missing(field: ConnectionField) -> Self {
        Self {
            field,
            kind: IssueKind::Missing,
        }
    }

    pub fn deferred(field: ConnectionField) -> Self {
        Self {
            field,
            kind: IssueKind::Deferred,
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IssueKind::Missing => write!(
                f,
                "{} is not set (configure it or export {})",
                self.field,
                env_var(self.field)
            ),
            IssueKind::Deferred => write!(
                f,
                "{} is not known yet; set it statically or use {}",
                self.field,
                env_var(self.field)
            ),
        }
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot resolve connection settings: {}", join_issues(issues))]
    Unresolved { issues: Vec<FieldIssue> },

    #[error("profile '{name}' not found in configuration")]
    ProfileNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl ConfigError {
    /// The blocking fields of an `Unresolved` error; empty otherwise.
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            Self::Unresolved { issues } => issues,
            Self::ProfileNotFound { .. } | Self::Figment(_) => &[],
        }
    }
}
