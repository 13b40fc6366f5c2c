//! Policy types

use super::expressions::PolicyExpression;
use crate::utils::error::{AccessError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Statement a policy applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PolicyAction {
    Select,
    Insert,
    Update,
    Delete,
}

impl PolicyAction {
    pub const ALL: &'static [PolicyAction] = &[
        PolicyAction::Select,
        PolicyAction::Insert,
        PolicyAction::Update,
        PolicyAction::Delete,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PolicyAction::Select => "SELECT",
            PolicyAction::Insert => "INSERT",
            PolicyAction::Update => "UPDATE",
            PolicyAction::Delete => "DELETE",
        }
    }
}

impl fmt::Display for PolicyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyAction {
    type Err = AccessError;

    /// Case-insensitive
    fn from_str(s: &str) -> Result<Self> {
        PolicyAction::ALL
            .iter()
            .copied()
            .find(|action| action.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AccessError::parsing(format!("Unknown policy action: {}", s)))
    }
}

/// A row-level security policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub table: String,
    pub name: String,
    pub action: PolicyAction,
    /// Trusted SQL boolean expression, emitted verbatim
    pub expression: PolicyExpression,
    pub description: String,
}

impl Policy {
    pub fn new(
        table: impl Into<String>,
        name: impl Into<String>,
        action: PolicyAction,
        expression: impl Into<PolicyExpression>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            table: table.into(),
            name: name.into(),
            action,
            expression: expression.into(),
            description: description.into(),
        }
    }
}
