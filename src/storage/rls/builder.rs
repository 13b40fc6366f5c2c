//! Typed policy builder

use super::expressions::PolicyExpression;
use super::types::{Policy, PolicyAction};
use crate::utils::error::{AccessError, Result};

/// Builds a [`Policy`], OR-ing every expression passed to [`using`](Self::using).
#[derive(Debug, Clone)]
pub struct PolicyBuilder {
    table: String,
    name: String,
    action: PolicyAction,
    expression: Option<PolicyExpression>,
    description: String,
}

impl PolicyBuilder {
    pub fn new(table: impl Into<String>, name: impl Into<String>, action: PolicyAction) -> Self {
        Self {
            table: table.into(),
            name: name.into(),
            action,
            expression: None,
            description: String::new(),
        }
    }

    /// Add an alternative to the policy's condition
    pub fn using(mut self, expression: impl Into<PolicyExpression>) -> Self {
        let expression = expression.into();
        self.expression = Some(match self.expression.take() {
            Some(current) => current.or(expression),
            None => expression,
        });
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn build(self) -> Result<Policy> {
        if self.table.trim().is_empty() {
            return Err(AccessError::validation("Policy table cannot be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(AccessError::validation("Policy name cannot be empty"));
        }

        let expression = self
            .expression
            .filter(|expression| !expression.is_empty())
            .ok_or_else(|| {
                AccessError::validation(format!("Policy {} has no expression", self.name))
            })?;

        Ok(Policy {
            table: self.table,
            name: self.name,
            action: self.action,
            expression,
            description: self.description,
        })
    }
}

impl Policy {
    pub fn builder(
        table: impl Into<String>,
        name: impl Into<String>,
        action: PolicyAction,
    ) -> PolicyBuilder {
        PolicyBuilder::new(table, name, action)
    }
}
