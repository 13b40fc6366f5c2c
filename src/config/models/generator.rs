//! RLS migration generator configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Controls which sections `render_migration` emits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Emit `DROP POLICY IF EXISTS` statements before the policies
    #[serde(default = "default_true")]
    pub include_drop: bool,
    /// Emit `ALTER TABLE ... ENABLE ROW LEVEL SECURITY`
    #[serde(default = "default_true")]
    pub include_enable_rls: bool,
    /// Restrict output to these tables; empty means all
    #[serde(default)]
    pub tables: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            include_drop: true,
            include_enable_rls: true,
            tables: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    pub fn merge(mut self, other: Self) -> Self {
        if !other.include_drop {
            self.include_drop = other.include_drop;
        }
        if !other.include_enable_rls {
            self.include_enable_rls = other.include_enable_rls;
        }
        if !other.tables.is_empty() {
            self.tables = other.tables;
        }
        self
    }

    /// Whether `table` passes the filter
    pub fn includes_table(&self, table: &str) -> bool {
        self.tables.is_empty() || self.tables.iter().any(|t| t == table)
    }
}
