//! Row level security policies
//!
//! A static catalog of Postgres RLS policies for the lab database and the SQL
//! text generated from it. Policies are never evaluated here; the database
//! does that once the generated migration is applied.

mod builder;
mod catalog;
mod expressions;
mod sql;
mod types;

pub use builder::PolicyBuilder;
pub use catalog::{
    get_policies_by_action, get_policies_by_table, is_policy_table, policies, policy_tables,
};
pub use expressions::PolicyExpression;
pub use sql::{
    disable_rls_sql, disable_rls_sql_for, drop_all_policies_sql, drop_policies_sql,
    enable_rls_sql, enable_rls_sql_for, generate_all_policies_sql, generate_policies_sql,
    generate_policy_sql, quote_ident, render_migration,
};
pub use types::{Policy, PolicyAction};
