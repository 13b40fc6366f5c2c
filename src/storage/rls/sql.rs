//! SQL generation for RLS policies

use super::catalog::policies;
use super::types::Policy;
use crate::config::GeneratorConfig;
use tracing::debug;

/// Double-quote an identifier, doubling embedded quotes
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Distinct tables in first-appearance order
fn distinct_tables<'a, I>(policies: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a Policy>,
{
    let mut tables: Vec<&'a str> = Vec::new();
    for policy in policies {
        if !tables.contains(&policy.table.as_str()) {
            tables.push(&policy.table);
        }
    }
    tables
}

/// `CREATE POLICY` statement for one policy
pub fn generate_policy_sql(policy: &Policy) -> String {
    format!(
        "CREATE POLICY {} ON {}\nFOR {}\nUSING ({});",
        quote_ident(&policy.name),
        quote_ident(&policy.table),
        policy.action,
        policy.expression
    )
}

pub fn generate_policies_sql<'a, I>(policies: I) -> String
where
    I: IntoIterator<Item = &'a Policy>,
{
    policies
        .into_iter()
        .map(generate_policy_sql)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn enable_rls_sql_for<'a, I>(policies: I) -> String
where
    I: IntoIterator<Item = &'a Policy>,
{
    distinct_tables(policies)
        .into_iter()
        .map(|table| format!("ALTER TABLE {} ENABLE ROW LEVEL SECURITY;", quote_ident(table)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn disable_rls_sql_for<'a, I>(policies: I) -> String
where
    I: IntoIterator<Item = &'a Policy>,
{
    distinct_tables(policies)
        .into_iter()
        .map(|table| format!("ALTER TABLE {} DISABLE ROW LEVEL SECURITY;", quote_ident(table)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn drop_policies_sql<'a, I>(policies: I) -> String
where
    I: IntoIterator<Item = &'a Policy>,
{
    policies
        .into_iter()
        .map(|policy| {
            format!(
                "DROP POLICY IF EXISTS {} ON {};",
                quote_ident(&policy.name),
                quote_ident(&policy.table)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every catalog policy, separated by blank lines
pub fn generate_all_policies_sql() -> String {
    generate_policies_sql(policies())
}

pub fn enable_rls_sql() -> String {
    enable_rls_sql_for(policies())
}

/// Development only
pub fn disable_rls_sql() -> String {
    disable_rls_sql_for(policies())
}

pub fn drop_all_policies_sql() -> String {
    drop_policies_sql(policies())
}

/// Full migration script: drop, enable, create, each section optional per `config`.
///
/// Policies on tables outside `config.tables` are skipped.
pub fn render_migration<'a, I>(policies: I, config: &GeneratorConfig) -> String
where
    I: IntoIterator<Item = &'a Policy>,
{
    let selected: Vec<&Policy> = policies
        .into_iter()
        .filter(|policy| config.includes_table(&policy.table))
        .collect();

    debug!(
        policies = selected.len(),
        include_drop = config.include_drop,
        include_enable_rls = config.include_enable_rls,
        "Rendering RLS migration"
    );

    let mut sections = vec![format!(
        "-- Row level security migration generated by {} {}",
        crate::NAME,
        crate::VERSION
    )];

    if selected.is_empty() {
        sections.push("-- No policies selected".to_string());
        return sections.join("\n\n") + "\n";
    }

    if config.include_drop {
        sections.push(format!(
            "-- Drop existing policies\n{}",
            drop_policies_sql(selected.iter().copied())
        ));
    }

    if config.include_enable_rls {
        sections.push(format!(
            "-- Enable row level security\n{}",
            enable_rls_sql_for(selected.iter().copied())
        ));
    }

    sections.push(format!(
        "-- Policies\n{}",
        generate_policies_sql(selected.iter().copied())
    ));

    sections.join("\n\n") + "\n"
}
