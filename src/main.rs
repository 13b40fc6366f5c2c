//! lab-access - RBAC inspection and RLS migration tool
//!
//! Prints role tables, checks permissions and generates Postgres row level
//! security SQL for the lab database.

#![allow(missing_docs)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use lab_access::auth::rbac::{RbacSystem, has_permission};
use lab_access::config::Config;
use lab_access::storage::rls::{self, Policy, PolicyAction};
use lab_access::config::LoggingConfig;
use lab_access::utils::logging::{init_logging, logging_dispatch};
use lab_access::Permission;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::instrument::WithSubscriber;
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "lab-access", version, about = "Lab RBAC and RLS policy tool")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true, env = "LAB_ACCESS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print CREATE POLICY statements
    Policies {
        /// Only policies on this table
        #[arg(long)]
        table: Option<String>,
        /// Only policies for this action (select, insert, update, delete)
        #[arg(long)]
        action: Option<PolicyAction>,
        /// Emit the policy records as JSON instead of SQL
        #[arg(long)]
        json: bool,
    },
    /// Print ALTER TABLE ... ENABLE ROW LEVEL SECURITY for every policy table
    EnableRls,
    /// Print ALTER TABLE ... DISABLE ROW LEVEL SECURITY (development only)
    DisableRls,
    /// Print DROP POLICY IF EXISTS for every policy
    DropPolicies,
    /// Render a full migration according to the generator configuration
    Migration {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List roles and their permissions
    Roles {
        #[arg(long)]
        json: bool,
    },
    /// Check whether a role holds a permission
    Check {
        #[arg(long)]
        role: String,
        #[arg(long)]
        permission: String,
    },
}

async fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };

    Ok(config.with_env_overrides()?)
}

fn select_policies(table: Option<&str>, action: Option<PolicyAction>) -> Vec<&'static Policy> {
    rls::policies()
        .iter()
        .filter(|policy| table.is_none_or(|table| policy.table == table))
        .filter(|policy| action.is_none_or(|action| policy.action == action))
        .collect()
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    // config loading logs through a default subscriber until the real one exists
    let bootstrap = logging_dispatch(&LoggingConfig::default())?;
    let config = load_config(cli.config.as_ref())
        .with_subscriber(bootstrap)
        .await?;
    init_logging(config.logging())?;
    debug!(?config, "Configuration ready");

    match cli.command {
        Command::Policies {
            table,
            action,
            json,
        } => {
            let selected = select_policies(table.as_deref(), action);
            if json {
                println!("{}", serde_json::to_string_pretty(&selected)?);
            } else {
                println!("{}", rls::generate_policies_sql(selected));
            }
        }
        Command::EnableRls => println!("{}", rls::enable_rls_sql()),
        Command::DisableRls => println!("{}", rls::disable_rls_sql()),
        Command::DropPolicies => println!("{}", rls::drop_all_policies_sql()),
        Command::Migration { output } => {
            let sql = rls::render_migration(rls::policies(), config.generator());
            match output {
                Some(path) => {
                    tokio::fs::write(&path, sql)
                        .await
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!("Migration written to {}", path.display());
                }
                None => print!("{}", sql),
            }
        }
        Command::Roles { json } => {
            let rbac = RbacSystem::new(config.rbac())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&rbac.role_matrix())?);
            } else {
                for role in rbac.list_roles() {
                    let mut tokens: Vec<&str> =
                        role.permissions.iter().map(|p| p.as_str()).collect();
                    tokens.sort_unstable();
                    println!(
                        "{} ({}, level {}{})",
                        role.role,
                        role.name,
                        role.level,
                        if role.is_admin { ", admin" } else { "" }
                    );
                    println!("  {}", tokens.join(", "));
                }
            }
        }
        Command::Check { role, permission } => {
            let rbac = RbacSystem::new(config.rbac())?;
            let permission: Permission = permission.parse()?;
            let held = rbac.resolve_role_permissions(&role)?;

            if has_permission(&held, permission) {
                println!("allowed: {} has {}", role, permission);
            } else {
                println!("denied: {} lacks {}", role, permission);
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
