//! Command-line interface
//!
//! `serve` runs the HTTP server; the other commands work on the database
//! directly and are meant for bootstrapping a tenant.

use clap::{Parser, Subcommand};
use shared::models::{Role, UserCreate};

use crate::auth::password;
use crate::core::{Config, Result, Server, ServerError, ServerState};
use crate::services::{seed, user};

#[derive(Parser, Debug)]
#[command(
    name = "timesheet-server",
    version = env!("CARGO_PKG_VERSION"),
    about = "Multi-tenant timesheet backend",
    long_about = None
)]
pub struct Cli {
    /// Override DATABASE_URL
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Manage login users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Sample data for local development
    Sample {
        #[command(subcommand)]
        action: SampleAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// Create a user inside an office
    Create {
        office_id: i64,
        name: String,
        password: String,
        /// admin | manager | employee
        #[arg(value_parser = parse_role)]
        role: Role,
        /// Employee the user is linked to (required for manager/employee)
        #[arg(long = "employee")]
        employee: Option<i64>,
    },

    /// Print the argon2 hash of a password
    Password { plain: String },
}

#[derive(Subcommand, Debug)]
pub enum SampleAction {
    /// Seed one office with a workplace, employees, users and entries
    Create,
}

fn parse_role(s: &str) -> std::result::Result<Role, String> {
    s.parse()
}

/// Execute the parsed command line
pub async fn run(cli: Cli, mut config: Config) -> Result<()> {
    if let Some(db) = cli.db {
        config.database_url = db;
    }

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let state = ServerState::initialize(&config).await?;
            Server::with_state(config, state).run().await
        }
        Commands::User {
            action: UserAction::Password { plain },
        } => {
            let hashed = password::hash_password(&plain)
                .map_err(|e| ServerError::Internal(anyhow::anyhow!(e)))?;
            println!("{hashed}");
            Ok(())
        }
        Commands::User {
            action:
                UserAction::Create {
                    office_id,
                    name,
                    password,
                    role,
                    employee,
                },
        } => {
            let state = ServerState::initialize(&config).await?;
            let mut tx = state.pool.begin().await.map_err(anyhow::Error::from)?;
            let created = user::insert_user(
                &mut tx,
                office_id,
                &UserCreate {
                    name,
                    password,
                    role,
                    employee_id: employee,
                },
            )
            .await?;
            tx.commit().await.map_err(anyhow::Error::from)?;
            println!(
                "user {} created in office {} ({})",
                created.id,
                created.office_id,
                created.role.as_str()
            );
            Ok(())
        }
        Commands::Sample {
            action: SampleAction::Create,
        } => {
            let state = ServerState::initialize(&config).await?;
            let sample = seed::create_sample(&state.pool).await?;
            println!(
                "office {} / workplace {}: admin user {}, {} employees, {} entries (password: {})",
                sample.office.id,
                sample.workplace.id,
                sample.admin.id,
                sample.employees.len(),
                sample.entries,
                seed::SAMPLE_PASSWORD
            );
            for e in &sample.employees {
                println!("  employee {} -> user {}", e.employee.id, e.user.id);
            }
            Ok(())
        }
    }
}
