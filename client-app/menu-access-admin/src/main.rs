use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};

use menu_access_core::services::{MenuEventBus, PermissionMatrixEditor, ReorderCoordinator};
use menu_access_infrastructure::{BackendClient, HttpRepositories};
use menu_access_shared::config::AppConfig;
use menu_access_shared::AppError;

mod commands;
mod render;

#[derive(Parser, Debug)]
#[command(
    name = "menu-access-admin",
    version,
    about = "Menu Access - level permission matrix administration"
)]
struct Cli {
    /// Level to load before running the command
    #[arg(long, short, global = true, default_value_t = 1)]
    level: i64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the permission matrix of a level
    Matrix {
        /// Case-insensitive filter on menu name or path
        #[arg(long)]
        search: Option<String>,
    },

    /// Change grants on one menu and save the level template
    Grant {
        #[arg(long)]
        menu: i64,

        /// read, create, update or delete. Omit to change all four.
        #[arg(long)]
        action: Option<String>,

        /// Remove the grant instead of adding it
        #[arg(long, default_value_t = false)]
        revoke: bool,
    },

    /// Show or hide a menu in the sidebar for every level
    Sidebar {
        #[arg(long)]
        menu: i64,

        #[arg(long, action = clap::ArgAction::Set)]
        visible: bool,
    },

    /// Drop one menu group onto another (ids like `box-6`)
    ReorderGroups {
        #[arg(long)]
        active: String,

        #[arg(long)]
        over: String,
    },

    /// Drop one row onto another inside a group
    ReorderRows {
        /// Root menu id of the group
        #[arg(long)]
        group: i64,

        #[arg(long)]
        active: String,

        #[arg(long)]
        over: String,
    },

    /// Print the sidebar navigation a level would see
    Navigation {
        /// Emit JSON instead of an indented tree
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

/// Services wired against the REST backend.
pub struct Services {
    pub editor: PermissionMatrixEditor,
    pub coordinator: ReorderCoordinator,
    pub events: MenuEventBus,
}

fn build_services(config: &AppConfig) -> Result<Services> {
    let client = BackendClient::new(&config.backend).context("Failed to create backend client")?;
    info!("Using menu backend at {}", client.base_url());

    let repos = HttpRepositories::new(client);
    let events = MenuEventBus::new(config.matrix.event_capacity);
    let editor = PermissionMatrixEditor::new(
        repos.catalog.clone(),
        repos.templates.clone(),
        repos.visibility.clone(),
        events.clone(),
    );
    let coordinator = ReorderCoordinator::new(
        editor.clone(),
        repos.orders.clone(),
        events.clone(),
        config.matrix.root_order_stride,
    );

    Ok(Services {
        editor,
        coordinator,
        events,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()
        .map_err(AppError::from)
        .context("Failed to load configuration")?;
    let _guard = menu_access_shared::telemetry::init_telemetry(&config.telemetry)?;

    let services = build_services(&config)?;
    if let Err(e) = commands::run(&services, cli.level, cli.command).await {
        error!("Command failed: {:#}", e);
        return Err(e);
    }

    Ok(())
}
