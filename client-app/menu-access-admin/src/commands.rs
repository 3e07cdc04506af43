//! Subcommand handlers

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use menu_access_core::services::{
    PermissionMatrixEditor, Settlement, SidebarNavigation,
};
use menu_access_core::{DragEnd, Level, PermissionAction};

use crate::{render, Command, Services};

pub async fn run(services: &Services, level: i64, command: Command) -> Result<()> {
    let mut events = services.events.subscribe();

    match command {
        Command::Navigation { json } => {
            let navigation = SidebarNavigation::new(services.editor.resolver().clone(), Level::new(level)?);
            let tree = navigation.tree().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tree)?);
            } else {
                print!("{}", render::navigation(&tree));
            }
        }
        Command::Matrix { search } => {
            let editor = load(&services.editor, level).await?;
            if let Some(query) = search {
                editor.set_search(query);
            }
            print!("{}", render::matrix(&editor.template_name(), &editor.groups()));
        }
        Command::Grant { menu, action, revoke } => {
            let editor = load(&services.editor, level).await?;
            match action {
                Some(action) => editor.toggle_action(menu, action.parse::<PermissionAction>()?, !revoke)?,
                None => editor.toggle_all(menu, !revoke)?,
            }

            let selected = editor.selected_level().context("No level loaded")?;
            if editor.save(selected).await? == Settlement::Discarded {
                bail!("Save for level {} was superseded", selected);
            }
            let row = editor.row(menu).context("Menu vanished after save")?;
            println!("{}", render::row_line(&row));
        }
        Command::Sidebar { menu, visible } => {
            let editor = load(&services.editor, level).await?;
            editor.toggle_sidebar_visibility(menu, visible).await?;
            println!("Menu {} is now {} in the sidebar", menu, if visible { "shown" } else { "hidden" });
        }
        Command::ReorderGroups { active, over } => {
            load(&services.editor, level).await?;
            let result = services
                .coordinator
                .handle_box_drag_end(&DragEnd::new(active, Some(over)))
                .await?;
            print!("{}", render::order_result(result.as_deref()));
        }
        Command::ReorderRows { group, active, over } => {
            load(&services.editor, level).await?;
            let result = services
                .coordinator
                .handle_row_drag_end(group, &DragEnd::new(active, Some(over)))
                .await?;
            print!("{}", render::order_result(result.as_deref()));
        }
    }

    while let Ok(event) = events.try_recv() {
        info!("Published {:?}", event);
    }
    Ok(())
}

async fn load(editor: &PermissionMatrixEditor, level: i64) -> Result<&PermissionMatrixEditor> {
    match editor.select_level(level).await? {
        Settlement::Applied => Ok(editor),
        Settlement::Discarded => {
            warn!("Level {} load was superseded", level);
            bail!("Level {} could not be loaded", level)
        }
    }
}
