//! Sidebar navigation built from a level's resolved matrix.
//!
//! The cached tree is dropped whenever a menu event arrives, so visibility and
//! order changes show up on the next read without a full reload.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use menu_access_shared::MenuId;

use crate::domain::{group_rows, Level, MatrixRow};
use crate::error::DomainError;
use crate::services::events::{MenuEvent, MenuEventBus};
use crate::services::resolver::PermissionMatrixResolver;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    pub menu_id: MenuId,
    pub menu_name: String,
    pub menu_path: String,
    pub menu_icon: Option<String>,
}

impl From<&MatrixRow> for NavigationItem {
    fn from(row: &MatrixRow) -> Self {
        Self {
            menu_id: row.menu_id,
            menu_name: row.menu_name.clone(),
            menu_path: row.menu_path.clone(),
            menu_icon: row.menu_icon.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationGroup {
    pub root: NavigationItem,
    pub children: Vec<NavigationItem>,
}

/// Visible navigation tree for one level's rows.
///
/// A child is shown when it is visible and readable. A root is shown when it
/// is visible and either readable itself or has a shown child. Hidden roots
/// hide their whole group.
pub fn build_navigation(rows: &[MatrixRow]) -> Vec<NavigationGroup> {
    let shown = |row: &MatrixRow| row.permissions.show_in_sidebar && row.permissions.can_read;

    group_rows(rows)
        .into_iter()
        .filter(|group| group.root.permissions.show_in_sidebar)
        .filter_map(|group| {
            let children: Vec<NavigationItem> = group
                .children
                .iter()
                .filter(|c| shown(*c))
                .map(NavigationItem::from)
                .collect();
            (group.root.permissions.can_read || !children.is_empty()).then(|| NavigationGroup {
                root: NavigationItem::from(&group.root),
                children,
            })
        })
        .collect()
}

#[derive(Clone)]
pub struct SidebarNavigation {
    resolver: PermissionMatrixResolver,
    level: Level,
    cache: Arc<RwLock<Option<Vec<NavigationGroup>>>>,
}

impl SidebarNavigation {
    pub fn new(resolver: PermissionMatrixResolver, level: Level) -> Self {
        Self {
            resolver,
            level,
            cache: Arc::new(RwLock::new(None)),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Cached tree, resolved on first use or after an invalidation.
    pub async fn tree(&self) -> Result<Vec<NavigationGroup>, DomainError> {
        let cached = self.cache.read().clone();
        if let Some(tree) = cached {
            return Ok(tree);
        }

        let resolved = self.resolver.resolve(self.level).await?;
        let tree = build_navigation(&resolved.rows);
        *self.cache.write() = Some(tree.clone());
        debug!("Built sidebar navigation for level {}: {} groups", self.level, tree.len());
        Ok(tree)
    }

    pub fn invalidate(&self) {
        self.cache.write().take();
    }

    pub fn is_cached(&self) -> bool {
        self.cache.read().is_some()
    }

    /// Invalidates on every event until the bus is dropped.
    pub async fn listen(self, mut rx: broadcast::Receiver<MenuEvent>) {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    debug!("Navigation invalidated by {:?}", event);
                    self.invalidate();
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Navigation listener lagged by {} events, invalidating", skipped);
                    self.invalidate();
                }
                Err(RecvError::Closed) => break,
            }
        }
    }

    pub fn spawn_listener(&self, events: &MenuEventBus) -> JoinHandle<()> {
        tokio::spawn(self.clone().listen(events.subscribe()))
    }
}
