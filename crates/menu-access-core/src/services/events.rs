//! Invalidation signal for consumers that render menus (sidebar, breadcrumbs).

use serde::Serialize;
use tokio::sync::broadcast;
use tracing::debug;

use menu_access_shared::MenuId;

use crate::domain::{Level, ReorderScope};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload")]
#[serde(rename_all = "snake_case")]
pub enum MenuEvent {
    SidebarVisibilityChanged { menu_id: MenuId, visible: bool },
    OrderChanged { scope: ReorderScope },
    TemplateSaved { level: Level },
}

#[derive(Clone)]
pub struct MenuEventBus {
    tx: broadcast::Sender<MenuEvent>,
}

impl MenuEventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn publish(&self, event: MenuEvent) {
        if let Err(e) = self.tx.send(event) {
            debug!("Menu event dropped (no subscribers): {:?}", e.0);
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<MenuEvent> {
        self.tx.subscribe()
    }
}
