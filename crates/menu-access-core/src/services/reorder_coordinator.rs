// ============================================================================
// Menu Access Core - Reorder Coordinator
// File: crates/menu-access-core/src/services/reorder_coordinator.rs
// ============================================================================
//! Drag-and-drop reordering of root groups (box scope) and of the rows
//! inside one group (row scope).
//!
//! Local order changes immediately; the bulk write follows. Writes of the
//! same scope run one at a time behind that scope's gate, while a box write
//! and a row write may be in flight together.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use menu_access_shared::{MenuId, OrderIndex};

use crate::domain::{DragEnd, MatrixGroup, ReorderScope};
use crate::error::DomainError;
use crate::repositories::{MenuOrderRepository, OrderUpdate};
use crate::services::events::{MenuEvent, MenuEventBus};
use crate::services::matrix_editor::PermissionMatrixEditor;
use crate::services::reorder::{plan_box_reorder, plan_row_reorder};

#[derive(Clone)]
pub struct ReorderCoordinator {
    editor: PermissionMatrixEditor,
    orders: Arc<dyn MenuOrderRepository>,
    events: MenuEventBus,
    stride: OrderIndex,
    box_gate: Arc<Mutex<()>>,
    row_gate: Arc<Mutex<()>>,
}

impl ReorderCoordinator {
    pub fn new(
        editor: PermissionMatrixEditor,
        orders: Arc<dyn MenuOrderRepository>,
        events: MenuEventBus,
        stride: OrderIndex,
    ) -> Self {
        Self {
            editor,
            orders,
            events,
            stride,
            box_gate: Arc::new(Mutex::new(())),
            row_gate: Arc::new(Mutex::new(())),
        }
    }

    // ========================================================================
    // DRAG EVENTS
    // ========================================================================

    /// Box-scope drop handler. Events carrying row ids are ignored.
    pub async fn handle_box_drag_end(&self, event: &DragEnd) -> Result<Option<Vec<OrderUpdate>>, DomainError> {
        let Some((active, over)) = event.ids_in_scope(ReorderScope::Box) else {
            debug!("Ignoring drag end outside box scope: {:?}", event);
            return Ok(None);
        };
        self.reorder_boxes(active, over).await
    }

    /// Row-scope drop handler for the group rooted at `group_root`.
    ///
    /// Events carrying box ids, or ids from another group, are ignored.
    pub async fn handle_row_drag_end(
        &self,
        group_root: MenuId,
        event: &DragEnd,
    ) -> Result<Option<Vec<OrderUpdate>>, DomainError> {
        let Some((active, over)) = event.ids_in_scope(ReorderScope::Row) else {
            debug!("Ignoring drag end outside row scope: {:?}", event);
            return Ok(None);
        };
        self.reorder_rows(group_root, active, over).await
    }

    // ========================================================================
    // REORDER
    // ========================================================================

    /// Moves root group `active` to the position of `over`.
    ///
    /// Returns the persisted order, or `None` when the move changes nothing.
    pub async fn reorder_boxes(&self, active: MenuId, over: MenuId) -> Result<Option<Vec<OrderUpdate>>, DomainError> {
        self.editor.ensure_loaded()?;
        let Some(updates) = plan_box_reorder(&self.editor.all_groups(), active, over, self.stride) else {
            return Ok(None);
        };

        self.editor.apply_order(&updates);
        self.persist(ReorderScope::Box, None).await.map(Some)
    }

    /// Moves row `active` to the position of `over` inside one group.
    pub async fn reorder_rows(
        &self,
        group_root: MenuId,
        active: MenuId,
        over: MenuId,
    ) -> Result<Option<Vec<OrderUpdate>>, DomainError> {
        self.editor.ensure_loaded()?;
        let group = self.group(group_root)?;
        let Some(updates) = plan_row_reorder(&group, active, over) else {
            return Ok(None);
        };

        if updates.len() as OrderIndex >= self.stride {
            warn!(
                "Group {} has {} rows, at least the root stride of {}; root order may shift",
                group_root,
                updates.len(),
                self.stride
            );
        }

        self.editor.apply_order(&updates);
        self.persist(ReorderScope::Row, Some(group_root)).await.map(Some)
    }

    fn group(&self, group_root: MenuId) -> Result<MatrixGroup, DomainError> {
        self.editor
            .all_groups()
            .into_iter()
            .find(|g| g.root_id() == group_root)
            .ok_or(DomainError::MenuNotFound(group_root))
    }

    /// Current local order of a scope. Read after the gate is taken, so a
    /// queued write sends the latest local order rather than a stale plan.
    fn current_order(&self, scope: ReorderScope, group_root: Option<MenuId>) -> Vec<OrderUpdate> {
        let groups = self.editor.all_groups();
        let to_update = |row: &crate::domain::MatrixRow| OrderUpdate {
            menu_id: row.menu_id,
            order_index: row.order_index,
        };

        match (scope, group_root) {
            (ReorderScope::Row, Some(root)) => groups
                .iter()
                .find(|g| g.root_id() == root)
                .map(|g| g.items().map(to_update).collect())
                .unwrap_or_default(),
            _ => groups
                .iter()
                .filter(|g| g.root.is_root())
                .map(|g| to_update(&g.root))
                .collect(),
        }
    }

    async fn persist(&self, scope: ReorderScope, group_root: Option<MenuId>) -> Result<Vec<OrderUpdate>, DomainError> {
        let gate = match scope {
            ReorderScope::Box => &self.box_gate,
            ReorderScope::Row => &self.row_gate,
        };
        let _guard = gate.lock().await;

        let payload = self.current_order(scope, group_root);
        if payload.is_empty() {
            return Ok(payload);
        }

        match self.orders.bulk_set_menu_order(&payload).await {
            Ok(()) => {
                info!("Saved {} order for {} menus", scope, payload.len());
                self.events.publish(MenuEvent::OrderChanged { scope });
                Ok(payload)
            }
            Err(e) => {
                warn!("Failed to save {} order, reloading from server: {}", scope, e);
                if let Err(reload_err) = self.editor.reload_catalog().await {
                    warn!("Failed to reload menu order after rollback: {}", reload_err);
                }
                Err(DomainError::ReorderRolledBack {
                    scope,
                    reason: e.to_string(),
                })
            }
        }
    }
}
