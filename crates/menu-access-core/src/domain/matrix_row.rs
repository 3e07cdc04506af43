// ============================================================================
// Menu Access Core - Matrix Row
// File: crates/menu-access-core/src/domain/matrix_row.rs
// Description: Editable binding of one menu node to one level's grants
// ============================================================================

use std::collections::HashSet;

use menu_access_shared::utils::contains_ignore_case;
use menu_access_shared::{MenuId, OrderIndex};

use super::{MenuNode, PermissionSet};

/// MenuNode fields plus the resolved PermissionSet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixRow {
    pub menu_id: MenuId,
    pub menu_name: String,
    pub menu_path: String,
    pub menu_icon: Option<String>,
    pub parent_id: Option<MenuId>,
    pub order_index: OrderIndex,
    pub permissions: PermissionSet,
}

impl MatrixRow {
    pub fn from_node(node: &MenuNode, permissions: PermissionSet) -> Self {
        Self {
            menu_id: node.menu_id,
            menu_name: node.menu_name.clone(),
            menu_path: node.menu_path.clone(),
            menu_icon: node.menu_icon.clone(),
            parent_id: node.parent_id,
            order_index: node.order_index,
            permissions,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn matches_search(&self, query: &str) -> bool {
        contains_ignore_case(&self.menu_name, query) || contains_ignore_case(&self.menu_path, query)
    }
}

/// A root row and its direct children, children in `order_index` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixGroup {
    pub root: MatrixRow,
    pub children: Vec<MatrixRow>,
}

impl MatrixGroup {
    pub fn root_id(&self) -> MenuId {
        self.root.menu_id
    }

    /// Row-scope items: the root and its children in `order_index` order.
    ///
    /// The root is an ordinary item here and may sort below a child.
    pub fn items(&self) -> impl Iterator<Item = &MatrixRow> {
        let mut items: Vec<&MatrixRow> = std::iter::once(&self.root).chain(self.children.iter()).collect();
        items.sort_by_key(|r| sort_key(r));
        items.into_iter()
    }

    /// Lowest `order_index` among the row-scope items.
    pub fn base_order(&self) -> OrderIndex {
        self.items().map(|r| r.order_index).min().unwrap_or(self.root.order_index)
    }

    pub fn contains(&self, menu_id: MenuId) -> bool {
        self.items().any(|row| row.menu_id == menu_id)
    }
}

fn sort_key(row: &MatrixRow) -> (OrderIndex, MenuId) {
    (row.order_index, row.menu_id)
}

/// Groups rows by `parent_id`.
///
/// Rows whose parent is not a root in `rows` (missing parent, or deeper
/// nesting) get a group of their own after the regular root groups.
pub fn group_rows(rows: &[MatrixRow]) -> Vec<MatrixGroup> {
    let root_ids: HashSet<MenuId> = rows.iter().filter(|r| r.is_root()).map(|r| r.menu_id).collect();

    let mut roots: Vec<&MatrixRow> = rows.iter().filter(|r| r.is_root()).collect();
    roots.sort_by_key(|r| sort_key(r));

    let mut groups: Vec<MatrixGroup> = roots
        .into_iter()
        .map(|root| {
            let mut children: Vec<MatrixRow> = rows
                .iter()
                .filter(|r| r.parent_id == Some(root.menu_id))
                .cloned()
                .collect();
            children.sort_by_key(sort_key);
            MatrixGroup {
                root: root.clone(),
                children,
            }
        })
        .collect();

    let mut detached: Vec<&MatrixRow> = rows
        .iter()
        .filter(|r| matches!(r.parent_id, Some(parent) if !root_ids.contains(&parent)))
        .collect();
    detached.sort_by_key(|r| sort_key(r));
    groups.extend(detached.into_iter().map(|row| MatrixGroup {
        root: row.clone(),
        children: Vec::new(),
    }));

    groups
}
