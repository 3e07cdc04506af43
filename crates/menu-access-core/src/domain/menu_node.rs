// ============================================================================
// Menu Access Core - Menu Node Entity
// File: crates/menu-access-core/src/domain/menu_node.rs
// Description: One entry of the navigation tree as served by the menu catalog
// ============================================================================

use serde::{Deserialize, Deserializer, Serialize};

use menu_access_shared::{MenuId, OrderIndex};

/// Menu node entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    pub menu_id: MenuId,
    pub menu_name: String,
    pub menu_path: String,

    #[serde(default)]
    pub menu_icon: Option<String>,

    /// `None` for root groups. The backend may send `0` or `null` for roots.
    #[serde(default, deserialize_with = "zero_as_root")]
    pub parent_id: Option<MenuId>,

    pub order_index: OrderIndex,

    /// Global sidebar visibility, shared by every level. Absent when the
    /// catalog does not expose it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_in_sidebar: Option<bool>,
}

impl MenuNode {
    pub fn new(
        menu_id: MenuId,
        menu_name: impl Into<String>,
        menu_path: impl Into<String>,
        parent_id: Option<MenuId>,
        order_index: OrderIndex,
    ) -> Self {
        Self {
            menu_id,
            menu_name: menu_name.into().trim().to_string(),
            menu_path: menu_path.into().trim().to_string(),
            menu_icon: None,
            parent_id: parent_id.filter(|id| *id != 0),
            order_index,
            show_in_sidebar: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.menu_icon = Some(icon.into());
        self
    }

    pub fn with_sidebar_visibility(mut self, visible: bool) -> Self {
        self.show_in_sidebar = Some(visible);
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

fn zero_as_root<'de, D>(deserializer: D) -> Result<Option<MenuId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<MenuId> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|id| *id != 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_parent_is_root() {
        let node: MenuNode = serde_json::from_str(
            r#"{"menu_id":1,"menu_name":"Inventory","menu_path":"/inventory","parent_id":0,"order_index":10}"#,
        )
        .unwrap();
        assert!(node.is_root());
        assert_eq!(node.show_in_sidebar, None);

        let child: MenuNode = serde_json::from_str(
            r#"{"menu_id":2,"menu_name":"Stock List","menu_path":"/inventory/stock","parent_id":1,"order_index":20}"#,
        )
        .unwrap();
        assert_eq!(child.parent_id, Some(1));
    }

    #[test]
    fn test_new_trims_and_normalizes_parent() {
        let node = MenuNode::new(5, "  Vendors ", "/vendors", Some(0), 30);
        assert_eq!(node.menu_name, "Vendors");
        assert!(node.is_root());
    }
}
