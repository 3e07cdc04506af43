// ============================================================================
// Menu Access Core - Permission Set
// File: crates/menu-access-core/src/domain/permission_set.rs
// Description: CRUD capability flags plus the sidebar visibility bit
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// One of the four level-scoped capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionAction {
    Read,
    Create,
    Update,
    Delete,
}

impl PermissionAction {
    pub const ALL: [PermissionAction; 4] = [
        PermissionAction::Read,
        PermissionAction::Create,
        PermissionAction::Update,
        PermissionAction::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionAction::Read => "read",
            PermissionAction::Create => "create",
            PermissionAction::Update => "update",
            PermissionAction::Delete => "delete",
        }
    }
}

impl fmt::Display for PermissionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "read" | "can_read" => Ok(PermissionAction::Read),
            "create" | "can_create" => Ok(PermissionAction::Create),
            "update" | "can_update" => Ok(PermissionAction::Update),
            "delete" | "can_delete" => Ok(PermissionAction::Delete),
            other => Err(DomainError::ValidationError(format!(
                "Unknown permission action: {}",
                other
            ))),
        }
    }
}

/// Permission flags for one menu node.
///
/// The default fails closed on the CRUD flags and open on visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    #[serde(default)]
    pub can_read: bool,
    #[serde(default)]
    pub can_create: bool,
    #[serde(default)]
    pub can_update: bool,
    #[serde(default)]
    pub can_delete: bool,
    #[serde(default = "default_visible")]
    pub show_in_sidebar: bool,
}

fn default_visible() -> bool {
    true
}

impl Default for PermissionSet {
    fn default() -> Self {
        Self {
            can_read: false,
            can_create: false,
            can_update: false,
            can_delete: false,
            show_in_sidebar: true,
        }
    }
}

impl PermissionSet {
    pub fn full_access() -> Self {
        Self {
            can_read: true,
            can_create: true,
            can_update: true,
            can_delete: true,
            show_in_sidebar: true,
        }
    }

    pub fn read_only() -> Self {
        Self {
            can_read: true,
            ..Self::default()
        }
    }

    pub fn no_access() -> Self {
        Self::default()
    }

    pub fn get(&self, action: PermissionAction) -> bool {
        match action {
            PermissionAction::Read => self.can_read,
            PermissionAction::Create => self.can_create,
            PermissionAction::Update => self.can_update,
            PermissionAction::Delete => self.can_delete,
        }
    }

    pub fn set(&mut self, action: PermissionAction, value: bool) {
        match action {
            PermissionAction::Read => self.can_read = value,
            PermissionAction::Create => self.can_create = value,
            PermissionAction::Update => self.can_update = value,
            PermissionAction::Delete => self.can_delete = value,
        }
    }

    /// Sets or clears all four CRUD flags. Visibility is left alone.
    pub fn set_all(&mut self, value: bool) {
        for action in PermissionAction::ALL {
            self.set(action, value);
        }
    }

    pub fn has_any_grant(&self) -> bool {
        self.can_read || self.can_create || self.can_update || self.can_delete
    }

    pub fn has_all_grants(&self) -> bool {
        self.can_read && self.can_create && self.can_update && self.can_delete
    }

    pub fn same_grants(&self, other: &PermissionSet) -> bool {
        PermissionAction::ALL
            .iter()
            .all(|action| self.get(*action) == other.get(*action))
    }
}
