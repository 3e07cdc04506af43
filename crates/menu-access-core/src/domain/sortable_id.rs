//! Drag-and-drop identifiers for the two reorder scopes.
//!
//! Box items carry the `box-` prefix, row items are the bare menu id, so an id
//! from one scope never parses as an id of the other.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use menu_access_shared::constants::BOX_ID_PREFIX;
use menu_access_shared::MenuId;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReorderScope {
    /// Root-level menu groups.
    Box,
    /// A root node and its direct children.
    Row,
}

impl fmt::Display for ReorderScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReorderScope::Box => f.write_str("menu group"),
            ReorderScope::Row => f.write_str("menu row"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortableId {
    Box(MenuId),
    Row(MenuId),
}

impl SortableId {
    pub fn scope(&self) -> ReorderScope {
        match self {
            SortableId::Box(_) => ReorderScope::Box,
            SortableId::Row(_) => ReorderScope::Row,
        }
    }

    pub fn menu_id(&self) -> MenuId {
        match self {
            SortableId::Box(id) | SortableId::Row(id) => *id,
        }
    }

    /// Returns the menu id only if this id belongs to `scope`.
    pub fn in_scope(&self, scope: ReorderScope) -> Option<MenuId> {
        (self.scope() == scope).then(|| self.menu_id())
    }
}

impl fmt::Display for SortableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortableId::Box(id) => write!(f, "{}{}", BOX_ID_PREFIX, id),
            SortableId::Row(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for SortableId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |raw: &str| {
            raw.parse::<MenuId>()
                .map_err(|_| DomainError::ValidationError(format!("Invalid sortable id: {}", s)))
        };

        match s.strip_prefix(BOX_ID_PREFIX) {
            Some(rest) => parse(rest).map(SortableId::Box),
            None => parse(s).map(SortableId::Row),
        }
    }
}

/// End of a drag gesture, as reported by the sortable context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEnd {
    pub active: String,
    pub over: Option<String>,
}

impl DragEnd {
    pub fn new(active: impl Into<String>, over: Option<impl Into<String>>) -> Self {
        Self {
            active: active.into(),
            over: over.map(Into::into),
        }
    }

    /// `(active, over)` menu ids when both ids parse into `scope` and differ.
    pub fn ids_in_scope(&self, scope: ReorderScope) -> Option<(MenuId, MenuId)> {
        let active = self.active.parse::<SortableId>().ok()?.in_scope(scope)?;
        let over = self.over.as_deref()?.parse::<SortableId>().ok()?.in_scope(scope)?;
        (active != over).then_some((active, over))
    }
}
