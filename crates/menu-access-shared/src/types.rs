//! Common types

/// Identifier of a node in the menu catalog.
pub type MenuId = i64;

/// Sibling position of a menu node. Not required to be contiguous.
pub type OrderIndex = i32;
