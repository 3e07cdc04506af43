//! # Menu Access Core - Domain Module
//! 
//! Domain entities for the permission matrix.

pub mod level;
pub mod menu_node;
pub mod permission_set;
pub mod matrix_row;
pub mod level_template;
pub mod sortable_id;

pub use level::Level;
pub use menu_node::MenuNode;
pub use permission_set::{PermissionAction, PermissionSet};
pub use matrix_row::{group_rows, MatrixGroup, MatrixRow};
pub use level_template::{LevelTemplate, TemplateEntry};
pub use sortable_id::{DragEnd, ReorderScope, SortableId};
