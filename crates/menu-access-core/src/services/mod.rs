//! Domain services (business logic)

pub mod events;
pub mod resolver;
pub mod matrix_editor;
pub mod reorder;
pub mod reorder_coordinator;
pub mod navigation;

pub use events::{MenuEvent, MenuEventBus};
pub use resolver::{resolve_rows, PermissionMatrixResolver, ResolvedMatrix};
pub use matrix_editor::{PermissionMatrixEditor, Settlement};
pub use reorder_coordinator::ReorderCoordinator;
pub use navigation::{build_navigation, NavigationGroup, NavigationItem, SidebarNavigation};
