//! Repository traits (ports)

pub mod menu_catalog_repository;
pub mod level_template_repository;
pub mod menu_visibility_repository;
pub mod menu_order_repository;

pub use menu_catalog_repository::MenuCatalogRepository;
pub use level_template_repository::LevelTemplateRepository;
pub use menu_visibility_repository::MenuVisibilityRepository;
pub use menu_order_repository::{MenuOrderRepository, OrderUpdate};

#[cfg(test)]
pub use menu_catalog_repository::MockMenuCatalogRepository;
#[cfg(test)]
pub use level_template_repository::MockLevelTemplateRepository;
#[cfg(test)]
pub use menu_visibility_repository::MockMenuVisibilityRepository;
#[cfg(test)]
pub use menu_order_repository::MockMenuOrderRepository;
