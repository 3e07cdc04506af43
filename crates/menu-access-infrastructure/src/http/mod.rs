//! REST backend adapters

pub mod client;
pub mod envelope;
pub mod menu_catalog_repo_impl;
pub mod level_template_repo_impl;
pub mod menu_visibility_repo_impl;
pub mod menu_order_repo_impl;

use std::sync::Arc;

pub use client::BackendClient;
pub use menu_catalog_repo_impl::HttpMenuCatalogRepository;
pub use level_template_repo_impl::HttpLevelTemplateRepository;
pub use menu_visibility_repo_impl::HttpMenuVisibilityRepository;
pub use menu_order_repo_impl::HttpMenuOrderRepository;

/// All adapters sharing one connection pool.
#[derive(Clone)]
pub struct HttpRepositories {
    pub catalog: Arc<HttpMenuCatalogRepository>,
    pub templates: Arc<HttpLevelTemplateRepository>,
    pub visibility: Arc<HttpMenuVisibilityRepository>,
    pub orders: Arc<HttpMenuOrderRepository>,
}

impl HttpRepositories {
    pub fn new(client: BackendClient) -> Self {
        Self {
            catalog: Arc::new(HttpMenuCatalogRepository::new(client.clone())),
            templates: Arc::new(HttpLevelTemplateRepository::new(client.clone())),
            visibility: Arc::new(HttpMenuVisibilityRepository::new(client.clone())),
            orders: Arc::new(HttpMenuOrderRepository::new(client)),
        }
    }
}
