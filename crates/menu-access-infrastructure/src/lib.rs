//! # Menu Access Infrastructure
//! 
//! HTTP adapters implementing the menu access repository traits against the
//! REST backend.

pub mod http;

pub use http::{
    BackendClient, HttpLevelTemplateRepository, HttpMenuCatalogRepository,
    HttpMenuOrderRepository, HttpMenuVisibilityRepository, HttpRepositories,
};
