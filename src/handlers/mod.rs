//! HTTP handlers for entity CRUD and the sitemap.

pub mod entity;
pub mod sitemap;
pub use entity::*;
pub use sitemap::*;
