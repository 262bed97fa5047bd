//! Star system explorer: orbiting bodies, anchored navigation controls and eased
//! camera flights between them.
//!
//! Library root: core scene, navigation and camera modules, plus the SDK builder.

pub mod camera;
pub mod config;
pub mod data;
pub mod navigation;
pub mod render;
pub mod scene;
mod ui;

pub mod prelude;
pub mod sdk;

pub use data::{BodyRecord, Catalogue, CatalogueError, RingSpec};
pub use scene::star_system_plugin;
