//! Minimal prelude for SDK consumers.

pub use crate::config::{explorer_config, ExplorerConfig, ExplorerSettings};
pub use crate::data::{BodyRecord, Catalogue, CatalogueError, RingSpec};
pub use crate::navigation::{ExitRequested, NavigationCommand, Navigator, TransitionStarted};
pub use crate::render::{BodyRenderer, RenderAssets, SpheresRenderer};
pub use crate::scene::star_system_plugin;
pub use crate::sdk::SystemExplorerBuilder;
