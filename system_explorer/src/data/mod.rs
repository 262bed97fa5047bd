mod catalogue;
mod model;

pub use catalogue::{solar_system, Catalogue, CatalogueError};
pub use model::{BodyRecord, RingSpec};
