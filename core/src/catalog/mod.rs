pub mod descriptions;
pub mod loader;
pub mod record;

pub use descriptions::{DescriptionTable, MineralDescription};
pub use loader::{load_catalog, load_descriptions};
pub use record::{Catalog, ImageRecord};
