mod persistence;
mod sample;
mod source;

pub use persistence::{load_catalog, load_targets};
pub use sample::sample_catalog;
pub use source::Catalog;
