//! UI Components for Posterwall.

mod collection_gallery;

pub use collection_gallery::CollectionGallery;
