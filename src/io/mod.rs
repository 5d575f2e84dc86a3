//! I/O layer: decoding screenshots (`loader`), reading crop-box manifests
//! (`manifest`), and `writers` for PNG output.
pub mod loader;
pub use loader::load_source_image;

pub mod manifest;
pub use manifest::{ManifestEntry, load_manifest};

pub mod writers;
