//! Core building blocks: grid geometry, unit-name slugs, rosters, extraction
//! parameters, and the crop/resize/guide processing steps. These are the
//! primitives consumed by the high-level `api` module.
pub mod grid;
pub mod naming;
pub mod params;
pub mod processing;
pub mod roster;
