pub mod cards;
pub mod guide;
pub mod manifest;
pub mod resize;
