//! Command Line Interface (CLI) layer for `extract-images-automated`.
//!
//! This module defines argument parsing (`args`) and the orchestration logic
//! (`runner`) that loads a screenshot, picks the roster page, and writes one
//! card per unit name. It wires user-provided options to the library
//! functionality exposed via `cardcrop::api`.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
