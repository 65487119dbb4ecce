//! # containersort-core
//!
//! Shared library for ContainerSort containing the configuration data model,
//! the property table, and the version rules used to decide whether an
//! on-disk `config.json` is current.
//!
//! This crate has zero dependencies on the file system, the host plugin
//! runtime, or the clock.  Everything here is a plain value that can be
//! built, compared, and serialised in a unit test.
//!
//! # Architecture overview (for beginners)
//!
//! ContainerSort is a game-server plugin that sorts the contents of storage
//! containers.  Server operators tune it through a single JSON file,
//! `config.json`, kept in the plugin's data directory.
//!
//! - **`domain::configuration`** – The [`Configuration`] record mirrored 1:1
//!   by `config.json`, plus the hard-coded defaults a fresh install gets.
//!
//! - **`domain::property`** – The property table: named options such as
//!   `sort_on_close` with a documented default for each one.
//!
//! - **`domain::version`** – Strips pre-release suffixes (`2.3.1-SNAPSHOT`
//!   becomes `2.3.1`) so a development build and its release compare equal.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `containersort_core::Configuration` instead of the full module path.
pub use domain::configuration::Configuration;
pub use domain::property::{ContainerSortProperty, PropertyTable};
pub use domain::version::normalize_version;
