//! Application layer use cases for the configuration tool.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure configuration values in `containersort-core`) and the
//! infrastructure (files, clocks, the host runtime).
//!
//! Use cases in this layer:
//!
//! - **Orchestrate** domain objects to fulfil a goal (e.g., "make sure the
//!   plugin starts with a config that matches its version").
//! - **Depend on abstractions** (the `ConfigStore`, `Clock`, and
//!   `PluginHost` traits) so tests can replace the file system.
//!
//! # Sub-modules
//!
//! - **`configuration_service`** – Creates, loads, migrates, and backs up
//!   `config.json`, and hands out the active configuration.

pub mod configuration_service;

pub use configuration_service::ConfigurationService;
