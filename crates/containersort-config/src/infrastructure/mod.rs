//! Infrastructure layer for the configuration tool.
//!
//! Contains the adapters the configuration service talks to: the host plugin
//! runtime, the local clock, and file-system storage.
//!
//! **Dependency rule**: this layer may depend on `containersort_core`, but
//! the domain crate MUST NOT depend on anything here.

pub mod clock;
pub mod host;
pub mod storage;
