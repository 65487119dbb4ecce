//! Domain layer: pure configuration values with no I/O.
//!
//! # Sub-modules
//!
//! - **`configuration`** – The serialisable [`Configuration`] record and its
//!   defaults.
//! - **`property`** – The [`ContainerSortProperty`] keys and the
//!   [`PropertyTable`] map that stores their values.
//! - **`version`** – Host version normalisation.
//!
//! [`Configuration`]: configuration::Configuration
//! [`ContainerSortProperty`]: property::ContainerSortProperty
//! [`PropertyTable`]: property::PropertyTable

pub mod configuration;
pub mod property;
pub mod version;
