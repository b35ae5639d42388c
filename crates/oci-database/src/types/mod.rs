//! Request and response models of the Database service.
//!
//! Field names follow the service's camelCase JSON. Enumerations returned by
//! the service carry an `UnknownValue` variant so that values introduced
//! later do not break deserialization.

pub(crate) mod common;

mod autonomous;
mod backup;
mod data_guard;
mod database;
mod db_system;
mod exadata;
mod maintenance;

pub use autonomous::*;
pub use backup::*;
pub use common::*;
pub use data_guard::*;
pub use database::*;
pub use db_system::*;
pub use exadata::*;
pub use maintenance::*;
