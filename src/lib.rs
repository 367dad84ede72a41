//! Role Atlas - role catalog for the content production pipeline
//!
//! A read-only, in-memory catalog of the human roles that run a
//! marketing content pipeline. Each role records which pipeline steps
//! it owns, which quality gates it reviews, and a narrative describing
//! how its day-to-day work changes across three AI maturity stages.
//!
//! The catalog is compiled into the binary; see [`catalog::RoleCatalog`]
//! for lookup and [`catalog::RoleDefinition`] for the derived node list
//! and ownership statistics.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod version;

pub use catalog::{RoleCatalog, RoleDefinition, RoleStats};
pub use config::AtlasConfig;
pub use error::{Error, ErrorCode, Result};
