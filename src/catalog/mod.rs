//! Role catalog: the data backbone of the pipeline presentation.
//!
//! A read-only, in-memory catalog of organizational roles in the
//! content-production pipeline, with per-role narrative content across three
//! AI-maturity stages and opaque references into the external pipeline graph.

pub mod registry;
pub mod roles;
pub mod types;

pub use registry::RoleCatalog;
pub use roles::builtin_roles;
pub use types::{
    CategoryInfo, JourneyStage, MaturityStage, NodeJourney, RoleCategory, RoleDefinition,
    RoleNarrative, RoleStats, StageOverview, StageOverviews,
};
