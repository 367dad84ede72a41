//! Role catalog: the id-keyed index over the bundled role definitions.
//!
//! Built once at startup and read-only afterward. Duplicate role ids are a
//! construction error, not a silent overwrite: the catalog is compiled-in
//! data, so a collision is always a programming mistake worth failing fast
//! on.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};

use super::roles::builtin_roles;
use super::types::{RoleCategory, RoleDefinition};

/// Read-only, id-indexed catalog of role definitions.
///
/// Iteration order is the definition order of the underlying list (display
/// order); lookups by id are O(1).
#[derive(Debug)]
pub struct RoleCatalog {
    roles: Vec<RoleDefinition>,
    index: HashMap<String, usize>,
}

impl RoleCatalog {
    /// Build a catalog from a list of role definitions.
    ///
    /// Fails with [`Error::DuplicateRoleId`] if two definitions share an id.
    pub fn new(roles: Vec<RoleDefinition>) -> Result<Self> {
        let mut index = HashMap::with_capacity(roles.len());
        for (pos, role) in roles.iter().enumerate() {
            if index.insert(role.id.clone(), pos).is_some() {
                return Err(Error::duplicate_role_id(&role.id));
            }
        }
        debug!(roles = roles.len(), "Role catalog built");
        Ok(Self { roles, index })
    }

    /// Build the catalog from the bundled role definitions.
    pub fn bundled() -> Result<Self> {
        Self::new(builtin_roles())
    }

    /// Number of roles in the catalog.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Look up a role by id.
    pub fn get(&self, id: &str) -> Option<&RoleDefinition> {
        self.index.get(id).map(|&pos| &self.roles[pos])
    }

    /// Look up a role by id, erroring when absent.
    pub fn require(&self, id: &str) -> Result<&RoleDefinition> {
        self.get(id).ok_or_else(|| Error::role_not_found(id))
    }

    /// Iterate roles in display order.
    pub fn iter(&self) -> impl Iterator<Item = &RoleDefinition> {
        self.roles.iter()
    }

    /// Roles belonging to a category, in display order.
    pub fn by_category(&self, category: RoleCategory) -> Vec<&RoleDefinition> {
        self.roles.iter().filter(|r| r.category == category).collect()
    }

    /// All roles as a slice.
    pub fn roles(&self) -> &[RoleDefinition] {
        &self.roles
    }

    // ─────────────────────────────────────────────────────────────
    // Integrity Checks
    // ─────────────────────────────────────────────────────────────

    /// Run integrity checks over every role in the catalog.
    ///
    /// Uniqueness of ids is already enforced at construction; this verifies
    /// the per-role shape: non-empty display strings, well-formed accent
    /// colors, prefixed node ids, and a non-empty narrative. Node ids are
    /// never resolved; the graph they point into lives outside this crate.
    pub fn validate(&self) -> Result<()> {
        for role in &self.roles {
            if role.id.is_empty() {
                return Err(Error::role_invalid("<empty>", "id must not be empty"));
            }
            if role.title.is_empty() {
                return Err(Error::role_invalid(&role.id, "title must not be empty"));
            }
            if !role.accent_color.starts_with('#') || role.accent_color.len() != 7 {
                return Err(Error::role_invalid(
                    &role.id,
                    format!("accent color '{}' is not #rrggbb", role.accent_color),
                ));
            }
            if role.narrative.key_insight.is_empty() {
                return Err(Error::role_invalid(&role.id, "key insight must not be empty"));
            }

            Self::check_node_ids(role, &role.owned_steps, "step.")?;
            Self::check_node_ids(role, &role.reviewed_gates, "gate.")?;
            Self::check_node_ids(role, &role.related_agents, "agent.")?;
            Self::check_node_ids(role, &role.related_inputs, "input.")?;

            for (node_id, journey) in &role.narrative.node_journeys {
                if node_id.is_empty() {
                    return Err(Error::role_invalid(&role.id, "empty node journey key"));
                }
                for stage in crate::catalog::types::MaturityStage::all() {
                    let js = journey.stage(*stage);
                    if js.summary.is_empty() || js.detail.is_empty() {
                        return Err(Error::role_invalid(
                            &role.id,
                            format!(
                                "journey '{}' stage {} is missing summary or detail",
                                node_id,
                                stage.slug()
                            ),
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    fn check_node_ids(role: &RoleDefinition, ids: &[String], prefix: &str) -> Result<()> {
        for id in ids {
            if !id.starts_with(prefix) {
                return Err(Error::role_invalid(
                    &role.id,
                    format!("node id '{}' does not start with '{}'", id, prefix),
                ));
            }
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::catalog::types::RoleNarrative;

    fn minimal_role(id: &str) -> RoleDefinition {
        RoleDefinition {
            id: id.to_string(),
            title: "Role".to_string(),
            description: "desc".to_string(),
            tagline: "tag".to_string(),
            icon_name: "circle".to_string(),
            category: RoleCategory::Operations,
            accent_color: "#000000".to_string(),
            owned_steps: vec!["step.one".into()],
            reviewed_gates: vec![],
            related_agents: vec![],
            related_inputs: vec![],
            narrative: RoleNarrative {
                node_journeys: BTreeMap::new(),
                stage_overviews: None,
                key_insight: "insight".to_string(),
            },
            pain_points: None,
        }
    }

    #[test]
    fn test_bundled_catalog_builds() {
        let catalog = RoleCatalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), crate::catalog::roles::builtin_roles().len());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = RoleCatalog::bundled().unwrap();
        let role = catalog.get("copywriter").unwrap();
        assert_eq!(role.title, "Copywriter");
        assert!(catalog.get("nobody").is_none());
    }

    #[test]
    fn test_require_errors_on_missing() {
        let catalog = RoleCatalog::bundled().unwrap();
        let err = catalog.require("nobody").unwrap_err();
        assert!(err.to_string().contains("nobody"));
    }

    #[test]
    fn test_duplicate_id_fails_loudly() {
        let roles = vec![minimal_role("twin"), minimal_role("twin")];
        let err = RoleCatalog::new(roles).unwrap_err();
        assert!(matches!(err, Error::DuplicateRoleId { .. }));
    }

    #[test]
    fn test_index_size_equals_role_count() {
        // Guards against any regression toward silent duplicate overwrite.
        let catalog = RoleCatalog::bundled().unwrap();
        let distinct: std::collections::HashSet<&str> =
            catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(distinct.len(), catalog.len());
    }

    #[test]
    fn test_iteration_preserves_display_order() {
        let catalog = RoleCatalog::bundled().unwrap();
        let ids: Vec<&str> = catalog.iter().map(|r| r.id.as_str()).collect();
        let expected: Vec<String> = crate::catalog::roles::builtin_roles()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_by_category() {
        let catalog = RoleCatalog::bundled().unwrap();
        let governance = catalog.by_category(RoleCategory::Governance);
        assert!(governance.iter().any(|r| r.id == "brand-manager"));
        assert!(governance.iter().any(|r| r.id == "legal-reviewer"));
        assert!(governance.iter().all(|r| r.category == RoleCategory::Governance));
    }

    #[test]
    fn test_bundled_catalog_validates() {
        let catalog = RoleCatalog::bundled().unwrap();
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_accent_color() {
        let mut role = minimal_role("bad-color");
        role.accent_color = "red".to_string();
        let catalog = RoleCatalog::new(vec![role]).unwrap();
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("accent color"));
    }

    #[test]
    fn test_validate_rejects_unprefixed_node_id() {
        let mut role = minimal_role("bad-node");
        role.owned_steps = vec!["draft".to_string()];
        let catalog = RoleCatalog::new(vec![role]).unwrap();
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("step."));
    }
}
