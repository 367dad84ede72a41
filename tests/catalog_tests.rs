//! Catalog integration tests
//!
//! Exercises the public library API: catalog construction, lookup,
//! the derived node list, and ownership statistics.

use std::collections::BTreeMap;
use std::collections::HashSet;

use roleatlas::catalog::{
    builtin_roles, JourneyStage, MaturityStage, NodeJourney, RoleCatalog, RoleCategory,
    RoleDefinition, RoleNarrative,
};
use roleatlas::Error;

/// A minimal role for constructing catalogs by hand
fn test_role(id: &str) -> RoleDefinition {
    let stage = |s: &str| JourneyStage::new(s, format!("{} in detail", s));
    let journey = NodeJourney {
        pre_ai: stage("manual"),
        ai_agents: stage("assisted"),
        ai_agentic: stage("autonomous"),
    };

    let mut node_journeys = BTreeMap::new();
    node_journeys.insert("step.example".to_string(), journey);

    RoleDefinition {
        id: id.to_string(),
        title: "Test Role".to_string(),
        description: "A role used in tests.".to_string(),
        tagline: "Tests things".to_string(),
        icon_name: "TestTube".to_string(),
        category: RoleCategory::Operations,
        accent_color: "#123456".to_string(),
        owned_steps: vec!["step.example".to_string()],
        reviewed_gates: vec![],
        related_agents: vec![],
        related_inputs: vec![],
        narrative: RoleNarrative {
            node_journeys,
            stage_overviews: None,
            key_insight: "Testing matters.".to_string(),
        },
        pain_points: None,
    }
}

// ─────────────────────────────────────────────────────────────────
// Catalog Construction
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_bundled_catalog_loads() {
    let atlas = RoleCatalog::bundled().unwrap();
    assert_eq!(atlas.len(), 6);
    assert!(!atlas.is_empty());
}

#[test]
fn test_bundled_catalog_is_valid() {
    let atlas = RoleCatalog::bundled().unwrap();
    atlas.validate().unwrap();
}

#[test]
fn test_duplicate_id_rejected() {
    let roles = vec![test_role("twin"), test_role("twin")];
    match RoleCatalog::new(roles) {
        Err(Error::DuplicateRoleId { id }) => assert_eq!(id, "twin"),
        other => panic!("Expected DuplicateRoleId, got {:?}", other.map(|c| c.len())),
    }
}

#[test]
fn test_lookup_by_id() {
    let atlas = RoleCatalog::bundled().unwrap();

    let role = atlas.get("copywriter").unwrap();
    assert_eq!(role.title, "Copywriter");

    assert!(atlas.get("nonexistent").is_none());
    assert!(matches!(
        atlas.require("nonexistent"),
        Err(Error::RoleNotFound { .. })
    ));
}

#[test]
fn test_iteration_preserves_definition_order() {
    let atlas = RoleCatalog::bundled().unwrap();
    let ids: Vec<&str> = atlas.iter().map(|r| r.id.as_str()).collect();
    let expected: Vec<String> = builtin_roles().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn test_index_round_trips_every_role() {
    let atlas = RoleCatalog::bundled().unwrap();
    for role in builtin_roles() {
        assert_eq!(atlas.get(&role.id), Some(&role));
    }
}

#[test]
fn test_every_category_has_a_role() {
    let atlas = RoleCatalog::bundled().unwrap();
    for cat in RoleCategory::all() {
        assert!(
            !atlas.by_category(*cat).is_empty(),
            "category {} has no roles",
            cat.slug()
        );
    }
}

// ─────────────────────────────────────────────────────────────────
// Derived Node List
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_node_ids_concatenation_order() {
    let mut role = test_role("order-check");
    role.owned_steps = vec!["step.a".into(), "step.b".into()];
    role.reviewed_gates = vec!["gate.c".into()];
    role.related_agents = vec![];
    role.related_inputs = vec!["input.d".into(), "input.e".into()];

    assert_eq!(
        role.node_ids(),
        vec!["step.a", "step.b", "gate.c", "input.d", "input.e"]
    );
}

#[test]
fn test_node_ids_keeps_duplicates() {
    let mut role = test_role("duped");
    role.owned_steps = vec!["step.a".into()];
    role.reviewed_gates = vec![];
    role.related_agents = vec![];
    role.related_inputs = vec!["step.a".into()];

    assert_eq!(role.node_ids(), vec!["step.a", "step.a"]);
}

#[test]
fn test_bundled_node_ids_are_prefixed() {
    let atlas = RoleCatalog::bundled().unwrap();
    let prefixes = ["step.", "gate.", "agent.", "input."];
    for role in atlas.iter() {
        for id in role.node_ids() {
            assert!(
                prefixes.iter().any(|p| id.starts_with(p)),
                "{}: unprefixed node id {}",
                role.id,
                id
            );
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Ownership Statistics
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_stats_counts_and_coverage() {
    let mut role = test_role("counted");
    role.owned_steps = vec!["step.a".into(), "step.b".into()];
    role.reviewed_gates = vec!["gate.c".into()];
    role.related_agents = vec![];
    role.related_inputs = vec!["input.d".into(), "input.e".into()];

    let stats = role.stats(20);
    assert_eq!(stats.steps, 2);
    assert_eq!(stats.gates, 1);
    assert_eq!(stats.total, 5);
    assert_eq!(stats.coverage_pct, 25);
}

#[test]
fn test_stats_total_matches_node_list() {
    // total is independent of the graph size and always equals the
    // flattened node list length
    let atlas = RoleCatalog::bundled().unwrap();
    for role in atlas.iter() {
        let len = role.node_ids().len();
        for n in [0, 1, 29, 1000] {
            assert_eq!(role.stats(n).total, len, "{} at n={}", role.id, n);
        }
    }
}

#[test]
fn test_stats_rounds_to_nearest() {
    let mut role = test_role("rounded");
    role.owned_steps = (0..5).map(|i| format!("step.s{}", i)).collect();
    role.reviewed_gates = vec![];
    role.related_agents = vec![];
    role.related_inputs = vec![];

    // 5/6 = 83.33 -> 83
    assert_eq!(role.stats(6).coverage_pct, 83);
    // 5/8 = 62.5 -> 63 (round half up)
    assert_eq!(role.stats(8).coverage_pct, 63);
}

#[test]
fn test_stats_zero_graph() {
    let role = test_role("degenerate");
    assert_eq!(role.stats(0).coverage_pct, 0);
}

#[test]
fn test_stats_can_exceed_hundred() {
    let mut role = test_role("overlapping");
    role.owned_steps = vec!["step.a".into(), "step.a".into(), "step.a".into()];

    // Duplicates count toward total, so coverage can exceed 100
    assert_eq!(role.stats(2).coverage_pct, 150);
}

// ─────────────────────────────────────────────────────────────────
// Narrative Schema
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_every_journey_covers_all_stages() {
    let atlas = RoleCatalog::bundled().unwrap();
    for role in atlas.iter() {
        for (node_id, journey) in &role.narrative.node_journeys {
            for stage in MaturityStage::all() {
                let j = journey.stage(*stage);
                assert!(
                    !j.summary.is_empty() && !j.detail.is_empty(),
                    "{} {} missing {} narrative",
                    role.id,
                    node_id,
                    stage.slug()
                );
            }
        }
    }
}

#[test]
fn test_journeys_may_reference_unowned_nodes() {
    // A narrative can discuss a node the role neither owns nor reviews
    let atlas = RoleCatalog::bundled().unwrap();
    let writer = atlas.get("copywriter").unwrap();

    let owned: HashSet<String> = writer.node_ids().into_iter().collect();
    let narrated: Vec<&String> = writer.narrative.node_journeys.keys().collect();

    assert!(narrated.iter().any(|id| !owned.contains(*id)));
}

#[test]
fn test_serde_round_trip() {
    let atlas = RoleCatalog::bundled().unwrap();
    let json = serde_json::to_string(atlas.roles()).unwrap();

    // Wire format uses camelCase keys and the three stage keys verbatim
    assert!(json.contains("\"ownedSteps\""));
    assert!(json.contains("\"keyInsight\""));
    assert!(json.contains("\"preAI\""));
    assert!(json.contains("\"aiAgents\""));
    assert!(json.contains("\"aiAgentic\""));

    let back: Vec<RoleDefinition> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), atlas.len());
    assert_eq!(back[0].id, atlas.roles()[0].id);
}
