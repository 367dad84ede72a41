//! CLI integration tests
//!
//! Tests the command-line interface using assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a command for the roleatlas binary with colors disabled
fn atlas_cmd() -> Command {
    let mut cmd = Command::cargo_bin("roleatlas").unwrap();
    cmd.env("ROLEATLAS_COLOR", "false");
    cmd
}

// ─────────────────────────────────────────────────────────────────
// Help and Version Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    atlas_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Role Atlas"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("version"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version_command() {
    atlas_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("roleatlas"))
        .stdout(predicate::str::contains("Build Information"))
        .stdout(predicate::str::contains("Git Hash"))
        .stdout(predicate::str::contains("Target"));
}

#[test]
fn test_short_version_flag() {
    atlas_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("roleatlas"));
}

// ─────────────────────────────────────────────────────────────────
// List Command Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_list_all_roles() {
    atlas_cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("content-director"))
        .stdout(predicate::str::contains("copywriter"))
        .stdout(predicate::str::contains("brand-manager"))
        .stdout(predicate::str::contains("production-coordinator"))
        .stdout(predicate::str::contains("seo-lead"))
        .stdout(predicate::str::contains("legal-reviewer"))
        .stdout(predicate::str::contains("6 role(s)"));
}

#[test]
fn test_list_by_category() {
    atlas_cmd()
        .arg("list")
        .arg("--category")
        .arg("creative")
        .assert()
        .success()
        .stdout(predicate::str::contains("copywriter"))
        .stdout(predicate::str::contains("content-director").not());
}

#[test]
fn test_list_unknown_category() {
    atlas_cmd()
        .arg("list")
        .arg("--category")
        .arg("finance")
        .assert()
        .failure()
        .code(30)
        .stderr(predicate::str::contains("Unknown category"));
}

// ─────────────────────────────────────────────────────────────────
// Show Command Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_show_role() {
    atlas_cmd()
        .arg("show")
        .arg("content-director")
        .assert()
        .success()
        .stdout(predicate::str::contains("Content Director"))
        .stdout(predicate::str::contains("Owned steps"))
        .stdout(predicate::str::contains("step.brief"))
        .stdout(predicate::str::contains("gate.final-signoff"))
        .stdout(predicate::str::contains("Key insight"));
}

#[test]
fn test_show_role_stage_filter() {
    atlas_cmd()
        .arg("show")
        .arg("copywriter")
        .arg("--stage")
        .arg("ai-agentic")
        .assert()
        .success()
        .stdout(predicate::str::contains("[AI-Agentic]"))
        .stdout(predicate::str::contains("[Pre-AI]").not());
}

#[test]
fn test_show_unknown_role() {
    atlas_cmd()
        .arg("show")
        .arg("chief-vibes-officer")
        .assert()
        .failure()
        .code(30)
        .stderr(predicate::str::contains("Role not found"))
        .stderr(predicate::str::contains("roleatlas list"));
}

#[test]
fn test_show_unknown_stage() {
    atlas_cmd()
        .arg("show")
        .arg("copywriter")
        .arg("--stage")
        .arg("post-ai")
        .assert()
        .failure()
        .code(30)
        .stderr(predicate::str::contains("Unknown maturity stage"));
}

// ─────────────────────────────────────────────────────────────────
// Nodes Command Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_nodes_order() {
    // Steps first, then gates, then agents, then inputs
    let output = atlas_cmd()
        .arg("nodes")
        .arg("content-director")
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "step.intake",
            "step.brief",
            "step.performance-review",
            "gate.brief-approval",
            "gate.final-signoff",
            "agent.research",
            "agent.analytics",
            "input.content-calendar",
            "input.performance-data",
        ]
    );
}

#[test]
fn test_nodes_role_with_no_steps() {
    atlas_cmd()
        .arg("nodes")
        .arg("brand-manager")
        .assert()
        .success()
        .stdout(predicate::str::contains("gate.brand-review"))
        .stdout(predicate::str::contains("step.").not());
}

// ─────────────────────────────────────────────────────────────────
// Stats Command Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_stats_default_graph() {
    // content-director: 3 steps + 2 gates + 2 agents + 2 inputs = 9 of 29
    atlas_cmd()
        .arg("stats")
        .arg("content-director")
        .assert()
        .success()
        .stdout(predicate::str::contains("Owned steps:  3"))
        .stdout(predicate::str::contains("Review gates: 2"))
        .stdout(predicate::str::contains("Total nodes:  9"))
        .stdout(predicate::str::contains("31%"));
}

#[test]
fn test_stats_graph_nodes_override() {
    // 9 of 18 nodes = 50%
    atlas_cmd()
        .arg("stats")
        .arg("content-director")
        .arg("--graph-nodes")
        .arg("18")
        .assert()
        .success()
        .stdout(predicate::str::contains("50%"));
}

#[test]
fn test_stats_zero_graph_nodes() {
    // Degenerate graph: coverage reported as 0 rather than failing
    atlas_cmd()
        .arg("stats")
        .arg("copywriter")
        .arg("--graph-nodes")
        .arg("0")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coverage:     0%"));
}

// ─────────────────────────────────────────────────────────────────
// Categories / Validate / Export Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_categories_table() {
    atlas_cmd()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("strategy"))
        .stdout(predicate::str::contains("creative"))
        .stdout(predicate::str::contains("governance"))
        .stdout(predicate::str::contains("operations"))
        .stdout(predicate::str::contains("growth"));
}

#[test]
fn test_validate_bundled_catalog() {
    atlas_cmd()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog is valid (6 roles)"));
}

#[test]
fn test_export_stdout() {
    let output = atlas_cmd()
        .arg("export")
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    let roles = parsed.as_array().unwrap();
    assert_eq!(roles.len(), 6);

    // camelCase wire format
    let first = &roles[0];
    assert!(first.get("ownedSteps").is_some());
    assert!(first.get("iconName").is_some());
    assert!(first["narrative"].get("nodeJourneys").is_some());
    assert!(first["narrative"].get("keyInsight").is_some());
}

#[test]
fn test_export_to_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let out_path = temp_dir.path().join("atlas.json");

    atlas_cmd()
        .arg("export")
        .arg("--output")
        .arg(out_path.to_str().unwrap())
        .arg("--pretty")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 6 roles"));

    let content = std::fs::read_to_string(&out_path).unwrap();
    assert!(content.contains("\"preAI\""));
    assert!(content.contains("\"aiAgentic\""));
}

// ─────────────────────────────────────────────────────────────────
// Verbosity Flag Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_verbose_flag() {
    atlas_cmd()
        .arg("-v")
        .arg("list")
        .assert()
        .success();
}

#[test]
fn test_quiet_flag() {
    atlas_cmd()
        .arg("--quiet")
        .arg("list")
        .assert()
        .success();
}

// ─────────────────────────────────────────────────────────────────
// Error Handling Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_unknown_command() {
    atlas_cmd()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_missing_subcommand() {
    atlas_cmd()
        .assert()
        .failure();
}
