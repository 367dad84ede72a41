//! Core types for the role catalog.
//!
//! A role is an organizational persona in the content-production pipeline,
//! annotated with narrative text describing how AI adoption changes its work
//! across three maturity stages, plus references into the pipeline graph
//! (process steps, approval gates, supporting agents, reference inputs).
//!
//! Serde renames follow the upstream data format (camelCase fields, stage
//! keys `preAI` / `aiAgents` / `aiAgentic`) so exported JSON round-trips
//! with the authoring tooling.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ─────────────────────────────────────────────────────────────────
// Role Category
// ─────────────────────────────────────────────────────────────────

/// The five organizational categories a role can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleCategory {
    /// Direction-setting roles: what gets made and why.
    Strategy,
    /// Roles that produce the content itself.
    Creative,
    /// Review and compliance roles guarding the approval gates.
    Governance,
    /// Roles that keep the pipeline running day to day.
    Operations,
    /// Distribution and performance roles.
    Growth,
}

/// Display metadata for a category.
///
/// Totality is guaranteed by the type system: `RoleCategory::info` matches
/// on a closed enum, so every category has exactly one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub label: &'static str,
    pub subtitle: &'static str,
    pub icon_name: &'static str,
}

impl RoleCategory {
    /// Slug used in CLI args and serialized data.
    pub fn slug(&self) -> &'static str {
        match self {
            RoleCategory::Strategy => "strategy",
            RoleCategory::Creative => "creative",
            RoleCategory::Governance => "governance",
            RoleCategory::Operations => "operations",
            RoleCategory::Growth => "growth",
        }
    }

    /// Display record for this category (label, subtitle, icon reference).
    pub fn info(&self) -> CategoryInfo {
        match self {
            RoleCategory::Strategy => CategoryInfo {
                label: "Strategy",
                subtitle: "Decide what gets made, and why",
                icon_name: "compass",
            },
            RoleCategory::Creative => CategoryInfo {
                label: "Creative",
                subtitle: "Make the work",
                icon_name: "pen-tool",
            },
            RoleCategory::Governance => CategoryInfo {
                label: "Governance",
                subtitle: "Guard the gates",
                icon_name: "shield",
            },
            RoleCategory::Operations => CategoryInfo {
                label: "Operations",
                subtitle: "Keep the pipeline moving",
                icon_name: "settings",
            },
            RoleCategory::Growth => CategoryInfo {
                label: "Growth",
                subtitle: "Get the work seen",
                icon_name: "trending-up",
            },
        }
    }

    /// All categories in display order.
    pub fn all() -> &'static [RoleCategory] {
        &[
            RoleCategory::Strategy,
            RoleCategory::Creative,
            RoleCategory::Governance,
            RoleCategory::Operations,
            RoleCategory::Growth,
        ]
    }
}

impl fmt::Display for RoleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info().label)
    }
}

impl FromStr for RoleCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strategy" => Ok(RoleCategory::Strategy),
            "creative" => Ok(RoleCategory::Creative),
            "governance" => Ok(RoleCategory::Governance),
            "operations" | "ops" => Ok(RoleCategory::Operations),
            "growth" => Ok(RoleCategory::Growth),
            _ => Err(Error::UnknownCategory { slug: s.to_string() }),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Maturity Stage
// ─────────────────────────────────────────────────────────────────

/// The three AI-adoption maturity stages a narrative is keyed by.
///
/// The stages are conceptually ordered (pre-AI, then AI-assisted, then
/// AI-agentic) but this is descriptive content, not a state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaturityStage {
    /// Before any AI assistance; fully manual workflows.
    #[serde(rename = "preAI")]
    PreAi,
    /// AI tools assist individual tasks; humans drive every step.
    #[serde(rename = "aiAgents")]
    AiAgents,
    /// Autonomous agents own whole steps; humans supervise gates.
    #[serde(rename = "aiAgentic")]
    AiAgentic,
}

impl MaturityStage {
    /// Slug used in CLI args.
    pub fn slug(&self) -> &'static str {
        match self {
            MaturityStage::PreAi => "pre-ai",
            MaturityStage::AiAgents => "ai-agents",
            MaturityStage::AiAgentic => "ai-agentic",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            MaturityStage::PreAi => "Pre-AI",
            MaturityStage::AiAgents => "AI-Assisted",
            MaturityStage::AiAgentic => "AI-Agentic",
        }
    }

    /// All stages in adoption order.
    pub fn all() -> &'static [MaturityStage] {
        &[
            MaturityStage::PreAi,
            MaturityStage::AiAgents,
            MaturityStage::AiAgentic,
        ]
    }
}

impl fmt::Display for MaturityStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for MaturityStage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pre-ai" | "preai" | "pre_ai" => Ok(MaturityStage::PreAi),
            "ai-agents" | "aiagents" | "ai_agents" => Ok(MaturityStage::AiAgents),
            "ai-agentic" | "aiagentic" | "ai_agentic" => Ok(MaturityStage::AiAgentic),
            _ => Err(Error::UnknownStage { slug: s.to_string() }),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Narrative Schema
// ─────────────────────────────────────────────────────────────────

/// Narrative for one maturity stage of one pipeline node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyStage {
    /// One-line summary of the role's work at this node and stage.
    pub summary: String,

    /// Longer prose description.
    pub detail: String,

    /// Friction points specific to this stage.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pain_points: Vec<String>,

    /// Reference numbers ("brief turnaround: 5 days") for this stage.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub benchmarks: Vec<String>,

    /// What the role gets out of this stage.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outcomes: Vec<String>,

    /// How the role itself changes at this stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_evolution: Option<String>,

    /// Failure modes to avoid at this stage.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub anti_patterns: Vec<String>,
}

impl JourneyStage {
    /// A journey stage with only the required prose fields.
    pub fn new(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            detail: detail.into(),
            pain_points: Vec::new(),
            benchmarks: Vec::new(),
            outcomes: Vec::new(),
            role_evolution: None,
            anti_patterns: Vec::new(),
        }
    }

    pub fn with_pain_points(mut self, points: &[&str]) -> Self {
        self.pain_points = points.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_benchmarks(mut self, benchmarks: &[&str]) -> Self {
        self.benchmarks = benchmarks.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_outcomes(mut self, outcomes: &[&str]) -> Self {
        self.outcomes = outcomes.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_role_evolution(mut self, evolution: impl Into<String>) -> Self {
        self.role_evolution = Some(evolution.into());
        self
    }

    pub fn with_anti_patterns(mut self, patterns: &[&str]) -> Self {
        self.anti_patterns = patterns.iter().map(|s| s.to_string()).collect();
        self
    }
}

/// A node's narrative across all three maturity stages.
///
/// Three named fields rather than a stage-keyed map: the "exactly three
/// stages" invariant is enforced by the compiler, not a runtime validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeJourney {
    #[serde(rename = "preAI")]
    pub pre_ai: JourneyStage,

    #[serde(rename = "aiAgents")]
    pub ai_agents: JourneyStage,

    #[serde(rename = "aiAgentic")]
    pub ai_agentic: JourneyStage,
}

impl NodeJourney {
    /// The journey stage for a given maturity stage.
    pub fn stage(&self, stage: MaturityStage) -> &JourneyStage {
        match stage {
            MaturityStage::PreAi => &self.pre_ai,
            MaturityStage::AiAgents => &self.ai_agents,
            MaturityStage::AiAgentic => &self.ai_agentic,
        }
    }
}

/// A framing summary for a maturity stage, independent of any single node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageOverview {
    /// The stage's framing narrative for this role.
    pub narrative: String,

    /// How the role's time splits at this stage (prose, e.g. "60% review").
    pub time_allocation: String,

    /// The metrics that matter most at this stage.
    pub critical_metrics: Vec<String>,

    /// Where the role can create outsized value at this stage.
    pub strategic_opportunity: String,
}

/// Stage overviews across all three maturity stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageOverviews {
    #[serde(rename = "preAI")]
    pub pre_ai: StageOverview,

    #[serde(rename = "aiAgents")]
    pub ai_agents: StageOverview,

    #[serde(rename = "aiAgentic")]
    pub ai_agentic: StageOverview,
}

impl StageOverviews {
    /// The overview for a given maturity stage.
    pub fn stage(&self, stage: MaturityStage) -> &StageOverview {
        match stage {
            MaturityStage::PreAi => &self.pre_ai,
            MaturityStage::AiAgents => &self.ai_agents,
            MaturityStage::AiAgentic => &self.ai_agentic,
        }
    }
}

/// The full narrative attached to a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleNarrative {
    /// Per-node journeys, keyed by pipeline node id.
    ///
    /// Keys are not restricted to the role's own node lists; a narrative
    /// may cross-reference a node the role does not own or review.
    pub node_journeys: BTreeMap<String, NodeJourney>,

    /// Optional role-level overviews, one per maturity stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_overviews: Option<StageOverviews>,

    /// The one-sentence takeaway for this role.
    pub key_insight: String,
}

// ─────────────────────────────────────────────────────────────────
// Role Definition
// ─────────────────────────────────────────────────────────────────

/// A role in the content-production pipeline.
///
/// The four node-reference lists hold opaque string identifiers into a
/// pipeline graph defined outside this crate; nothing here resolves them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDefinition {
    /// Unique, stable role id (e.g. "content-director").
    pub id: String,

    /// Display title.
    pub title: String,

    /// Short description of what the role does.
    pub description: String,

    /// One-line display tagline.
    pub tagline: String,

    /// Symbolic icon reference, resolved by the consuming UI.
    pub icon_name: String,

    /// Organizational category.
    pub category: RoleCategory,

    /// Accent color as a hex string (e.g. "#2563eb").
    pub accent_color: String,

    /// Process steps this role owns.
    pub owned_steps: Vec<String>,

    /// Approval gates this role reviews.
    pub reviewed_gates: Vec<String>,

    /// Supporting agents related to this role.
    pub related_agents: Vec<String>,

    /// Reference inputs related to this role.
    pub related_inputs: Vec<String>,

    /// Narrative content across maturity stages.
    pub narrative: RoleNarrative,

    /// Role-level friction points, independent of stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pain_points: Option<Vec<String>>,
}

/// Derived coverage numbers for a role within the pipeline graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleStats {
    /// Number of owned process steps.
    pub steps: usize,

    /// Number of reviewed approval gates.
    pub gates: usize,

    /// Total node references across all four lists.
    pub total: usize,

    /// `total` as a rounded percentage of the caller-supplied graph size.
    pub coverage_pct: u32,
}

impl RoleDefinition {
    /// Flatten the role's four node-reference lists into one, in the fixed
    /// order steps, gates, agents, inputs. Duplicates are preserved: a node
    /// id may legitimately appear in more than one list.
    pub fn node_ids(&self) -> Vec<String> {
        let mut ids = Vec::with_capacity(
            self.owned_steps.len()
                + self.reviewed_gates.len()
                + self.related_agents.len()
                + self.related_inputs.len(),
        );
        ids.extend(self.owned_steps.iter().cloned());
        ids.extend(self.reviewed_gates.iter().cloned());
        ids.extend(self.related_agents.iter().cloned());
        ids.extend(self.related_inputs.iter().cloned());
        ids
    }

    /// Compute coverage stats against a caller-supplied total graph size.
    ///
    /// `coverage_pct` uses ordinary f64 division and `f64::round`, and may
    /// exceed 100; the node lists are not required to be a subset of the
    /// graph the caller counted. A `total_graph_nodes` of zero yields a
    /// coverage of 0 rather than propagating a division by zero.
    pub fn stats(&self, total_graph_nodes: usize) -> RoleStats {
        let steps = self.owned_steps.len();
        let gates = self.reviewed_gates.len();
        let total = steps + gates + self.related_agents.len() + self.related_inputs.len();

        let coverage_pct = if total_graph_nodes == 0 {
            0
        } else {
            ((total as f64 / total_graph_nodes as f64) * 100.0).round() as u32
        };

        RoleStats {
            steps,
            gates,
            total,
            coverage_pct,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
