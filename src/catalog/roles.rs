//! Bundled role definitions: the catalog content.
//!
//! One constructor per role, returning a fully populated [`RoleDefinition`].
//! The node-reference lists point into the external pipeline graph (ids
//! prefixed `step.`, `gate.`, `agent.`, `input.`); nothing here resolves
//! them. Constructor order in [`builtin_roles`] is display order.

use std::collections::BTreeMap;

use super::types::{
    JourneyStage, NodeJourney, RoleCategory, RoleDefinition, RoleNarrative, StageOverview,
    StageOverviews,
};

// ─────────────────────────────────────────────────────────────────
// Role Ids
// ─────────────────────────────────────────────────────────────────

/// Role id for the content director.
pub const CONTENT_DIRECTOR_ID: &str = "content-director";

/// Role id for the copywriter.
pub const COPYWRITER_ID: &str = "copywriter";

/// Role id for the brand manager.
pub const BRAND_MANAGER_ID: &str = "brand-manager";

/// Role id for the production coordinator.
pub const PRODUCTION_COORDINATOR_ID: &str = "production-coordinator";

/// Role id for the SEO lead.
pub const SEO_LEAD_ID: &str = "seo-lead";

/// Role id for the legal reviewer.
pub const LEGAL_REVIEWER_ID: &str = "legal-reviewer";

// ─────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn journeys(entries: Vec<(&str, NodeJourney)>) -> BTreeMap<String, NodeJourney> {
    entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

// ─────────────────────────────────────────────────────────────────
// Content Director
// ─────────────────────────────────────────────────────────────────

/// The content director owns the brief and the editorial calendar and
/// signs off on what ships.
pub fn content_director() -> RoleDefinition {
    RoleDefinition {
        id: CONTENT_DIRECTOR_ID.to_string(),
        title: "Content Director".to_string(),
        description: "Sets the editorial direction: which stories get told, for whom, \
                      and in what order. Owns the brief, the calendar, and final sign-off."
            .to_string(),
        tagline: "From gatekeeper of output to designer of the system".to_string(),
        icon_name: "compass".to_string(),
        category: RoleCategory::Strategy,
        accent_color: "#2563eb".to_string(),
        owned_steps: ids(&["step.intake", "step.brief", "step.performance-review"]),
        reviewed_gates: ids(&["gate.brief-approval", "gate.final-signoff"]),
        related_agents: ids(&["agent.research", "agent.analytics"]),
        related_inputs: ids(&["input.content-calendar", "input.performance-data"]),
        narrative: RoleNarrative {
            node_journeys: journeys(vec![
                (
                    "step.brief",
                    NodeJourney {
                        pre_ai: JourneyStage::new(
                            "Writes every brief by hand from scattered inputs",
                            "The director assembles each brief from sales calls, support \
                             tickets, and last quarter's numbers, chasing stakeholders for \
                             context over email. A single brief routinely takes the better \
                             part of a week, and quality depends on how much chasing the \
                             director had time for.",
                        )
                        .with_pain_points(&[
                            "Briefs bottleneck on one calendar",
                            "Context lives in inboxes, not documents",
                        ])
                        .with_benchmarks(&["Brief turnaround: 4-5 days"]),
                        ai_agents: JourneyStage::new(
                            "Drafts briefs from AI-compiled research packets",
                            "A research assistant compiles the audience data, competitor \
                             angles, and past-performance summary into a packet before the \
                             director sits down. The director edits and sharpens rather \
                             than assembles; the judgment stays, the clerical work goes.",
                        )
                        .with_benchmarks(&["Brief turnaround: 1 day"])
                        .with_outcomes(&["Twice the briefs per quarter at the same headcount"]),
                        ai_agentic: JourneyStage::new(
                            "Reviews agent-proposed briefs against strategy",
                            "A planning agent watches the calendar, the performance data, \
                             and the keyword landscape, and proposes fully-formed briefs on \
                             its own cadence. The director's job moves up a level: tuning \
                             the strategy the agent plans against, and rejecting proposals \
                             that chase metrics instead of the brand's point of view.",
                        )
                        .with_role_evolution(
                            "The director stops writing briefs and starts governing the \
                             system that writes them",
                        )
                        .with_anti_patterns(&[
                            "Rubber-stamping agent briefs without reading the sources",
                            "Letting the proposal queue set the strategy",
                        ]),
                    },
                ),
                (
                    "gate.final-signoff",
                    NodeJourney {
                        pre_ai: JourneyStage::new(
                            "Reads every piece end to end before it ships",
                            "Final sign-off is a full read of every deliverable. It is the \
                             director's best quality lever and their worst bottleneck; \
                             launches queue behind one person's reading speed.",
                        )
                        .with_pain_points(&["Sign-off queue grows with output volume"]),
                        ai_agents: JourneyStage::new(
                            "Reviews an AI pre-flight report before reading",
                            "A checker flags factual claims without sources, off-voice \
                             passages, and broken internal references before the director \
                             opens the piece. The read is faster because the mechanical \
                             checks are already done.",
                        ),
                        ai_agentic: JourneyStage::new(
                            "Signs off by exception",
                            "Routine pieces that pass every automated gate ship on the \
                             director's standing approval; the director personally reviews \
                             only flagged work and anything touching a sensitive topic list \
                             they maintain.",
                        )
                        .with_anti_patterns(&[
                            "Treating the exception list as frozen — it needs pruning as \
                             the agents improve",
                        ]),
                    },
                ),
            ]),
            stage_overviews: Some(StageOverviews {
                pre_ai: StageOverview {
                    narrative: "The director is the pipeline's single point of editorial \
                                truth — and its single point of failure. Strategy time is \
                                whatever is left after briefs and sign-offs."
                        .to_string(),
                    time_allocation: "60% briefs and reviews, 25% stakeholder management, \
                                      15% strategy"
                        .to_string(),
                    critical_metrics: vec![
                        "Brief turnaround time".to_string(),
                        "Publish cadence".to_string(),
                    ],
                    strategic_opportunity: "Document the implicit editorial judgment now; \
                                            it becomes the training material for every \
                                            later stage"
                        .to_string(),
                },
                ai_agents: StageOverview {
                    narrative: "Assembly work moves to assistants. The director's leverage \
                                shifts from doing the work to specifying it well."
                        .to_string(),
                    time_allocation: "35% briefs and reviews, 25% specifying and tuning \
                                      assistants, 40% strategy"
                        .to_string(),
                    critical_metrics: vec![
                        "Brief turnaround time".to_string(),
                        "Revision rounds per piece".to_string(),
                    ],
                    strategic_opportunity: "Turn the best briefs into reusable templates \
                                            the assistants compile against"
                        .to_string(),
                },
                ai_agentic: StageOverview {
                    narrative: "The director governs a planning system rather than running \
                                a production line. The scarce skill is knowing when the \
                                system is confidently wrong."
                        .to_string(),
                    time_allocation: "15% exception review, 35% system governance, \
                                      50% strategy"
                        .to_string(),
                    critical_metrics: vec![
                        "Exception rate at final sign-off".to_string(),
                        "Strategy-to-published lead time".to_string(),
                    ],
                    strategic_opportunity: "Spend the reclaimed time where agents are \
                                            weakest: original positioning and bets the \
                                            data cannot yet justify"
                        .to_string(),
                },
            }),
            key_insight: "Every hour of editorial judgment the director writes down \
                          becomes leverage at the next maturity stage."
                .to_string(),
        },
        pain_points: Some(vec![
            "Single-threaded on one person's calendar".to_string(),
            "Strategy is perpetually displaced by production".to_string(),
        ]),
    }
}

// ─────────────────────────────────────────────────────────────────
// Copywriter
// ─────────────────────────────────────────────────────────────────

/// The copywriter turns briefs into drafts and drafts into finished copy.
pub fn copywriter() -> RoleDefinition {
    RoleDefinition {
        id: COPYWRITER_ID.to_string(),
        title: "Copywriter".to_string(),
        description: "Turns approved briefs into drafts, and feedback into finished \
                      copy, in the brand's voice."
            .to_string(),
        tagline: "From typist of first drafts to editor of many".to_string(),
        icon_name: "pen-tool".to_string(),
        category: RoleCategory::Creative,
        accent_color: "#db2777".to_string(),
        owned_steps: ids(&["step.outline", "step.draft", "step.edit"]),
        reviewed_gates: ids(&["gate.editorial-review"]),
        related_agents: ids(&["agent.drafting", "agent.research"]),
        related_inputs: ids(&["input.style-guide", "input.brand-voice"]),
        narrative: RoleNarrative {
            node_journeys: journeys(vec![
                (
                    "step.draft",
                    NodeJourney {
                        pre_ai: JourneyStage::new(
                            "Writes every first draft from a blank page",
                            "Drafting starts from the brief and a blank document. The \
                             first draft is the slowest and least pleasant part of the \
                             job, and the part most often done late at night before a \
                             deadline.",
                        )
                        .with_benchmarks(&["First draft: 2-3 days per long-form piece"]),
                        ai_agents: JourneyStage::new(
                            "Generates structured first drafts, then rewrites",
                            "A drafting assistant produces a structured first pass from \
                             the brief and the style guide. The writer's craft moves to \
                             the rewrite: cutting generic phrasing, adding the specific \
                             detail and opinion only a human close to the subject has.",
                        )
                        .with_benchmarks(&["First draft: same day"])
                        .with_outcomes(&["Writers spend most hours on voice, not scaffolding"])
                        .with_anti_patterns(&["Shipping the assistant's draft with a light polish"]),
                        ai_agentic: JourneyStage::new(
                            "Edits a portfolio of agent drafts in parallel",
                            "Drafting agents work the queue continuously; the writer runs \
                             editorial passes over several pieces a day and feeds the \
                             recurring fixes back into the voice guidelines the agents \
                             draft against.",
                        )
                        .with_role_evolution(
                            "The title stops matching the work: the copywriter is now an \
                             editor and voice steward",
                        ),
                    },
                ),
                (
                    "step.edit",
                    NodeJourney {
                        pre_ai: JourneyStage::new(
                            "Self-edits, then trades passes with a peer",
                            "Editing is manual and social: a self-edit, a peer pass, and \
                             a style-guide check done from memory.",
                        ),
                        ai_agents: JourneyStage::new(
                            "Runs mechanical passes through a checker first",
                            "Grammar, style-guide conformance, and reading-level checks \
                             run automatically; the human pass is reserved for argument, \
                             structure, and taste.",
                        ),
                        ai_agentic: JourneyStage::new(
                            "Arbitrates between agent edit suggestions",
                            "Competing agent passes propose edits with rationales. The \
                             writer adjudicates, and the adjudications accumulate into \
                             the house style's living definition.",
                        ),
                    },
                ),
                (
                    // Cross-reference: the writer does not own this gate but
                    // lives downstream of it.
                    "gate.brand-review",
                    NodeJourney {
                        pre_ai: JourneyStage::new(
                            "Waits days for brand feedback",
                            "Brand review happens after the draft is finished, so voice \
                             problems are found at the most expensive possible moment.",
                        )
                        .with_pain_points(&["Late-stage rewrites for voice drift"]),
                        ai_agents: JourneyStage::new(
                            "Gets brand-voice feedback while drafting",
                            "The same checks the brand manager will run at the gate are \
                             available in the editor, so drafts arrive at review already \
                             in voice.",
                        ),
                        ai_agentic: JourneyStage::new(
                            "Rarely sees the gate fire",
                            "Voice conformance is enforced continuously during agent \
                             drafting; the gate catches strategy-level brand questions, \
                             not phrasing.",
                        ),
                    },
                ),
            ]),
            stage_overviews: Some(StageOverviews {
                pre_ai: StageOverview {
                    narrative: "Output is capped by typing speed and stamina. The craft \
                                and the clerical work are fused in one activity."
                        .to_string(),
                    time_allocation: "70% drafting, 20% editing, 10% research".to_string(),
                    critical_metrics: vec!["Pieces per month".to_string()],
                    strategic_opportunity: "Build a personal corpus of best work — it is \
                                            the voice reference everything later trains on"
                        .to_string(),
                },
                ai_agents: StageOverview {
                    narrative: "The blank page disappears. What remains is the part of \
                                writing that was always the actual job: having something \
                                to say and saying it in the brand's voice."
                        .to_string(),
                    time_allocation: "30% drafting, 45% editing, 25% voice work".to_string(),
                    critical_metrics: vec![
                        "Revision rounds per piece".to_string(),
                        "Voice-conformance flags at brand review".to_string(),
                    ],
                    strategic_opportunity: "Writers who can specify voice precisely become \
                                            force multipliers for the whole team"
                        .to_string(),
                },
                ai_agentic: StageOverview {
                    narrative: "One writer stewards the output of many drafting agents. \
                                Editorial judgment is the entire job."
                        .to_string(),
                    time_allocation: "10% drafting, 60% editing, 30% voice stewardship"
                        .to_string(),
                    critical_metrics: vec![
                        "Agent-draft acceptance rate".to_string(),
                        "Reader engagement per published piece".to_string(),
                    ],
                    strategic_opportunity: "Original reporting and first-person expertise \
                                            — the inputs agents cannot generate"
                        .to_string(),
                },
            }),
            key_insight: "The writers who thrive are the ones who can articulate why a \
                          sentence is wrong, not just fix it."
                .to_string(),
        },
        pain_points: Some(vec![
            "First drafts consume the hours the craft needs".to_string(),
        ]),
    }
}

// ─────────────────────────────────────────────────────────────────
// Brand Manager
// ─────────────────────────────────────────────────────────────────

/// The brand manager guards voice and visual identity at the brand gate.
pub fn brand_manager() -> RoleDefinition {
    RoleDefinition {
        id: BRAND_MANAGER_ID.to_string(),
        title: "Brand Manager".to_string(),
        description: "Keeps every piece recognizably on-brand: voice, terminology, \
                      visual identity, and claims discipline."
            .to_string(),
        tagline: "From style police to steward of a machine-readable brand".to_string(),
        icon_name: "shield".to_string(),
        category: RoleCategory::Governance,
        accent_color: "#7c3aed".to_string(),
        owned_steps: ids(&[]),
        reviewed_gates: ids(&["gate.brand-review"]),
        related_agents: ids(&["agent.brand-checker"]),
        related_inputs: ids(&["input.brand-voice", "input.style-guide"]),
        narrative: RoleNarrative {
            node_journeys: journeys(vec![(
                "gate.brand-review",
                NodeJourney {
                    pre_ai: JourneyStage::new(
                        "Reviews by feel against a PDF style guide",
                        "Brand review is one person's taste applied piece by piece. The \
                         style guide is a document nobody reads until a review bounces; \
                         consistency depends on the same reviewer seeing everything.",
                    )
                    .with_pain_points(&[
                        "Review feedback reads as subjective",
                        "Guide and practice drift apart",
                    ]),
                    ai_agents: JourneyStage::new(
                        "Encodes the guide into checkable rules",
                        "The brand manager translates the style guide into rules a checker \
                         can run: banned phrases, required terminology, tone markers, claim \
                         patterns that need sources. Review time shifts from catching \
                         violations to judging edge cases the rules cannot settle.",
                    )
                    .with_outcomes(&[
                        "Writers get brand feedback before review, not after",
                        "The guide becomes testable instead of aspirational",
                    ]),
                    ai_agentic: JourneyStage::new(
                        "Maintains the brand model agents draft against",
                        "Voice conformance is enforced at generation time. The brand \
                         manager's artifact is no longer a review verdict but the brand \
                         model itself — versioned, tested against a reference corpus, and \
                         updated deliberately when the brand evolves.",
                    )
                    .with_role_evolution(
                        "The gate stops being a queue and becomes a specification",
                    )
                    .with_anti_patterns(&[
                        "Letting the brand model ossify while the brand moves on",
                    ]),
                },
            )]),
            stage_overviews: None,
            key_insight: "A brand rule that cannot be written down precisely enough for a \
                          machine was never being applied consistently by humans either."
                .to_string(),
        },
        pain_points: Some(vec![
            "Every review verdict has to be re-argued from taste".to_string(),
        ]),
    }
}

// ─────────────────────────────────────────────────────────────────
// Production Coordinator
// ─────────────────────────────────────────────────────────────────

/// The production coordinator handles scheduling, handoffs, and publishing.
pub fn production_coordinator() -> RoleDefinition {
    RoleDefinition {
        id: PRODUCTION_COORDINATOR_ID.to_string(),
        title: "Production Coordinator".to_string(),
        description: "Moves work between people and stages: assignments, deadlines, \
                      handoffs, and the publish button."
            .to_string(),
        tagline: "From human ticketing system to pipeline operator".to_string(),
        icon_name: "settings".to_string(),
        category: RoleCategory::Operations,
        accent_color: "#059669".to_string(),
        owned_steps: ids(&["step.scheduling", "step.publish", "step.repurpose"]),
        reviewed_gates: ids(&[]),
        related_agents: ids(&["agent.scheduling"]),
        related_inputs: ids(&["input.content-calendar"]),
        narrative: RoleNarrative {
            node_journeys: journeys(vec![
                (
                    "step.scheduling",
                    NodeJourney {
                        pre_ai: JourneyStage::new(
                            "Chases statuses across tools and inboxes",
                            "The coordinator is the pipeline's working memory: who has \
                             what, what is blocked, what ships this week. Most of the day \
                             is status collection and re-planning around slips.",
                        )
                        .with_pain_points(&["The plan is stale the moment it is written"]),
                        ai_agents: JourneyStage::new(
                            "Supervises an assistant-maintained schedule",
                            "A scheduling assistant tracks statuses and proposes \
                             re-plans when something slips; the coordinator approves \
                             changes and handles the human conversations behind them.",
                        )
                        .with_outcomes(&["Slips surface in hours instead of at the weekly standup"]),
                        ai_agentic: JourneyStage::new(
                            "Sets the policies the scheduler plans within",
                            "Routine sequencing, reassignment, and deadline arithmetic run \
                             without intervention. The coordinator owns the constraints — \
                             capacity, priorities, blackout dates — and the exceptions.",
                        ),
                    },
                ),
                (
                    "step.publish",
                    NodeJourney {
                        pre_ai: JourneyStage::new(
                            "Publishes by checklist, channel by channel",
                            "Each piece is formatted and posted per channel by hand \
                             against a checklist. Error-prone exactly when volume spikes.",
                        ),
                        ai_agents: JourneyStage::new(
                            "Reviews assistant-prepared channel variants",
                            "Formatting, cross-linking, and channel adaptation are \
                             prepared automatically; the coordinator spot-checks and \
                             presses the button.",
                        ),
                        ai_agentic: JourneyStage::new(
                            "Audits the publishing run after the fact",
                            "Publishing is an automated step gated by final sign-off. The \
                             coordinator audits runs, owns rollback, and handles the \
                             channels automation does not reach yet.",
                        ),
                    },
                ),
            ]),
            stage_overviews: None,
            key_insight: "Coordination work does not disappear with automation — it \
                          concentrates into constraint-setting and exception handling."
                .to_string(),
        },
        pain_points: None,
    }
}

// ─────────────────────────────────────────────────────────────────
// SEO Lead
// ─────────────────────────────────────────────────────────────────

/// The SEO lead owns search strategy, keyword research, and optimization.
pub fn seo_lead() -> RoleDefinition {
    RoleDefinition {
        id: SEO_LEAD_ID.to_string(),
        title: "SEO Lead".to_string(),
        description: "Owns search strategy: what the audience is looking for, which \
                      pieces should rank, and whether they do."
            .to_string(),
        tagline: "From keyword mechanic to demand strategist".to_string(),
        icon_name: "trending-up".to_string(),
        category: RoleCategory::Growth,
        accent_color: "#d97706".to_string(),
        owned_steps: ids(&["step.research", "step.seo-optimization"]),
        reviewed_gates: ids(&[]),
        related_agents: ids(&["agent.seo", "agent.analytics"]),
        related_inputs: ids(&["input.keyword-research", "input.performance-data"]),
        narrative: RoleNarrative {
            node_journeys: journeys(vec![(
                "step.seo-optimization",
                NodeJourney {
                    pre_ai: JourneyStage::new(
                        "Optimizes each piece by hand after it is written",
                        "Keyword mapping, metadata, internal links, and structure checks \
                         are a manual pass per piece, usually squeezed in right before \
                         publish. Research and reporting eat the rest of the week.",
                    )
                    .with_benchmarks(&["Optimization pass: half a day per piece"]),
                    ai_agents: JourneyStage::new(
                        "Reviews AI-suggested optimizations",
                        "An SEO assistant proposes keyword mappings, metadata, and link \
                         targets from the live keyword corpus; the lead accepts or \
                         overrides, and spends the recovered time on search strategy.",
                    )
                    .with_outcomes(&["Optimization moves upstream into the brief"]),
                    ai_agentic: JourneyStage::new(
                        "Tunes the optimization policy, not the pieces",
                        "Optimization is applied during drafting by agents that read the \
                         same keyword corpus. The lead manages the corpus, watches ranking \
                         outcomes, and intervenes on pages where the policy underperforms.",
                    )
                    .with_role_evolution(
                        "Per-piece optimization disappears; demand analysis is the job",
                    )
                    .with_anti_patterns(&[
                        "Optimizing for the corpus's own feedback loop instead of \
                         real-world demand shifts",
                    ]),
                },
            )]),
            stage_overviews: None,
            key_insight: "When optimization is free, picking the right things to rank for \
                          is the whole game."
                .to_string(),
        },
        pain_points: None,
    }
}

// ─────────────────────────────────────────────────────────────────
// Legal Reviewer
// ─────────────────────────────────────────────────────────────────

/// The legal reviewer screens claims, compliance, and regulatory exposure.
pub fn legal_reviewer() -> RoleDefinition {
    RoleDefinition {
        id: LEGAL_REVIEWER_ID.to_string(),
        title: "Legal Reviewer".to_string(),
        description: "Reviews outbound content for claims that need substantiation, \
                      regulatory exposure, and policy compliance."
            .to_string(),
        tagline: "From bottleneck of last resort to author of the rulebook".to_string(),
        icon_name: "scale".to_string(),
        category: RoleCategory::Governance,
        accent_color: "#dc2626".to_string(),
        owned_steps: ids(&[]),
        reviewed_gates: ids(&["gate.legal-review", "gate.final-signoff"]),
        related_agents: ids(&["agent.brand-checker"]),
        related_inputs: ids(&["input.compliance-policy"]),
        narrative: RoleNarrative {
            node_journeys: journeys(vec![(
                "gate.legal-review",
                NodeJourney {
                    pre_ai: JourneyStage::new(
                        "Reads everything, late, under protest",
                        "Legal review is the slowest gate and the last one, so it absorbs \
                         all upstream schedule slip. Most pieces carry no real risk, but \
                         finding the ones that do requires reading all of them.",
                    )
                    .with_pain_points(&[
                        "No triage: every piece costs a full read",
                        "Review arrives too late to fix cheaply",
                    ]),
                    ai_agents: JourneyStage::new(
                        "Reads only what the claim-screener flags",
                        "A screening pass extracts claims, comparative statements, and \
                         regulated-topic mentions, and routes only flagged pieces to \
                         counsel. The reviewer tunes the screening rules as the false \
                         negative cost dictates.",
                    )
                    .with_benchmarks(&["Pieces needing human legal read: ~20%"]),
                    ai_agentic: JourneyStage::new(
                        "Owns the compliance policy as executable rules",
                        "The compliance policy is maintained as rules the drafting agents \
                         consult while writing, so risky phrasing mostly never gets \
                         produced. The reviewer audits samples, handles novel territory, \
                         and updates the rules when regulation moves.",
                    )
                    .with_anti_patterns(&[
                        "Trusting the screener on topics it was never tuned for",
                    ]),
                },
            )]),
            stage_overviews: None,
            key_insight: "The compliance rules that gate content are an asset worth \
                          authoring deliberately, not a queue to survive."
                .to_string(),
        },
        pain_points: Some(vec![
            "Absorbs every upstream delay as review-time pressure".to_string(),
        ]),
    }
}

// ─────────────────────────────────────────────────────────────────
// Registry Functions
// ─────────────────────────────────────────────────────────────────

/// All bundled roles, in display order.
pub fn builtin_roles() -> Vec<RoleDefinition> {
    vec![
        content_director(),
        copywriter(),
        brand_manager(),
        production_coordinator(),
        seo_lead(),
        legal_reviewer(),
    ]
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
