//! Role Atlas - role catalog for the content production pipeline
//!
//! Main entry point for the roleatlas binary. Loads the bundled role
//! catalog and answers questions about ownership, review duties, and
//! how each role changes across AI maturity stages.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use clap::Parser;
use tracing::{debug, info};

use roleatlas::catalog::{MaturityStage, RoleCatalog, RoleCategory, RoleDefinition};
use roleatlas::cli::{Cli, Commands, ConfigSubcommand};
use roleatlas::config::AtlasConfig;
use roleatlas::error::{Error, Result};
use roleatlas::{config, logging, version};

fn main() {
    if let Err(e) = run() {
        eprint!("{}", e.format_for_terminal());
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments first (before logging, so we know verbosity)
    let cli = Cli::parse();

    // For commands that don't need full logging, use simple setup
    match &cli.command {
        Commands::Version => {
            version::print_version();
            return Ok(());
        }
        Commands::Config { subcommand } => {
            logging::init_simple(tracing::Level::WARN)?;
            return handle_config_command(subcommand.clone(), cli.config.as_deref());
        }
        _ => {}
    }

    // Load config (or use defaults)
    let config = AtlasConfig::load(cli.config.as_deref())?;

    // Initialize logging with config settings
    // The guards must be kept alive for the lifetime of the program
    let _log_guards = logging::init_logging(&config.logging, cli.verbose, cli.quiet)?;

    let build = version::build_info();
    debug!(
        version = %build.full_version(),
        target = %build.target,
        profile = %build.profile,
        "Starting roleatlas"
    );

    let atlas = RoleCatalog::bundled()?;
    debug!(roles = atlas.len(), "Catalog loaded");

    match cli.command {
        Commands::List { category } => cmd_list(&atlas, category.as_deref(), &config),
        Commands::Show { role_id, stage } => {
            cmd_show(&atlas, &role_id, stage.as_deref(), &config)
        }
        Commands::Nodes { role_id } => cmd_nodes(&atlas, &role_id),
        Commands::Stats { role_id, graph_nodes } => {
            cmd_stats(&atlas, &role_id, graph_nodes.unwrap_or(config.graph.total_nodes))
        }
        Commands::Categories => cmd_categories(&atlas),
        Commands::Validate => cmd_validate(&atlas),
        Commands::Export { output, pretty } => cmd_export(&atlas, output.as_deref(), pretty),
        Commands::Version | Commands::Config { .. } => {
            // Already handled above
            unreachable!();
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Command Handlers
// ─────────────────────────────────────────────────────────────────

/// List roles, optionally filtered by category
fn cmd_list(atlas: &RoleCatalog, category: Option<&str>, config: &AtlasConfig) -> Result<()> {
    let roles: Vec<&RoleDefinition> = match category {
        Some(slug) => {
            let cat = RoleCategory::from_str(slug)?;
            atlas.by_category(cat)
        }
        None => atlas.iter().collect(),
    };

    if roles.is_empty() {
        println!("No roles found.");
        return Ok(());
    }

    for role in &roles {
        let info = role.category.info();
        if config.display.color {
            println!(
                "\x1b[1m{:<24}\x1b[0m {:<12} {}",
                role.id,
                info.label,
                role.tagline
            );
        } else {
            println!("{:<24} {:<12} {}", role.id, info.label, role.tagline);
        }
    }
    println!();
    println!("{} role(s)", roles.len());

    Ok(())
}

/// Show full details for a role
fn cmd_show(
    atlas: &RoleCatalog,
    role_id: &str,
    stage: Option<&str>,
    config: &AtlasConfig,
) -> Result<()> {
    let role = atlas.require(role_id)?;
    let stage_filter = stage.map(MaturityStage::from_str).transpose()?;

    let info = role.category.info();
    if config.display.color {
        println!("\x1b[1m{}\x1b[0m ({})", role.title, role.id);
    } else {
        println!("{} ({})", role.title, role.id);
    }
    println!("  {}", role.tagline);
    println!();
    println!("Category:  {} ({})", info.label, info.subtitle);
    println!("Accent:    {}", role.accent_color);
    println!();
    println!("{}", role.description);
    println!();

    print_node_list("Owned steps", &role.owned_steps);
    print_node_list("Reviewed gates", &role.reviewed_gates);
    print_node_list("Related agents", &role.related_agents);
    print_node_list("Related inputs", &role.related_inputs);

    let stages: Vec<MaturityStage> = match stage_filter {
        Some(s) => vec![s],
        None => MaturityStage::all().to_vec(),
    };

    if let Some(ref overviews) = role.narrative.stage_overviews {
        println!();
        println!("Stage overviews:");
        for s in &stages {
            let ov = overviews.stage(*s);
            println!("  [{}]", s.display_name());
            println!("    {}", ov.narrative);
            println!("    Time allocation: {}", ov.time_allocation);
            println!("    Opportunity:     {}", ov.strategic_opportunity);
        }
    }

    println!();
    println!("Node journeys:");
    for (node_id, journey) in &role.narrative.node_journeys {
        println!("  {}", node_id);
        for s in &stages {
            let j = journey.stage(*s);
            println!("    [{}] {}", s.display_name(), j.summary);
        }
    }

    println!();
    println!("Key insight: {}", role.narrative.key_insight);

    Ok(())
}

fn print_node_list(label: &str, ids: &[String]) {
    if ids.is_empty() {
        println!("{:<16} (none)", format!("{}:", label));
    } else {
        println!("{:<16} {}", format!("{}:", label), ids.join(", "));
    }
}

/// Print every pipeline node the role touches, in ownership order
fn cmd_nodes(atlas: &RoleCatalog, role_id: &str) -> Result<()> {
    let role = atlas.require(role_id)?;
    for node_id in role.node_ids() {
        println!("{}", node_id);
    }
    Ok(())
}

/// Compute and print ownership statistics for a role
fn cmd_stats(atlas: &RoleCatalog, role_id: &str, total_graph_nodes: usize) -> Result<()> {
    let role = atlas.require(role_id)?;
    let stats = role.stats(total_graph_nodes);

    println!("Role:         {}", role.id);
    println!("Owned steps:  {}", stats.steps);
    println!("Review gates: {}", stats.gates);
    println!("Total nodes:  {}", stats.total);
    println!("Coverage:     {}% (of {} pipeline nodes)", stats.coverage_pct, total_graph_nodes);

    Ok(())
}

/// Print the category table with role counts
fn cmd_categories(atlas: &RoleCatalog) -> Result<()> {
    for cat in RoleCategory::all() {
        let info = cat.info();
        let count = atlas.by_category(*cat).len();
        println!(
            "{:<12} {:<22} {:<38} {} role(s)",
            cat.slug(),
            info.label,
            info.subtitle,
            count
        );
    }
    Ok(())
}

/// Run integrity checks over the bundled catalog
fn cmd_validate(atlas: &RoleCatalog) -> Result<()> {
    atlas.validate()?;
    println!("Catalog is valid ({} roles).", atlas.len());
    Ok(())
}

/// Export the catalog as JSON to stdout or a file
fn cmd_export(atlas: &RoleCatalog, output: Option<&str>, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(atlas.roles())?
    } else {
        serde_json::to_string(atlas.roles())?
    };

    match output {
        Some(path) => {
            fs::write(path, &json).map_err(|e| Error::IoWrite {
                path: Path::new(path).to_path_buf(),
                source: e,
            })?;
            info!(path = %path, roles = atlas.len(), "Catalog exported");
            println!("Exported {} roles to {}", atlas.len(), path);
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}

/// Handle configuration subcommands
fn handle_config_command(subcommand: ConfigSubcommand, config_path: Option<&str>) -> Result<()> {
    match subcommand {
        ConfigSubcommand::Show => {
            let cfg = AtlasConfig::load(config_path)?;
            println!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigSubcommand::Init { path, force } => {
            config::init_config(path.as_deref(), force)?;
        }
        ConfigSubcommand::Validate => match AtlasConfig::load(config_path) {
            Ok(_) => {
                println!("Configuration is valid.");
            }
            Err(e) => {
                eprint!("{}", e.format_for_terminal());
                std::process::exit(e.exit_code());
            }
        },
    }

    Ok(())
}
