//! CLI argument parsing using clap v4
//!
//! Defines the command-line interface for the role atlas.

use clap::{Parser, Subcommand};

/// Role Atlas - role catalog for the content production pipeline
///
/// Inspects the built-in catalog of production roles: who owns which
/// pipeline steps, which quality gates they review, and how each role
/// evolves across AI maturity stages.
#[derive(Parser, Debug)]
#[command(name = "roleatlas")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, env = "ROLEATLAS_CONFIG", global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all roles in the catalog
    List {
        /// Only show roles in this category (strategy, creative, governance, operations, growth)
        #[arg(long)]
        category: Option<String>,
    },

    /// Show full details for a role
    Show {
        /// Role identifier (e.g. content-director)
        role_id: String,

        /// Limit journey output to one maturity stage (pre-ai, ai-agents, ai-agentic)
        #[arg(long)]
        stage: Option<String>,
    },

    /// Print every pipeline node a role touches
    Nodes {
        /// Role identifier (e.g. copywriter)
        role_id: String,
    },

    /// Compute ownership statistics for a role
    Stats {
        /// Role identifier (e.g. brand-manager)
        role_id: String,

        /// Override the total pipeline node count used for coverage
        #[arg(long)]
        graph_nodes: Option<usize>,
    },

    /// List the role categories
    Categories,

    /// Validate the built-in catalog
    Validate,

    /// Export the catalog as JSON
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Display version and build information
    Version,

    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

/// Configuration subcommands
///
/// The file acted on is the global --config path, falling back to the
/// standard search locations.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigSubcommand {
    /// Display the current configuration
    Show,

    /// Initialize a new configuration file
    Init {
        /// Path where to create the config file
        #[arg(short, long)]
        path: Option<String>,

        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a configuration file
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        // Verifies that the CLI definition is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_command() {
        let cli = Cli::parse_from(["roleatlas", "list"]);
        match cli.command {
            Commands::List { category } => {
                assert!(category.is_none());
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_list_with_category() {
        let cli = Cli::parse_from(["roleatlas", "list", "--category", "creative"]);
        match cli.command {
            Commands::List { category } => {
                assert_eq!(category, Some("creative".to_string()));
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_show_command() {
        let cli = Cli::parse_from(["roleatlas", "show", "content-director"]);
        match cli.command {
            Commands::Show { role_id, stage } => {
                assert_eq!(role_id, "content-director");
                assert!(stage.is_none());
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_show_with_stage() {
        let cli = Cli::parse_from(["roleatlas", "show", "copywriter", "--stage", "ai-agentic"]);
        match cli.command {
            Commands::Show { role_id, stage } => {
                assert_eq!(role_id, "copywriter");
                assert_eq!(stage, Some("ai-agentic".to_string()));
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_nodes_command() {
        let cli = Cli::parse_from(["roleatlas", "nodes", "seo-lead"]);
        match cli.command {
            Commands::Nodes { role_id } => {
                assert_eq!(role_id, "seo-lead");
            }
            _ => panic!("Expected Nodes command"),
        }
    }

    #[test]
    fn test_stats_defaults() {
        let cli = Cli::parse_from(["roleatlas", "stats", "brand-manager"]);
        match cli.command {
            Commands::Stats { role_id, graph_nodes } => {
                assert_eq!(role_id, "brand-manager");
                assert!(graph_nodes.is_none());
            }
            _ => panic!("Expected Stats command"),
        }
    }

    #[test]
    fn test_stats_with_graph_nodes() {
        let cli = Cli::parse_from(["roleatlas", "stats", "brand-manager", "--graph-nodes", "40"]);
        match cli.command {
            Commands::Stats { graph_nodes, .. } => {
                assert_eq!(graph_nodes, Some(40));
            }
            _ => panic!("Expected Stats command"),
        }
    }

    #[test]
    fn test_export_with_options() {
        let cli = Cli::parse_from(["roleatlas", "export", "--output", "atlas.json", "--pretty"]);
        match cli.command {
            Commands::Export { output, pretty } => {
                assert_eq!(output, Some("atlas.json".to_string()));
                assert!(pretty);
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_verbose_flags() {
        let cli = Cli::parse_from(["roleatlas", "-vv", "version"]);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_quiet_flag() {
        let cli = Cli::parse_from(["roleatlas", "--quiet", "version"]);
        assert!(cli.quiet);
    }

    #[test]
    fn test_config_show() {
        let cli = Cli::parse_from(["roleatlas", "config", "show"]);
        match cli.command {
            Commands::Config { subcommand: ConfigSubcommand::Show } => {
                assert!(cli.config.is_none());
            }
            _ => panic!("Expected Config Show command"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["roleatlas", "--config", "atlas.toml", "config", "validate"]);
        assert_eq!(cli.config, Some("atlas.toml".to_string()));
        match cli.command {
            Commands::Config { subcommand: ConfigSubcommand::Validate } => {}
            _ => panic!("Expected Config Validate command"),
        }
    }

    #[test]
    fn test_config_init() {
        let cli = Cli::parse_from(["roleatlas", "config", "init", "--force"]);
        match cli.command {
            Commands::Config { subcommand: ConfigSubcommand::Init { path, force } } => {
                assert!(path.is_none());
                assert!(force);
            }
            _ => panic!("Expected Config Init command"),
        }
    }
}
