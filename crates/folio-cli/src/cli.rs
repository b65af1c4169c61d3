//! CLI argument parsing and command definitions.

use clap::{Args, Parser, Subcommand};

// ============================================================================
// CLI argument types
// ============================================================================

/// Build the post index and browse the project gallery of a Folio site.
#[derive(Parser, Debug)]
#[command(name = "folio", author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "FOLIO_CONFIG", global = true)]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<BaseCommand>,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum BaseCommand {
    /// Post index operations.
    Index(IndexCommand),

    /// List posts from a generated index, newest first.
    Posts {
        /// Index artifact to read (defaults to the configured output path).
        #[arg(short, long)]
        index: Option<String>,
    },

    /// Project gallery operations.
    Gallery(GalleryCommand),

    /// Configuration operations.
    Config(ConfigCommand),

    /// Print version information.
    Version,
}

// ============================================================================
// Index
// ============================================================================

/// Index-specific subcommands.
#[derive(Parser, Debug)]
pub struct IndexCommand {
    /// Index subcommand to execute.
    #[command(subcommand)]
    pub command: IndexAction,
}

/// Source, output, and format overrides shared by `index build` and `index check`.
#[derive(Args, Debug, Clone, Default)]
pub struct IndexTarget {
    /// Directory of post sources.
    #[arg(short, long)]
    pub source: Option<String>,

    /// Artifact file to write or compare against.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Artifact format: json or js.
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Available index subcommands.
#[derive(Subcommand, Debug)]
pub enum IndexAction {
    /// Rebuild the post index artifact from the post sources.
    Build {
        #[command(flatten)]
        target: IndexTarget,

        /// Show what would be written without writing.
        #[arg(long)]
        dry_run: bool,
    },

    /// Check that the artifact matches the post sources.
    Check {
        #[command(flatten)]
        target: IndexTarget,
    },
}

// ============================================================================
// Gallery
// ============================================================================

/// Gallery command: filter projects, or run a gallery subcommand.
#[derive(Parser, Debug)]
pub struct GalleryCommand {
    /// Project catalog file (defaults to the configured catalog path).
    #[arg(long)]
    pub catalog: Option<String>,

    /// Toggle a tag on; repeat to require several tags.
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Gallery subcommand to execute.
    #[command(subcommand)]
    pub command: Option<GalleryAction>,
}

/// Available gallery subcommands.
#[derive(Subcommand, Debug)]
pub enum GalleryAction {
    /// Show the tag taxonomy with project counts.
    Tags,

    /// Validate the project catalog.
    Validate,
}

// ============================================================================
// Config
// ============================================================================

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Get a configuration value by dotted key.
    Get {
        /// Dotted key (e.g., "posts.source_dir").
        key: String,
    },

    /// Set a configuration value by dotted key.
    Set {
        /// Dotted key (e.g., "posts.source_dir").
        key: String,

        /// Value to set.
        value: String,
    },

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },

    /// Export configuration as environment variables.
    Export {
        /// Format as Docker --env flags.
        #[arg(long)]
        docker_env: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_args_default() {
        let args = CliArgs::parse_from(["folio"]);
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_cli_args_global_flags_after_subcommand() {
        let args = CliArgs::parse_from(["folio", "index", "build", "-v", "--config", "c.toml"]);
        assert!(args.verbose);
        assert_eq!(args.config.as_deref(), Some("c.toml"));
    }

    #[test]
    fn test_version_command() {
        let args = CliArgs::parse_from(["folio", "version"]);
        assert!(matches!(args.command, Some(BaseCommand::Version)));
    }

    #[test]
    fn test_index_build_defaults() {
        let args = CliArgs::parse_from(["folio", "index", "build"]);
        match args.command {
            Some(BaseCommand::Index(IndexCommand {
                command: IndexAction::Build { target, dry_run },
            })) => {
                assert!(target.source.is_none());
                assert!(target.output.is_none());
                assert!(target.format.is_none());
                assert!(!dry_run);
            }
            _ => panic!("Expected Index Build command"),
        }
    }

    #[test]
    fn test_index_build_overrides() {
        let args = CliArgs::parse_from([
            "folio",
            "index",
            "build",
            "--source",
            "posts",
            "--output",
            "out/posts.js",
            "--format",
            "js",
            "--dry-run",
        ]);
        match args.command {
            Some(BaseCommand::Index(IndexCommand {
                command: IndexAction::Build { target, dry_run },
            })) => {
                assert_eq!(target.source.as_deref(), Some("posts"));
                assert_eq!(target.output.as_deref(), Some("out/posts.js"));
                assert_eq!(target.format.as_deref(), Some("js"));
                assert!(dry_run);
            }
            _ => panic!("Expected Index Build command"),
        }
    }

    #[test]
    fn test_index_check_command() {
        let args = CliArgs::parse_from(["folio", "index", "check", "-o", "posts.json"]);
        match args.command {
            Some(BaseCommand::Index(IndexCommand {
                command: IndexAction::Check { target },
            })) => assert_eq!(target.output.as_deref(), Some("posts.json")),
            _ => panic!("Expected Index Check command"),
        }
    }

    #[test]
    fn test_posts_command() {
        let args = CliArgs::parse_from(["folio", "posts", "--index", "posts.json"]);
        match args.command {
            Some(BaseCommand::Posts { index }) => assert_eq!(index.as_deref(), Some("posts.json")),
            _ => panic!("Expected Posts command"),
        }
    }

    #[test]
    fn test_gallery_with_tags() {
        let args = CliArgs::parse_from(["folio", "gallery", "--tag", "Python", "-t", "R"]);
        match args.command {
            Some(BaseCommand::Gallery(GalleryCommand {
                catalog,
                tags,
                command,
            })) => {
                assert!(catalog.is_none());
                assert_eq!(tags, vec!["Python", "R"]);
                assert!(command.is_none());
            }
            _ => panic!("Expected Gallery command"),
        }
    }

    #[test]
    fn test_gallery_validate_with_catalog() {
        let args = CliArgs::parse_from(["folio", "gallery", "--catalog", "c.toml", "validate"]);
        match args.command {
            Some(BaseCommand::Gallery(GalleryCommand {
                catalog,
                command: Some(GalleryAction::Validate),
                ..
            })) => assert_eq!(catalog.as_deref(), Some("c.toml")),
            _ => panic!("Expected Gallery Validate command"),
        }
    }

    #[test]
    fn test_gallery_tags_command() {
        let args = CliArgs::parse_from(["folio", "gallery", "tags"]);
        assert!(matches!(
            args.command,
            Some(BaseCommand::Gallery(GalleryCommand {
                command: Some(GalleryAction::Tags),
                ..
            }))
        ));
    }

    #[test]
    fn test_config_set_command() {
        let args = CliArgs::parse_from(["folio", "config", "set", "posts.extension", "markdown"]);
        match args.command {
            Some(BaseCommand::Config(ConfigCommand {
                command: ConfigAction::Set { key, value },
            })) => {
                assert_eq!(key, "posts.extension");
                assert_eq!(value, "markdown");
            }
            _ => panic!("Expected Config Set command"),
        }
    }

    #[test]
    fn test_config_init_force() {
        let args = CliArgs::parse_from(["folio", "config", "init", "--force"]);
        match args.command {
            Some(BaseCommand::Config(ConfigCommand {
                command: ConfigAction::Init { file, force },
            })) => {
                assert!(file.is_none());
                assert!(force);
            }
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_config_export_docker_env() {
        let args = CliArgs::parse_from(["folio", "config", "export", "--docker-env"]);
        assert!(matches!(
            args.command,
            Some(BaseCommand::Config(ConfigCommand {
                command: ConfigAction::Export { docker_env: true },
            }))
        ));
    }

    #[test]
    fn test_cli_debug_assert() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}
