//! FolioCli application.
//!
//! Wires parsed arguments to the handlers, generic over the
//! [`ConfigProvider`] that supplies site paths.

use crate::cli::{BaseCommand, CliArgs, GalleryAction, GalleryCommand, IndexAction};
use crate::config::FolioConfig;
use crate::{config_handlers, gallery_handlers, index_handlers};
use folio_core::traits::ConfigProvider;
use folio_core::Result;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// ============================================================================
// FolioCli
// ============================================================================

/// CLI application parameterized over a config provider.
pub struct FolioCli<C: ConfigProvider> {
    name: String,
    config: Arc<C>,
    version: String,
}

impl FolioCli<FolioConfig> {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = FolioConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }
}

impl<C: ConfigProvider> FolioCli<C> {
    /// Create a new CLI application.
    pub fn new(name: impl Into<String>, config: C) -> Self {
        Self {
            name: name.into(),
            config: Arc::new(config),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Get a reference to the config provider.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // A subscriber may already be installed (e.g. in tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);
        tracing::debug!(project = self.config.project_name(), "dispatching command");

        match args.command {
            Some(BaseCommand::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Some(BaseCommand::Index(index_cmd)) => self.handle_index(index_cmd.command).await,
            Some(BaseCommand::Posts { index }) => {
                index_handlers::handle_posts(&*self.config, index).await
            }
            Some(BaseCommand::Gallery(gallery_cmd)) => self.handle_gallery(gallery_cmd).await,
            Some(BaseCommand::Config(config_cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
            None => {
                println!("{} {}: use --help for usage", self.name, self.version);
                Ok(())
            }
        }
    }

    /// Dispatch index subcommands to handlers.
    async fn handle_index(&self, command: IndexAction) -> Result<()> {
        match command {
            IndexAction::Build { target, dry_run } => {
                let options = index_handlers::BuildOptions { target, dry_run };
                index_handlers::handle_build(&*self.config, options).await
            }
            IndexAction::Check { target } => {
                index_handlers::handle_check(&*self.config, target).await
            }
        }
    }

    /// Dispatch gallery commands to handlers.
    async fn handle_gallery(&self, command: GalleryCommand) -> Result<()> {
        let catalog = command.catalog.as_deref();
        match command.command {
            Some(GalleryAction::Tags) => gallery_handlers::handle_tags(&*self.config, catalog).await,
            Some(GalleryAction::Validate) => {
                gallery_handlers::handle_validate(&*self.config, catalog).await
            }
            None => gallery_handlers::handle_filter(&*self.config, catalog, &command.tags).await,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::env_lock;
    use clap::Parser;
    use folio_core::traits::{CATALOG, POSTS};
    use folio_core::Error;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    #[derive(Clone)]
    struct TestConfig {
        base: PathBuf,
    }

    impl ConfigProvider for TestConfig {
        fn project_name(&self) -> &str {
            "test-site"
        }

        fn base_path(&self) -> Result<PathBuf> {
            Ok(self.base.clone())
        }

        fn content_path(&self, content_type: &str) -> Result<PathBuf> {
            match content_type {
                POSTS => Ok(self.base.join("posts")),
                CATALOG => Ok(self.base.join("catalog.toml")),
                other => Err(Error::config(format!("Unknown content type: {other}"))),
            }
        }

        fn artifact_path(&self) -> Result<PathBuf> {
            Ok(self.base.join("posts.json"))
        }
    }

    fn setup_site(dir: &Path) -> TestConfig {
        let posts = dir.join("posts");
        std::fs::create_dir_all(&posts).unwrap();
        std::fs::write(
            posts.join("first.md"),
            "#\nFirst Post\n2021-06-15\nRust, CLI\n",
        )
        .unwrap();
        std::fs::write(
            dir.join("catalog.toml"),
            "[[groups]]\nname = \"languages\"\ntags = [\"Rust\"]\n\n\
             [[projects]]\nname = \"Folio\"\nurl = \"https://example.com\"\ntags = [\"Rust\"]\n",
        )
        .unwrap();
        TestConfig {
            base: dir.to_path_buf(),
        }
    }

    #[test]
    fn test_folio_cli_new() {
        let dir = TempDir::new().unwrap();
        let cli = FolioCli::new("folio", setup_site(dir.path())).with_version("1.2.3");
        assert_eq!(cli.name, "folio");
        assert_eq!(cli.version, "1.2.3");
        assert_eq!(cli.config().project_name(), "test-site");
    }

    #[tokio::test]
    async fn test_run_version_and_no_command() {
        let dir = TempDir::new().unwrap();
        let cli = FolioCli::new("folio", setup_site(dir.path()));
        assert!(cli.run(CliArgs::parse_from(["folio", "version"])).await.is_ok());
        assert!(cli.run(CliArgs::parse_from(["folio"])).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_index_build_check_and_posts() {
        let dir = TempDir::new().unwrap();
        let cli = FolioCli::new("folio", setup_site(dir.path()));

        let check = || CliArgs::parse_from(["folio", "index", "check"]);
        assert!(cli.run(check()).await.is_err());

        cli.run(CliArgs::parse_from(["folio", "index", "build"]))
            .await
            .unwrap();
        assert!(dir.path().join("posts.json").exists());
        assert!(cli.run(check()).await.is_ok());
        assert!(cli.run(CliArgs::parse_from(["folio", "posts"])).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_gallery_commands() {
        let dir = TempDir::new().unwrap();
        let cli = FolioCli::new("folio", setup_site(dir.path()));

        for argv in [
            vec!["folio", "gallery"],
            vec!["folio", "gallery", "--tag", "Rust"],
            vec!["folio", "gallery", "tags"],
            vec!["folio", "gallery", "validate"],
        ] {
            assert!(cli.run(CliArgs::parse_from(argv)).await.is_ok());
        }
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let cli = FolioCli::new("folio", setup_site(dir.path()));
        cli.init_logging(false, false);
        cli.init_logging(true, false);
        cli.init_logging(false, true);
    }

    #[test]
    fn test_from_args_with_file() {
        let _lock = env_lock();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "project_name = \"from-file\"\n").unwrap();

        let args = CliArgs::parse_from(["folio", "--config", path.to_str().unwrap()]);
        let cli = FolioCli::from_args("folio", &args).unwrap();
        assert_eq!(cli.config().project_name(), "from-file");
    }
}
