//! Handler functions for index CLI commands.
//!
//! These functions implement the logic behind `index build`, `index check`,
//! and `posts`.

use folio_content::{is_fresh, load_index, render, write_artifact, ArtifactFormat, IndexBuilder};
use folio_core::traits::{ConfigProvider, POSTS};
use folio_core::util::paths::expand_tilde;
use folio_core::{Error, Result};
use std::path::{Path, PathBuf};

use crate::cli::IndexTarget;

// ============================================================================
// Option types
// ============================================================================

/// Options for index build operations.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Source, output, and format overrides.
    pub target: IndexTarget,
    /// If true, show what would be written without writing.
    pub dry_run: bool,
}

/// Resolved source directory, artifact path, and format.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ResolvedTarget {
    source: PathBuf,
    output: PathBuf,
    format: ArtifactFormat,
}

// ============================================================================
// Helpers
// ============================================================================

/// Resolve command-line overrides against the configuration.
///
/// Format priority: `--format`, configured format, output file extension,
/// JSON.
fn resolve_target<C: ConfigProvider>(config: &C, target: &IndexTarget) -> Result<ResolvedTarget> {
    let source = match target.source {
        Some(ref p) => expand_tilde(p),
        None => config.content_path(POSTS)?,
    };
    let output = match target.output {
        Some(ref p) => expand_tilde(p),
        None => config.artifact_path()?,
    };
    let format = match target.format.as_deref().or(config.artifact_format()) {
        Some(name) => name.parse()?,
        None => ArtifactFormat::from_path(&output).unwrap_or_default(),
    };
    Ok(ResolvedTarget {
        source,
        output,
        format,
    })
}

fn builder_for<C: ConfigProvider>(config: &C, source: &Path) -> IndexBuilder {
    IndexBuilder::new(source).with_extension(config.post_extension())
}

// ============================================================================
// Handlers
// ============================================================================

/// Build the post index and write the artifact.
///
/// The artifact is replaced atomically; on any error it is left untouched.
pub async fn handle_build<C: ConfigProvider>(config: &C, options: BuildOptions) -> Result<()> {
    let target = resolve_target(config, &options.target)?;

    println!("Building post index from: {}", target.source.display());

    let (index, stats) = builder_for(config, &target.source).build().await?;
    let rendered = render(&index, target.format)?;

    println!("Index built:");
    println!("  Posts:           {}", index.len());
    println!("  Files processed: {}", stats.files_processed);
    if !stats.unsafe_slugs.is_empty() {
        println!("  Unsafe slugs:    {}", stats.unsafe_slugs.join(", "));
    }

    if options.dry_run {
        println!("\nDry run; artifact not written.");
        println!(
            "Would write {} bytes ({}) to {}",
            rendered.len(),
            target.format,
            target.output.display()
        );
        return Ok(());
    }

    if is_fresh(&target.output, &rendered)? {
        println!("\nArtifact unchanged: {}", target.output.display());
        return Ok(());
    }

    write_artifact(&target.output, &rendered)?;
    println!("\nArtifact written to: {}", target.output.display());
    Ok(())
}

/// Check that the artifact on disk matches a fresh build.
///
/// Returns an error when the artifact is missing or stale.
pub async fn handle_check<C: ConfigProvider>(config: &C, target: IndexTarget) -> Result<()> {
    let target = resolve_target(config, &target)?;

    let (index, _) = builder_for(config, &target.source).build().await?;
    let rendered = render(&index, target.format)?;

    if is_fresh(&target.output, &rendered)? {
        println!(
            "Index is up to date ({} posts): {}",
            index.len(),
            target.output.display()
        );
        Ok(())
    } else {
        println!("Index is stale: {}", target.output.display());
        Err(Error::operation(format!(
            "{} is out of date; run `folio index build`",
            target.output.display()
        )))
    }
}

/// List posts from an artifact, newest first.
pub async fn handle_posts<C: ConfigProvider>(config: &C, index: Option<String>) -> Result<()> {
    let path = match index {
        Some(p) => expand_tilde(p),
        None => config.artifact_path()?,
    };
    if !path.exists() {
        return Err(Error::not_found(format!(
            "No post index at {}; run `folio index build` first",
            path.display()
        )));
    }
    let format = match config.artifact_format() {
        Some(name) if ArtifactFormat::from_path(&path).is_none() => name.parse()?,
        _ => ArtifactFormat::from_path(&path).unwrap_or_default(),
    };

    let index = load_index(&path, format)?;

    println!("Posts ({}):", index.len());
    for post in index.chronological() {
        let date = post
            .published()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| post.date.clone());
        if post.tags.is_empty() {
            println!("  {date}  {} ({})", post.name, post.slug);
        } else {
            println!(
                "  {date}  {} ({}) [{}]",
                post.name,
                post.slug,
                post.tags.join(", ")
            );
        }
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
