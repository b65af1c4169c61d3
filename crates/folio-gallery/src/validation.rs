//! Catalog validation and integrity checking.
//!
//! Checks the hand-authored catalog for tags that belong to no group or to
//! several, duplicated projects, and unused taxonomy entries. Validation
//! is advisory for the filter engine: matching never consults groups.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::catalog::Catalog;

// ============================================================================
// Types
// ============================================================================

/// Result of catalog validation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the catalog is valid (no errors).
    pub valid: bool,
    /// Issues that break the catalog's invariants.
    pub errors: Vec<ValidationIssue>,
    /// Suspicious but harmless findings.
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a new empty (valid) result.
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error (marks the catalog as invalid).
    pub fn add_error(&mut self, issue: ValidationIssue) {
        self.valid = false;
        self.errors.push(issue);
    }

    /// Add a warning.
    pub fn add_warning(&mut self, issue: ValidationIssue) {
        self.warnings.push(issue);
    }

    /// Total issue count (errors + warnings).
    pub fn total_issues(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Whether any issue has the given code.
    pub fn has_code(&self, code: &str) -> bool {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .any(|i| i.code == code)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// A validation issue found in the catalog.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Issue type/code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Affected projects, if any.
    pub projects: Vec<String>,
}

impl ValidationIssue {
    /// Create a new issue.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            projects: Vec::new(),
        }
    }

    /// Attach affected projects.
    pub fn with_projects(mut self, projects: Vec<String>) -> Self {
        self.projects = projects;
        self
    }
}

// ============================================================================
// Validation functions
// ============================================================================

/// Validate a catalog.
///
/// Errors:
/// - `unknown_tag`: a project tag listed in no group
/// - `ambiguous_tag`: a tag listed in more than one group
/// - `duplicate_project`: two projects with the same name
///
/// Warnings:
/// - `empty_group`, `duplicate_tag` (repeated within one group),
///   `unused_tag`, `untagged_project`
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_groups(catalog, &mut result);
    check_unknown_tags(catalog, &mut result);
    check_duplicate_projects(catalog, &mut result);
    check_unused_tags(catalog, &mut result);
    check_untagged_projects(catalog, &mut result);

    result
}

// ============================================================================
// Individual checks
// ============================================================================

fn check_groups(catalog: &Catalog, result: &mut ValidationResult) {
    let mut owners: HashMap<&str, Vec<&str>> = HashMap::new();

    for group in catalog.taxonomy().groups() {
        if group.tags.is_empty() {
            result.add_warning(ValidationIssue::new(
                "empty_group",
                format!("Group '{}' has no tags", group.name),
            ));
        }

        let mut seen = HashSet::new();
        for tag in &group.tags {
            if !seen.insert(tag.as_str()) {
                result.add_warning(ValidationIssue::new(
                    "duplicate_tag",
                    format!("Tag '{tag}' is listed twice in group '{}'", group.name),
                ));
                continue;
            }
            owners.entry(tag.as_str()).or_default().push(&group.name);
        }
    }

    for tag in catalog.taxonomy().all_tags() {
        if let Some(groups) = owners.get(tag).filter(|g| g.len() > 1) {
            result.add_error(ValidationIssue::new(
                "ambiguous_tag",
                format!("Tag '{tag}' belongs to several groups: {}", groups.join(", ")),
            ));
        }
    }
}

fn check_unknown_tags(catalog: &Catalog, result: &mut ValidationResult) {
    let mut unknown: Vec<(&str, Vec<String>)> = Vec::new();

    for project in &catalog.projects {
        for tag in &project.tags {
            if catalog.taxonomy().contains(tag) {
                continue;
            }
            match unknown.iter_mut().find(|(t, _)| *t == tag.as_str()) {
                Some((_, projects)) => projects.push(project.name.clone()),
                None => unknown.push((tag.as_str(), vec![project.name.clone()])),
            }
        }
    }

    for (tag, projects) in unknown {
        result.add_error(
            ValidationIssue::new(
                "unknown_tag",
                format!("Tag '{tag}' is not in any group"),
            )
            .with_projects(projects),
        );
    }
}

fn check_duplicate_projects(catalog: &Catalog, result: &mut ValidationResult) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    for project in &catalog.projects {
        if !seen.insert(project.name.as_str()) && reported.insert(project.name.as_str()) {
            result.add_error(
                ValidationIssue::new(
                    "duplicate_project",
                    format!("Project '{}' appears more than once", project.name),
                )
                .with_projects(vec![project.name.clone()]),
            );
        }
    }
}

fn check_unused_tags(catalog: &Catalog, result: &mut ValidationResult) {
    let counts = catalog.tag_counts();
    for tag in catalog.taxonomy().all_tags() {
        if !counts.contains_key(tag) {
            result.add_warning(ValidationIssue::new(
                "unused_tag",
                format!("Tag '{tag}' is not used by any project"),
            ));
        }
    }
}

fn check_untagged_projects(catalog: &Catalog, result: &mut ValidationResult) {
    let untagged: Vec<String> = catalog
        .projects
        .iter()
        .filter(|p| p.tags.is_empty())
        .map(|p| p.name.clone())
        .collect();

    if !untagged.is_empty() {
        result.add_warning(
            ValidationIssue::new(
                "untagged_project",
                format!("{} project(s) have no tags", untagged.len()),
            )
            .with_projects(untagged),
        );
    }
}

// ============================================================================
// Tests
// ============================================================================
