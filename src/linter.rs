//! # Resource Model Linter
//!
//! Checks a resource model and its synthesized routes for defects and for
//! things downstream emitters will trip over.
//!
//! ## Checks Performed
//!
//! 1. **resource_error** - every synthesis diagnostic, as an error
//! 2. **segment_format** - segments should be lowercase URL-safe tokens
//! 3. **route_conflict** - two routes with the same verb and path shape
//! 4. **unused_resource** - a declared resource no interface reaches
//! 5. **ignored_mount_target** - a `target` given to a plain template, which
//!    mounts by the resource's own declaration
//!
//! ## Usage
//!
//! ```rust,ignore
//! use restgen::linter::{lint_model_file, print_lint_issues};
//!
//! let issues = lint_model_file("resources.yaml".as_ref())?;
//! print_lint_issues(&issues);
//! ```

use crate::model::{load_model, MountMode, ResourceId, ResourceModel};
use crate::routes::{synthesize, MountFamily, OperationTemplate, Synthesis};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

#[cfg(test)]
mod tests;

static SEGMENT_RE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-z0-9][a-z0-9._~-]*$").expect("valid segment regex")
});

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\{[^}/]+\}").expect("valid placeholder regex")
});

/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LintSeverity {
    /// Error - the model does not synthesize cleanly
    Error,
    /// Warning - routes are produced but likely wrong downstream
    Warning,
    /// Info - housekeeping
    Info,
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintSeverity::Error => write!(f, "error"),
            LintSeverity::Warning => write!(f, "warning"),
            LintSeverity::Info => write!(f, "info"),
        }
    }
}

/// A lint issue found in a resource model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    /// Where the issue occurred (e.g., "resource:Thing", "Things[0] ResourceRead")
    pub location: String,
    pub severity: LintSeverity,
    /// Type of lint issue (e.g., "segment_format")
    pub kind: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl LintIssue {
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Load a model file, synthesize it and lint the result.
pub fn lint_model_file(path: &Path) -> anyhow::Result<Vec<LintIssue>> {
    let model = load_model(path)?;
    let synthesis = synthesize(&model.graph, &model.interfaces);
    Ok(lint_model(&model, &synthesis))
}

/// Lint a model against a synthesis of that same model.
pub fn lint_model(model: &ResourceModel, synthesis: &Synthesis) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    lint_diagnostics(&mut issues, synthesis);
    lint_segments(&mut issues, model);
    lint_conflicts(&mut issues, synthesis);
    lint_unused(&mut issues, model);
    lint_ignored_targets(&mut issues, model);
    issues
}

fn lint_diagnostics(issues: &mut Vec<LintIssue>, synthesis: &Synthesis) {
    for diagnostic in &synthesis.diagnostics {
        issues.push(
            LintIssue::new(
                diagnostic.location(),
                LintSeverity::Error,
                "resource_error",
                format!("{}: {}", diagnostic.kind(), diagnostic.error),
            )
            .with_suggestion("This instantiation produced no routes"),
        );
    }
}

fn lint_segments(issues: &mut Vec<LintIssue>, model: &ResourceModel) {
    for node in model.graph.iter() {
        let Some(segment) = node.segment() else {
            continue;
        };
        if !SEGMENT_RE.is_match(segment) {
            let suggested = segment.to_lowercase().replace([' ', '_', '/'], "-");
            issues.push(
                LintIssue::new(
                    format!("resource:{}", node.name),
                    LintSeverity::Warning,
                    "segment_format",
                    format!("Segment '{segment}' is not a lowercase URL-safe token"),
                )
                .with_suggestion(format!("Change to: {suggested}")),
            );
        }
    }
}

/// `/things/{thingId}` and `/things/{id}` collide for a router.
fn path_shape(path: &str) -> String {
    PLACEHOLDER_RE.replace_all(path, "{}").into_owned()
}

fn lint_conflicts(issues: &mut Vec<LintIssue>, synthesis: &Synthesis) {
    let mut seen: HashMap<(crate::routes::HttpVerb, String), usize> = HashMap::new();
    for (i, entry) in synthesis.entries.iter().enumerate() {
        let key = (entry.route.verb, path_shape(&entry.route.path));
        match seen.get(&key) {
            Some(&first) => {
                let other = &synthesis.entries[first];
                issues.push(
                    LintIssue::new(
                        format!("{}[{}] {}", entry.interface, entry.index, entry.template),
                        LintSeverity::Warning,
                        "route_conflict",
                        format!(
                            "{} conflicts with the same route from {}[{}] {}",
                            entry.route, other.interface, other.index, other.template
                        ),
                    )
                    .with_suggestion("Remove one of the mix-ins or mount the resource elsewhere"),
                );
            }
            None => {
                seen.insert(key, i);
            }
        }
    }
}

fn lint_unused(issues: &mut Vec<LintIssue>, model: &ResourceModel) {
    let graph = &model.graph;
    let mut reached: HashSet<ResourceId> = HashSet::new();
    let mut pending: Vec<ResourceId> = model
        .interfaces
        .iter()
        .flat_map(|i| &i.mixes)
        .flat_map(|m| std::iter::once(m.resource).chain(m.mount_target))
        .collect();

    while let Some(id) = pending.pop() {
        if !reached.insert(id) {
            continue;
        }
        if let Some(node) = graph.get(id) {
            pending.extend(node.parent);
            if let MountMode::ExtensionOf(target) = node.mount {
                pending.push(target);
            }
        }
    }

    for node in graph.iter().filter(|n| !reached.contains(&n.id)) {
        issues.push(
            LintIssue::new(
                format!("resource:{}", node.name),
                LintSeverity::Info,
                "unused_resource",
                format!("Resource '{}' is not reachable from any interface", node.name),
            )
            .with_suggestion("Mix a template into an interface or remove the resource"),
        );
    }
}

fn lint_ignored_targets(issues: &mut Vec<LintIssue>, model: &ResourceModel) {
    for iface in &model.interfaces {
        for (index, inst) in iface.mixes.iter().enumerate() {
            let Some(target) = inst.mount_target else {
                continue;
            };
            let Ok(template) = inst.template.parse::<OperationTemplate>() else {
                continue;
            };
            if template.family() != MountFamily::Plain {
                continue;
            }
            issues.push(
                LintIssue::new(
                    format!("{}[{index}] {}", iface.name, inst.template),
                    LintSeverity::Warning,
                    "ignored_mount_target",
                    format!(
                        "Target '{}' has no effect on plain template {}",
                        model.graph.name_of(target),
                        inst.template
                    ),
                )
                .with_suggestion("Use a Singleton* or Extension* template, or drop the target"),
            );
        }
    }
}

pub fn has_errors(issues: &[LintIssue]) -> bool {
    issues.iter().any(|i| i.severity == LintSeverity::Error)
}

/// Print lint issues grouped by severity
pub fn print_lint_issues(issues: &[LintIssue]) {
    if issues.is_empty() {
        println!("✅ No lint issues found!");
        return;
    }

    let count = |severity| issues.iter().filter(|i| i.severity == severity).count();
    println!("\n📋 Lint Results:");
    println!(
        "   {} error(s), {} warning(s), {} info(s)\n",
        count(LintSeverity::Error),
        count(LintSeverity::Warning),
        count(LintSeverity::Info)
    );

    for (severity, heading) in [
        (LintSeverity::Error, "❌ Errors (must fix):"),
        (LintSeverity::Warning, "⚠️  Warnings (should fix):"),
        (LintSeverity::Info, "ℹ️  Info:"),
    ] {
        let group: Vec<_> = issues.iter().filter(|i| i.severity == severity).collect();
        if group.is_empty() {
            continue;
        }
        println!("{heading}");
        for issue in group {
            println!("   [{}] {}", issue.kind, issue.location);
            println!("      {}", issue.message);
            if let Some(suggestion) = &issue.suggestion {
                println!("      💡 Suggestion: {suggestion}");
            }
        }
        println!();
    }
}
