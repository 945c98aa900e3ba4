#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for the resource model linter

use crate::linter::{has_errors, lint_model, lint_model_file, path_shape, LintIssue, LintSeverity};
use crate::model::{load_model_from_str, ModelFormat};
use crate::routes::synthesize;
use std::io::Write;
use tempfile::NamedTempFile;

fn lint_yaml(content: &str) -> Vec<LintIssue> {
    let model = load_model_from_str(content, ModelFormat::Yaml).expect("load model");
    let synthesis = synthesize(&model.graph, &model.interfaces);
    lint_model(&model, &synthesis)
}

fn of_kind<'a>(issues: &'a [LintIssue], kind: &str) -> Vec<&'a LintIssue> {
    issues.iter().filter(|i| i.kind == kind).collect()
}

#[test]
fn test_clean_model_has_no_issues() {
    let issues = lint_yaml(
        r#"
resources:
  - { name: Thing, key: thingId, segment: things }
  - { name: Subthing, key: subthingId, segment: subthings, parent: Thing }
interfaces:
  - name: Subthings
    mixes:
      - { template: ResourceOperations, resource: Subthing }
"#,
    );
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");
}

#[test]
fn test_lint_resource_error() {
    let issues = lint_yaml(
        r#"
resources:
  - { name: Thing, segment: things }
interfaces:
  - name: Things
    mixes:
      - { template: ResourceRead, resource: Thing }
"#,
    );
    let errors = of_kind(&issues, "resource_error");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].severity, LintSeverity::Error);
    assert_eq!(errors[0].location, "Things[0] ResourceRead");
    assert!(errors[0].message.starts_with("UnaddressableResource"));
    assert!(has_errors(&issues));
}

#[test]
fn test_lint_segment_format() {
    let issues = lint_yaml(
        r#"
resources:
  - { name: Thing, key: thingId, segment: My_Things }
interfaces:
  - name: Things
    mixes:
      - { template: ResourceRead, resource: Thing }
"#,
    );
    let warnings = of_kind(&issues, "segment_format");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].severity, LintSeverity::Warning);
    assert_eq!(warnings[0].suggestion.as_deref(), Some("Change to: my-things"));
    assert!(!has_errors(&issues));
}

#[test]
fn test_lint_route_conflict_across_interfaces() {
    let issues = lint_yaml(
        r#"
resources:
  - { name: Thing, key: thingId, segment: things }
interfaces:
  - name: Things
    mixes:
      - { template: ResourceRead, resource: Thing }
  - name: MoreThings
    mixes:
      - { template: ResourceRead, resource: Thing }
"#,
    );
    let conflicts = of_kind(&issues, "route_conflict");
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].location, "MoreThings[0] ResourceRead");
    assert!(conflicts[0].message.contains("Things[0] ResourceRead"));
}

#[test]
fn test_conflict_ignores_placeholder_names() {
    assert_eq!(path_shape("/things/{thingId}/x"), path_shape("/things/{id}/x"));
    assert_ne!(path_shape("/things/{id}"), path_shape("/things"));
}

#[test]
fn test_lint_unused_resource() {
    let issues = lint_yaml(
        r#"
resources:
  - { name: Thing, key: thingId, segment: things }
  - { name: Exthing, key: exthingId, segment: extension }
  - { name: Orphan, key: orphanId, segment: orphans }
interfaces:
  - name: ThingsExtension
    mixes:
      - { template: ExtensionResourceRead, resource: Exthing, target: Thing }
"#,
    );
    let unused = of_kind(&issues, "unused_resource");
    assert_eq!(unused.len(), 1);
    assert_eq!(unused[0].location, "resource:Orphan");
    assert_eq!(unused[0].severity, LintSeverity::Info);
}

#[test]
fn test_lint_model_file() {
    let mut temp = NamedTempFile::with_suffix(".json").expect("create temp file");
    temp.write_all(
        br#"{
  "resources": [{ "name": "Thing", "key": "thingId", "segment": "things" }],
  "interfaces": [{ "name": "Things", "mixes": [{ "template": "Bogus", "resource": "Thing" }] }]
}"#,
    )
    .expect("write model");
    temp.flush().expect("flush");

    let issues = lint_model_file(temp.path()).expect("lint model");
    assert!(has_errors(&issues));
    assert!(issues[0].message.contains("Bogus"));
}

#[test]
fn test_lint_ignored_mount_target() {
    let issues = lint_yaml(
        r#"
resources:
  - { name: Thing, key: thingId, segment: things }
  - { name: Singleton, segment: singleton, singleton: true }
interfaces:
  - name: ThingsSingleton
    mixes:
      - { template: ResourceRead, resource: Singleton, target: Thing }
      - { template: SingletonResourceRead, resource: Singleton, target: Thing }
"#,
    );
    let ignored = of_kind(&issues, "ignored_mount_target");
    assert_eq!(ignored.len(), 1);
    assert_eq!(ignored[0].location, "ThingsSingleton[0] ResourceRead");
    assert_eq!(ignored[0].severity, LintSeverity::Warning);
    assert!(ignored[0].message.contains("'Thing'"));
}
