//! Unit tests for CLI commands

use crate::cli::{execute, render_routes, Cli, Commands, OutputFormat};
use crate::model::{InterfaceDecl, ResourceGraph, TemplateInstantiation};
use crate::routes::synthesize;
use crate::runtime_config::RuntimeConfig;
use clap::Parser;
use std::io::Write;
use tempfile::NamedTempFile;

fn thing_synthesis() -> crate::routes::Synthesis {
    let mut b = ResourceGraph::builder();
    let thing = b.resource("Thing").key("thingId").segment("things").id();
    let graph = b.build();
    let interfaces = vec![InterfaceDecl::new(
        "Things",
        vec![
            TemplateInstantiation::new("ResourceRead", thing),
            TemplateInstantiation::new("ResourceCreate", thing),
        ],
    )];
    synthesize(&graph, &interfaces)
}

fn model_file(content: &str) -> NamedTempFile {
    let mut temp = NamedTempFile::with_suffix(".yaml").unwrap();
    temp.write_all(content.as_bytes()).unwrap();
    temp.flush().unwrap();
    temp
}

#[test]
fn test_routes_command_defaults() {
    let cli = Cli::try_parse_from(["restgen", "routes", "--model", "model.yaml"]).unwrap();

    match cli.command {
        Commands::Routes {
            model,
            format,
            workers,
            handlers,
        } => {
            assert_eq!(model.to_string_lossy(), "model.yaml");
            assert_eq!(format, OutputFormat::Table);
            assert_eq!(workers, None);
            assert!(!handlers);
        }
        _ => panic!("Expected Routes command"),
    }
}

#[test]
fn test_routes_command_with_flags() {
    let cli = Cli::try_parse_from([
        "restgen",
        "routes",
        "--model",
        "model.toml",
        "--format",
        "yaml",
        "--workers",
        "4",
        "--handlers",
    ])
    .unwrap();

    match cli.command {
        Commands::Routes {
            format,
            workers,
            handlers,
            ..
        } => {
            assert_eq!(format, OutputFormat::Yaml);
            assert_eq!(workers, Some(4));
            assert!(handlers);
        }
        _ => panic!("Expected Routes command"),
    }
}

#[test]
fn test_lint_command_with_flags() {
    let cli = Cli::try_parse_from([
        "restgen",
        "lint",
        "--model",
        "model.yaml",
        "--fail-on-error",
        "--errors-only",
    ])
    .unwrap();

    match cli.command {
        Commands::Lint {
            model,
            fail_on_error,
            errors_only,
        } => {
            assert_eq!(model.to_string_lossy(), "model.yaml");
            assert!(fail_on_error);
            assert!(errors_only);
        }
        _ => panic!("Expected Lint command"),
    }
}

#[test]
fn test_all_commands_parse() {
    let commands = vec![
        vec!["restgen", "routes", "--model", "m.yaml"],
        vec!["restgen", "lint", "--model", "m.yaml"],
        vec!["restgen", "watch", "--model", "m.yaml"],
    ];
    for args in commands {
        assert!(Cli::try_parse_from(&args).is_ok(), "failed to parse {args:?}");
    }
}

#[test]
fn test_model_is_required() {
    assert!(Cli::try_parse_from(["restgen", "routes"]).is_err());
    assert!(Cli::try_parse_from(["restgen", "routes", "-m", "m.yaml", "--format", "xml"]).is_err());
}

#[test]
fn test_render_table() {
    let out = render_routes(&thing_synthesis(), OutputFormat::Table, true).unwrap();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("VERB"));
    assert!(lines[1].starts_with("GET     /things/{thingId} thingId"));
    assert!(lines[1].ends_with("things_read"));
    assert!(lines[2].starts_with("POST    /things"));
}

#[test]
fn test_render_json() {
    let out = render_routes(&thing_synthesis(), OutputFormat::Json, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"verb": "get", "path": "/things/{thingId}", "params": ["thingId"]},
            {"verb": "post", "path": "/things", "params": []}
        ])
    );

    let out = render_routes(&thing_synthesis(), OutputFormat::Json, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value[0]["handler_name"], "things_read");
    assert_eq!(value[1]["template"], "ResourceCreate");
}

#[test]
fn test_execute_routes_with_diagnostics() {
    let temp = model_file(
        r#"
resources:
  - { name: Thing, key: thingId, segment: things }
interfaces:
  - name: Things
    mixes:
      - { template: ResourceRead, resource: Thing }
      - { template: ResourceOps, resource: Thing }
"#,
    );
    let args = ["restgen", "routes", "--model", temp.path().to_str().unwrap()];

    let strict = RuntimeConfig::default();
    assert!(execute(Cli::try_parse_from(args).unwrap(), strict).is_err());

    let lenient = RuntimeConfig {
        fail_on_diagnostics: false,
        ..RuntimeConfig::default()
    };
    assert!(execute(Cli::try_parse_from(args).unwrap(), lenient).is_ok());
}

#[test]
fn test_execute_lint_fail_on_error() {
    let temp = model_file(
        r#"
resources:
  - { name: Thing, segment: things }
interfaces:
  - name: Things
    mixes:
      - { template: ResourceRead, resource: Thing }
"#,
    );
    let path = temp.path().to_str().unwrap();

    let cli = Cli::try_parse_from(["restgen", "lint", "--model", path]).unwrap();
    assert!(execute(cli, RuntimeConfig::default()).is_ok());

    let cli = Cli::try_parse_from(["restgen", "lint", "--model", path, "--fail-on-error"]).unwrap();
    assert!(execute(cli, RuntimeConfig::default()).is_err());
}
