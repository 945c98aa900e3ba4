use crate::diagnostics::print_diagnostics;
use crate::linter::{has_errors, lint_model_file, print_lint_issues, LintSeverity};
use crate::routes::Synthesis;
use crate::runtime_config::RuntimeConfig;
use crate::watch::{reload_model, watch_model};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use tracing::info;

/// Command-line interface for the REST route synthesizer
#[derive(Parser, Debug)]
#[command(name = "restgen")]
#[command(about = "Synthesize REST routes from a resource model", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Synthesize routes and print them
    Routes {
        /// Path to the model document (YAML, JSON or TOML)
        #[arg(short, long)]
        model: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Worker threads (overrides RESTGEN_WORKERS)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Include interface, template and handler name for each route
        #[arg(long, default_value_t = false)]
        handlers: bool,
    },
    /// Lint a resource model
    ///
    /// Reports synthesis failures, badly formatted segments, conflicting
    /// routes and resources no interface reaches.
    Lint {
        /// Path to the model document (YAML, JSON or TOML)
        #[arg(short, long)]
        model: PathBuf,

        /// Exit with error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings and info)
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
    /// Re-synthesize whenever the model document changes
    Watch {
        /// Path to the model document (YAML, JSON or TOML)
        #[arg(short, long)]
        model: PathBuf,
    },
}

/// How `routes` prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

/// Parse command-line arguments and run the selected command.
///
/// # Errors
///
/// Returns an error if:
/// - The model document cannot be read or parsed
/// - Synthesis reported diagnostics and `RESTGEN_FAIL_ON_DIAGNOSTICS` is on
/// - `lint --fail-on-error` found errors
/// - The file watcher cannot be set up
pub fn run_cli() -> anyhow::Result<()> {
    execute(Cli::parse(), RuntimeConfig::from_env())
}

/// Run an already-parsed command.
pub fn execute(cli: Cli, config: RuntimeConfig) -> anyhow::Result<()> {
    match cli.command {
        Commands::Routes {
            model,
            format,
            workers,
            handlers,
        } => {
            let workers = workers.filter(|n| *n > 0).unwrap_or(config.workers);
            let synthesis = reload_model(&model, workers)?;
            print!("{}", render_routes(&synthesis, format, handlers)?);

            if !synthesis.is_clean() {
                print_diagnostics(&synthesis.diagnostics);
                if config.fail_on_diagnostics {
                    anyhow::bail!(
                        "{} instantiation(s) failed in {}",
                        synthesis.diagnostics.len(),
                        model.display()
                    );
                }
            }
            Ok(())
        }
        Commands::Lint {
            model,
            fail_on_error,
            errors_only,
        } => {
            let mut issues = lint_model_file(&model)?;
            if errors_only {
                issues.retain(|i| i.severity == LintSeverity::Error);
            }
            print_lint_issues(&issues);
            if fail_on_error && has_errors(&issues) {
                anyhow::bail!("Lint failed for {}", model.display());
            }
            Ok(())
        }
        Commands::Watch { model } => {
            let initial = reload_model(&model, config.workers)?;
            println!("{}", summary_line(&initial));
            let table = Arc::new(RwLock::new(initial));

            let _watcher = watch_model(&model, Arc::clone(&table), config.workers, |synthesis| {
                println!("{}", summary_line(synthesis));
                if !synthesis.is_clean() {
                    print_diagnostics(&synthesis.diagnostics);
                }
            })
            .with_context(|| format!("Failed to watch {}", model.display()))?;

            info!(path = %model.display(), "Watching model for changes");
            loop {
                std::thread::park();
            }
        }
    }
}

fn summary_line(synthesis: &Synthesis) -> String {
    format!(
        "🔁 {} route(s), {} diagnostic(s)",
        synthesis.len(),
        synthesis.diagnostics.len()
    )
}

/// Render a synthesis in the requested format.
///
/// JSON and YAML emit bare descriptors, or full entries with `handlers`.
pub fn render_routes(
    synthesis: &Synthesis,
    format: OutputFormat,
    handlers: bool,
) -> anyhow::Result<String> {
    let rendered = match (format, handlers) {
        (OutputFormat::Table, _) => render_table(synthesis, handlers),
        (OutputFormat::Json, true) => serde_json::to_string_pretty(&synthesis.entries)? + "\n",
        (OutputFormat::Json, false) => {
            serde_json::to_string_pretty(&synthesis.descriptors())? + "\n"
        }
        (OutputFormat::Yaml, true) => serde_yaml::to_string(&synthesis.entries)?,
        (OutputFormat::Yaml, false) => serde_yaml::to_string(&synthesis.descriptors())?,
    };
    Ok(rendered)
}

fn render_table(synthesis: &Synthesis, handlers: bool) -> String {
    let path_width = synthesis
        .entries
        .iter()
        .map(|e| e.route.path.len())
        .max()
        .unwrap_or(0)
        .max("PATH".len());

    let mut out = String::new();
    out.push_str(&format!("{:<7} {:<path_width$} PARAMS", "VERB", "PATH"));
    if handlers {
        out.push_str("  HANDLER");
    }
    out.push('\n');

    for entry in &synthesis.entries {
        let params = entry.route.params.join(",");
        let verb = entry.route.verb.as_str().to_uppercase();
        out.push_str(&format!("{verb:<7} {:<path_width$} {params}", entry.route.path));
        if handlers {
            out.push_str("  ");
            out.push_str(&entry.handler_name);
        }
        out.push('\n');
    }
    out
}
