//! # Model Watch Module
//!
//! Re-synthesizes routes whenever a model document changes on disk.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use restgen::routes::Synthesis;
//! use restgen::watch::watch_model;
//! use std::sync::{Arc, RwLock};
//!
//! let table = Arc::new(RwLock::new(Synthesis::default()));
//! let watcher = watch_model("resources.yaml", table.clone(), 1, |synthesis| {
//!     println!("Reloaded {} routes", synthesis.len());
//! })?;
//! ```
//!
//! ## Error Handling
//!
//! A document that fails to load is logged and skipped. The previous
//! [`Synthesis`] stays in the shared table until a loadable version appears.
//! A document that loads but has modeling defects does replace the table;
//! its diagnostics travel with it.

use crate::model::load_model;
use crate::routes::{synthesize_parallel, Synthesis};
use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::{error, info, warn};

/// Load `path` and synthesize it with `workers` threads.
pub fn reload_model(path: &Path, workers: usize) -> anyhow::Result<Synthesis> {
    let model = load_model(path)?;
    Ok(synthesize_parallel(&model.graph, &model.interfaces, workers))
}

/// Watch a model document and swap a fresh [`Synthesis`] into `table` on
/// every modify or create event. `on_reload` sees the new synthesis after the
/// swap.
///
/// The returned watcher stops when dropped.
pub fn watch_model<P, F>(
    model_path: P,
    table: Arc<RwLock<Synthesis>>,
    workers: usize,
    mut on_reload: F,
) -> notify::Result<RecommendedWatcher>
where
    P: AsRef<Path>,
    F: FnMut(&Synthesis) + Send + 'static,
{
    let path: PathBuf = model_path.as_ref().to_path_buf();
    let watch_path = path.clone();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    return;
                }
                let synthesis = match reload_model(&watch_path, workers) {
                    Ok(synthesis) => synthesis,
                    Err(e) => {
                        warn!(path = %watch_path.display(), error = %e, "Model reload skipped");
                        return;
                    }
                };
                info!(
                    routes = synthesis.len(),
                    diagnostics = synthesis.diagnostics.len(),
                    "Model reloaded"
                );
                match table.write() {
                    Ok(mut current) => *current = synthesis.clone(),
                    Err(_) => {
                        error!("Route table lock poisoned, reload dropped");
                        return;
                    }
                }
                on_reload(&synthesis);
            }
            Err(e) => error!(error = ?e, "watch error"),
        },
        Config::default(),
    )?;

    watcher.watch(&path, RecursiveMode::NonRecursive)?;
    Ok(watcher)
}
