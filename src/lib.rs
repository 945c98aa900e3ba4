//! # restgen
//!
//! **restgen** derives the full set of REST routes a resource-oriented API
//! exposes from a declarative resource model. Resources form a parent
//! hierarchy, some are singletons, some extend another resource, and
//! interfaces mix standard operation templates (Read, Update, Delete, Create,
//! List) into them. From that model the engine produces one
//! [`RouteDescriptor`] per operation: an HTTP verb, a path template with
//! `{name}` placeholders and the ordered placeholder list.
//!
//! ## Architecture
//!
//! - **[`model`]** - Resource graph arena, interface declarations and the
//!   YAML/JSON/TOML document loader
//! - **[`routes`]** - Hierarchy resolution, path building, template
//!   expansion and aggregation
//! - **[`error`]** - The modeling defect taxonomy
//! - **[`diagnostics`]** - Defects attached to the instantiation that caused them
//! - **[`linter`]** - Model checks beyond hard failures
//! - **[`watch`]** - Re-synthesis on file change
//! - **[`runtime_config`]** / **[`logging`]** - Environment-driven settings
//! - **[`cli`]** - The `restgen` command
//!
//! ### Synthesis Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant CLI as CLI<br/>(restgen routes)
//!     participant Load as model::load_model
//!     participant Agg as routes::synthesize
//!     participant Tpl as routes::template
//!     participant Path as routes::path
//!
//!     CLI->>Load: load_model("resources.yaml")
//!     Load-->>CLI: ResourceModel
//!     CLI->>Agg: synthesize(&graph, &interfaces)
//!     loop each interface, each mix-in
//!         Agg->>Tpl: parse template name
//!         Tpl-->>Agg: operations
//!         loop each operation
//!             Agg->>Path: build_path(resource, shape, mount)
//!             Path-->>Agg: path + params
//!         end
//!     end
//!     Agg-->>CLI: Synthesis { entries, diagnostics }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use restgen::model::{InterfaceDecl, ResourceGraph, TemplateInstantiation};
//! use restgen::synthesize;
//!
//! let mut b = ResourceGraph::builder();
//! let thing = b.resource("Thing").key("thingId").segment("things").id();
//! let singleton = b
//!     .resource("Singleton")
//!     .segment("settings")
//!     .parent(thing)
//!     .singleton()
//!     .id();
//! let graph = b.build();
//!
//! let interfaces = vec![InterfaceDecl::new(
//!     "ThingsSingleton",
//!     vec![TemplateInstantiation::new("SingletonResourceRead", singleton)],
//! )];
//! let synthesis = synthesize(&graph, &interfaces);
//! assert!(synthesis.is_clean());
//!
//! let route = &synthesis.descriptors()[0];
//! assert_eq!(route.to_string(), "get /things/{thingId}/settings");
//! assert_eq!(route.params, ["thingId"]);
//! ```
//!
//! ## Errors
//!
//! A failing instantiation never aborts a run. It contributes no routes and
//! one [`diagnostics::Diagnostic`] carrying a [`ResourceError`]; callers turn
//! a non-empty list into a hard failure with [`diagnostics::ensure_clean`].

pub mod cli;
pub mod diagnostics;
pub mod error;
pub mod linter;
pub mod logging;
pub mod model;
pub mod routes;
pub mod runtime_config;
pub mod watch;

pub use error::ResourceError;
pub use model::{load_model, load_model_from_str, ModelFormat, ResourceId, ResourceModel};
pub use routes::{synthesize, synthesize_parallel, HttpVerb, RouteDescriptor, RouteEntry, Synthesis};
