//! # Route Synthesis Engine
//!
//! Expands interface declarations over a frozen [`crate::model::ResourceGraph`]
//! into an ordered list of [`RouteDescriptor`]s.
//!
//! ## Data Flow
//!
//! ```text
//! ResourceGraph ──> hierarchy::resolve ──> path::build_path <── template::expand
//!                                                │
//!                                   aggregate::synthesize ──> Synthesis
//! ```
//!
//! ## Guarantees
//!
//! - Output order is (interface, instantiation, operation) declaration order,
//!   for [`synthesize`] and [`synthesize_parallel`] alike
//! - `params` lists placeholders in the order they appear in `path`
//! - A parameter name never appears twice in one route
//! - Singletons never contribute a key placeholder
//! - Nothing is deduplicated: identical routes from different interfaces
//!   are all kept
//! - Two runs over the same model produce identical output
//!
//! ## Example
//!
//! ```rust
//! use restgen::model::{InterfaceDecl, ResourceGraph, TemplateInstantiation};
//! use restgen::routes::synthesize;
//!
//! let mut b = ResourceGraph::builder();
//! let thing = b.resource("Thing").key("thingId").segment("things").id();
//! let sub = b.resource("Subthing").key("subthingId").segment("subthings").parent(thing).id();
//! let graph = b.build();
//!
//! let interfaces = vec![InterfaceDecl::new(
//!     "Subthings",
//!     vec![TemplateInstantiation::new("ResourceRead", sub)],
//! )];
//! let routes = synthesize(&graph, &interfaces).descriptors();
//! assert_eq!(routes[0].path, "/things/{thingId}/subthings/{subthingId}");
//! assert_eq!(routes[0].params, ["thingId", "subthingId"]);
//! ```

pub mod aggregate;
pub mod hierarchy;
pub mod path;
pub mod template;
mod types;

pub use aggregate::{synthesize, synthesize_parallel};
pub use hierarchy::{resolve, Chain, ChainLink};
pub use path::{build_path, Mount, PathTemplate};
pub use template::{expand, MountFamily, OperationTemplate};
pub use types::*;
