//! # Resource Metadata Model
//!
//! Typed records describing resource-capable models and the interfaces that
//! mix operation templates into them. The model is produced once per
//! compilation (by a binder, or by [`load_model`] from a document) and is then
//! read-only: the route engine only ever takes `&ResourceModel`.
//!
//! ## Overview
//!
//! - [`ResourceGraph`] - arena of [`ResourceNode`]s addressed by [`ResourceId`]
//! - [`ResourceGraphBuilder`] - the only way to create or link nodes
//! - [`InterfaceDecl`] / [`TemplateInstantiation`] - ordered mix-ins per interface
//! - [`ResourceModel`] - graph plus interfaces, the engine's whole input
//!
//! ## Example
//!
//! ```rust
//! use restgen::model::{InterfaceDecl, ResourceGraph, ResourceModel, TemplateInstantiation};
//!
//! let mut builder = ResourceGraph::builder();
//! let thing = builder.resource("Thing").key("thingId").segment("things").id();
//! let graph = builder.build();
//!
//! let interfaces = vec![InterfaceDecl::new(
//!     "Things",
//!     vec![TemplateInstantiation::new("ResourceOperations", thing)],
//! )];
//! let model = ResourceModel::new(graph, interfaces);
//! assert_eq!(model.graph.len(), 1);
//! ```

mod graph;
mod load;
mod types;

pub use graph::*;
pub use load::*;
pub use types::*;
