//! Route Aggregator.
//!
//! Walks interfaces in declaration order, and each interface's mix-ins in
//! declaration order, appending one [`RouteEntry`] per expanded operation.
//! A failing instantiation contributes no routes and one [`Diagnostic`];
//! every other instantiation is still processed.

use super::path::{build_path, Mount};
use super::template::{MountFamily, OperationTemplate};
use super::types::{RouteDescriptor, RouteEntry, Synthesis};
use crate::diagnostics::Diagnostic;
use crate::error::ResourceError;
use crate::model::{InterfaceDecl, ResourceGraph, TemplateInstantiation};
use tracing::{debug, info, warn};

/// Synthesize routes for every interface, in order.
pub fn synthesize(graph: &ResourceGraph, interfaces: &[InterfaceDecl]) -> Synthesis {
    let mut out = Synthesis::default();
    for iface in interfaces {
        synthesize_interface(graph, iface, &mut out);
    }
    log_summary(&out, interfaces.len(), 1);
    out
}

/// Same output as [`synthesize`], with interfaces spread over `workers`
/// scoped threads. Results are stitched back together in declaration order.
pub fn synthesize_parallel(
    graph: &ResourceGraph,
    interfaces: &[InterfaceDecl],
    workers: usize,
) -> Synthesis {
    if workers <= 1 || interfaces.len() <= 1 {
        return synthesize(graph, interfaces);
    }

    let chunk_size = interfaces.len().div_ceil(workers);
    let parts: Vec<Synthesis> = std::thread::scope(|scope| {
        let handles: Vec<_> = interfaces
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    let mut part = Synthesis::default();
                    for iface in chunk {
                        synthesize_interface(graph, iface, &mut part);
                    }
                    part
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| match h.join() {
                Ok(part) => part,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    });

    let mut out = Synthesis::default();
    for part in parts {
        out.entries.extend(part.entries);
        out.diagnostics.extend(part.diagnostics);
    }
    log_summary(&out, interfaces.len(), workers);
    out
}

fn log_summary(out: &Synthesis, interfaces: usize, workers: usize) {
    info!(
        interfaces,
        routes = out.entries.len(),
        diagnostics = out.diagnostics.len(),
        workers,
        "Route synthesis complete"
    );
}

fn synthesize_interface(graph: &ResourceGraph, iface: &InterfaceDecl, out: &mut Synthesis) {
    let handler_prefix = to_snake_case(&iface.name);
    for (index, inst) in iface.mixes.iter().enumerate() {
        match expand_instantiation(graph, iface, index, inst, &handler_prefix) {
            Ok(entries) => {
                debug!(
                    interface = %iface.name,
                    index,
                    template = %inst.template,
                    routes = entries.len(),
                    "Instantiation expanded"
                );
                out.entries.extend(entries);
            }
            Err(error) => {
                warn!(
                    interface = %iface.name,
                    index,
                    template = %inst.template,
                    kind = error.kind(),
                    error = %error,
                    "Instantiation failed"
                );
                out.diagnostics.push(Diagnostic::new(
                    iface.name.clone(),
                    index,
                    inst.template.clone(),
                    error,
                ));
            }
        }
    }
}

/// All-or-nothing: any failing operation drops the whole instantiation.
fn expand_instantiation(
    graph: &ResourceGraph,
    iface: &InterfaceDecl,
    index: usize,
    inst: &TemplateInstantiation,
    handler_prefix: &str,
) -> Result<Vec<RouteEntry>, ResourceError> {
    let template: OperationTemplate = inst.template.parse()?;
    let mount = effective_mount(graph, template, inst)?;

    template
        .operations()
        .iter()
        .map(|op| {
            let built = build_path(graph, inst.resource, op.shape(), mount)?;
            Ok(RouteEntry {
                interface: iface.name.clone(),
                index,
                template: inst.template.clone(),
                resource: inst.resource,
                operation: *op,
                handler_name: format!("{handler_prefix}_{op}"),
                route: RouteDescriptor::new(op.verb(), built.path, built.params),
            })
        })
        .collect()
}

/// Decide owner/target for this instantiation. The template's explicit
/// argument wins over whatever the node declares.
fn effective_mount(
    graph: &ResourceGraph,
    template: OperationTemplate,
    inst: &TemplateInstantiation,
) -> Result<Mount, ResourceError> {
    let node = graph.node(inst.resource)?;
    if let Some(target) = inst.mount_target {
        graph.node(target)?;
    }

    let declared = Mount::declared(node);
    match template.family() {
        MountFamily::Plain => {
            if let Some(target) = inst.mount_target {
                warn!(
                    resource = %node.name,
                    target = %graph.name_of(target),
                    template = template.name(),
                    "Mount target ignored by plain template"
                );
            }
            Ok(declared)
        }
        MountFamily::Singleton => Ok(Mount::Singleton(inst.mount_target.or(node.parent))),
        MountFamily::Extension => match (inst.mount_target, declared) {
            (Some(target), _) | (None, Mount::Extension(target)) => Ok(Mount::Extension(target)),
            (None, _) => Err(ResourceError::MissingMountTarget {
                id: node.id,
                name: node.name.clone(),
                template: template.name().to_string(),
            }),
        },
    }
}

/// `ThingsSingleton` -> `things_singleton`
pub(crate) fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for ch in s.chars() {
        if ch.is_uppercase() {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else if ch == '-' || ch == ' ' || ch == '.' {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
        } else {
            result.push(ch);
        }
    }
    result
}
