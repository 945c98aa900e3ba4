#![allow(dead_code)]

use restgen::model::{InterfaceDecl, ResourceGraph, ResourceId, TemplateInstantiation};
use restgen::RouteDescriptor;
use restgen::HttpVerb;

/// The `Thing` / `Subthing` / `Singleton` / `Exthing` family every scenario
/// is built from.
pub struct Things {
    pub graph: ResourceGraph,
    pub thing: ResourceId,
    pub subthing: ResourceId,
    pub singleton: ResourceId,
    pub exthing: ResourceId,
}

pub fn things() -> Things {
    let mut b = ResourceGraph::builder();
    let thing = b.resource("Thing").key("thingId").segment("things").id();
    let subthing = b
        .resource("Subthing")
        .key("subthingId")
        .segment("subthings")
        .parent(thing)
        .id();
    let singleton = b.resource("Singleton").segment("singleton").singleton().id();
    let exthing = b.resource("Exthing").key("exthingId").segment("extension").id();
    Things {
        graph: b.build(),
        thing,
        subthing,
        singleton,
        exthing,
    }
}

pub fn iface(name: &str, mixes: Vec<TemplateInstantiation>) -> InterfaceDecl {
    InterfaceDecl::new(name, mixes)
}

pub fn mix(template: &str, resource: ResourceId) -> TemplateInstantiation {
    TemplateInstantiation::new(template, resource)
}

pub fn route(verb: HttpVerb, path: &str, params: &[&str]) -> RouteDescriptor {
    RouteDescriptor::new(verb, path, params.iter().map(|p| p.to_string()).collect())
}

/// Full CRUD routes for an item path and a collection path, in template order.
pub fn crud(item: &str, item_params: &[&str], collection: &str, collection_params: &[&str]) -> Vec<RouteDescriptor> {
    vec![
        route(HttpVerb::Get, item, item_params),
        route(HttpVerb::Patch, item, item_params),
        route(HttpVerb::Delete, item, item_params),
        route(HttpVerb::Post, collection, collection_params),
        route(HttpVerb::Get, collection, collection_params),
    ]
}

pub const THINGS_YAML: &str = r#"
resources:
  - name: Thing
    key: thingId
    segment: things
  - name: Subthing
    key: subthingId
    segment: subthings
    parent: Thing
  - name: Singleton
    segment: singleton
    singleton: true
  - name: Exthing
    key: exthingId
    segment: extension
interfaces:
  - name: Things
    mixes:
      - { template: ResourceOperations, resource: Thing }
  - name: Subthings
    mixes:
      - { template: ResourceOperations, resource: Subthing }
  - name: ThingsSingleton
    mixes:
      - { template: SingletonResourceOperations, resource: Singleton, target: Thing }
  - name: ThingsExtension
    mixes:
      - { template: ExtensionResourceOperations, resource: Exthing, target: Thing }
  - name: SubthingsExtension
    mixes:
      - { template: ExtensionResourceOperations, resource: Exthing, target: Subthing }
"#;
