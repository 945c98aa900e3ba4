use super::graph::ResourceGraph;
use super::types::{InterfaceDecl, KeyField, ResourceModel, TemplateInstantiation};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Serialization format of a model document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Yaml,
    Json,
    Toml,
}

impl ModelFormat {
    /// Pick a format from a file extension. Anything unrecognised is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => ModelFormat::Yaml,
            Some("toml") => ModelFormat::Toml,
            _ => ModelFormat::Json,
        }
    }
}

/// Key as written in a document: `thingId` or `{ name: id, param: thingId }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyDecl {
    Name(String),
    Field { name: String, param: Option<String> },
}

impl From<KeyDecl> for KeyField {
    fn from(decl: KeyDecl) -> Self {
        match decl {
            KeyDecl::Name(name) => KeyField::new(name),
            KeyDecl::Field {
                name,
                param: Some(param),
            } => KeyField::with_param(name, param),
            KeyDecl::Field { name, param: None } => KeyField::new(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDecl {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<KeyDecl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default)]
    pub singleton: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_of: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixinDecl {
    pub template: String,
    pub resource: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDoc {
    pub name: String,
    #[serde(default)]
    pub mixes: Vec<MixinDecl>,
}

/// On-disk representation of a bound resource model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDocument {
    #[serde(default)]
    pub resources: Vec<ResourceDecl>,
    #[serde(default)]
    pub interfaces: Vec<InterfaceDoc>,
}

impl ModelDocument {
    /// Resolve every name reference to a [`super::ResourceId`] and freeze the graph.
    ///
    /// # Errors
    ///
    /// Fails on duplicate resource names and on references to undeclared
    /// resources. Template names are not checked here.
    pub fn into_model(self) -> anyhow::Result<ResourceModel> {
        let mut builder = ResourceGraph::builder();

        for decl in &self.resources {
            if builder.contains(&decl.name) {
                bail!("resource '{}' is declared more than once", decl.name);
            }
            builder.resource(&decl.name);
        }

        let resolve = |builder: &mut super::ResourceGraphBuilder,
                       name: &str,
                       context: &str|
         -> anyhow::Result<super::ResourceId> {
            if !builder.contains(name) {
                bail!("{context} refers to undeclared resource '{name}'");
            }
            Ok(builder.resource(name).id())
        };

        for decl in self.resources {
            if decl.singleton && decl.extension_of.is_some() {
                bail!(
                    "resource '{}' cannot be both a singleton and an extension",
                    decl.name
                );
            }
            let parent = match &decl.parent {
                Some(name) => Some(resolve(
                    &mut builder,
                    name,
                    &format!("parent of '{}'", decl.name),
                )?),
                None => None,
            };
            let target = match &decl.extension_of {
                Some(name) => Some(resolve(
                    &mut builder,
                    name,
                    &format!("extension_of of '{}'", decl.name),
                )?),
                None => None,
            };

            let node = builder.resource(&decl.name);
            let node = match decl.key {
                Some(key) => node.key_field(key.into()),
                None => node,
            };
            let node = match &decl.segment {
                Some(segment) => node.segment(segment),
                None => node,
            };
            let node = match parent {
                Some(parent) => node.parent(parent),
                None => node,
            };
            let node = if decl.singleton { node.singleton() } else { node };
            let node = match target {
                Some(target) => node.extension_of(target),
                None => node,
            };
            debug!(resource = %decl.name, id = %node.id(), "Resource declared");
        }

        let mut interfaces = Vec::with_capacity(self.interfaces.len());
        for iface in self.interfaces {
            let mut mixes = Vec::with_capacity(iface.mixes.len());
            for (index, mixin) in iface.mixes.into_iter().enumerate() {
                let context = format!("{}[{index}]", iface.name);
                let resource = resolve(&mut builder, &mixin.resource, &context)?;
                let mut inst = TemplateInstantiation::new(mixin.template, resource);
                if let Some(target) = &mixin.target {
                    inst = inst.mounted_on(resolve(&mut builder, target, &context)?);
                }
                mixes.push(inst);
            }
            interfaces.push(InterfaceDecl::new(iface.name, mixes));
        }

        let graph = builder.build();
        debug!(
            resources = graph.len(),
            interfaces = interfaces.len(),
            "Resource model bound"
        );
        Ok(ResourceModel::new(graph, interfaces))
    }
}

/// Parse a model document from a string.
pub fn load_model_from_str(content: &str, format: ModelFormat) -> anyhow::Result<ResourceModel> {
    let doc: ModelDocument = match format {
        ModelFormat::Yaml => serde_yaml::from_str(content).context("invalid YAML model")?,
        ModelFormat::Json => serde_json::from_str(content).context("invalid JSON model")?,
        ModelFormat::Toml => toml::from_str(content).context("invalid TOML model")?,
    };
    doc.into_model()
}

/// Load and bind a model document from disk (YAML, JSON or TOML by extension).
pub fn load_model(path: impl AsRef<Path>) -> anyhow::Result<ResourceModel> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read model {}", path.display()))?;
    load_model_from_str(&content, ModelFormat::from_path(path))
        .with_context(|| format!("failed to load model {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MountMode;

    const YAML_MODEL: &str = r#"
resources:
  - name: Thing
    key: thingId
    segment: things
  - name: Subthing
    key: { name: id, param: subthingId }
    segment: subthings
    parent: Thing
  - name: Singleton
    segment: singleton
    singleton: true
interfaces:
  - name: Things
    mixes:
      - { template: ResourceOperations, resource: Thing }
  - name: ThingsSingleton
    mixes:
      - { template: SingletonResourceOperations, resource: Singleton, target: Thing }
"#;

    #[test]
    fn test_load_yaml_model() {
        let model = load_model_from_str(YAML_MODEL, ModelFormat::Yaml).unwrap();
        let graph = &model.graph;
        let thing = graph.find("Thing").unwrap();
        let sub = graph.node(graph.find("Subthing").unwrap()).unwrap();
        assert_eq!(sub.parent, Some(thing));
        assert_eq!(sub.key_param(), Some("subthingId"));
        assert_eq!(sub.key.as_ref().map(|k| k.name.as_str()), Some("id"));

        let single = graph.node(graph.find("Singleton").unwrap()).unwrap();
        assert_eq!(single.mount, MountMode::Singleton);

        assert_eq!(model.interfaces.len(), 2);
        assert_eq!(model.interfaces[1].mixes[0].mount_target, Some(thing));
    }

    #[test]
    fn test_toml_model() {
        let content = r#"
[[resources]]
name = "Thing"
key = "thingId"
segment = "things"

[[interfaces]]
name = "Things"
mixes = [{ template = "ResourceRead", resource = "Thing" }]
"#;
        let model = load_model_from_str(content, ModelFormat::Toml).unwrap();
        assert_eq!(model.interfaces[0].mixes[0].template, "ResourceRead");
    }

    #[test]
    fn test_undeclared_reference_fails() {
        let content = r#"{
            "resources": [{ "name": "Sub", "key": "subId", "segment": "subs", "parent": "Ghost" }]
        }"#;
        let err = load_model_from_str(content, ModelFormat::Json).unwrap_err();
        assert!(err.to_string().contains("Ghost"));
    }

    #[test]
    fn test_duplicate_resource_fails() {
        let content = r#"{
            "resources": [{ "name": "A" }, { "name": "A" }]
        }"#;
        assert!(load_model_from_str(content, ModelFormat::Json).is_err());
    }

    #[test]
    fn test_singleton_extension_fails() {
        let content = r#"
resources:
  - { name: Thing, key: thingId, segment: things }
  - { name: Settings, segment: settings, singleton: true, extension_of: Thing }
"#;
        let err = load_model_from_str(content, ModelFormat::Yaml).unwrap_err();
        assert!(err.to_string().contains("both a singleton and an extension"));
    }

    #[test]
    fn test_unknown_template_is_kept_for_the_engine() {
        let content = r#"{
            "resources": [{ "name": "A", "key": "aId", "segment": "as" }],
            "interfaces": [{ "name": "As", "mixes": [{ "template": "Bogus", "resource": "A" }] }]
        }"#;
        let model = load_model_from_str(content, ModelFormat::Json).unwrap();
        assert_eq!(model.interfaces[0].mixes[0].template, "Bogus");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ModelFormat::from_path(Path::new("m.yml")), ModelFormat::Yaml);
        assert_eq!(ModelFormat::from_path(Path::new("m.toml")), ModelFormat::Toml);
        assert_eq!(ModelFormat::from_path(Path::new("m.json")), ModelFormat::Json);
    }
}
