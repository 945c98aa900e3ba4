//! Operation Template Expander.
//!
//! Each template name maps to a fixed, ordered list of standard operations.
//! This is a lookup table, nothing is computed from the bound type arguments.

use super::types::{HttpVerb, OperationKind, TargetShape};
use crate::error::ResourceError;
use std::fmt;
use std::str::FromStr;

use OperationKind::{Create, Delete, List, Read, Update};

const FULL: &[OperationKind] = &[Read, Update, Delete, Create, List];
const SINGLETON: &[OperationKind] = &[Read, Update];

/// How the template's resource argument gets mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountFamily {
    /// Use the resource's declared mount mode
    Plain,
    /// Under the owner's item path, no key
    Singleton,
    /// Under the target's item path, own key kept
    Extension,
}

/// Every template an interface may mix in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationTemplate {
    ResourceRead,
    ResourceUpdate,
    ResourceDelete,
    ResourceCreate,
    ResourceList,
    ResourceOperations,
    SingletonResourceRead,
    SingletonResourceUpdate,
    SingletonResourceOperations,
    ExtensionResourceRead,
    ExtensionResourceUpdate,
    ExtensionResourceDelete,
    ExtensionResourceCreate,
    ExtensionResourceList,
    ExtensionResourceOperations,
}

impl OperationTemplate {
    pub const ALL: [OperationTemplate; 15] = [
        OperationTemplate::ResourceRead,
        OperationTemplate::ResourceUpdate,
        OperationTemplate::ResourceDelete,
        OperationTemplate::ResourceCreate,
        OperationTemplate::ResourceList,
        OperationTemplate::ResourceOperations,
        OperationTemplate::SingletonResourceRead,
        OperationTemplate::SingletonResourceUpdate,
        OperationTemplate::SingletonResourceOperations,
        OperationTemplate::ExtensionResourceRead,
        OperationTemplate::ExtensionResourceUpdate,
        OperationTemplate::ExtensionResourceDelete,
        OperationTemplate::ExtensionResourceCreate,
        OperationTemplate::ExtensionResourceList,
        OperationTemplate::ExtensionResourceOperations,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            OperationTemplate::ResourceRead => "ResourceRead",
            OperationTemplate::ResourceUpdate => "ResourceUpdate",
            OperationTemplate::ResourceDelete => "ResourceDelete",
            OperationTemplate::ResourceCreate => "ResourceCreate",
            OperationTemplate::ResourceList => "ResourceList",
            OperationTemplate::ResourceOperations => "ResourceOperations",
            OperationTemplate::SingletonResourceRead => "SingletonResourceRead",
            OperationTemplate::SingletonResourceUpdate => "SingletonResourceUpdate",
            OperationTemplate::SingletonResourceOperations => "SingletonResourceOperations",
            OperationTemplate::ExtensionResourceRead => "ExtensionResourceRead",
            OperationTemplate::ExtensionResourceUpdate => "ExtensionResourceUpdate",
            OperationTemplate::ExtensionResourceDelete => "ExtensionResourceDelete",
            OperationTemplate::ExtensionResourceCreate => "ExtensionResourceCreate",
            OperationTemplate::ExtensionResourceList => "ExtensionResourceList",
            OperationTemplate::ExtensionResourceOperations => "ExtensionResourceOperations",
        }
    }

    /// Operations contributed, in emission order.
    pub const fn operations(&self) -> &'static [OperationKind] {
        match self {
            OperationTemplate::ResourceRead
            | OperationTemplate::SingletonResourceRead
            | OperationTemplate::ExtensionResourceRead => &[Read],
            OperationTemplate::ResourceUpdate
            | OperationTemplate::SingletonResourceUpdate
            | OperationTemplate::ExtensionResourceUpdate => &[Update],
            OperationTemplate::ResourceDelete | OperationTemplate::ExtensionResourceDelete => {
                &[Delete]
            }
            OperationTemplate::ResourceCreate | OperationTemplate::ExtensionResourceCreate => {
                &[Create]
            }
            OperationTemplate::ResourceList | OperationTemplate::ExtensionResourceList => &[List],
            OperationTemplate::ResourceOperations
            | OperationTemplate::ExtensionResourceOperations => FULL,
            OperationTemplate::SingletonResourceOperations => SINGLETON,
        }
    }

    pub const fn family(&self) -> MountFamily {
        match self {
            OperationTemplate::ResourceRead
            | OperationTemplate::ResourceUpdate
            | OperationTemplate::ResourceDelete
            | OperationTemplate::ResourceCreate
            | OperationTemplate::ResourceList
            | OperationTemplate::ResourceOperations => MountFamily::Plain,
            OperationTemplate::SingletonResourceRead
            | OperationTemplate::SingletonResourceUpdate
            | OperationTemplate::SingletonResourceOperations => MountFamily::Singleton,
            OperationTemplate::ExtensionResourceRead
            | OperationTemplate::ExtensionResourceUpdate
            | OperationTemplate::ExtensionResourceDelete
            | OperationTemplate::ExtensionResourceCreate
            | OperationTemplate::ExtensionResourceList
            | OperationTemplate::ExtensionResourceOperations => MountFamily::Extension,
        }
    }
}

impl FromStr for OperationTemplate {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationTemplate::ALL
            .iter()
            .find(|t| t.name() == s)
            .copied()
            .ok_or_else(|| ResourceError::UnknownOperationTemplate(s.to_string()))
    }
}

impl fmt::Display for OperationTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Expand a template name into its ordered `(verb, shape)` pairs.
///
/// # Errors
///
/// [`ResourceError::UnknownOperationTemplate`] for names outside the catalogue.
pub fn expand(name: &str) -> Result<Vec<(HttpVerb, TargetShape)>, ResourceError> {
    let template: OperationTemplate = name.parse()?;
    Ok(template
        .operations()
        .iter()
        .map(|op| (op.verb(), op.shape()))
        .collect())
}
