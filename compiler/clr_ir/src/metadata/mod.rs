//! Assembly metadata as handed over by the assembly resolver.
//!
//! One `NodeAssembly` describes one external binary unit. The resolver
//! produces these once per compilation; they are read-only afterwards.
//! Field names follow the resolver's JSON (`returnType`, `isStatic`).

use serde::{Deserialize, Serialize};

/// Attribute tag: treat the type as a singleton object declaration.
pub const OBJECT_ATTRIBUTE: &str = "kotlin.clr.KotlinObject";

/// Attribute tag: treat the type as a namespace-level function container.
pub const FILE_CLASS_ATTRIBUTE: &str = "kotlin.clr.KotlinFileClass";

#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeAssembly {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub types: Vec<NodeType>,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeType {
    #[serde(default)]
    pub namespace: Option<String>,
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde(default)]
    pub methods: Vec<NodeMethod>,
    #[serde(default)]
    pub constructors: Vec<NodeConstructor>,
}

impl NodeType {
    pub fn has_attribute(&self, tag: &str) -> bool {
        self.attributes.iter().any(|attribute| attribute == tag)
    }

    /// Namespace, with the empty string standing for "none".
    pub fn namespace_or_root(&self) -> &str {
        self.namespace.as_deref().unwrap_or("")
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMethod {
    pub name: String,
    /// Absent means "any".
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub parameters: Vec<NodeParameter>,
    #[serde(default)]
    pub is_static: bool,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeConstructor {
    #[serde(default)]
    pub parameters: Vec<NodeParameter>,
    #[serde(default)]
    pub is_static: bool,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct NodeParameter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
}
