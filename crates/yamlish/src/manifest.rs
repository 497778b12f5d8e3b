//! Manifest assembly for copy-to-clipboard flows: the fixed
//! `apiVersion` / `kind` / `metadata` / `spec` shape, with the resource
//! body dropped in verbatim as the spec.

use crate::encode::encode;
use crate::value::Value;

/// The `metadata` block of a manifest. Labels and annotations are kept
/// in insertion order and omitted entirely when empty; a metadata block
/// with an empty label map reads the same as one that never had labels.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    name: String,
    namespace: Option<String>,
    labels: Vec<(String, String)>,
    annotations: Vec<(String, String)>,
}

impl Metadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Cluster-scoped resources leave this unset.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.push((key.into(), value.into()));
        self
    }

    pub fn annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.push((key.into(), value.into()));
        self
    }

    fn to_value(&self) -> Value {
        Value::mapping()
            .entry("name", self.name.clone())
            .entry_opt("namespace", self.namespace.clone())
            .entry_opt("labels", string_mapping(&self.labels))
            .entry_opt("annotations", string_mapping(&self.annotations))
            .build()
    }
}

fn string_mapping(pairs: &[(String, String)]) -> Option<Value> {
    if pairs.is_empty() {
        return None;
    }
    Some(Value::Mapping(
        pairs
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect(),
    ))
}

/// A full resource manifest. `spec` is whatever value tree the resource
/// body converts to, untouched.
#[derive(Debug, Clone)]
pub struct Manifest {
    api_version: String,
    kind: String,
    metadata: Metadata,
    spec: Value,
}

impl Manifest {
    pub fn new(
        api_version: impl Into<String>,
        kind: impl Into<String>,
        metadata: Metadata,
        spec: Value,
    ) -> Self {
        Self {
            api_version: api_version.into(),
            kind: kind.into(),
            metadata,
            spec,
        }
    }

    pub fn to_value(&self) -> Value {
        Value::mapping()
            .entry("apiVersion", self.api_version.clone())
            .entry("kind", self.kind.clone())
            .entry("metadata", self.metadata.to_value())
            .entry("spec", self.spec.clone())
            .build()
    }

    pub fn to_yaml(&self) -> String {
        encode(&self.to_value())
    }
}
