// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Text rendering of Kubernetes objects for tool output

use crate::constants::NONE;
use crate::error::Result;
use kube::ResourceExt;
use serde::Serialize;

/// `namespace/name` for a namespaced object
pub fn qualified_name<K: ResourceExt>(obj: &K) -> String {
    format!("{}/{}", obj.namespace().unwrap_or_default(), obj.name_any())
}

/// Single-line JSON rendering of an optional field, `<none>` when unset
pub fn summary<T: Serialize>(value: Option<&T>) -> Result<String> {
    match value {
        Some(v) => Ok(serde_json::to_string(v)?),
        None => Ok(NONE.to_string()),
    }
}

/// Full YAML rendering of an object
pub fn describe<T: Serialize>(obj: &T) -> Result<String> {
    let yaml = serde_yaml::to_string(obj)?;
    Ok(yaml.trim_end().to_string())
}

/// One entry per line, or `No <kind> found.` when there are none
pub fn lines_or_empty(entries: Vec<String>, kind: &str) -> String {
    join_or_empty(entries, "\n", kind)
}

/// Entries separated by a blank line, or `No <kind> found.` when there are none
pub fn blocks_or_empty(entries: Vec<String>, kind: &str) -> String {
    join_or_empty(entries, "\n\n", kind)
}

fn join_or_empty(entries: Vec<String>, separator: &str, kind: &str) -> String {
    if entries.is_empty() {
        format!("No {} found.", kind)
    } else {
        entries.join(separator)
    }
}
