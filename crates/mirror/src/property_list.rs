// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Property-list persistence.
//!
//! Converts a mirror's name → value mapping into a JSON object that can be
//! written to and read back from disk. Conversion is best effort: values
//! with no JSON representation are dropped, never reported as errors.
//!
//! | Value | Stored as |
//! |-------|-----------|
//! | bool, integers, finite floats | JSON bool / number |
//! | `String`, `char` | JSON string |
//! | `Some(v)` | `v` |
//! | sequence, set, tuple | JSON array |
//! | struct, string-keyed map | JSON object |
//! | enum | variant name |
//! | `None`, `()`, NaN/inf, 128-bit out of range, non-string keys | dropped |

use crate::mirror::Mirror;
use crate::reflect::DynamicValue;
use serde_json::{Map, Number, Value};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Property-list errors.
#[derive(Debug, Error)]
pub enum PropertyListError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSON-backed key-value container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyList {
    entries: Map<String, Value>,
}

impl PropertyList {
    /// Empty property list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a name → value mapping, dropping unrepresentable values.
    pub fn from_mapping(mapping: &HashMap<String, DynamicValue>) -> Self {
        let mut entries = Map::new();
        for (key, value) in mapping {
            match to_json(value) {
                Some(json) => {
                    entries.insert(key.clone(), json);
                }
                None => {
                    log::debug!("[plist] dropped {} ({})", key, value.kind_name());
                }
            }
        }
        Self { entries }
    }

    /// Stored value for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    /// Pretty-printed JSON document.
    pub fn to_json_string(&self) -> Result<String, PropertyListError> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// Write the JSON document to `writer`.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), PropertyListError> {
        serde_json::to_writer_pretty(writer, &self.entries)?;
        Ok(())
    }

    /// Save to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PropertyListError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        log::debug!("[plist] saved {} entries to {}", self.len(), path.display());
        Ok(())
    }

    /// Load a property list previously written by [`PropertyList::save`].
    ///
    /// The document must be a JSON object.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PropertyListError> {
        let reader = BufReader::new(File::open(path)?);
        let entries: Map<String, Value> = serde_json::from_reader(reader)?;
        Ok(Self { entries })
    }
}

impl<T> Mirror<T> {
    /// Property list built from [`Mirror::to_mapping`].
    pub fn to_property_list(&self) -> PropertyList {
        PropertyList::from_mapping(&self.to_mapping())
    }
}

fn to_json(value: &DynamicValue) -> Option<Value> {
    match value {
        DynamicValue::Bool(b) => Some(Value::Bool(*b)),
        DynamicValue::U8(v) => Some(Value::from(*v)),
        DynamicValue::U16(v) => Some(Value::from(*v)),
        DynamicValue::U32(v) => Some(Value::from(*v)),
        DynamicValue::U64(v) => Some(Value::from(*v)),
        DynamicValue::U128(v) => u64::try_from(*v).ok().map(Value::from),
        DynamicValue::I8(v) => Some(Value::from(*v)),
        DynamicValue::I16(v) => Some(Value::from(*v)),
        DynamicValue::I32(v) => Some(Value::from(*v)),
        DynamicValue::I64(v) => Some(Value::from(*v)),
        DynamicValue::I128(v) => i64::try_from(*v).ok().map(Value::from),
        DynamicValue::F32(v) => Number::from_f64(f64::from(*v)).map(Value::Number),
        DynamicValue::F64(v) => Number::from_f64(*v).map(Value::Number),
        DynamicValue::Char(c) => Some(Value::String(c.to_string())),
        DynamicValue::String(s) => Some(Value::String(s.clone())),
        DynamicValue::Optional(inner) => inner.as_deref().and_then(to_json),
        DynamicValue::Sequence(items) | DynamicValue::Set(items) | DynamicValue::Tuple(items) => {
            Some(Value::Array(items.iter().filter_map(to_json).collect()))
        }
        DynamicValue::Map(entries) => {
            let mut object = Map::new();
            for (key, value) in entries {
                let key = match key {
                    DynamicValue::String(s) => s.clone(),
                    DynamicValue::Char(c) => c.to_string(),
                    _ => return None,
                };
                if let Some(json) = to_json(value) {
                    object.insert(key, json);
                }
            }
            Some(Value::Object(object))
        }
        DynamicValue::Struct(fields) => {
            let object = fields
                .iter()
                .filter_map(|(name, value)| to_json(value).map(|json| (name.clone(), json)))
                .collect();
            Some(Value::Object(object))
        }
        DynamicValue::Enum(_, variant) => Some(Value::String(variant.clone())),
        DynamicValue::Unit => None,
    }
}
