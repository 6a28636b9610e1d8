//! Reporting for bulk imports that merge incoming records into existing ones.
//!
//! For every submitted object the report lists the fields the import changes,
//! in submission order, so `field_statuses[i]` always describes the i-th object.
use crate::value::FieldValue;
use optional_field::{Field, serde_optional_fields};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;
use utoipa::ToSchema;

/// One changed field. `old_value` is missing when the field had no previous value.
#[serde_optional_fields]
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldStatus {
    pub field_name: String,
    #[schema(value_type = Option<Object>)]
    pub old_value: Field<FieldValue>,
    #[schema(value_type = Object)]
    pub new_value: FieldValue,
}

impl FieldStatus {
    /// A field being given a value for the first time.
    pub fn set(field_name: impl Into<String>, new_value: FieldValue) -> Self {
        Self {
            field_name: field_name.into(),
            old_value: Field::Missing,
            new_value,
        }
    }

    pub fn changed(field_name: impl Into<String>, old_value: FieldValue, new_value: FieldValue) -> Self {
        Self {
            field_name: field_name.into(),
            old_value: Field::Present(Some(old_value)),
            new_value,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ObjectImportRep {
    pub field_statuses: Vec<Vec<FieldStatus>>,
}

impl ObjectImportRep {
    /// Number of submitted objects this report covers.
    pub fn len(&self) -> usize {
        self.field_statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.field_statuses.is_empty()
    }

    pub fn object(&self, index: usize) -> Option<&[FieldStatus]> {
        self.field_statuses.get(index).map(Vec::as_slice)
    }

    pub fn changed_object_count(&self) -> usize {
        self.field_statuses.iter().filter(|s| !s.is_empty()).count()
    }
}

/// A record whose fields can be reported on by an import.
pub trait Importable {
    /// Field names and values in the order they are reported. `None` means unset.
    fn import_fields(&self) -> Vec<(&'static str, Option<FieldValue>)>;
}

/// A record that can absorb the set values of an incoming copy of itself.
pub trait Mergeable {
    /// Unset values in `incoming` never erase values in `self`.
    fn merge_from(&mut self, incoming: Self);
}

/// Fields that `incoming` would change on `existing`.
pub fn field_changes<T>(existing: Option<&T>, incoming: &T) -> Vec<FieldStatus>
where
    T: Importable,
{
    let existing_fields = existing.map(Importable::import_fields).unwrap_or_default();

    incoming
        .import_fields()
        .into_iter()
        .filter_map(|(name, new_value)| {
            let new_value = new_value?;
            let old_value = existing_fields
                .iter()
                .find(|(existing_name, _)| *existing_name == name)
                .and_then(|(_, value)| value.clone());

            match old_value {
                Some(old_value) if old_value == new_value => None,
                Some(old_value) => Some(FieldStatus::changed(name, old_value, new_value)),
                None => Some(FieldStatus::set(name, new_value)),
            }
        })
        .collect()
}

/// The report for a batch plus the merged records that actually changed, one per key.
#[derive(Debug)]
pub struct ImportOutcome<T> {
    pub report: ObjectImportRep,
    pub changed: Vec<T>,
}

#[derive(Debug)]
struct Working<T> {
    record: T,
    changed: bool,
}

/// Accumulates an import one submitted object at a time.
///
/// Objects sharing a key merge into a single working copy, so a later object is
/// diffed against what the earlier ones already changed.
#[derive(Debug)]
pub struct ImportBatch<K, T> {
    field_statuses: Vec<Vec<FieldStatus>>,
    working: Vec<Working<T>>,
    by_key: HashMap<K, usize>,
}

impl<K, T> Default for ImportBatch<K, T> {
    fn default() -> Self {
        Self {
            field_statuses: Vec::new(),
            working: Vec::new(),
            by_key: HashMap::new(),
        }
    }
}

impl<K, T> ImportBatch<K, T>
where
    K: Eq + Hash,
    T: Importable + Mergeable,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            field_statuses: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Records the changes `incoming` makes. `existing` is the stored record for `key`
    /// and is ignored once an earlier object with the same key has been pushed.
    pub fn push(&mut self, key: K, existing: Option<T>, incoming: T) {
        let changes = match self.by_key.get(&key) {
            Some(&index) => {
                let working = &mut self.working[index];
                let changes = field_changes(Some(&working.record), &incoming);
                if !changes.is_empty() {
                    working.record.merge_from(incoming);
                    working.changed = true;
                }
                changes
            }
            None => {
                let changes = field_changes(existing.as_ref(), &incoming);
                let record = match existing {
                    Some(mut existing) => {
                        existing.merge_from(incoming);
                        existing
                    }
                    None => incoming,
                };
                self.by_key.insert(key, self.working.len());
                self.working.push(Working {
                    record,
                    changed: !changes.is_empty(),
                });
                changes
            }
        };
        self.field_statuses.push(changes);
    }

    pub fn len(&self) -> usize {
        self.field_statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.field_statuses.is_empty()
    }

    /// Changed records come out in the order their key was first seen.
    pub fn finish(self) -> ImportOutcome<T> {
        ImportOutcome {
            report: ObjectImportRep {
                field_statuses: self.field_statuses,
            },
            changed: self
                .working
                .into_iter()
                .filter(|w| w.changed)
                .map(|w| w.record)
                .collect(),
        }
    }
}
