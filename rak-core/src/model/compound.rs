use engine::import::{Importable, Mergeable};
use engine::value::FieldValue;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A chemical inhibitor candidate. `compound_name` is the natural key and is compared ignoring case.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Compound {
    pub compound_name: String,
    pub chemotype: String,
    pub s10: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smiles: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_reference_url: Option<String>,
}

impl Compound {
    pub fn new<N, C, S>(compound_name: N, chemotype: C, s10: S) -> Self
    where
        N: Into<String>,
        C: Into<String>,
        S: Into<String>,
    {
        Self {
            compound_name: compound_name.into(),
            chemotype: chemotype.into(),
            s10: s10.into(),
            smiles: None,
            source: None,
            primary_reference: None,
            primary_reference_url: None,
        }
    }

    pub fn has_name(&self, compound_name: &str) -> bool {
        self.compound_name.eq_ignore_ascii_case(compound_name)
    }

    pub fn is_missing_publication_info(&self) -> bool {
        is_blank(self.primary_reference.as_deref()) || is_blank(self.primary_reference_url.as_deref())
    }

    /// No SMILES string or no s(10) value.
    pub fn is_incomplete(&self) -> bool {
        is_blank(self.smiles.as_deref()) || self.s10.trim().is_empty()
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

fn optional_text(value: Option<&String>) -> Option<FieldValue> {
    value.and_then(|v| FieldValue::text_if_not_blank(v.as_str()))
}

impl Importable for Compound {
    fn import_fields(&self) -> Vec<(&'static str, Option<FieldValue>)> {
        vec![
            ("compoundName", FieldValue::text_if_not_blank(self.compound_name.as_str())),
            ("chemotype", FieldValue::text_if_not_blank(self.chemotype.as_str())),
            ("s10", FieldValue::text_if_not_blank(self.s10.as_str())),
            ("smiles", optional_text(self.smiles.as_ref())),
            ("source", optional_text(self.source.as_ref())),
            ("primaryReference", optional_text(self.primary_reference.as_ref())),
            ("primaryReferenceUrl", optional_text(self.primary_reference_url.as_ref())),
        ]
    }
}

fn merge_text(existing: &mut String, incoming: String) {
    if !incoming.trim().is_empty() {
        *existing = incoming;
    }
}

fn merge_optional(existing: &mut Option<String>, incoming: Option<String>) {
    if let Some(incoming) = incoming.filter(|v| !v.trim().is_empty()) {
        *existing = Some(incoming);
    }
}

impl Mergeable for Compound {
    fn merge_from(&mut self, incoming: Self) {
        // the stored name keeps its original casing
        merge_text(&mut self.chemotype, incoming.chemotype);
        merge_text(&mut self.s10, incoming.s10);
        merge_optional(&mut self.smiles, incoming.smiles);
        merge_optional(&mut self.source, incoming.source);
        merge_optional(&mut self.primary_reference, incoming.primary_reference);
        merge_optional(&mut self.primary_reference_url, incoming.primary_reference_url);
    }
}

/// A compound name paired with a count, used by admin statistics.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompoundCountPair {
    pub compound_name: String,
    pub count: u64,
}
