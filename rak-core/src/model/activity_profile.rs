use crate::model::Kinase;
use engine::import::{Importable, Mergeable};
use engine::value::FieldValue;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One measurement of a compound against a kinase.
///
/// `id` is only absent for a profile that an import is about to create.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub compound_name: String,
    pub kinase: Kinase,
    pub percent_control: Option<f64>,
    pub compound_concentration: Option<i64>,
    pub kd: Option<f64>,
}

/// What identifies a measurement: the compound (ignoring case) and the kinase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProfileKey {
    pub compound_name: String,
    pub kinase_id: i64,
}

impl ProfileKey {
    pub fn new(compound_name: &str, kinase_id: i64) -> Self {
        Self {
            compound_name: compound_name.to_ascii_lowercase(),
            kinase_id,
        }
    }
}

impl ActivityProfile {
    pub fn new(compound_name: impl Into<String>, kinase: Kinase) -> Self {
        Self {
            id: None,
            compound_name: compound_name.into(),
            kinase,
            percent_control: None,
            compound_concentration: None,
            kd: None,
        }
    }

    pub fn key(&self) -> ProfileKey {
        ProfileKey::new(&self.compound_name, self.kinase.id)
    }
}

impl Importable for ActivityProfile {
    fn import_fields(&self) -> Vec<(&'static str, Option<FieldValue>)> {
        vec![
            ("compoundName", Some(self.compound_name.clone().into())),
            (
                "discoverxGeneSymbol",
                Some(self.kinase.discoverx_gene_symbol.clone().into()),
            ),
            (
                "entrezGeneSymbol",
                Some(self.kinase.entrez_gene_symbol.clone().into()),
            ),
            ("percentControl", self.percent_control.map(FieldValue::from)),
            (
                "compoundConcentration",
                self.compound_concentration.map(FieldValue::from),
            ),
            ("kd", self.kd.map(FieldValue::from)),
        ]
    }
}

impl Mergeable for ActivityProfile {
    fn merge_from(&mut self, incoming: Self) {
        if incoming.percent_control.is_some() {
            self.percent_control = incoming.percent_control;
        }
        if incoming.compound_concentration.is_some() {
            self.compound_concentration = incoming.compound_concentration;
        }
        if incoming.kd.is_some() {
            self.kd = incoming.kd;
        }
    }
}
