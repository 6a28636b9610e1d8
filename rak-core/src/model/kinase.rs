use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An enzyme target, identified by its DiscoverX and Entrez gene symbols.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Kinase {
    pub id: i64,
    pub discoverx_gene_symbol: String,
    pub entrez_gene_symbol: String,
}

impl Kinase {
    pub fn new<D, E>(id: i64, discoverx_gene_symbol: D, entrez_gene_symbol: E) -> Self
    where
        D: Into<String>,
        E: Into<String>,
    {
        Self {
            id,
            discoverx_gene_symbol: discoverx_gene_symbol.into(),
            entrez_gene_symbol: entrez_gene_symbol.into(),
        }
    }
}
