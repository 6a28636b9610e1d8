use crate::config::RakConfig;
use crate::error::RakServiceError;
use crate::service::{into_bad_request, paged, require_text, window};
use crate::{OptServiceResult, ServiceResult};
use engine::import::{ImportBatch, ObjectImportRep};
use engine::{PagedDataRep, Pagination};
use error_stack::ResultExt;
use itertools::Itertools;
use rak_core::RakEngine;
use rak_core::csv_import::read_records;
use rak_core::model::Compound;
use rak_core::repository::CompoundRepository;
use rak_core::search::SearchFilter;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone)]
pub struct CompoundService<E> {
    engine: E,
    config: RakConfig,
}

impl<E> CompoundService<E>
where
    E: RakEngine,
{
    pub fn new(engine: E, config: RakConfig) -> Self {
        Self { engine, config }
    }

    #[instrument(skip(self), name = "compound_service#find")]
    pub async fn find(&self, compound_name: &str) -> OptServiceResult<Compound> {
        self.engine
            .compounds()
            .get(compound_name.to_owned())
            .await
            .change_context(RakServiceError::Repository)
    }

    pub async fn get(&self, compound_name: &str) -> ServiceResult<Compound> {
        self.find(compound_name).await?.ok_or_else(|| {
            RakServiceError::not_found(format!("no such compound: {compound_name}"))
        })
    }

    #[instrument(skip_all, name = "compound_service#search")]
    pub async fn search(
        &self,
        filter: &SearchFilter,
        pagination: Pagination,
    ) -> ServiceResult<PagedDataRep<Compound>> {
        let window = window(&self.config, pagination)?;
        let criteria = filter
            .compound_criteria(window)
            .map_err(into_bad_request)?;

        let page = self
            .engine
            .compounds()
            .list(criteria)
            .await
            .change_context(RakServiceError::Repository)?;

        debug!("{} of {} compounds found", page.items.len(), page.total);
        paged(page, window)
    }

    #[instrument(skip(self, compound), name = "compound_service#update")]
    pub async fn update(&self, compound_name: &str, mut compound: Compound) -> ServiceResult<Compound> {
        if compound.compound_name != compound_name {
            return Err(RakServiceError::bad_request(format!(
                "compound name '{}' does not match '{compound_name}'",
                compound.compound_name
            )));
        }

        let existing = self.get(compound_name).await?;
        compound.compound_name = existing.compound_name;

        self.engine
            .compounds()
            .save_all(vec![compound.clone()])
            .await
            .change_context(RakServiceError::Repository)?;

        debug!("updated compound");
        Ok(compound)
    }

    /// Merges `compounds` into the stored ones by name. Nothing is written unless `commit` is set.
    #[instrument(skip(self, compounds), fields(count = compounds.len()), name = "compound_service#import")]
    pub async fn import(&self, compounds: Vec<Compound>, commit: bool) -> ServiceResult<ObjectImportRep> {
        for compound in &compounds {
            require_text("compoundName", &compound.compound_name)?;
        }

        let names = compounds
            .iter()
            .map(|c| c.compound_name.to_ascii_lowercase())
            .unique()
            .collect();

        let stored = self
            .engine
            .compounds()
            .find_by_names(names)
            .await
            .change_context(RakServiceError::Repository)?;

        // a compound keeps the casing it was stored with, or first submitted with
        let mut canonical_names: HashMap<String, String> = stored
            .iter()
            .map(|c| (c.compound_name.to_ascii_lowercase(), c.compound_name.clone()))
            .collect();

        let mut batch = ImportBatch::with_capacity(compounds.len());
        for mut incoming in compounds {
            let key = incoming.compound_name.to_ascii_lowercase();
            let existing = stored.iter().find(|c| c.has_name(&key)).cloned();
            incoming.compound_name = canonical_names
                .entry(key.clone())
                .or_insert(incoming.compound_name)
                .clone();
            batch.push(key, existing, incoming);
        }

        let outcome = batch.finish();
        debug!(
            "{} of {} compounds would change",
            outcome.changed.len(),
            outcome.report.len()
        );

        if commit && !outcome.changed.is_empty() {
            let changed = outcome.changed.len();
            self.engine
                .compounds()
                .save_all(outcome.changed)
                .await
                .change_context(RakServiceError::Repository)?;
            info!("imported {changed} compounds");
        }

        Ok(outcome.report)
    }

    /// Same as [`Self::import`], reading positional compound rows from CSV.
    pub async fn import_csv(
        &self,
        bytes: &[u8],
        header_row: bool,
        commit: bool,
    ) -> ServiceResult<ObjectImportRep> {
        let compounds = read_records::<Compound>(bytes, header_row).map_err(into_bad_request)?;
        self.import(compounds, commit).await
    }
}
