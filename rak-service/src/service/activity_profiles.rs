use crate::ServiceResult;
use crate::config::RakConfig;
use crate::error::RakServiceError;
use crate::service::{into_bad_request, paged, window};
use engine::import::{ImportBatch, ObjectImportRep};
use engine::{PagedDataRep, Pagination};
use error_stack::ResultExt;
use itertools::Itertools;
use rak_core::RakEngine;
use rak_core::csv_import::{ActivityProfileCsvRecord, KdCsvRecord, read_records};
use rak_core::model::{ActivityProfile, Compound, Kinase, ProfileKey};
use rak_core::repository::{ActivityProfileRepository, CompoundRepository, KinaseRepository};
use rak_core::search::ActivityProfileSearch;
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone)]
pub struct ActivityProfileService<E> {
    engine: E,
    config: RakConfig,
}

impl<E> ActivityProfileService<E>
where
    E: RakEngine,
{
    pub fn new(engine: E, config: RakConfig) -> Self {
        Self { engine, config }
    }

    #[instrument(skip(self), name = "activity_profile_service#list")]
    pub async fn list(
        &self,
        search: ActivityProfileSearch,
        pagination: Pagination,
    ) -> ServiceResult<PagedDataRep<ActivityProfile>> {
        let window = window(&self.config, pagination)?;

        if let Some(compound_name) = search.compound_name() {
            let compound = self
                .engine
                .compounds()
                .get(compound_name.to_owned())
                .await
                .change_context(RakServiceError::Repository)?;
            if compound.is_none() {
                return Err(RakServiceError::bad_request(format!(
                    "no such compound: {compound_name}"
                )));
            }
        }

        let page = self
            .engine
            .activity_profiles()
            .list(search.criteria(window))
            .await
            .change_context(RakServiceError::Repository)?;

        debug!("{} of {} activity profiles found", page.items.len(), page.total);
        paged(page, window)
    }

    /// Merges percent-control measurements into the stored profiles.
    #[instrument(skip(self, records), fields(count = records.len()), name = "activity_profile_service#import_activity_profiles")]
    pub async fn import_activity_profiles(
        &self,
        records: Vec<ActivityProfileCsvRecord>,
        commit: bool,
    ) -> ServiceResult<ObjectImportRep> {
        let references = self
            .resolve(records.iter().map(|r| (&r.compound_name, &r.discoverx_gene_symbol)))
            .await?;

        let drafts = records
            .into_iter()
            .zip(references)
            .map(|(record, (compound_name, kinase))| ActivityProfile {
                percent_control: record.percent_control,
                compound_concentration: record.compound_concentration,
                ..ActivityProfile::new(compound_name, kinase)
            })
            .collect();

        self.import(drafts, commit).await
    }

    /// Merges Kd measurements into the stored profiles.
    #[instrument(skip(self, records), fields(count = records.len()), name = "activity_profile_service#import_kd_values")]
    pub async fn import_kd_values(
        &self,
        records: Vec<KdCsvRecord>,
        commit: bool,
    ) -> ServiceResult<ObjectImportRep> {
        let references = self
            .resolve(records.iter().map(|r| (&r.compound_name, &r.discoverx_gene_symbol)))
            .await?;

        let drafts = records
            .into_iter()
            .zip(references)
            .map(|(record, (compound_name, kinase))| {
                if !record.is_exact() {
                    warn!(
                        "Kd for {compound_name}/{} has modifier '{}', importing the value as is",
                        kinase.discoverx_gene_symbol,
                        record.modifier.as_deref().unwrap_or_default()
                    );
                }
                ActivityProfile {
                    kd: record.kd,
                    ..ActivityProfile::new(compound_name, kinase)
                }
            })
            .collect();

        self.import(drafts, commit).await
    }

    pub async fn import_activity_profiles_csv(
        &self,
        bytes: &[u8],
        header_row: bool,
        commit: bool,
    ) -> ServiceResult<ObjectImportRep> {
        let records = read_records(bytes, header_row).map_err(into_bad_request)?;
        self.import_activity_profiles(records, commit).await
    }

    pub async fn import_kd_values_csv(
        &self,
        bytes: &[u8],
        header_row: bool,
        commit: bool,
    ) -> ServiceResult<ObjectImportRep> {
        let records = read_records(bytes, header_row).map_err(into_bad_request)?;
        self.import_kd_values(records, commit).await
    }

    /// Looks up the compound and kinase each record refers to, in record order.
    ///
    /// Returns the stored compound name, which may differ in case from the record's.
    async fn resolve<'a, I>(&self, references: I) -> ServiceResult<Vec<(String, Kinase)>>
    where
        I: Iterator<Item = (&'a String, &'a String)>,
    {
        let references = references.collect::<Vec<_>>();

        let compound_names = references
            .iter()
            .map(|(name, _)| name.to_ascii_lowercase())
            .unique()
            .collect();
        let symbols = references
            .iter()
            .map(|(_, symbol)| (*symbol).clone())
            .unique()
            .collect();

        let compounds: Vec<Compound> = self
            .engine
            .compounds()
            .find_by_names(compound_names)
            .await
            .change_context(RakServiceError::Repository)?;
        let kinases: Vec<Kinase> = self
            .engine
            .kinases()
            .find_by_discoverx(symbols)
            .await
            .change_context(RakServiceError::Repository)?;

        references
            .into_iter()
            .map(|(compound_name, symbol)| -> ServiceResult<(String, Kinase)> {
                let compound = compounds
                    .iter()
                    .find(|c| c.has_name(compound_name))
                    .ok_or_else(|| {
                        RakServiceError::bad_request(format!("no such compound: {compound_name}"))
                    })?;
                let kinase = kinases
                    .iter()
                    .find(|k| k.discoverx_gene_symbol == *symbol)
                    .ok_or_else(|| RakServiceError::bad_request(format!("no such kinase: {symbol}")))?;

                Ok((compound.compound_name.clone(), kinase.clone()))
            })
            .collect()
    }

    async fn import(&self, drafts: Vec<ActivityProfile>, commit: bool) -> ServiceResult<ObjectImportRep> {
        let keys = drafts.iter().map(ActivityProfile::key).unique().collect();

        let stored: HashMap<ProfileKey, ActivityProfile> = self
            .engine
            .activity_profiles()
            .find_by_keys(keys)
            .await
            .change_context(RakServiceError::Repository)?
            .into_iter()
            .map(|p| (p.key(), p))
            .collect();

        let mut batch = ImportBatch::with_capacity(drafts.len());
        for draft in drafts {
            let key = draft.key();
            let existing = stored.get(&key).cloned();
            batch.push(key, existing, draft);
        }

        let outcome = batch.finish();
        debug!(
            "{} of {} activity profiles would change",
            outcome.changed.len(),
            outcome.report.len()
        );

        if commit && !outcome.changed.is_empty() {
            let changed = outcome.changed.len();
            self.engine
                .activity_profiles()
                .save_all(outcome.changed)
                .await
                .change_context(RakServiceError::Repository)?;
            info!("imported {changed} activity profiles");
        }

        Ok(outcome.report)
    }
}
