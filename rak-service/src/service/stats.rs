use crate::ServiceResult;
use crate::config::RakConfig;
use crate::error::RakServiceError;
use crate::service::{paged, window};
use engine::{PagedDataRep, Pagination};
use error_stack::ResultExt;
use rak_core::RakEngine;
use rak_core::model::{Compound, CompoundCountPair};
use rak_core::repository::CompoundRepository;
use tracing::{debug, instrument};

/// Data-quality reports for administrators. Every listing is ordered by compound name.
#[derive(Debug, Clone)]
pub struct StatService<E> {
    engine: E,
    config: RakConfig,
}

impl<E> StatService<E>
where
    E: RakEngine,
{
    pub fn new(engine: E, config: RakConfig) -> Self {
        Self { engine, config }
    }

    /// Compounds with fewer activity profiles than there are kinases, with their profile count.
    #[instrument(skip(self), name = "stat_service#compounds_missing_activity_profiles")]
    pub async fn compounds_missing_activity_profiles(
        &self,
        pagination: Pagination,
    ) -> ServiceResult<PagedDataRep<CompoundCountPair>> {
        let window = window(&self.config, pagination)?;
        let page = self
            .engine
            .compounds()
            .missing_activity_profiles(window)
            .await
            .change_context(RakServiceError::Repository)?;

        debug!("{} compounds are missing activity profiles", page.total);
        paged(page, window)
    }

    #[instrument(skip(self), name = "stat_service#compounds_missing_publication_info")]
    pub async fn compounds_missing_publication_info(
        &self,
        pagination: Pagination,
    ) -> ServiceResult<PagedDataRep<Compound>> {
        let window = window(&self.config, pagination)?;
        let page = self
            .engine
            .compounds()
            .missing_publication_info(window)
            .await
            .change_context(RakServiceError::Repository)?;

        debug!("{} compounds are missing publication info", page.total);
        paged(page, window)
    }

    #[instrument(skip(self), name = "stat_service#incomplete_compounds")]
    pub async fn incomplete_compounds(
        &self,
        pagination: Pagination,
    ) -> ServiceResult<PagedDataRep<Compound>> {
        let window = window(&self.config, pagination)?;
        let page = self
            .engine
            .compounds()
            .incomplete(window)
            .await
            .change_context(RakServiceError::Repository)?;

        debug!("{} compounds are incomplete", page.total);
        paged(page, window)
    }
}
