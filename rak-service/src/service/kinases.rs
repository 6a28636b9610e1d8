use crate::ServiceResult;
use crate::config::RakConfig;
use crate::error::RakServiceError;
use crate::service::{paged, window};
use engine::{PagedDataRep, Pagination};
use error_stack::ResultExt;
use rak_core::RakEngine;
use rak_core::model::Kinase;
use rak_core::repository::KinaseRepository;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct KinaseService<E> {
    engine: E,
    config: RakConfig,
}

impl<E> KinaseService<E>
where
    E: RakEngine,
{
    pub fn new(engine: E, config: RakConfig) -> Self {
        Self { engine, config }
    }

    #[instrument(skip(self), name = "kinase_service#list")]
    pub async fn list(&self, pagination: Pagination) -> ServiceResult<PagedDataRep<Kinase>> {
        let window = window(&self.config, pagination)?;
        let page = self
            .engine
            .kinases()
            .list(window)
            .await
            .change_context(RakServiceError::Repository)?;

        debug!("{} of {} kinases found", page.items.len(), page.total);
        paged(page, window)
    }

    #[instrument(skip(self), name = "kinase_service#get_by_discoverx")]
    pub async fn get_by_discoverx(&self, discoverx_gene_symbol: &str) -> ServiceResult<Kinase> {
        self.engine
            .kinases()
            .get_by_discoverx(discoverx_gene_symbol.to_owned())
            .await
            .change_context(RakServiceError::Repository)?
            .ok_or_else(|| {
                RakServiceError::not_found(format!("no such kinase: {discoverx_gene_symbol}"))
            })
    }
}
