use crate::ServiceResult;
use crate::config::RakConfig;
use crate::error::RakServiceError;
use crate::service::{paged, window};
use engine::{PagedDataRep, Pagination};
use error_stack::ResultExt;
use rak_core::RakEngine;
use rak_core::model::Partner;
use rak_core::repository::PartnerRepository;
use tracing::instrument;

#[derive(Debug, Clone)]
pub struct PartnerService<E> {
    engine: E,
    config: RakConfig,
}

impl<E> PartnerService<E>
where
    E: RakEngine,
{
    pub fn new(engine: E, config: RakConfig) -> Self {
        Self { engine, config }
    }

    #[instrument(skip(self), name = "partner_service#list")]
    pub async fn list(&self, pagination: Pagination) -> ServiceResult<PagedDataRep<Partner>> {
        let window = window(&self.config, pagination)?;
        let page = self
            .engine
            .partners()
            .list(window)
            .await
            .change_context(RakServiceError::Repository)?;

        paged(page, window)
    }
}
