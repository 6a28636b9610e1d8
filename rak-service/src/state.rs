use crate::ServiceResult;
use crate::config::RakConfig;
use crate::error::RakServiceError;
use crate::service::{
    ActivityProfileService, BlogPostService, CompoundService, FeedbackService, KinaseService,
    PartnerService, StatService,
};
use error_stack::ResultExt;
use rak_core::RakEngine;
use tracing::{info, instrument};

/// Every service, sharing one engine and one configuration.
#[derive(Debug, Clone)]
pub struct RakAppState<E: RakEngine> {
    pub compounds: CompoundService<E>,
    pub kinases: KinaseService<E>,
    pub activity_profiles: ActivityProfileService<E>,
    pub blog_posts: BlogPostService<E>,
    pub feedback: FeedbackService<E>,
    pub partners: PartnerService<E>,
    pub stats: StatService<E>,
}

impl<E: RakEngine> RakAppState<E> {
    /// Builds the state with configuration read from the environment.
    pub fn from_env(engine: E) -> ServiceResult<Self> {
        let config = RakConfig::from_env().change_context(RakServiceError::Config)?;
        Ok(Self::new(engine, config))
    }

    #[instrument(skip(engine))]
    pub fn new(engine: E, config: RakConfig) -> Self {
        info!("creating rak app state");
        Self {
            compounds: CompoundService::new(engine.clone(), config),
            kinases: KinaseService::new(engine.clone(), config),
            activity_profiles: ActivityProfileService::new(engine.clone(), config),
            blog_posts: BlogPostService::new(engine.clone(), config),
            feedback: FeedbackService::new(engine.clone(), config),
            partners: PartnerService::new(engine.clone(), config),
            stats: StatService::new(engine, config),
        }
    }
}
