use crate::ServiceResult;
use crate::config::RakConfig;
use crate::error::RakServiceError;
use crate::service::{paged, require_text, window};
use chrono::Utc;
use engine::{PagedDataRep, Pagination};
use error_stack::{Report, ResultExt};
use rak_core::RakEngine;
use rak_core::model::Feedback;
use rak_core::repository::FeedbackRepository;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone)]
pub struct FeedbackService<E> {
    engine: E,
    config: RakConfig,
}

fn no_such_feedback(id: i64) -> Report<RakServiceError> {
    RakServiceError::not_found(format!("no such feedback: {id}"))
}

impl<E> FeedbackService<E>
where
    E: RakEngine,
{
    pub fn new(engine: E, config: RakConfig) -> Self {
        Self { engine, config }
    }

    /// Stores feedback from a visitor, recording the address it was sent from.
    #[instrument(skip(self, feedback), name = "feedback_service#create")]
    pub async fn create(&self, mut feedback: Feedback, ip_address: &str) -> ServiceResult<Feedback> {
        if feedback.is_persisted() {
            return Err(RakServiceError::bad_request(
                "new feedback cannot specify an id",
            ));
        }
        require_text("title", &feedback.title)?;
        require_text("body", &feedback.body)?;

        feedback.ip_address = Some(ip_address.to_owned());
        feedback.create_date = Some(Utc::now());

        let feedback = self
            .engine
            .feedback()
            .create(feedback)
            .await
            .change_context(RakServiceError::Repository)?;

        info!("received feedback {:?}", feedback.id);
        Ok(feedback)
    }

    #[instrument(skip(self), name = "feedback_service#get")]
    pub async fn get(&self, id: i64) -> ServiceResult<Feedback> {
        self.engine
            .feedback()
            .get(id)
            .await
            .change_context(RakServiceError::Repository)?
            .ok_or_else(|| no_such_feedback(id))
    }

    #[instrument(skip(self), name = "feedback_service#list")]
    pub async fn list(&self, pagination: Pagination) -> ServiceResult<PagedDataRep<Feedback>> {
        let window = window(&self.config, pagination)?;
        let page = self
            .engine
            .feedback()
            .list(window)
            .await
            .change_context(RakServiceError::Repository)?;

        debug!("{} of {} feedback entries found", page.items.len(), page.total);
        paged(page, window)
    }

    #[instrument(skip(self), name = "feedback_service#delete")]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.engine
            .feedback()
            .delete(id)
            .await
            .change_context(RakServiceError::Repository)?
            .ok_or_else(|| no_such_feedback(id))?;

        info!("deleted feedback {id}");
        Ok(())
    }
}
