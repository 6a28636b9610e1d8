use crate::ServiceResult;
use crate::config::RakConfig;
use crate::error::RakServiceError;
use crate::service::{paged, require_text, window};
use chrono::Utc;
use engine::{PagedDataRep, Pagination};
use error_stack::{Report, ResultExt};
use rak_core::RakEngine;
use rak_core::model::BlogPost;
use rak_core::repository::BlogPostRepository;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone)]
pub struct BlogPostService<E> {
    engine: E,
    config: RakConfig,
}

fn no_such_post(id: i64) -> Report<RakServiceError> {
    RakServiceError::not_found(format!("no such blog post: {id}"))
}

impl<E> BlogPostService<E>
where
    E: RakEngine,
{
    pub fn new(engine: E, config: RakConfig) -> Self {
        Self { engine, config }
    }

    /// Stores a new post. The repository assigns the id; the creation date is now.
    #[instrument(skip_all, name = "blog_post_service#create")]
    pub async fn create(&self, mut post: BlogPost) -> ServiceResult<BlogPost> {
        if post.is_persisted() {
            return Err(RakServiceError::bad_request(
                "a new blog post cannot specify an id",
            ));
        }
        require_text("title", &post.title)?;
        require_text("body", &post.body)?;

        post.create_date = Some(Utc::now());

        let post = self
            .engine
            .blog_posts()
            .create(post)
            .await
            .change_context(RakServiceError::Repository)?;

        info!("created blog post {:?}", post.id);
        Ok(post)
    }

    #[instrument(skip(self), name = "blog_post_service#get")]
    pub async fn get(&self, id: i64) -> ServiceResult<BlogPost> {
        self.engine
            .blog_posts()
            .get(id)
            .await
            .change_context(RakServiceError::Repository)?
            .ok_or_else(|| no_such_post(id))
    }

    #[instrument(skip(self), name = "blog_post_service#list")]
    pub async fn list(&self, pagination: Pagination) -> ServiceResult<PagedDataRep<BlogPost>> {
        let window = window(&self.config, pagination)?;
        let page = self
            .engine
            .blog_posts()
            .list(window)
            .await
            .change_context(RakServiceError::Repository)?;

        debug!("{} of {} blog posts found", page.items.len(), page.total);
        paged(page, window)
    }

    /// Replaces the post's content. The original creation date is kept.
    #[instrument(skip(self, post), name = "blog_post_service#update")]
    pub async fn update(&self, id: i64, mut post: BlogPost) -> ServiceResult<BlogPost> {
        if post.id != Some(id) {
            return Err(RakServiceError::bad_request(format!(
                "blog post id {:?} does not match {id}",
                post.id
            )));
        }
        require_text("title", &post.title)?;
        require_text("body", &post.body)?;

        let existing = self.get(id).await?;
        post.create_date = existing.create_date;

        self.engine
            .blog_posts()
            .update(post)
            .await
            .change_context(RakServiceError::Repository)?
            .ok_or_else(|| no_such_post(id))
    }

    #[instrument(skip(self), name = "blog_post_service#delete")]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.engine
            .blog_posts()
            .delete(id)
            .await
            .change_context(RakServiceError::Repository)?
            .ok_or_else(|| no_such_post(id))?;

        info!("deleted blog post {id}");
        Ok(())
    }
}
