use crate::ServiceResult;
use crate::config::RakConfig;
use crate::error::RakServiceError;
use engine::{Page, PageWindow, PagedDataRep, Pagination};
use error_stack::{Report, ResultExt};

mod activity_profiles;
mod blog_posts;
mod compounds;
mod feedback;
mod kinases;
mod partners;
mod stats;

pub use activity_profiles::ActivityProfileService;
pub use blog_posts::BlogPostService;
pub use compounds::CompoundService;
pub use feedback::FeedbackService;
pub use kinases::KinaseService;
pub use partners::PartnerService;
pub use stats::StatService;

/// Validates a paging request against the configured sizes. A bad request becomes a 400.
fn window(config: &RakConfig, pagination: Pagination) -> ServiceResult<PageWindow> {
    pagination
        .window(config.default_page_size, config.max_page_size)
        .map_err(into_bad_request)
}

/// Turns a rejected input into a 400 whose message is the rejection itself.
fn into_bad_request<C>(report: Report<C>) -> Report<RakServiceError>
where
    C: std::error::Error + Send + Sync + 'static,
{
    let message = report.current_context().to_string();
    report.change_context(RakServiceError::BadRequest(message))
}

/// Wraps what a repository returned for `window` into the listing envelope.
fn paged<T>(page: Page<T>, window: PageWindow) -> ServiceResult<PagedDataRep<T>> {
    PagedDataRep::from_page(page, window)
        .change_context(RakServiceError::Repository)
        .attach("repository returned a page that does not fit its total")
}

fn require_text(field: &'static str, value: &str) -> ServiceResult<()> {
    if value.trim().is_empty() {
        return Err(RakServiceError::bad_request(format!("{field} is required")));
    }
    Ok(())
}
