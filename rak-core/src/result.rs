use error_stack::Report;

pub type RepoResult<T> = Result<T, Report<RepoError>>;
pub type OptRepoResult<T> = Result<Option<T>, Report<RepoError>>;

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("failed to get record")]
    Get,
    #[error("failed to list records")]
    List,
    #[error("failed to create record")]
    Create,
    #[error("failed to save records")]
    Save,
    #[error("failed to delete record")]
    Delete,
}
