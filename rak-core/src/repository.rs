use crate::list_filter::{ActivityProfileListCriteria, CompoundListCriteria};
use crate::model::{
    ActivityProfile, BlogPost, Compound, CompoundCountPair, Feedback, Kinase, Partner, ProfileKey,
};
use crate::result::{OptRepoResult, RepoResult};
use engine::{Page, PageWindow};

pub trait CompoundRepository {
    /// Looks a compound up by name, ignoring case.
    fn get(&self, compound_name: String) -> impl Future<Output = OptRepoResult<Compound>> + Send;

    /// Compounds matching `criteria`, ordered by name.
    fn list(
        &self,
        criteria: CompoundListCriteria,
    ) -> impl Future<Output = RepoResult<Page<Compound>>> + Send;

    /// Every stored compound whose name matches one of `compound_names`, ignoring case.
    fn find_by_names(
        &self,
        compound_names: Vec<String>,
    ) -> impl Future<Output = RepoResult<Vec<Compound>>> + Send;

    /// Inserts or replaces compounds by name.
    fn save_all(&self, compounds: Vec<Compound>) -> impl Future<Output = RepoResult<()>> + Send;

    fn missing_activity_profiles(
        &self,
        window: PageWindow,
    ) -> impl Future<Output = RepoResult<Page<CompoundCountPair>>> + Send;

    fn missing_publication_info(
        &self,
        window: PageWindow,
    ) -> impl Future<Output = RepoResult<Page<Compound>>> + Send;

    fn incomplete(
        &self,
        window: PageWindow,
    ) -> impl Future<Output = RepoResult<Page<Compound>>> + Send;
}

pub trait KinaseRepository {
    fn list(&self, window: PageWindow) -> impl Future<Output = RepoResult<Page<Kinase>>> + Send;

    fn get_by_discoverx(
        &self,
        discoverx_gene_symbol: String,
    ) -> impl Future<Output = OptRepoResult<Kinase>> + Send;

    /// Kinases whose discoverx gene symbol is one of `symbols`.
    fn find_by_discoverx(
        &self,
        symbols: Vec<String>,
    ) -> impl Future<Output = RepoResult<Vec<Kinase>>> + Send;
}

pub trait ActivityProfileRepository {
    fn list(
        &self,
        criteria: ActivityProfileListCriteria,
    ) -> impl Future<Output = RepoResult<Page<ActivityProfile>>> + Send;

    fn find_by_keys(
        &self,
        keys: Vec<ProfileKey>,
    ) -> impl Future<Output = RepoResult<Vec<ActivityProfile>>> + Send;

    /// Inserts profiles without an id and replaces the rest.
    fn save_all(
        &self,
        profiles: Vec<ActivityProfile>,
    ) -> impl Future<Output = RepoResult<()>> + Send;
}

pub trait BlogPostRepository {
    /// Stores a new post and returns it with its assigned id.
    fn create(&self, post: BlogPost) -> impl Future<Output = RepoResult<BlogPost>> + Send;

    fn get(&self, id: i64) -> impl Future<Output = OptRepoResult<BlogPost>> + Send;

    /// Newest first.
    fn list(&self, window: PageWindow)
    -> impl Future<Output = RepoResult<Page<BlogPost>>> + Send;

    /// Replaces the post with the same id. `None` when there is no such post.
    fn update(&self, post: BlogPost) -> impl Future<Output = OptRepoResult<BlogPost>> + Send;

    fn delete(&self, id: i64) -> impl Future<Output = OptRepoResult<()>> + Send;
}

pub trait FeedbackRepository {
    fn create(&self, feedback: Feedback) -> impl Future<Output = RepoResult<Feedback>> + Send;

    fn get(&self, id: i64) -> impl Future<Output = OptRepoResult<Feedback>> + Send;

    /// Newest first.
    fn list(&self, window: PageWindow)
    -> impl Future<Output = RepoResult<Page<Feedback>>> + Send;

    fn delete(&self, id: i64) -> impl Future<Output = OptRepoResult<()>> + Send;
}

pub trait PartnerRepository {
    fn list(&self, window: PageWindow) -> impl Future<Output = RepoResult<Page<Partner>>> + Send;
}
