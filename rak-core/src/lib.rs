use repository::{
    ActivityProfileRepository, BlogPostRepository, CompoundRepository, FeedbackRepository,
    KinaseRepository, PartnerRepository,
};

pub mod csv_import;
pub mod list_filter;
pub mod model;
pub mod repository;
pub mod result;
pub mod search;
pub mod session;

/// Storage backend for the whole application. Each accessor hands out a cheap repository handle.
pub trait RakEngine: Clone + Send + Sync + 'static {
    type Compounds: CompoundRepository + Send + Sync + 'static;
    type Kinases: KinaseRepository + Send + Sync + 'static;
    type ActivityProfiles: ActivityProfileRepository + Send + Sync + 'static;
    type BlogPosts: BlogPostRepository + Send + Sync + 'static;
    type Feedback: FeedbackRepository + Send + Sync + 'static;
    type Partners: PartnerRepository + Send + Sync + 'static;

    fn compounds(&self) -> Self::Compounds;
    fn kinases(&self) -> Self::Kinases;
    fn activity_profiles(&self) -> Self::ActivityProfiles;
    fn blog_posts(&self) -> Self::BlogPosts;
    fn feedback(&self) -> Self::Feedback;
    fn partners(&self) -> Self::Partners;
}
