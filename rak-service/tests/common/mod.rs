#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use engine::{Page, PageWindow};
use error_stack::Report;
use rak_core::RakEngine;
use rak_core::list_filter::{
    ActivityProfileFilter, ActivityProfileListCriteria, CompoundFilter, CompoundListCriteria,
};
use rak_core::model::{
    ActivityProfile, BlogPost, Compound, CompoundCountPair, Feedback, Kinase, Partner, ProfileKey,
};
use rak_core::repository::{
    ActivityProfileRepository, BlogPostRepository, CompoundRepository, FeedbackRepository,
    KinaseRepository, PartnerRepository,
};
use rak_core::result::{OptRepoResult, RepoError, RepoResult};
use rak_service::config::RakConfig;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
pub struct ArwLock<T>(Arc<RwLock<T>>);

impl<T> Clone for ArwLock<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> ArwLock<T> {
    pub fn new(data: T) -> Self {
        Self(Arc::new(RwLock::new(data)))
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, T> {
        self.0.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.0.write().await
    }
}

#[derive(Debug, Default)]
pub struct Data {
    pub compounds: Vec<Compound>,
    pub kinases: Vec<Kinase>,
    pub profiles: Vec<ActivityProfile>,
    pub blog_posts: Vec<BlogPost>,
    pub feedback: Vec<Feedback>,
    pub partners: Vec<Partner>,
    pub next_id: i64,
    /// Number of write calls that reached storage.
    pub writes: usize,
    /// When set, every read fails.
    pub failing: bool,
}

impl Data {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn check(&self, error: RepoError) -> RepoResult<()> {
        if self.failing {
            return Err(Report::new(error).attach("storage is unavailable"));
        }
        Ok(())
    }
}

pub type Store = ArwLock<Data>;

#[derive(Debug, Clone, Default)]
pub struct InMemoryEngine {
    pub store: Store,
}

impl InMemoryEngine {
    pub fn new(data: Data) -> Self {
        Self {
            store: ArwLock::new(data),
        }
    }

    pub async fn writes(&self) -> usize {
        self.store.read().await.writes
    }

    pub async fn fail_reads(&self) {
        self.store.write().await.failing = true;
    }
}

impl RakEngine for InMemoryEngine {
    type Compounds = Compounds;
    type Kinases = Kinases;
    type ActivityProfiles = ActivityProfiles;
    type BlogPosts = BlogPosts;
    type Feedback = FeedbackEntries;
    type Partners = Partners;

    fn compounds(&self) -> Self::Compounds {
        Compounds(self.store.clone())
    }

    fn kinases(&self) -> Self::Kinases {
        Kinases(self.store.clone())
    }

    fn activity_profiles(&self) -> Self::ActivityProfiles {
        ActivityProfiles(self.store.clone())
    }

    fn blog_posts(&self) -> Self::BlogPosts {
        BlogPosts(self.store.clone())
    }

    fn feedback(&self) -> Self::Feedback {
        FeedbackEntries(self.store.clone())
    }

    fn partners(&self) -> Self::Partners {
        Partners(self.store.clone())
    }
}

#[derive(Debug, Clone)]
pub struct Compounds(Store);
#[derive(Debug, Clone)]
pub struct Kinases(Store);
#[derive(Debug, Clone)]
pub struct ActivityProfiles(Store);
#[derive(Debug, Clone)]
pub struct BlogPosts(Store);
#[derive(Debug, Clone)]
pub struct FeedbackEntries(Store);
#[derive(Debug, Clone)]
pub struct Partners(Store);

fn sorted_by_name(mut compounds: Vec<Compound>) -> Vec<Compound> {
    compounds.sort_by_key(|c| c.compound_name.to_ascii_lowercase());
    compounds
}

fn compound_matches(data: &Data, compound: &Compound, criteria: &CompoundListCriteria) -> bool {
    let filters = criteria.filters();
    let kinase = filters.iter().find_map(|f| match f {
        CompoundFilter::Kinase(symbol) => Some(symbol.as_str()),
        _ => None,
    });

    filters.iter().all(|filter| match filter {
        CompoundFilter::NameContains(text) => compound
            .compound_name
            .to_ascii_lowercase()
            .contains(&text.to_ascii_lowercase()),
        CompoundFilter::Kinase(_) => true,
        CompoundFilter::PercentControlAtMost(max) => {
            has_profile(data, compound, kinase, |p| p.percent_control.is_some_and(|v| v <= *max))
        }
        CompoundFilter::KdAtMost(max) => {
            has_profile(data, compound, kinase, |p| p.kd.is_some_and(|v| v <= *max))
        }
    })
}

fn has_profile<F>(data: &Data, compound: &Compound, kinase: Option<&str>, measurement: F) -> bool
where
    F: Fn(&ActivityProfile) -> bool,
{
    data.profiles.iter().any(|p| {
        compound.has_name(&p.compound_name)
            && kinase.is_none_or(|k| {
                p.kinase.discoverx_gene_symbol.eq_ignore_ascii_case(k)
                    || p.kinase.entrez_gene_symbol.eq_ignore_ascii_case(k)
            })
            && measurement(p)
    })
}

impl CompoundRepository for Compounds {
    async fn get(&self, compound_name: String) -> OptRepoResult<Compound> {
        let data = self.0.read().await;
        data.check(RepoError::Get)?;
        Ok(data
            .compounds
            .iter()
            .find(|c| c.has_name(&compound_name))
            .cloned())
    }

    async fn list(&self, criteria: CompoundListCriteria) -> RepoResult<Page<Compound>> {
        let data = self.0.read().await;
        data.check(RepoError::List)?;
        let matching = data
            .compounds
            .iter()
            .filter(|c| compound_matches(&data, c, &criteria))
            .cloned()
            .collect();
        Ok(Page::slice(sorted_by_name(matching), criteria.window()))
    }

    async fn find_by_names(&self, compound_names: Vec<String>) -> RepoResult<Vec<Compound>> {
        let data = self.0.read().await;
        data.check(RepoError::List)?;
        Ok(data
            .compounds
            .iter()
            .filter(|c| compound_names.iter().any(|n| c.has_name(n)))
            .cloned()
            .collect())
    }

    async fn save_all(&self, compounds: Vec<Compound>) -> RepoResult<()> {
        let mut data = self.0.write().await;
        data.writes += 1;
        for compound in compounds {
            match data
                .compounds
                .iter_mut()
                .find(|c| c.has_name(&compound.compound_name))
            {
                Some(existing) => *existing = compound,
                None => data.compounds.push(compound),
            }
        }
        Ok(())
    }

    async fn missing_activity_profiles(
        &self,
        window: PageWindow,
    ) -> RepoResult<Page<CompoundCountPair>> {
        let data = self.0.read().await;
        data.check(RepoError::List)?;
        let kinase_count = data.kinases.len() as u64;
        let pairs = sorted_by_name(data.compounds.clone())
            .into_iter()
            .map(|c| CompoundCountPair {
                count: data
                    .profiles
                    .iter()
                    .filter(|p| c.has_name(&p.compound_name))
                    .count() as u64,
                compound_name: c.compound_name,
            })
            .filter(|pair| pair.count < kinase_count)
            .collect();
        Ok(Page::slice(pairs, window))
    }

    async fn missing_publication_info(&self, window: PageWindow) -> RepoResult<Page<Compound>> {
        let data = self.0.read().await;
        data.check(RepoError::List)?;
        let compounds = data
            .compounds
            .iter()
            .filter(|c| c.is_missing_publication_info())
            .cloned()
            .collect();
        Ok(Page::slice(sorted_by_name(compounds), window))
    }

    async fn incomplete(&self, window: PageWindow) -> RepoResult<Page<Compound>> {
        let data = self.0.read().await;
        data.check(RepoError::List)?;
        let compounds = data
            .compounds
            .iter()
            .filter(|c| c.is_incomplete())
            .cloned()
            .collect();
        Ok(Page::slice(sorted_by_name(compounds), window))
    }
}

impl KinaseRepository for Kinases {
    async fn list(&self, window: PageWindow) -> RepoResult<Page<Kinase>> {
        let data = self.0.read().await;
        data.check(RepoError::List)?;
        let mut kinases = data.kinases.clone();
        kinases.sort_by_key(|k| k.id);
        Ok(Page::slice(kinases, window))
    }

    async fn get_by_discoverx(&self, discoverx_gene_symbol: String) -> OptRepoResult<Kinase> {
        let data = self.0.read().await;
        data.check(RepoError::Get)?;
        Ok(data
            .kinases
            .iter()
            .find(|k| k.discoverx_gene_symbol == discoverx_gene_symbol)
            .cloned())
    }

    async fn find_by_discoverx(&self, symbols: Vec<String>) -> RepoResult<Vec<Kinase>> {
        let data = self.0.read().await;
        data.check(RepoError::List)?;
        Ok(data
            .kinases
            .iter()
            .filter(|k| symbols.contains(&k.discoverx_gene_symbol))
            .cloned()
            .collect())
    }
}

impl ActivityProfileRepository for ActivityProfiles {
    async fn list(&self, criteria: ActivityProfileListCriteria) -> RepoResult<Page<ActivityProfile>> {
        let data = self.0.read().await;
        data.check(RepoError::List)?;
        let mut profiles: Vec<ActivityProfile> = data
            .profiles
            .iter()
            .filter(|p| {
                criteria.filters().iter().all(|filter| match filter {
                    ActivityProfileFilter::Compound(name) => {
                        p.compound_name.eq_ignore_ascii_case(name)
                    }
                    ActivityProfileFilter::KinaseIds(ids) => ids.contains(&p.kinase.id),
                    ActivityProfileFilter::PercentControlAtMost(max) => {
                        p.percent_control.is_some_and(|v| v <= *max)
                    }
                })
            })
            .cloned()
            .collect();
        profiles.sort_by_key(|p| p.id);
        Ok(Page::slice(profiles, criteria.window()))
    }

    async fn find_by_keys(&self, keys: Vec<ProfileKey>) -> RepoResult<Vec<ActivityProfile>> {
        let data = self.0.read().await;
        data.check(RepoError::List)?;
        Ok(data
            .profiles
            .iter()
            .filter(|p| keys.contains(&p.key()))
            .cloned()
            .collect())
    }

    async fn save_all(&self, profiles: Vec<ActivityProfile>) -> RepoResult<()> {
        let mut data = self.0.write().await;
        data.writes += 1;
        for mut profile in profiles {
            match profile.id {
                Some(id) => {
                    if let Some(existing) = data.profiles.iter_mut().find(|p| p.id == Some(id)) {
                        *existing = profile;
                    }
                }
                None => {
                    profile.id = Some(data.next_id());
                    data.profiles.push(profile);
                }
            }
        }
        Ok(())
    }
}

fn newest_first<T, F>(mut items: Vec<T>, create_date: F) -> Vec<T>
where
    F: Fn(&T) -> Option<DateTime<Utc>>,
{
    items.sort_by_key(|item| std::cmp::Reverse(create_date(item)));
    items
}

impl BlogPostRepository for BlogPosts {
    async fn create(&self, mut post: BlogPost) -> RepoResult<BlogPost> {
        let mut data = self.0.write().await;
        data.writes += 1;
        post.id = Some(data.next_id());
        data.blog_posts.push(post.clone());
        Ok(post)
    }

    async fn get(&self, id: i64) -> OptRepoResult<BlogPost> {
        let data = self.0.read().await;
        data.check(RepoError::Get)?;
        Ok(data.blog_posts.iter().find(|p| p.id == Some(id)).cloned())
    }

    async fn list(&self, window: PageWindow) -> RepoResult<Page<BlogPost>> {
        let data = self.0.read().await;
        data.check(RepoError::List)?;
        let posts = newest_first(data.blog_posts.clone(), |p| p.create_date);
        Ok(Page::slice(posts, window))
    }

    async fn update(&self, post: BlogPost) -> OptRepoResult<BlogPost> {
        let mut data = self.0.write().await;
        data.writes += 1;
        let Some(existing) = data.blog_posts.iter_mut().find(|p| p.id == post.id) else {
            return Ok(None);
        };
        *existing = post.clone();
        Ok(Some(post))
    }

    async fn delete(&self, id: i64) -> OptRepoResult<()> {
        let mut data = self.0.write().await;
        let before = data.blog_posts.len();
        data.blog_posts.retain(|p| p.id != Some(id));
        Ok((data.blog_posts.len() < before).then_some(()))
    }
}

impl FeedbackRepository for FeedbackEntries {
    async fn create(&self, mut feedback: Feedback) -> RepoResult<Feedback> {
        let mut data = self.0.write().await;
        data.writes += 1;
        feedback.id = Some(data.next_id());
        data.feedback.push(feedback.clone());
        Ok(feedback)
    }

    async fn get(&self, id: i64) -> OptRepoResult<Feedback> {
        let data = self.0.read().await;
        data.check(RepoError::Get)?;
        Ok(data.feedback.iter().find(|f| f.id == Some(id)).cloned())
    }

    async fn list(&self, window: PageWindow) -> RepoResult<Page<Feedback>> {
        let data = self.0.read().await;
        data.check(RepoError::List)?;
        let entries = newest_first(data.feedback.clone(), |f| f.create_date);
        Ok(Page::slice(entries, window))
    }

    async fn delete(&self, id: i64) -> OptRepoResult<()> {
        let mut data = self.0.write().await;
        let before = data.feedback.len();
        data.feedback.retain(|f| f.id != Some(id));
        Ok((data.feedback.len() < before).then_some(()))
    }
}

impl PartnerRepository for Partners {
    async fn list(&self, window: PageWindow) -> RepoResult<Page<Partner>> {
        let data = self.0.read().await;
        data.check(RepoError::List)?;
        let mut partners = data.partners.clone();
        partners.sort_by_key(|p| p.id);
        Ok(Page::slice(partners, window))
    }
}

pub fn config() -> RakConfig {
    RakConfig::default()
}

pub fn kinase_a() -> Kinase {
    Kinase::new(1, "discoverxA", "entrezA")
}

pub fn kinase_b() -> Kinase {
    Kinase::new(2, "discoverxB", "entrezB")
}

pub fn compound(name: &str) -> Compound {
    Compound {
        smiles: Some("C1=CC=CC=C1".into()),
        primary_reference: Some("Doe et al.".into()),
        primary_reference_url: Some("https://example.org/doe".into()),
        ..Compound::new(name, "chemotypeA", "0.2")
    }
}

pub fn profile(id: i64, compound_name: &str, kinase: Kinase) -> ActivityProfile {
    ActivityProfile {
        id: Some(id),
        ..ActivityProfile::new(compound_name, kinase)
    }
}

pub fn date(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 9, 0, 0).unwrap()
}

/// Two kinases, three compounds and measurements for compoundA against both kinases.
pub fn seeded() -> InMemoryEngine {
    InMemoryEngine::new(Data {
        compounds: vec![
            compound("compoundA"),
            compound("compoundB"),
            Compound::new("compoundC", "chemotypeC", ""),
        ],
        kinases: vec![kinase_a(), kinase_b()],
        profiles: vec![
            ActivityProfile {
                percent_control: Some(0.2),
                compound_concentration: Some(1000),
                kd: Some(50.0),
                ..profile(1, "compoundA", kinase_a())
            },
            ActivityProfile {
                percent_control: Some(0.9),
                compound_concentration: Some(1000),
                ..profile(2, "compoundA", kinase_b())
            },
            ActivityProfile {
                percent_control: Some(0.6),
                kd: Some(900.0),
                ..profile(3, "compoundB", kinase_a())
            },
        ],
        partners: vec![Partner {
            id: 1,
            name: "Structural Genomics Consortium".into(),
            url: "https://www.thesgc.org".into(),
        }],
        next_id: 100,
        ..Data::default()
    })
}
