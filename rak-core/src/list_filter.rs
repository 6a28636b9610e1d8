use engine::PageWindow;
use engine::list_criteria::{ListCriteria, ListFilter, Tag};

#[derive(Debug, Clone, PartialEq)]
pub enum CompoundFilter {
    /// Compound name contains this text, ignoring case.
    NameContains(String),
    /// Has an activity profile against the kinase with this gene symbol.
    Kinase(String),
    /// That activity profile's percent control is at most this value.
    PercentControlAtMost(f64),
    /// That activity profile's Kd is at most this value.
    KdAtMost(f64),
}

impl ListFilter for CompoundFilter {
    const MAX_FILTER_COUNT: usize = MAX_COMPOUND_FILTER_COUNT;
    type Criteria = CompoundListCriteria;

    fn tag(&self) -> Tag {
        match self {
            CompoundFilter::NameContains(_) => Tag::One,
            CompoundFilter::Kinase(_) => Tag::Two,
            CompoundFilter::PercentControlAtMost(_) => Tag::Four,
            CompoundFilter::KdAtMost(_) => Tag::Eight,
        }
    }

    fn criteria(window: PageWindow) -> Self::Criteria {
        CompoundListCriteria::new(window)
    }
}

const MAX_COMPOUND_FILTER_COUNT: usize = 4;
pub type CompoundListCriteria = ListCriteria<CompoundFilter, MAX_COMPOUND_FILTER_COUNT>;

#[derive(Debug, Clone, PartialEq)]
pub enum ActivityProfileFilter {
    /// Exact compound name, ignoring case.
    Compound(String),
    KinaseIds(Vec<i64>),
    PercentControlAtMost(f64),
}

impl ListFilter for ActivityProfileFilter {
    const MAX_FILTER_COUNT: usize = MAX_PROFILE_FILTER_COUNT;
    type Criteria = ActivityProfileListCriteria;

    fn tag(&self) -> Tag {
        match self {
            ActivityProfileFilter::Compound(_) => Tag::One,
            ActivityProfileFilter::KinaseIds(_) => Tag::Two,
            ActivityProfileFilter::PercentControlAtMost(_) => Tag::Four,
        }
    }

    fn criteria(window: PageWindow) -> Self::Criteria {
        ActivityProfileListCriteria::new(window)
    }
}

const MAX_PROFILE_FILTER_COUNT: usize = 3;
pub type ActivityProfileListCriteria =
    ListCriteria<ActivityProfileFilter, MAX_PROFILE_FILTER_COUNT>;
