use crate::pagination::PageWindow;
use const_format::formatcp;
use std::mem::MaybeUninit;

type MaxFilterCountType = u8;
const MAX: u8 = u8::MAX;

/// Bit identifying a filter kind. Each kind can be applied at most once per criteria.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tag {
    One = 1,
    Two = 2,
    Four = 4,
    Eight = 8,
    Sixteen = 16,
    ThirtyTwo = 32,
    SixtyFour = 64,
    OneTwentyEight = 128,
}

impl Tag {
    const NONE: MaxFilterCountType = 0;
}

pub trait ListFilter {
    const MAX_FILTER_COUNT: usize;
    type Criteria;
    fn tag(&self) -> Tag;
    fn criteria(window: PageWindow) -> Self::Criteria;
}

/// A validated page window plus a small, fixed-capacity set of distinct filters.
///
/// `N` cannot be larger than u8::MAX
/// ```compile_fail
/// use engine::PageWindow;
/// use engine::list_criteria::ListCriteria;
/// enum TestFilter { Test1 }
/// let _ = ListCriteria::<TestFilter, 256>::new(PageWindow::new(0, 10));
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct ListCriteria<T, const N: usize> {
    inner: Box<ListCriteriaInner<T, N>>,
}

impl<T, const N: usize> ListCriteria<T, N> {
    pub fn new(window: PageWindow) -> Self {
        const {
            assert!(
                N <= MaxFilterCountType::MAX as usize,
                "{}",
                formatcp!("ListCriteria only supports sizes up to {}", MAX)
            )
        };
        Self {
            inner: Box::new(ListCriteriaInner {
                filters: None,
                window,
            }),
        }
    }

    pub fn window(&self) -> PageWindow {
        self.inner.window
    }

    pub fn filters(&self) -> &[T] {
        self.inner
            .filters
            .as_ref()
            .map(ListCriteriaFilters::get)
            .unwrap_or_default()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct ListCriteriaInner<T, const N: usize> {
    filters: Option<ListCriteriaFilters<T, N>>,
    window: PageWindow,
}

impl<T, const N: usize> ListCriteria<T, N>
where
    T: ListFilter,
{
    /// Applies `filter` unless a filter with the same tag is already present.
    pub fn add(&mut self, filter: T) -> &mut Self {
        let filters = self
            .inner
            .filters
            .get_or_insert_with(ListCriteriaFilters::new);

        let tag = filter.tag() as MaxFilterCountType;

        if tag & filters.applied == 0 && (filters.applied_count as usize) < N {
            filters.applied |= tag;
            filters.filters[filters.applied_count as usize].write(filter);
            filters.applied_count += 1;
        }

        self
    }

    pub fn with(mut self, filter: T) -> Self {
        self.add(filter);
        self
    }
}

#[derive(Debug)]
struct ListCriteriaFilters<T, const N: usize> {
    filters: [MaybeUninit<T>; N],
    applied_count: MaxFilterCountType,
    applied: MaxFilterCountType,
}

impl<T, const N: usize> PartialEq for ListCriteriaFilters<T, N>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.applied == other.applied
            && self.applied_count == other.applied_count
            && self.get() == other.get()
    }
}

impl<T, const N: usize> Eq for ListCriteriaFilters<T, N> where T: Eq {}

impl<T, const N: usize> ListCriteriaFilters<T, N> {
    fn new() -> Self {
        Self {
            filters: [const { MaybeUninit::uninit() }; N],
            applied_count: 0,
            applied: Tag::NONE,
        }
    }

    fn get(&self) -> &[T] {
        let initialized = &self.filters[..self.applied_count as usize];
        // SAFETY the first `applied_count` slots are always written before the count is bumped,
        // and MaybeUninit<T> has the same layout as T.
        unsafe { &*(initialized as *const [MaybeUninit<T>] as *const [T]) }
    }
}

impl<T, const N: usize> Drop for ListCriteriaFilters<T, N> {
    fn drop(&mut self) {
        for i in 0..self.applied_count {
            // SAFETY we've kept track of the number of filters applied, stored from left to right
            // in the array.
            unsafe { self.filters[i as usize].assume_init_drop() }
        }
    }
}
