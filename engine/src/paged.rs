use crate::pagination::PageWindow;
use error_stack::Report;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// What a repository hands back for a listing: one page of items plus the size of the whole result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }

    /// Cuts `window` out of an already materialized, already ordered collection.
    pub fn slice(all: Vec<T>, window: PageWindow) -> Self {
        let total = all.len() as u64;
        let skip = usize::try_from(window.start).unwrap_or(usize::MAX);
        let take = usize::try_from(window.size).unwrap_or(usize::MAX);
        let items = all.into_iter().skip(skip).take(take).collect();
        Self { items, total }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PagedDataError {
    #[error("count {count} does not match the {actual} items in data")]
    CountMismatch { count: u64, actual: u64 },
    #[error("start {start} plus count {count} is past the total of {total}")]
    PastTotal { start: u64, count: u64, total: u64 },
}

/// A bounded window into a larger, server-ordered collection.
///
/// `count` is always the number of items actually present in `data`, which can be
/// less than the page size that was asked for on the last page.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq)]
pub struct PagedDataRep<T> {
    data: Vec<T>,
    start: u64,
    count: u64,
    total: u64,
}

impl<T> PagedDataRep<T> {
    pub fn try_new(data: Vec<T>, start: u64, total: u64) -> Result<Self, Report<PagedDataError>> {
        let count = data.len() as u64;
        check_within_total(start, count, total)?;

        Ok(Self {
            data,
            start,
            count,
            total,
        })
    }

    pub fn from_page(page: Page<T>, window: PageWindow) -> Result<Self, Report<PagedDataError>> {
        Self::try_new(page.items, window.start, page.total)
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

#[derive(Deserialize)]
struct PagedDataWire<T> {
    data: Vec<T>,
    start: u64,
    count: u64,
    total: u64,
}

impl<T> TryFrom<PagedDataWire<T>> for PagedDataRep<T> {
    type Error = PagedDataError;

    fn try_from(wire: PagedDataWire<T>) -> Result<Self, Self::Error> {
        let actual = wire.data.len() as u64;
        if wire.count != actual {
            return Err(PagedDataError::CountMismatch {
                count: wire.count,
                actual,
            });
        }

        check_within_total(wire.start, wire.count, wire.total)?;

        Ok(Self {
            data: wire.data,
            start: wire.start,
            count: wire.count,
            total: wire.total,
        })
    }
}

// an empty page may start anywhere, e.g. when a caller pages past the end
fn check_within_total(start: u64, count: u64, total: u64) -> Result<(), PagedDataError> {
    if count > 0 && start.saturating_add(count) > total {
        return Err(PagedDataError::PastTotal {
            start,
            count,
            total,
        });
    }
    Ok(())
}

impl<'de, T> Deserialize<'de> for PagedDataRep<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = PagedDataWire::<T>::deserialize(deserializer)?;
        Self::try_from(wire).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn numbers(n: u32) -> Vec<u32> {
        (0..n).collect()
    }

    #[test]
    fn last_page_count_is_actual_length() {
        let window = PageWindow::new(20, 10);

        let page = Page::slice(numbers(25), window);
        let rep = PagedDataRep::from_page(page, window).unwrap();

        assert_eq!(5, rep.data().len());
        assert_eq!(20, rep.start());
        assert_eq!(5, rep.count());
        assert_eq!(25, rep.total());
        assert_eq!(&[20, 21, 22, 23, 24], rep.data());
    }

    #[test]
    fn window_past_the_end_is_empty() {
        let page = Page::slice(numbers(5), PageWindow::new(10, 10));

        assert!(page.items.is_empty());
        assert_eq!(5, page.total);
    }

    #[test]
    fn empty_page_past_the_end_is_valid() {
        let window = PageWindow::new(40, 10);

        let rep = PagedDataRep::from_page(Page::slice(numbers(25), window), window).unwrap();

        assert_eq!(0, rep.count());
        assert_eq!(40, rep.start());
        assert_eq!(25, rep.total());
    }

    #[test]
    fn data_past_total_is_rejected() {
        let err = PagedDataRep::try_new(numbers(3), 5, 6).unwrap_err();

        assert_eq!(
            &PagedDataError::PastTotal {
                start: 5,
                count: 3,
                total: 6
            },
            err.current_context()
        );
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let rep = PagedDataRep::try_new(vec!["a", "b"], 0, 2).unwrap();

        let value = serde_json::to_value(&rep).unwrap();

        assert_eq!(
            json!({"data": ["a", "b"], "start": 0, "count": 2, "total": 2}),
            value
        );
    }

    #[test]
    fn deserialize_accepts_consistent_body() {
        let rep: PagedDataRep<String> =
            serde_json::from_value(json!({"data": ["x"], "start": 3, "count": 1, "total": 4}))
                .unwrap();

        assert_eq!(1, rep.count());
        assert_eq!(3, rep.start());
    }

    #[test]
    fn deserialize_rejects_count_that_disagrees_with_data() {
        let result: Result<PagedDataRep<String>, _> =
            serde_json::from_value(json!({"data": ["x"], "start": 0, "count": 10, "total": 25}));

        assert!(result.is_err());
    }

    #[test]
    fn deserialize_rejects_negative_start() {
        let result: Result<PagedDataRep<String>, _> =
            serde_json::from_value(json!({"data": [], "start": -1, "count": 0, "total": 0}));

        assert!(result.is_err());
    }
}
