use error_stack::Report;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const fn default_page() -> u64 {
    1
}

/// The page a caller asked for. Pages are 1-based; page 0 is read as the first page.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq, Clone, Copy)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: u64,
    pub page_size: Option<u64>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: None,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page size must be greater than zero")]
    ZeroPageSize,
    #[error("page size {requested} is larger than the maximum of {max}")]
    PageSizeTooLarge { requested: u64, max: u64 },
}

impl Pagination {
    pub fn with_page_size(page: u64, page_size: u64) -> Self {
        Self {
            page,
            page_size: Some(page_size),
        }
    }

    pub fn page_size_or(&self, default_page_size: u64) -> u64 {
        self.page_size.unwrap_or(default_page_size)
    }

    /// Resolves this request into a zero-based window over the full result set.
    pub fn window(
        &self,
        default_page_size: u64,
        max_page_size: u64,
    ) -> Result<PageWindow, Report<PaginationError>> {
        let size = self.page_size_or(default_page_size);
        if size == 0 {
            return Err(Report::new(PaginationError::ZeroPageSize));
        }
        if size > max_page_size {
            return Err(Report::new(PaginationError::PageSizeTooLarge {
                requested: size,
                max: max_page_size,
            }));
        }

        Ok(self.unchecked_window(size))
    }

    pub(crate) fn unchecked_window(&self, size: u64) -> PageWindow {
        let page_index = self.page.max(1) - 1;
        PageWindow {
            start: page_index.saturating_mul(size),
            size,
        }
    }
}

/// Zero-based offset and maximum length of one page.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq, Clone, Copy)]
pub struct PageWindow {
    pub start: u64,
    pub size: u64,
}

impl PageWindow {
    pub const fn new(start: u64, size: u64) -> Self {
        Self { start, size }
    }
}
