use utoipa::{
    PartialSchema,
    openapi::{RefOr, Schema},
};

pub mod error;
pub mod import;
pub mod list_criteria;
mod paged;
mod pagination;
pub mod value;

pub use paged::{Page, PagedDataError, PagedDataRep};
pub use pagination::{PageWindow, Pagination, PaginationError};

/// Schema for an `optional_field::Field<String>`, which shows up in OpenAPI docs as a nullable string.
pub fn patch_field_schema() -> impl Into<RefOr<Schema>> {
    <Option<String> as PartialSchema>::schema()
}
