//! Search module.
//!
//! Contains filter criteria, sort keys, pagination, facets and the
//! listing pipeline.

mod facets;
mod filter;
mod pipeline;
mod query;
mod results;

pub use facets::facets;
pub use filter::{apply_filters, Filter};
pub use pipeline::list_products;
pub use query::{FilterCriteria, SortKey, DEFAULT_PAGE_SIZE};
pub use results::{Facet, FacetValue, PageResult, Pagination, SearchFacets};
