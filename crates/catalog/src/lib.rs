pub mod cart;
pub mod facets;
pub mod filter;
pub mod repository;
pub mod slug;

pub use cart::Cart;
pub use facets::{build_facets, FacetMode, FacetTree};
pub use filter::{apply, FilterState, PageResult, SelectionMode, SortOption};
pub use repository::{ProductRepository, ProductSource, SourceError};
pub use slug::generate_slug;
