//! Card browser search over the catalog.

pub mod query;

pub use query::{search, CardQuery};
