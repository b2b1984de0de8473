pub mod schema;
pub mod error;
pub mod index;
pub mod dataset;
pub mod query;

pub use schema::*;
pub use error::*;
pub use index::*;
pub use dataset::*;
pub use query::*;
