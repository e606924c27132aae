pub mod parse;
pub mod query;
pub mod traits;
pub mod usgs;

pub use query::FeedQuery;
pub use traits::*;
pub use usgs::UsgsClient;
