pub mod newsapi;
pub mod sources;
pub mod stub;

pub use newsapi::NewsApiClient;
pub use stub::StubNewsSearch;

pub mod prelude {
    pub use super::newsapi::NewsApiClient;
    pub use super::stub::StubNewsSearch;
    pub use fs_core::{Bias, CounterArticleSearch, CounterCandidate, SearchOutcome};
}
