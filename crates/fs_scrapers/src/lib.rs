pub mod scrapers;

pub use scrapers::ArticleExtractor;

pub mod prelude {
    pub use super::scrapers::ArticleExtractor;
    pub use fs_core::{ContentExtractor, ExtractedContent, Result, Error};
}
