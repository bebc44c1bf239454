pub mod articles;
pub mod pagination;

pub use articles::{ArticleSearchResultDto, BoardListingDto, SearchConditionDto};
pub use pagination::{PageDto, PageWindowDto};
