//! Hard-filter implementations.
//!
//! Each filter excludes candidates outright; none of them scores anything.

pub mod hidden;
pub mod ng_channel;
pub mod ng_keyword;

pub use hidden::HiddenVideoFilter;
pub use ng_channel::NgChannelFilter;
pub use ng_keyword::NgKeywordFilter;
