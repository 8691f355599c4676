mod error;
mod session;

pub use error::SegmentError;
pub use session::WildcardMatcher;
