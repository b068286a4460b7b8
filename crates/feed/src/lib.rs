//! Folio feed normalizer
//!
//! Fetches the blog feed of a publishing account and turns it into
//! [`FeedPost`] summaries. Retrieval walks a fallback chain:
//! - primary URL, parser fetch then manual fetch
//! - alternate URL, parser fetch then manual fetch
//!
//! Failures are reported as [`FeedError`]; a feed with no entries is a
//! successful, empty [`FeedOutcome`].

pub mod chain;
pub mod client;
pub mod error;
pub mod normalize;
pub mod parse;
pub mod source;
pub mod types;

pub use client::{FeedClient, Strategy};
pub use error::{FeedError, FetchError, SourceFailure};
pub use source::{CandidateUrls, FeedAccount, FeedSettings};
pub use types::{FeedOutcome, FeedPost};
