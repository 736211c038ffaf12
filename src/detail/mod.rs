//! Fetch-by-id with bounded wait, retry and a per-identifier cache.

mod cache;
mod fetcher;

pub use cache::DetailCache;
pub use fetcher::{DetailFetcher, FetchPolicy, FetchSource, Fetched};
