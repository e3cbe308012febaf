//! Runner module for list refresh and probing
//!
//! This module contains the core probing logic, including:
//! - URL list parsing
//! - HTTP fetching and the direct-then-relay probe
//! - The fixed-size worker pool that drains one list
//! - The endless refresh loop

mod coordinator;
mod fetcher;
mod parser;
mod scheduler;

pub use coordinator::{IterationOutcome, Runner};
pub use fetcher::{build_http_client, fetch_text, relay_url, FetchResult, Prober};
pub use parser::parse_list;
pub use scheduler::WorkerPool;
