//! Search and evaluation for gambit.

pub mod depth;
pub mod error;
pub mod eval;
pub mod search;

pub use depth::DepthPolicy;
pub use error::ConfigError;
pub use eval::{Score, evaluate};
pub use search::config::SearchConfig;
pub use search::{Outcome, SearchResult, Searcher, choose_and_apply_engine_move};
