pub mod errors;
pub mod math;
pub mod radix;

// Re-export error types for public API
pub use errors::{
    CorpusLoadError, CorpusNotFoundError, EncodeError, IndexError, find_closest_corpus,
};
