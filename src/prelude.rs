//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use base1000::prelude::*;
//!
//! let registry = CorpusRegistry::load_default().unwrap();
//! let index = registry.build_index(registry.default_corpus()).unwrap();
//! let encoded = encode("hi", &index).unwrap();
//! assert!(decode(&encoded, &index).any(|t| t == "hi"));
//! ```

pub use crate::{
    Candidates,
    // Corpus
    CorpusIndex,
    CorpusRegistry,
    DecodeLimits,
    // Errors
    EncodeError,
    IndexError,
    ReferenceCorpus,

    // Core encoding/decoding
    decode,
    decode_with_limits,
    encode,
    encode_seeded,
    encode_with_rng,
};
