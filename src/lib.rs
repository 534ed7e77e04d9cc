//! Base1000: text hidden in plain sight as characters of a classical text.
//!
//! The UTF-8 bytes of a message are read as one big integer and written in
//! base 1000. Every digit becomes a character taken from that offset of a
//! reference corpus (by default the Thousand Character Classic, whose 1000
//! characters give exactly one per digit value). Several editions of the same
//! text can be combined, in which case an offset may be rendered by any of the
//! characters the editions put there.
//!
//! Decoding is multi-valued: a character that occurs at several offsets could
//! stand for several digits, so [`decode`] lazily enumerates every consistent
//! assignment and keeps the ones that form valid UTF-8.
//!
//! # Example
//!
//! ```
//! use base1000::{CorpusRegistry, decode, encode};
//!
//! let registry = CorpusRegistry::load_default().unwrap();
//! let index = registry.build_index("qianziwen").unwrap();
//!
//! let encoded = encode("114514", &index).unwrap();
//! assert_eq!(encoded, "夜裳移柰梧");
//! assert!(decode(&encoded, &index).any(|text| text == "114514"));
//! ```

mod core;
mod encoders;

pub mod prelude;

pub use crate::core::config::{CorpusConfig, CorpusRegistry, DecodeSettings, Settings, builtin_text};
pub use crate::core::corpus::{ReferenceCorpus, clean};
pub use crate::core::index::{CorpusIndex, CorpusIndexBuilder};
pub use crate::encoders::algorithms::{
    CorpusLoadError, CorpusNotFoundError, EncodeError, IndexError, find_closest_corpus,
};
pub use crate::encoders::candidates::{
    Candidates, DEFAULT_MAX_COMBINATIONS, DecodeLimits, decode, decode_with_limits,
};
pub use crate::encoders::math::{encode, encode_seeded, encode_with_rng};
pub use crate::encoders::radix::{BASE, from_digits, to_digits};
