//! Field transform engine for backslash-delimited lexical records.
//!
//! A record is one line of a lexicon file, its fields separated by a
//! literal delimiter and addressed by 1-based position. Individual fields
//! encode phonological and morphological information in compact
//! notations; the modules here decode those notations into structured
//! values and re-encode them:
//!
//! - [`record`]: splitting and rejoining delimited records.
//! - [`grapheme`]: diacritic stripping and ASCII-range classification.
//! - [`phoneme`]: DISC to SAM-PA / CELEX / CPA conversion.
//! - [`syllable`]: syllable counts, stress patterns, ambisyllabic
//!   bracket conversion.
//! - [`morphology`]: the nested morpheme/word-class tree notation.
//! - [`inflection`]: inflectional feature vectors and syntactic
//!   category labels.
//! - [`wordplay`]: anagram/rhyme keys and letter counts.
//! - [`frequency`]: Zipf and per-million normalization.
//!
//! Every transform is a pure function of its input; the only shared
//! state is read-only lookup tables built on first use. Calls are safe to
//! run concurrently across records without coordination.

pub mod error;
pub mod frequency;
pub mod grapheme;
pub mod inflection;
pub mod morphology;
pub mod phoneme;
pub mod record;
pub mod syllable;
pub mod trace_init;
pub mod wordplay;

pub use error::EngineError;
pub use phoneme::Target;
pub use record::Record;
