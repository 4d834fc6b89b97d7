/// Unified error type for the field transform engine.
///
/// Symbol-level lookups never produce errors (unknown phoneme symbols pass
/// through unchanged); every variant here is either a caller configuration
/// mistake or structurally invalid input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("field index {index} out of range for record with {width} fields")]
    FieldIndex { index: usize, width: usize },

    #[error("unbalanced structure in {input:?} at byte {position}")]
    MalformedStructure { input: String, position: usize },

    #[error("syntactic category {0} outside 1..=15")]
    CategoryRange(i64),

    #[error("unknown target alphabet: {0:?}")]
    UnknownTargetAlphabet(String),
}
