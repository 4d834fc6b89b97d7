//! Phonetic alphabet codec.
//!
//! DISC is the canonical one-character-per-phoneme encoding of the source
//! lexicon; this module converts DISC fields into the three multi-character
//! target notations. The alphabets are in 1:1 symbol correspondence, so a
//! flat lookup table suffices; there is no context-sensitive rewriting.

mod table;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::EngineError;
use crate::record::Record;

/// Target phonetic notation for a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Sampa,
    Celex,
    Cpa,
}

impl Target {
    /// Parse a target alphabet name. Accepts the historical two-letter
    /// names (`SP`, `CX`, `CP`) and the long names, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        match name.to_ascii_lowercase().as_str() {
            "sp" | "sampa" | "sam-pa" => Ok(Self::Sampa),
            "cx" | "celex" => Ok(Self::Celex),
            "cp" | "cpa" => Ok(Self::Cpa),
            _ => Err(EngineError::UnknownTargetAlphabet(name.to_string())),
        }
    }

    fn column(self) -> usize {
        match self {
            Self::Sampa => 0,
            Self::Celex => 1,
            Self::Cpa => 2,
        }
    }
}

fn mapping() -> &'static HashMap<char, [&'static str; 3]> {
    static MAP: OnceLock<HashMap<char, [&'static str; 3]>> = OnceLock::new();
    MAP.get_or_init(|| {
        table::PHONEME_ROWS
            .iter()
            .chain(table::STRUCTURAL_ROWS.iter())
            .map(|&(disc, cells)| (disc, cells))
            .collect()
    })
}

/// Look up the target counterpart of one DISC symbol. `None` means the
/// symbol is outside the inventory; field-level conversion passes such
/// characters through unchanged.
pub fn convert_symbol(symbol: char, target: Target) -> Option<&'static str> {
    mapping().get(&symbol).map(|cells| cells[target.column()])
}

/// Convert every symbol of a DISC field, in order. Unmapped characters
/// are copied through literally; conversion never rejects a symbol.
pub fn convert_field(field: &str, target: Target) -> String {
    let mut out = String::with_capacity(field.len());
    for c in field.chars() {
        match convert_symbol(c, target) {
            Some(mapped) => out.push_str(mapped),
            None => out.push(c),
        }
    }
    out
}

/// Convert several fields of one record in a single pass, each field
/// independently addressed (1-based) and independently targeted. Fields
/// not named in `requests` are copied through verbatim.
///
/// All indices are validated against the record width before any output
/// is produced, so a bad request fails the whole call rather than
/// emitting a half-converted line.
pub fn convert_record(
    line: &str,
    delimiter: &str,
    requests: &[(usize, Target)],
) -> Result<String, EngineError> {
    let mut record = Record::parse(line, delimiter);
    for &(index, _) in requests {
        if index == 0 || index > record.width() {
            return Err(EngineError::FieldIndex {
                index,
                width: record.width(),
            });
        }
    }
    for &(index, target) in requests {
        let converted = convert_field(record.field(index)?, target);
        record.set_field(index, converted)?;
    }
    Ok(record.encode(delimiter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_names() {
        assert_eq!(Target::from_name("SP").unwrap(), Target::Sampa);
        assert_eq!(Target::from_name("cx").unwrap(), Target::Celex);
        assert_eq!(Target::from_name("cpa").unwrap(), Target::Cpa);
        assert_eq!(
            Target::from_name("ipa"),
            Err(EngineError::UnknownTargetAlphabet("ipa".to_string()))
        );
    }

    #[test]
    fn test_symbol_lookup() {
        assert_eq!(convert_symbol('J', Target::Sampa), Some("tS"));
        assert_eq!(convert_symbol('J', Target::Cpa), Some("T/"));
        assert_eq!(convert_symbol('{', Target::Celex), Some("&"));
        assert_eq!(convert_symbol('{', Target::Sampa), Some("{"));
        assert_eq!(convert_symbol('Z', Target::Cpa), Some("Z"));
        // Outside the inventory.
        assert_eq!(convert_symbol('!', Target::Sampa), None);
    }

    #[test]
    fn test_all_rows_have_cells_for_every_target() {
        for &(disc, _) in super::table::PHONEME_ROWS {
            for target in [Target::Sampa, Target::Celex, Target::Cpa] {
                assert!(
                    convert_symbol(disc, target).is_some(),
                    "missing cell for DISC symbol {disc:?}"
                );
            }
        }
    }

    #[test]
    fn test_convert_field_bandit() {
        // b{ndIt: only { differs between SAM-PA and CELEX.
        assert_eq!(convert_field("b{ndIt", Target::Sampa), "b{ndIt");
        assert_eq!(convert_field("b{ndIt", Target::Celex), "b&ndIt");
        assert_eq!(convert_field("b{ndIt", Target::Cpa), "b^/ndIt");
    }

    #[test]
    fn test_convert_field_boundary_and_stress() {
        assert_eq!(convert_field("'b{n-dIt", Target::Celex), "'b&n-dIt");
        assert_eq!(convert_field("'b{n-dIt", Target::Cpa), "\"b^/n.dIt");
        assert_eq!(convert_field("\"b{n", Target::Sampa), "%b{n");
    }

    #[test]
    fn test_convert_field_unknown_passthrough() {
        assert_eq!(convert_field("b!n", Target::Sampa), "b!n");
    }

    #[test]
    fn test_convert_record_multi_field() {
        let line = r"1\abandon\@'b{nd@n\@'b{nd@n";
        let out = convert_record(
            line,
            "\\",
            &[(3, Target::Celex), (4, Target::Cpa)],
        )
        .unwrap();
        assert_eq!(out, "1\\abandon\\@'b&nd@n\\@\"b^/nd@n");
    }

    #[test]
    fn test_convert_record_untouched_fields_verbatim() {
        let line = r"12\b{d\b{d";
        let out = convert_record(line, "\\", &[(3, Target::Celex)]).unwrap();
        assert_eq!(out, r"12\b{d\b&d");
    }

    #[test]
    fn test_convert_record_validates_before_processing() {
        let line = r"a\b";
        assert_eq!(
            convert_record(line, "\\", &[(1, Target::Sampa), (5, Target::Cpa)]),
            Err(EngineError::FieldIndex { index: 5, width: 2 })
        );
    }
}
