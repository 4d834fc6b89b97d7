use crate::error::EngineError;

/// One delimited lexicon line, split into its ordered fields.
///
/// Fields are addressed 1-based, matching the column numbering of the
/// source lexicon documentation. The delimiter is treated as a literal
/// string, never a pattern, so backslash works without escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn parse(line: &str, delimiter: &str) -> Self {
        Self {
            fields: split_fields(line, delimiter)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.fields.len()
    }

    /// Fetch a field by 1-based index.
    pub fn field(&self, index: usize) -> Result<&str, EngineError> {
        self.check_index(index)?;
        Ok(&self.fields[index - 1])
    }

    /// Replace a field by 1-based index.
    pub fn set_field(&mut self, index: usize, value: String) -> Result<(), EngineError> {
        self.check_index(index)?;
        self.fields[index - 1] = value;
        Ok(())
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn encode(&self, delimiter: &str) -> String {
        self.fields.join(delimiter)
    }

    fn check_index(&self, index: usize) -> Result<(), EngineError> {
        if index == 0 || index > self.fields.len() {
            return Err(EngineError::FieldIndex {
                index,
                width: self.fields.len(),
            });
        }
        Ok(())
    }
}

/// Split a record on a literal delimiter string.
pub fn split_fields<'a>(line: &'a str, delimiter: &str) -> Vec<&'a str> {
    line.split(delimiter).collect()
}

/// Rejoin fields with the same delimiter. Lossless inverse of
/// [`split_fields`] for fields that do not themselves contain the
/// delimiter.
pub fn join_fields(fields: &[&str], delimiter: &str) -> String {
    fields.join(delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_join_roundtrip() {
        let line = r"1\abandon\@'b{nd@n\3";
        let fields = split_fields(line, "\\");
        assert_eq!(fields, vec!["1", "abandon", "@'b{nd@n", "3"]);
        assert_eq!(join_fields(&fields, "\\"), line);
    }

    #[test]
    fn test_backslash_is_literal_not_pattern() {
        // A regex-based split would need escaping here.
        let fields = split_fields(r"a\b\c", "\\");
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn test_field_one_based() {
        let record = Record::parse(r"1\abandon\@'b{nd@n", "\\");
        assert_eq!(record.field(1).unwrap(), "1");
        assert_eq!(record.field(3).unwrap(), "@'b{nd@n");
    }

    #[test]
    fn test_field_out_of_range() {
        let record = Record::parse(r"a\b", "\\");
        assert_eq!(
            record.field(3),
            Err(EngineError::FieldIndex { index: 3, width: 2 })
        );
        assert_eq!(
            record.field(0),
            Err(EngineError::FieldIndex { index: 0, width: 2 })
        );
    }

    #[test]
    fn test_set_field_and_encode() {
        let mut record = Record::parse(r"a\b\c", "\\");
        record.set_field(2, "B".to_string()).unwrap();
        assert_eq!(record.encode("\\"), r"a\B\c");
    }

    #[test]
    fn test_empty_fields_preserved() {
        let record = Record::parse(r"a\\c", "\\");
        assert_eq!(record.width(), 3);
        assert_eq!(record.field(2).unwrap(), "");
        assert_eq!(record.encode("\\"), r"a\\c");
    }
}
