//! Syllable and stress analysis over syllabified DISC transcriptions.
//!
//! Structural markers: `-` is a syllable boundary, `--` escapes a literal
//! content hyphen, `'`/`"` mark primary/secondary stress on the syllable
//! that follows, and `[`/`]` delimit syllables in the ambisyllabic bracket
//! encoding.

use tracing::debug;

use crate::error::EngineError;

/// Placeholder for an escaped literal hyphen while boundary hyphens are
/// being deleted. Private-use codepoint; never occurs in lexicon data.
const LITERAL_HYPHEN: char = '\u{E000}';

/// Delete primary and secondary stress markers.
pub fn strip_stress_markers(s: &str) -> String {
    s.chars().filter(|c| *c != '\'' && *c != '"').collect()
}

/// Delete syllable-boundary hyphens while preserving escaped literal
/// hyphens (`--`) as single content hyphens.
///
/// The escape must be resolved before boundary deletion: a single global
/// hyphen strip would also destroy the intentional hyphens the lexicon
/// encodes as doubled ones.
pub fn strip_syllable_markers(s: &str) -> String {
    let escaped = s.replace("--", &LITERAL_HYPHEN.to_string());
    let stripped: String = escaped.chars().filter(|c| *c != '-').collect();
    stripped.replace(LITERAL_HYPHEN, "-")
}

/// Syllable count for syllabified transcription fields: boundary hyphens
/// and embedded spaces separate syllables, escaped `--` hyphens are
/// content. Empty input has no syllables.
pub fn count_syllables_transcription(s: &str) -> usize {
    let stripped = strip_stress_markers(s);
    if stripped.is_empty() {
        return 0;
    }
    let escaped = stripped.replace("--", &LITERAL_HYPHEN.to_string());
    let boundaries = escaped.chars().filter(|c| *c == '-' || *c == ' ').count();
    boundaries + 1
}

/// Syllable count for fields whose encoding has no escaped hyphens:
/// every hyphen is a boundary. Empty input has no syllables.
///
/// Both this and [`count_syllables_transcription`] are part of the public
/// surface; they differ in literal-hyphen and space handling and the
/// caller picks the one matching its field's convention.
pub fn count_syllables_simple(s: &str) -> usize {
    let stripped = strip_stress_markers(s);
    if stripped.is_empty() {
        return 0;
    }
    stripped.chars().filter(|c| *c == '-').count() + 1
}

/// Extract the stress pattern of a syllabified transcription: one digit
/// per syllable, `1` primary, `2` secondary, `0` unstressed.
///
/// A syllable starts at position 0 and immediately after each boundary
/// hyphen. A stress marker at the syllable start yields its digit; any
/// other character yields `0` and remains phonetic content. The final
/// character of the input is a terminator artifact of the original
/// tokenization scheme and is never inspected; expected outputs depend
/// on this.
pub fn make_stress_pattern(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut pattern = String::new();
    let mut syllable_start = true;
    for &c in chars.iter().take(chars.len().saturating_sub(1)) {
        if c == '-' {
            syllable_start = true;
            continue;
        }
        if syllable_start {
            match c {
                '\'' => pattern.push('1'),
                '"' => pattern.push('2'),
                _ => pattern.push('0'),
            }
            syllable_start = false;
        }
    }
    pattern
}

/// An element of the bracket-syllable encoding: a plain symbol, or a
/// bracketed group (a syllable, or a nested ambisyllabic consonant).
#[derive(Debug)]
enum BracketItem {
    Symbol(char),
    Group(Vec<BracketItem>),
}

fn malformed(input: &str, position: usize) -> EngineError {
    debug!(input, position, "unbalanced bracket encoding");
    EngineError::MalformedStructure {
        input: input.to_string(),
        position,
    }
}

/// Parse the bracket encoding into a tree. Unbalanced brackets are fatal.
fn parse_bracket_tree(s: &str) -> Result<Vec<BracketItem>, EngineError> {
    let mut stack: Vec<Vec<BracketItem>> = vec![Vec::new()];
    for (pos, c) in s.char_indices() {
        match c {
            '[' => stack.push(Vec::new()),
            ']' => {
                if stack.len() == 1 {
                    return Err(malformed(s, pos));
                }
                let group = stack.pop().expect("stack holds at least two levels");
                stack
                    .last_mut()
                    .expect("outer level remains")
                    .push(BracketItem::Group(group));
            }
            other => stack
                .last_mut()
                .expect("stack never empties")
                .push(BracketItem::Symbol(other)),
        }
    }
    if stack.len() != 1 {
        return Err(malformed(s, s.len()));
    }
    Ok(stack.pop().expect("single remaining level"))
}

fn max_depth(items: &[BracketItem]) -> usize {
    items
        .iter()
        .map(|item| match item {
            BracketItem::Symbol(_) => 0,
            BracketItem::Group(inner) => 1 + max_depth(inner),
        })
        .max()
        .unwrap_or(0)
}

/// Serialize one bracketed group into its syllables. A nested group is an
/// ambisyllabic consonant: its material closes the syllable on its left
/// and also opens the syllable on its right, so the shared symbol is
/// emitted once on each side of the boundary.
fn syllable_run(items: &[BracketItem]) -> Vec<String> {
    let mut syllables = Vec::new();
    let mut current = String::new();
    for item in items {
        match item {
            BracketItem::Symbol(c) => current.push(*c),
            BracketItem::Group(inner) => {
                let shared = syllable_run(inner);
                if let Some(first) = shared.first() {
                    current.push_str(first);
                }
                syllables.push(std::mem::take(&mut current));
                if shared.len() > 2 {
                    syllables.extend(shared[1..shared.len() - 1].iter().cloned());
                }
                if let Some(last) = shared.last() {
                    current.push_str(last);
                }
            }
        }
    }
    syllables.push(current);
    syllables
}

/// Convert the bracket syllable encoding to the hyphen encoding.
///
/// Without nesting this is the plain rewrite of adjacent `][` boundaries
/// to `-`; nesting depth two or more marks an ambisyllabic consonant
/// shared between two syllables, which appears in both.
pub fn convert_ambisyllabic_brackets(s: &str) -> Result<String, EngineError> {
    let tree = parse_bracket_tree(s)?;
    if max_depth(&tree) <= 1 {
        return Ok(s.replace("][", "-").replace(['[', ']'], ""));
    }

    let mut syllables: Vec<String> = Vec::new();
    let mut pending = String::new();
    for item in &tree {
        match item {
            BracketItem::Symbol(c) => match syllables.last_mut() {
                Some(last) => last.push(*c),
                None => pending.push(*c),
            },
            BracketItem::Group(inner) => {
                let mut run = syllable_run(inner);
                if !pending.is_empty() {
                    run[0].insert_str(0, &pending);
                    pending.clear();
                }
                syllables.extend(run);
            }
        }
    }
    if !pending.is_empty() {
        syllables.push(pending);
    }
    Ok(syllables.join("-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_stress_markers() {
        assert_eq!(strip_stress_markers("'b{n-dIt"), "b{n-dIt");
        assert_eq!(strip_stress_markers("b{n-\"dIt"), "b{n-dIt");
        assert_eq!(strip_stress_markers("b{n"), "b{n");
    }

    #[test]
    fn test_strip_stress_markers_idempotent() {
        let once = strip_stress_markers("'b{n-\"dIt");
        assert_eq!(strip_stress_markers(&once), once);
    }

    #[test]
    fn test_strip_syllable_markers_boundaries() {
        assert_eq!(strip_syllable_markers("a-ban-don"), "abandon");
    }

    #[test]
    fn test_strip_syllable_markers_escaped_hyphen() {
        // Doubled hyphen is a literal content hyphen, not a boundary.
        assert_eq!(strip_syllable_markers("ban--dit"), "ban-dit");
        assert_eq!(strip_syllable_markers("a--b-c"), "a-bc");
    }

    #[test]
    fn test_count_syllables_simple() {
        assert_eq!(count_syllables_simple("b{n"), 1);
        assert_eq!(count_syllables_simple("b{n-dIt"), 2);
        assert_eq!(count_syllables_simple("'b{n-dIt"), 2);
        assert_eq!(count_syllables_simple(""), 0);
    }

    #[test]
    fn test_count_syllables_transcription() {
        assert_eq!(count_syllables_transcription("@-'b{n-d@n"), 3);
        // Escaped hyphen is content, not a boundary.
        assert_eq!(count_syllables_transcription("b{n--dIt"), 1);
        // Embedded space separates syllables of a multi-word entry.
        assert_eq!(count_syllables_transcription("{d 'hQk"), 2);
        assert_eq!(count_syllables_transcription(""), 0);
    }

    #[test]
    fn test_variants_differ_on_escaped_hyphens() {
        assert_eq!(count_syllables_simple("b{n--dIt"), 3);
        assert_eq!(count_syllables_transcription("b{n--dIt"), 1);
    }

    #[test]
    fn test_stress_pattern_primary() {
        assert_eq!(make_stress_pattern("'b{n-dIt"), "10");
    }

    #[test]
    fn test_stress_pattern_secondary() {
        assert_eq!(make_stress_pattern("b{n-\"dIt"), "02");
    }

    #[test]
    fn test_stress_pattern_unstressed_monosyllable() {
        assert_eq!(make_stress_pattern("b{n"), "0");
    }

    #[test]
    fn test_stress_pattern_three_syllables() {
        assert_eq!(make_stress_pattern("@-'b{n-d@n"), "010");
    }

    #[test]
    fn test_stress_pattern_empty() {
        assert_eq!(make_stress_pattern(""), "");
    }

    #[test]
    fn test_ambisyllabic_flat_brackets() {
        // No nesting: identical to replacing ][ boundaries and stripping.
        assert_eq!(convert_ambisyllabic_brackets("[k][{t]").unwrap(), "k-{t");
        assert_eq!(
            convert_ambisyllabic_brackets("[b{n][dIt]").unwrap(),
            "b{n-dIt"
        );
    }

    #[test]
    fn test_ambisyllabic_shared_consonant() {
        // The nested consonant closes the left syllable and opens the
        // right one.
        assert_eq!(
            convert_ambisyllabic_brackets("[sE[v]@n]").unwrap(),
            "sEv-v@n"
        );
    }

    #[test]
    fn test_ambisyllabic_shared_consonant_appears_twice() {
        let out = convert_ambisyllabic_brackets("[bI[t]@]").unwrap();
        assert_eq!(out, "bIt-t@");
        assert_eq!(out.chars().filter(|c| *c == 't').count(), 2);
    }

    #[test]
    fn test_ambisyllabic_mixed_with_flat_syllable() {
        assert_eq!(
            convert_ambisyllabic_brackets("[sE[v]@n][ti]").unwrap(),
            "sEv-v@n-ti"
        );
    }

    #[test]
    fn test_ambisyllabic_unbalanced() {
        assert!(matches!(
            convert_ambisyllabic_brackets("[k][{t"),
            Err(EngineError::MalformedStructure { .. })
        ));
        assert!(matches!(
            convert_ambisyllabic_brackets("k]"),
            Err(EngineError::MalformedStructure { .. })
        ));
    }
}
