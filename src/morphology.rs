//! Morphological structure notation.
//!
//! A word's analysis is written as nested groups: `(` morpheme `)` followed
//! by a word-class indicator `[X]` (single code) or an affix indicator like
//! `[N|V.]` (multi-code). Groups nest to arbitrary finite depth; siblings
//! are separated by commas. Depth 0 is the unanalyzed whole word.

use serde::Serialize;
use tracing::debug;

use crate::error::EngineError;

/// One node of a parsed morphological analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MorphNode {
    /// Orthographic material directly inside this group (empty for purely
    /// structural nodes).
    pub morpheme: String,
    /// The `[...]` indicator content attached to this group; empty when
    /// the notation carries none.
    pub class_code: String,
    pub children: Vec<MorphNode>,
}

impl MorphNode {
    fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

fn malformed(input: &str, position: usize) -> EngineError {
    debug!(input, position, "unbalanced morphological notation");
    EngineError::MalformedStructure {
        input: input.to_string(),
        position,
    }
}

struct Parser<'a> {
    input: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Parse the sibling sequence at top level. Loose characters outside
    /// any group belong to the unanalyzed surface form and carry no
    /// structure; they are skipped.
    fn parse_roots(&mut self) -> Result<Vec<MorphNode>, EngineError> {
        let mut roots = Vec::new();
        while let Some(c) = self.peek() {
            match c {
                '(' => {
                    self.pos += 1;
                    let mut node = self.parse_group()?;
                    node.class_code = self.parse_indicator()?;
                    roots.push(node);
                }
                ')' => return Err(malformed(self.input, self.pos)),
                '[' => {
                    // Stray indicator with no preceding group; validate
                    // bracket balance and move on.
                    self.parse_indicator()?;
                }
                ']' => return Err(malformed(self.input, self.pos)),
                _ => self.pos += 1,
            }
        }
        Ok(roots)
    }

    /// Parse a group body; `pos` is just past the opening paren. Returns
    /// with `pos` just past the matching close paren.
    fn parse_group(&mut self) -> Result<MorphNode, EngineError> {
        let mut node = MorphNode {
            morpheme: String::new(),
            class_code: String::new(),
            children: Vec::new(),
        };
        loop {
            match self.peek() {
                None => return Err(malformed(self.input, self.pos)),
                Some(')') => {
                    self.pos += 1;
                    return Ok(node);
                }
                Some('(') => {
                    self.pos += 1;
                    let mut child = self.parse_group()?;
                    child.class_code = self.parse_indicator()?;
                    node.children.push(child);
                }
                Some('[') => {
                    // Indicator not attached to a closed child group;
                    // consume it for balance, keep nothing.
                    self.parse_indicator()?;
                }
                Some(']') => return Err(malformed(self.input, self.pos)),
                Some(',') => {
                    // Sibling separator, structural only.
                    self.pos += 1;
                }
                Some(c) => {
                    node.morpheme.push(c);
                    self.pos += 1;
                }
            }
        }
    }

    /// Consume a `[...]` indicator if one starts here; empty string when
    /// the next character is anything else. An opened indicator must
    /// close before end of input.
    fn parse_indicator(&mut self) -> Result<String, EngineError> {
        if self.peek() != Some('[') {
            return Ok(String::new());
        }
        let open = self.pos;
        self.pos += 1;
        let mut code = String::new();
        loop {
            match self.peek() {
                None => return Err(malformed(self.input, open)),
                Some(']') => {
                    self.pos += 1;
                    return Ok(code);
                }
                Some(c) => {
                    code.push(c);
                    self.pos += 1;
                }
            }
        }
    }
}

/// Parse a morphological notation string into its tree of analysis
/// groups. Unbalanced parens or brackets are fatal.
pub fn parse_morphology(s: &str) -> Result<Vec<MorphNode>, EngineError> {
    Parser::new(s).parse_roots()
}

/// Remove every `[...]` indicator span, leaving morphemes and parens.
pub fn strip_word_class_labels(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_label = false;
    for c in s.chars() {
        match c {
            '[' => in_label = true,
            ']' => in_label = false,
            _ if in_label => {}
            _ => out.push(c),
        }
    }
    out
}

/// Remove all parens and turn the morpheme-separator comma into `+`,
/// yielding the flat concatenation view. Run on label-stripped input for
/// the plain segmentation of a word.
pub fn strip_structure_markers(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '(' && *c != ')')
        .map(|c| if c == ',' { '+' } else { c })
        .collect()
}

/// Flat `root+affix` segmentation of an analyzed word.
pub fn morpheme_segmentation(s: &str) -> String {
    strip_structure_markers(&strip_word_class_labels(s))
}

fn push_classes(node: &MorphNode, out: &mut String) {
    for child in &node.children {
        push_classes(child, out);
    }
    let mut code_chars = node.class_code.chars();
    match (code_chars.next(), code_chars.next()) {
        // Single-character label: reported literally.
        (Some(code), None) => out.push(code),
        // Multi-code affix indicator: reported generically.
        (Some(_), Some(_)) => out.push('x'),
        (None, _) => {}
    }
}

/// The word-class sequence of an analysis, one character per group in the
/// order groups close: a single-character label literally, any longer
/// affix code as `x`.
pub fn extract_word_classes(s: &str) -> Result<String, EngineError> {
    let roots = parse_morphology(s)?;
    let mut out = String::new();
    for root in &roots {
        push_classes(root, &mut out);
    }
    Ok(out)
}

fn depth(node: &MorphNode) -> usize {
    1 + node.children.iter().map(depth).max().unwrap_or(0)
}

/// Number of distinct analysis levels available for the word, counting
/// the whole-word level and the fully decomposed level. A word with no
/// structure at all has zero levels.
pub fn count_analysis_levels(s: &str) -> Result<usize, EngineError> {
    let roots = parse_morphology(s)?;
    Ok(roots.iter().map(depth).max().unwrap_or(0))
}

fn count_leaves(node: &MorphNode) -> usize {
    if node.is_leaf() {
        1
    } else {
        node.children.iter().map(count_leaves).sum()
    }
}

/// Number of terminal morphemes: leaf groups only, intermediate grouping
/// levels are not morphemes themselves.
pub fn count_morphemes(s: &str) -> Result<usize, EngineError> {
    let roots = parse_morphology(s)?;
    Ok(roots.iter().map(count_leaves).sum())
}

/// Collapse every numbered verb subclass digit to an undifferentiated
/// `V` in a first-level component label string.
pub fn collapse_verb_subclasses(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii_digit() { 'V' } else { c })
        .collect()
}

/// Component count of a first-level analysis label string, one character
/// per component after verb-subclass collapse.
///
/// The one-character-per-component convention is inherited from the
/// source field format and is assumed, not validated, here.
pub fn count_immediate_components(s: &str) -> usize {
    collapse_verb_subclasses(s).chars().count()
}
