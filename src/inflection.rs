//! Inflectional and syntactic code decoding.

use crate::error::EngineError;

/// The recognized inflectional tags, in output-slot order: singular,
/// plural, positive, comparative, superlative, infinitive, participle,
/// present, past, 1st/2nd/3rd person, rare form.
const INFLECTION_TAGS: [char; 13] = [
    'S', 'P', 'b', 'c', 's', 'i', 'p', 'e', 'a', '1', '2', '3', 'r',
];

/// Decode an inflectional type code into the fixed-order 13-slot `Y`/`N`
/// vector. Tags may appear in any order in the input; each is consumed at
/// most once, so a repeated tag cannot fill two slots.
pub fn decode_inflectional_features(code: &str) -> String {
    let mut remaining: Vec<char> = code.chars().collect();
    let mut vector = String::with_capacity(INFLECTION_TAGS.len());
    for tag in INFLECTION_TAGS {
        match remaining.iter().position(|c| *c == tag) {
            Some(at) => {
                remaining.remove(at);
                vector.push('Y');
            }
            None => vector.push('N'),
        }
    }
    vector
}

/// Numeric syntactic class labels, index 0 holding class 1.
static CATEGORY_LABELS: [&str; 15] = [
    "N", "A", "NUM", "V", "ART", "PRON", "ADV", "PREP", "C", "I", "SCON", "CCON", "LET", "ABB",
    "TO",
];

/// Label for a numeric syntactic category code. Defined for 1 through 15
/// only; anything else is a caller configuration error.
pub fn decode_syntactic_category(code: i64) -> Result<&'static str, EngineError> {
    if !(1..=15).contains(&code) {
        return Err(EngineError::CategoryRange(code));
    }
    Ok(CATEGORY_LABELS[(code - 1) as usize])
}

/// A morphological feature tagging system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureSystem {
    Celex,
    UniMorph,
    Ud,
}

/// One feature correspondence. The UD column may list several tags that
/// collapse onto one tag elsewhere; its first member is the canonical
/// target when mapping into UD.
struct FeatureRow {
    celex: &'static str,
    unimorph: &'static str,
    ud: &'static [&'static str],
}

static FEATURE_ROWS: &[FeatureRow] = &[
    FeatureRow {
        celex: "B",
        unimorph: "ADV",
        ud: &["ADV|_"],
    },
    FeatureRow {
        celex: "b",
        unimorph: "ADJ",
        ud: &["ADJ|_"],
    },
    FeatureRow {
        celex: "c",
        unimorph: "ADJ;CMPR",
        ud: &["ADJ|Degree=Cmp"],
    },
    FeatureRow {
        celex: "s",
        unimorph: "ADJ;RL",
        ud: &["ADJ|Degree=Sup"],
    },
    FeatureRow {
        celex: "i",
        unimorph: "V;NFIN",
        ud: &["VERB|VerbForm=Inf"],
    },
    FeatureRow {
        celex: "pe",
        unimorph: "V.PTCP;PRS",
        ud: &["VERB|Tense=Pres|VerbForm=Part"],
    },
    FeatureRow {
        celex: "pa",
        unimorph: "V.PTCP;PST",
        ud: &["VERB|Tense=Past|VerbForm=Part"],
    },
    FeatureRow {
        celex: "a1S",
        unimorph: "V;PST",
        ud: &["VERB|Tense=Past"],
    },
    FeatureRow {
        celex: "e3S",
        unimorph: "V;SG;3;PRS",
        ud: &["VERB|Number=Sing|Person=3|Tense=Pres"],
    },
    FeatureRow {
        celex: "S",
        unimorph: "N;SG",
        ud: &[
            "NOUN|Number=Sing",
            "PROPN|Number=Sing",
            "PROPN|Gender=Fem|Number=Sing",
            "PROPN|Gender=Masc|Number=Sing",
        ],
    },
    FeatureRow {
        celex: "P",
        unimorph: "N;PL",
        ud: &[
            "NOUN|Number=Plur",
            "PROPN|Number=Plur",
            "PROPN|Gender=Fem|Number=Plur",
            "PROPN|Gender=Masc|Number=Plur",
        ],
    },
];

impl FeatureRow {
    fn matches(&self, system: FeatureSystem, tag: &str) -> bool {
        match system {
            FeatureSystem::Celex => self.celex == tag,
            FeatureSystem::UniMorph => self.unimorph == tag,
            FeatureSystem::Ud => self.ud.contains(&tag),
        }
    }

    fn canonical(&self, system: FeatureSystem) -> &'static str {
        match system {
            FeatureSystem::Celex => self.celex,
            FeatureSystem::UniMorph => self.unimorph,
            FeatureSystem::Ud => self.ud[0],
        }
    }
}

/// Map a feature tag from one tagging system to another. `None` when the
/// tag has no covered correspondence.
pub fn tag_to_tag(from: FeatureSystem, to: FeatureSystem, tag: &str) -> Option<&'static str> {
    FEATURE_ROWS
        .iter()
        .find(|row| row.matches(from, tag))
        .map(|row| row.canonical(to))
}
