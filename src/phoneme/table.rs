//! DISC-to-target-alphabet mapping table.
//!
//! One row per DISC symbol; the three cells are the SAM-PA, CELEX, and CPA
//! counterparts, in that order. Cells may legitimately be empty, meaning
//! the target alphabet has no distinct counterpart. Symbols absent from
//! the table pass through conversion unchanged.

/// Phoneme rows: the 54-symbol DISC inventory.
pub(crate) static PHONEME_ROWS: &[(char, [&str; 3])] = &[
    // Plosives and nasals.
    ('p', ["p", "p", "p"]),
    ('b', ["b", "b", "b"]),
    ('t', ["t", "t", "t"]),
    ('d', ["d", "d", "d"]),
    ('k', ["k", "k", "k"]),
    ('g', ["g", "g", "g"]),
    ('N', ["N", "N", "N"]),
    ('m', ["m", "m", "m"]),
    ('n', ["n", "n", "n"]),
    ('l', ["l", "l", "l"]),
    ('r', ["r", "r", "r"]),
    // Fricatives and approximants.
    ('f', ["f", "f", "f"]),
    ('v', ["v", "v", "v"]),
    ('T', ["T", "T", "T"]),
    ('D', ["D", "D", "D"]),
    ('s', ["s", "s", "s"]),
    ('z', ["z", "z", "z"]),
    ('S', ["S", "S", "S"]),
    ('Z', ["Z", "Z", "Z"]),
    ('j', ["j", "j", "j"]),
    ('x', ["x", "x", "x"]),
    ('h', ["h", "h", "h"]),
    ('w', ["w", "w", "w"]),
    // Affricates and syllabic consonants.
    ('J', ["tS", "tS", "T/"]),
    ('_', ["dZ", "dZ", "J/"]),
    ('C', ["N,", "N,", "N,"]),
    ('F', ["m,", "m,", "m,"]),
    ('H', ["n,", "n,", "n,"]),
    ('P', ["l,", "l,", "l,"]),
    ('R', ["r*", "r*", "r*"]),
    // Short vowels.
    ('I', ["I", "I", "I"]),
    ('E', ["E", "E", "E"]),
    ('{', ["{", "&", "^/"]),
    ('V', ["V", "V", "^"]),
    ('Q', ["Q", "O", "O"]),
    ('U', ["U", "U", "U"]),
    ('@', ["@", "@", "@"]),
    // Long vowels.
    ('i', ["i:", "i:", "i:"]),
    ('#', ["A:", "A:", "A:"]),
    ('$', ["O:", "O:", "O:"]),
    ('u', ["u:", "u:", "u:"]),
    ('3', ["3:", "3:", "@:"]),
    // Diphthongs.
    ('1', ["eI", "eI", "e/"]),
    ('2', ["aI", "aI", "a/"]),
    ('4', ["OI", "OI", "o/"]),
    ('5', ["@U", "@U", "O/"]),
    ('6', ["aU", "aU", "A/"]),
    ('7', ["I@", "I@", "I/"]),
    ('8', ["E@", "E@", "E/"]),
    ('9', ["U@", "U@", "U/"]),
    // Nasalized vowels (loanwords).
    ('c', ["{~", "&~", "^/~"]),
    ('q', ["A~:", "A~:", "A~:"]),
    ('0', ["{~:", "&~:", "^/~:"]),
    ('~', ["O~:", "O~:", "O~:"]),
];

/// Structural-marker rows. Syllable boundaries stay hyphens in SAM-PA and
/// CELEX but CPA writes them as periods; stress markers follow each
/// target's own convention.
pub(crate) static STRUCTURAL_ROWS: &[(char, [&str; 3])] = &[
    ('-', ["-", "-", "."]),
    ('\'', ["\"", "'", "\""]),
    ('"', ["%", "\"", "%"]),
    ('.', [".", ".", "."]),
];
