use std::fs;
use std::io::{BufRead, BufReader};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use lexfield::record::Record;
use lexfield::{inflection, morphology, syllable, wordplay};

#[derive(Parser)]
#[command(name = "fieldtool", about = "Per-field lexical analysis transforms")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Lexicon file, one delimited record per line
    file: String,

    /// 1-based field to transform
    #[arg(short, long, global = true, default_value = "1")]
    field: usize,

    /// Field delimiter
    #[arg(long, global = true, default_value = "\\")]
    delimiter: String,

    /// Emit one JSON object per record instead of plain values
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Syllable count of a syllabified transcription field
    Syllables {
        /// Treat doubled hyphens as literal content and spaces as
        /// boundaries (the transcription convention); otherwise every
        /// hyphen counts
        #[arg(long)]
        transcription: bool,
    },
    /// Stress pattern digits of a transcription field
    Stress,
    /// Hyphen encoding of a bracket-syllabified field
    Brackets,
    /// Morphological analysis of a structure field
    Morphology,
    /// 13-slot inflectional feature vector of a type-code field
    Inflection,
    /// Anagram and rhyme keys of an orthographic field
    Wordplay,
}

#[derive(Serialize)]
struct MorphologyReport {
    segmentation: String,
    word_classes: String,
    analysis_levels: usize,
    morphemes: usize,
    tree: Vec<morphology::MorphNode>,
}

#[derive(Serialize)]
struct WordplayReport {
    anagram_key: String,
    rhyme_key: String,
    letters: usize,
}

/// One transformed value, printable either as a bare line or as JSON.
enum Output {
    Text(String),
    Json(serde_json::Value),
}

fn apply(command: &Command, field: &str) -> Result<Output, lexfield::EngineError> {
    Ok(match command {
        Command::Syllables { transcription } => {
            let n = if *transcription {
                syllable::count_syllables_transcription(field)
            } else {
                syllable::count_syllables_simple(field)
            };
            Output::Text(n.to_string())
        }
        Command::Stress => Output::Text(syllable::make_stress_pattern(field)),
        Command::Brackets => Output::Text(syllable::convert_ambisyllabic_brackets(field)?),
        Command::Morphology => {
            let report = MorphologyReport {
                segmentation: morphology::morpheme_segmentation(field),
                word_classes: morphology::extract_word_classes(field)?,
                analysis_levels: morphology::count_analysis_levels(field)?,
                morphemes: morphology::count_morphemes(field)?,
                tree: morphology::parse_morphology(field)?,
            };
            Output::Json(serde_json::to_value(report).expect("report serializes"))
        }
        Command::Inflection => Output::Text(inflection::decode_inflectional_features(field)),
        Command::Wordplay => {
            let report = WordplayReport {
                anagram_key: wordplay::anagram_key(field),
                rhyme_key: wordplay::rhyme_key(field),
                letters: wordplay::letter_count(field),
            };
            Output::Json(serde_json::to_value(report).expect("report serializes"))
        }
    })
}

fn print_output(field: &str, output: Output, json: bool) {
    match (output, json) {
        (Output::Text(value), false) => println!("{value}"),
        (Output::Text(value), true) => {
            println!(
                "{}",
                serde_json::json!({ "field": field, "value": value })
            );
        }
        (Output::Json(value), _) => {
            println!("{}", serde_json::json!({ "field": field, "value": value }));
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if cli.field == 0 {
        eprintln!("Error: field numbers are 1-based");
        process::exit(1);
    }

    let file = fs::File::open(&cli.file).unwrap_or_else(|e| {
        eprintln!("Failed to open input file {}: {}", cli.file, e);
        process::exit(1);
    });

    let mut failed = 0usize;
    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line = line.unwrap_or_else(|e| {
            eprintln!("Failed to read line: {e}");
            process::exit(1);
        });
        if line.is_empty() {
            continue;
        }
        let record = Record::parse(&line, &cli.delimiter);
        let result = record
            .field(cli.field)
            .map(str::to_string)
            .and_then(|value| apply(&cli.command, &value).map(|out| (value, out)));
        match result {
            Ok((value, output)) => print_output(&value, output, cli.json),
            Err(e) => {
                debug!(line = lineno + 1, error = %e, "record skipped");
                eprintln!("line {}: {}", lineno + 1, e);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        eprintln!("({failed} records skipped)");
    }
}
