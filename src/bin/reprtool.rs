use std::fs;
use std::io::{BufRead, BufReader};
use std::process;

use clap::Parser;

use lexfield::phoneme::{self, Target};

/// Convert DISC transcription fields of a delimited lexicon file to
/// another phonetic representation.
#[derive(Parser)]
#[command(name = "reprtool", about = "DISC representation conversion")]
struct Cli {
    /// Lexicon file, one backslash-delimited record per line
    file: String,

    /// Alternating pairs: target alphabet (SP, CX or CP) and 1-based
    /// field number
    #[arg(required = true, num_args = 2..)]
    pairs: Vec<String>,

    /// Field delimiter
    #[arg(long, default_value = "\\")]
    delimiter: String,
}

/// Parse and validate the (target, field) pairs before any record is
/// read, so configuration mistakes never produce partial output.
fn parse_pairs(raw: &[String]) -> Vec<(usize, Target)> {
    if raw.len() % 2 != 0 {
        eprintln!("Error: targets and field numbers must come in pairs");
        process::exit(1);
    }
    let mut requests = Vec::with_capacity(raw.len() / 2);
    for pair in raw.chunks(2) {
        let target = Target::from_name(&pair[0]).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        });
        let field: usize = pair[1].parse().unwrap_or_else(|_| {
            eprintln!("Error: field number must be a positive integer, got {:?}", pair[1]);
            process::exit(1);
        });
        if field == 0 {
            eprintln!("Error: field numbers are 1-based");
            process::exit(1);
        }
        requests.push((field, target));
    }
    requests
}

fn main() {
    let cli = Cli::parse();
    let requests = parse_pairs(&cli.pairs);

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
        match phoneme::convert_record(&line, &cli.delimiter, &requests) {
            Ok(converted) => println!("{converted}"),
            Err(e) => {
                // Records narrower than the requested field are reported
                // and skipped; the batch continues.
                eprintln!("line {}: {}", lineno + 1, e);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        eprintln!("({failed} records skipped)");
    }
}
