use std::process::exit;

use clap::{App, Arg};
use log::{error, info};

use wordsearch::writer::{spawn_writer, WriterMessage};
use wordsearch::{logging, wordlist, GeneratorConfig, WordSearchError};

fn main() {
    let matches = App::new("wordsearch")
        .version("0.1.0")
        .author("Kath Nicholls <nichollskc@gmail.com>")
        .about("Generates word-search puzzles from a wordlist")
        .arg(
            Arg::with_name("wordlist")
                .help("Path to a newline-separated wordlist file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .takes_value(true)
                .help("Grid width; defaults to the longest word's length"),
        )
        .arg(
            Arg::with_name("height")
                .short("l")
                .long("height")
                .takes_value(true)
                .help("Grid height; defaults to the longest word's length"),
        )
        .arg(
            Arg::with_name("puzzle_count")
                .short("p")
                .long("puzzle_count")
                .takes_value(true)
                .default_value("1")
                .help("Number of distinct puzzles to emit"),
        )
        .arg(
            Arg::with_name("create_all")
                .short("c")
                .long("create_all")
                .help("Enumerate every achievable puzzle instead of a fixed count"),
        )
        .arg(
            Arg::with_name("incomplete")
                .long("incomplete")
                .help("Leave unused cells as the placeholder instead of random letters"),
        )
        .arg(
            Arg::with_name("placeholder")
                .long("placeholder")
                .takes_value(true)
                .default_value("*")
                .help("Placeholder character for unused cells"),
        )
        .arg(
            Arg::with_name("output_filename")
                .short("o")
                .long("output_filename")
                .takes_value(true)
                .default_value("puzzles.txt")
                .help("File to append rendered puzzles to"),
        )
        .arg(
            Arg::with_name("sequential")
                .short("s")
                .long("sequential")
                .help("Deterministic row-major enumeration instead of randomised"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .default_value("0")
                .help("Seed for the randomised enumerator"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Raise the log level to debug"),
        )
        .get_matches();

    if matches.is_present("verbose") && std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "debug");
    }
    logging::init_logger(false);

    let wordlist_path = matches.value_of("wordlist").unwrap();
    let words = match wordlist::read_wordlist(wordlist_path) {
        Ok(words) => words,
        Err(err) => {
            error!("{}", err);
            exit(1);
        }
    };

    let placeholder = matches
        .value_of("placeholder")
        .unwrap()
        .chars()
        .next()
        .unwrap_or('*');

    let config = GeneratorConfig {
        width: matches.value_of("width").and_then(|v| v.parse().ok()),
        height: matches.value_of("height").and_then(|v| v.parse().ok()),
        puzzle_count: if matches.is_present("create_all") {
            None
        } else {
            matches.value_of("puzzle_count").and_then(|v| v.parse().ok())
        },
        complete_grids: !matches.is_present("incomplete"),
        placeholder,
        sequential: matches.is_present("sequential"),
        seed: matches
            .value_of("seed")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0),
    };

    let output_path = matches.value_of("output_filename").unwrap();
    let (tx, handle) = spawn_writer(output_path, 64);

    let result = wordsearch::search(&config, &words, |rows| {
        let _ = tx.send(WriterMessage::Puzzle {
            rows: rows.to_vec(),
        });
    });

    let _ = tx.send(WriterMessage::EndOfStream);
    let _ = handle.join();

    match result {
        Ok(report) => {
            info!(
                "emitted {} puzzle(s){}",
                report.emitted,
                match report.requested {
                    Some(n) if report.emitted < n => " (exhausted before reaching target)".to_string(),
                    Some(n) => format!(" of {} requested", n),
                    None => " (exhaustive)".to_string(),
                }
            );
            exit(0);
        }
        Err(err @ WordSearchError::WordTooLong { .. }) => {
            error!("{}", err);
            exit(2);
        }
        Err(err) => {
            error!("{}", err);
            exit(2);
        }
    }
}
