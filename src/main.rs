//! Command-line interface for twi-nlp
//!
//! Usage:
//!   twi-nlp [OPTIONS] [COMMAND] [ARG]
//!   echo "yɛbɛkɔ" | twi-nlp translate
//!
//! Options:
//!   -d, --dataset <FILE>  Path to the CSV dataset
//!   -u, --url <URL>       Remote dataset used when the file is missing
//!   -c, --config <FILE>   JSON configuration file
//!       --offline         Never download the dataset
//!   -j, --json            Output as JSON
//!   -v, --verbose         Debug logging
//!   -h, --help            Show help

use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;

use tracing::Level;
use twi_nlp::{DatasetStatus, TwiNlp, TwiNlpConfig};

/// Word analysed when no command is given
const SAMPLE_WORD: &str = "yɛbɛkɔ";

fn print_help() {
    eprintln!(
        r#"twi-nlp - Twi translation, POS lookup and stemming

USAGE:
    twi-nlp [OPTIONS] [COMMAND] [ARG]
    echo "yɛbɛkɔ" | twi-nlp translate

COMMANDS:
    translate <WORD>     English translation of a Twi word
    pos <WORD>           Part-of-speech tag of a Twi word
    search <KEYWORD>     Twi words containing KEYWORD
    tokenize <TEXT>      Split text into tokens
    stem <WORD>          Stem and lemmatize through the English translation
    words                List every Twi word in the dataset

    With no command, the sample word "{SAMPLE_WORD}" is stemmed.

OPTIONS:
    -d, --dataset <FILE>  Path to the CSV dataset (default: data/twi_words.csv)
    -u, --url <URL>       Remote dataset used when the file is missing
    -c, --config <FILE>   JSON configuration file
        --offline         Never download the dataset
    -j, --json            Output as JSON
    -v, --verbose         Debug logging
    -h, --help            Show this help message

EXAMPLES:
    twi-nlp translate nsuo
    twi-nlp -d my_words.csv search kɔ
    twi-nlp --json stem yɛbɛkɔ
"#
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Translate,
    Pos,
    Search,
    Tokenize,
    Stem,
    Words,
}

impl Command {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "translate" => Some(Command::Translate),
            "pos" => Some(Command::Pos),
            "search" => Some(Command::Search),
            "tokenize" => Some(Command::Tokenize),
            "stem" => Some(Command::Stem),
            "words" => Some(Command::Words),
            _ => None,
        }
    }

    fn takes_argument(self) -> bool {
        self != Command::Words
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => fail(&format!("serializing to JSON: {}", e)),
    }
}

fn read_stdin() -> String {
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        match line {
            Ok(l) => lines.push(l),
            Err(e) => fail(&format!("reading stdin: {}", e)),
        }
    }
    lines.join("\n").trim().to_string()
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut dataset: Option<PathBuf> = None;
    let mut url: Option<String> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut offline = false;
    let mut json_output = false;
    let mut verbose = false;
    let mut positional: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-j" | "--json" => json_output = true,
            "-v" | "--verbose" => verbose = true,
            "--offline" => offline = true,
            "-d" | "--dataset" | "-u" | "--url" | "-c" | "--config" => {
                let flag = args[i].clone();
                i += 1;
                let Some(value) = args.get(i).cloned() else {
                    fail(&format!("{} requires a value", flag));
                };
                match flag.as_str() {
                    "-d" | "--dataset" => dataset = Some(PathBuf::from(value)),
                    "-u" | "--url" => url = Some(value),
                    _ => config_path = Some(PathBuf::from(value)),
                }
            }
            arg if !arg.starts_with('-') => positional.push(arg.to_string()),
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let mut config = match config_path {
        Some(path) => TwiNlpConfig::from_file(&path).unwrap_or_else(|e| fail(&e.to_string())),
        None => TwiNlpConfig::default(),
    };
    if dataset.is_some() {
        config.dataset_path = dataset;
    }
    if let Some(url) = url {
        config.dataset_url = url;
    }
    if offline {
        config.auto_download = false;
    }

    let mut positional = positional.into_iter();
    let (command, argument) = match positional.next() {
        None => (Command::Stem, SAMPLE_WORD.to_string()),
        Some(name) => {
            let Some(command) = Command::parse(&name) else {
                eprintln!("Unknown command: {}", name);
                print_help();
                std::process::exit(1);
            };
            let rest: Vec<String> = positional.collect();
            let argument = if !rest.is_empty() {
                rest.join(" ")
            } else if command.takes_argument() {
                read_stdin()
            } else {
                String::new()
            };
            (command, argument)
        }
    };

    if command.takes_argument() && argument.is_empty() {
        eprintln!("Error: No input provided");
        print_help();
        std::process::exit(1);
    }

    let nlp = TwiNlp::new(&config).unwrap_or_else(|e| fail(&e.to_string()));
    if let DatasetStatus::Unavailable { path, reason } = nlp.status() {
        eprintln!(
            "Warning: dataset missing at {} ({}). Place it there manually or pass --dataset.",
            path.display(),
            reason
        );
    }

    match command {
        Command::Translate => {
            let translation = nlp.translate(&argument);
            if json_output {
                print_json(&translation);
            } else {
                println!("{}", nlp.translate_or_sentinel(&argument));
            }
        }
        Command::Pos => {
            let pos = nlp.pos(&argument);
            if json_output {
                print_json(&pos);
            } else {
                println!("{}", nlp.pos_or_sentinel(&argument));
            }
        }
        Command::Search => {
            let matches = nlp.search(&argument);
            if json_output {
                print_json(&matches);
            } else {
                for word in matches {
                    match nlp.lookup(word) {
                        Some(entry) => println!("{}\t{}\t{}", word, entry.english, entry.pos),
                        None => println!("{}", word),
                    }
                }
            }
        }
        Command::Tokenize => {
            let tokens: Vec<&str> = nlp.tokenize(&argument).collect();
            if json_output {
                print_json(&tokens);
            } else {
                for token in tokens {
                    println!("{}", token);
                }
            }
        }
        Command::Stem => {
            let result = nlp.stem_and_lemmatize(&argument);
            if json_output {
                print_json(&result);
            } else {
                println!("{}", result);
            }
        }
        Command::Words => {
            if json_output {
                print_json(nlp.words());
            } else {
                for word in nlp.words() {
                    println!("{}", word);
                }
            }
        }
    }
}
