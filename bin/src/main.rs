use clap::{Parser, Subcommand};
use rs_share_parser::ShareParser;
use std::fs;
use std::io;
use std::io::Read;

/// Simple program to parse pasted puzzle-game share text and print the
/// recognized result(s).
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file containing the share text. Reads stdin if omitted.
    #[clap(short = 'f', long)]
    file: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the first recognized game result.
    First,
    /// Print every recognized game result, in source order.
    All,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let text = match args.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let parser = ShareParser::default();
    match args.command {
        Command::First => match parser.parse_one(&text) {
            Some(result) => println!("{}", result),
            None => {
                eprintln!("No recognized game result in the input.");
                std::process::exit(1);
            }
        },
        Command::All => {
            let results = parser.parse_all(&text);
            if results.is_empty() {
                eprintln!("No recognized game results in the input.");
                std::process::exit(1);
            }
            for result in results.iter() {
                println!("{}", result);
            }
        }
    }

    Ok(())
}
