use clap::Parser;
use std::fs;
use std::io::{self, Read};

use zipglob::NameIndex;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Glob pattern: '*' matches any run of characters, '\*' a literal star
    #[arg(value_name = "PATTERN")]
    pattern: String,

    /// Entry listing, one name per line (stdin when omitted)
    #[arg(value_name = "LISTING")]
    listing: Option<String>,

    /// Drop directory entries (names ending in '/') before matching
    #[arg(short = 'f', long)]
    files_only: bool,

    /// Treat PATTERN as an exact entry name, no glob interpretation
    #[arg(short = 'x', long)]
    exact: bool,

    /// Print the number of matches instead of the names
    #[arg(short = 'c', long)]
    count: bool,
}

fn main() {
    let args = Args::parse();

    let listing = if let Some(path) = args.listing.as_ref() {
        fs::read_to_string(path).unwrap_or_else(|err| {
            eprintln!("Failed to read {}: {}", path, err);
            std::process::exit(1);
        })
    } else {
        let mut contents = String::new();
        io::stdin()
            .read_to_string(&mut contents)
            .unwrap_or_else(|err| {
                eprintln!("Failed to read stdin: {}", err);
                std::process::exit(1);
            });
        contents
    };

    let mut index = NameIndex::from_listing(&listing);
    if args.files_only {
        index.retain_files();
    }

    if args.exact {
        match index.find(&args.pattern) {
            Ok(name) => println!("{}", name),
            Err(err) => {
                eprintln!("{:#}", err);
                std::process::exit(1);
            }
        }
        return;
    }

    let matches = index.glob(&args.pattern);
    if args.count {
        println!("{}", matches.len());
    } else {
        for name in matches {
            println!("{}", name);
        }
    }
}
