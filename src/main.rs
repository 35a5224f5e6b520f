use huffman_rust::{decode_file, encode_file, Properties};

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Compress a file with Huffman coding, then restore it")]
struct Args {
    /// Properties file holding the input, packed and output paths
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// File to compress
    input: Option<PathBuf>,
    /// Compressed file
    packed: Option<PathBuf>,
    /// Restored file
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let mut props = match args.config {
        Some(config) => match Properties::load(&config) {
            Ok(props) => props,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Properties::default(),
    };
    props.input = args.input.unwrap_or(props.input);
    props.packed = args.packed.unwrap_or(props.packed);
    props.output = args.output.unwrap_or(props.output);

    match encode_file(&props.input, &props.packed) {
        Ok(stats) => {
            println!("encoding succeeded");
            if props.stats {
                let stats_path = format!("{}.stats", props.packed.display());
                if let Err(e) = stats.store(&stats_path) {
                    eprintln!("{}", e);
                }
            }
        }
        Err(e) => {
            println!("encoding failed: {}", e);
            return ExitCode::FAILURE;
        }
    }

    match decode_file(&props.packed, &props.output) {
        Ok(_) => println!("decoding succeeded"),
        Err(e) => {
            println!("decoding failed: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
