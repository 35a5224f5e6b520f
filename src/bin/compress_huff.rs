use std::time::Instant;

use clap::Parser;
use huffman_rust::encode_file;

#[derive(Parser, Debug)]
#[command(about = "Compress a file with a byte-oriented Huffman code")]
struct Args {
    /// The file to compress
    source_name: String,
    /// The destination of the compressed file
    dest_name: String,
    /// Write compression statistics to <dest_name>.stats
    #[arg(short, long = "stats", default_value_t = false)]
    stats: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let comp_time = Instant::now();
    let stats = encode_file(&args.source_name, &args.dest_name)
        .unwrap_or_else(|e| panic!("Failed compressing {}: {}", args.source_name, e));
    let comp_time = comp_time.elapsed().as_nanos() as f64;

    println!(
        "compressed {} bytes into {} bytes ({} distinct symbols) in {}ns",
        stats.original_bytes, stats.packed_bytes, stats.distinct_symbols, comp_time
    );

    if args.stats {
        stats.store(format!("{}.stats", args.dest_name)).expect("Failed storing the statistics");
    }
}
