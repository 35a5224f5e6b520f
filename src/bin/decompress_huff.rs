use std::time::Instant;

use clap::Parser;
use huffman_rust::decode_file;

#[derive(Parser, Debug)]
#[command(about = "Restore a file compressed by compress_huff")]
struct Args {
    /// The Huffman-compressed file
    source_name: String,
    /// The destination of the restored file
    dest_name: String,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let decomp_time = Instant::now();
    let written = decode_file(&args.source_name, &args.dest_name)
        .unwrap_or_else(|e| panic!("Failed decompressing {}: {}", args.source_name, e));
    let decomp_time = decomp_time.elapsed().as_nanos() as f64;

    println!("decompressed {} bytes in {}ns", written, decomp_time);
}
