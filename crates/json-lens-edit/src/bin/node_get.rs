//! `node-get` — print the subtree at a node path.
//!
//! Usage:
//!   node-get '<path>'
//!
//! The document is read from stdin; the path is the first argument, in
//! canonical bracket notation (e.g. `$["a"][0]`). A path that does not
//! resolve prints `{}`.

use json_lens_edit::subtree_text;
use json_lens_path::parse_node_path;
use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let path = match args.get(1) {
        Some(arg) => match parse_node_path(arg) {
            Ok(path) => path,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        None => {
            eprintln!("First argument must be a node path, e.g. '$[\"a\"][0]'.");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let out = subtree_text(buf.trim(), &path);
    io::stdout().write_all(out.as_bytes()).unwrap();
    io::stdout().write_all(b"\n").unwrap();
}
