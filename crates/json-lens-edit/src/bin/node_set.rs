//! `node-set` — replace the subtree at a node path.
//!
//! Usage:
//!   node-set '<path>' '<value-json>'
//!
//! The document is read from stdin; the path is the first argument in
//! canonical bracket notation, the replacement value is the second argument
//! as JSON. The new document is printed to stdout, pretty-printed.

use json_lens_path::{parse_node_path, set};
use serde_json::Value;
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
    let new_value: Value = match args.get(2) {
        Some(arg) => match serde_json::from_str(arg) {
            Ok(value) => value,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        None => {
            eprintln!("Second argument must be the replacement value as JSON.");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let doc: Value = match serde_json::from_str(buf.trim()) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let new_doc = set(doc, &path, new_value);
    let out = serde_json::to_string_pretty(&new_doc).unwrap_or_else(|_| String::from("{}"));
    io::stdout().write_all(out.as_bytes()).unwrap();
    io::stdout().write_all(b"\n").unwrap();
}
