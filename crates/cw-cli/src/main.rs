//! comment-widget - nested comment threads in the terminal
//!
//! ## Quick Start
//!
//! ```bash
//! # Browse the demo thread
//! comment-widget run
//!
//! # Print a thread from your own seed file
//! comment-widget show --seed comments.json --format json
//!
//! # Write a config file with your username
//! comment-widget config init
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
