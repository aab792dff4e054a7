//! Generate EQUATIONS.md from the equation registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-equations              # write drywall_core/EQUATIONS.md
//! cargo run --bin gen-equations -- --stdout  # print instead
//! ```

use std::fs;
use std::path::Path;

use drywall_core::equations::generate_equations_markdown;

fn main() {
    let markdown = generate_equations_markdown();

    if std::env::args().any(|a| a == "--stdout") {
        print!("{}", markdown);
        return;
    }

    let output_path = Path::new("drywall_core/EQUATIONS.md");
    match fs::write(output_path, &markdown) {
        Ok(()) => {
            println!("Wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing {}: {}", output_path.display(), e);
            std::process::exit(1);
        }
    }
}
