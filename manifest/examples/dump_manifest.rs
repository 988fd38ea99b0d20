//! Demonstrates loading a manifest and serializing it.
//!
//! Run with: `cargo run --example dump_manifest -p rdfc-manifest -- path/to/manifest.csv`

use std::path::PathBuf;

use rdfc_manifest::serializer::{jsonld, turtle};
use rdfc_manifest::{entries, loader, ManifestConfig, Variant};

fn main() {
    let path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("manifest.csv"), PathBuf::from);

    let tests = match loader::load_tests(&path) {
        Ok(tests) => tests,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let entries = entries(&tests);

    println!("RDFC-1.0 manifest {}", path.display());
    println!("  Tests:        {}", tests.len());
    println!("  Entries:      {}", entries.len());
    println!(
        "  Eval tests:   {}",
        entries.iter().filter(|e| e.variant == Variant::Eval).count()
    );
    println!(
        "  Map tests:    {}",
        entries.iter().filter(|e| e.variant == Variant::Map).count()
    );
    println!(
        "  Negative:     {}",
        entries.iter().filter(|e| e.result.is_none()).count()
    );
    println!();

    for entry in &entries {
        println!(
            "  {:12} {:28} {:7} {}",
            entry.anchor,
            entry.type_,
            entry.computational_complexity.as_str(),
            entry.name,
        );
    }
    println!();

    let config = ManifestConfig::default();
    let json_str = jsonld::to_json_ld_string(&tests, &config)
        .unwrap_or_else(|e| format!("JSON error: {e}"));
    println!("JSON-LD output ({} bytes)", json_str.len());
    let ttl = turtle::to_turtle(&tests, &config);
    println!("Turtle output ({} bytes)", ttl.len());
}
