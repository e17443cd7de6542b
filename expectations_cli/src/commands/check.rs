use anyhow::{Context, Result};
use expectations_parser::parse_file;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(suite_path: &str) -> Result<()> {
    info!("Checking suite: {}", suite_path);

    // Parsing runs every rule through the builder, so a parsed suite is a
    // well-formed suite
    let suite = parse_file(Path::new(suite_path))
        .with_context(|| format!("Failed to parse suite file: {}", suite_path))?;

    output::print_success("Suite is well-formed");

    println!("\nSuite Summary:");
    println!("  Name:         {}", suite.name());
    println!("  Expectations: {}", suite.len());

    let mut kinds: BTreeMap<&str, usize> = BTreeMap::new();
    for expectation in suite.expectations() {
        *kinds.entry(expectation.kind().name()).or_default() += 1;
    }
    if !kinds.is_empty() {
        let counts: Vec<String> = kinds
            .iter()
            .map(|(kind, count)| format!("{} {}", count, kind))
            .collect();
        println!("  Rule kinds:   {}", counts.join(", "));
    }

    println!("\nExpectations:");
    for expectation in suite.expectations() {
        println!(
            "  - {} on column '{}'",
            expectation.label(),
            expectation.column()
        );
    }

    Ok(())
}
