use colored::*;
use expectations_core::{MetaVerdict, ValidationTable};
use serde_json::json;

pub fn print_validation_table(table: &ValidationTable, verdict: MetaVerdict, format: &str) {
    match format {
        "json" => print_json_report(table, verdict),
        _ => print_text_report(table, verdict),
    }
}

fn print_text_report(table: &ValidationTable, verdict: MetaVerdict) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));
    println!();

    for result in table {
        let label = result.expectation().label();
        let detail = match (result.observed(), result.reason()) {
            (_, Some(reason)) => format!("({})", reason),
            (Some(observed), None) => format!("(observed {})", observed),
            (None, None) => String::new(),
        };

        if result.outcome().is_success() {
            println!("  {} {} {}", "✓".green().bold(), label, detail.dimmed());
        } else {
            println!("  {} {} {}", "✗".red().bold(), label.red(), detail.red());
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Expectations: {}", table.len());
    println!("  Failures:     {}", table.failure_count());

    if verdict.is_success() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Meta-validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Meta-validation FAILED".red().bold()
        );
    }
    println!("{}", "═".repeat(60));
}

fn print_json_report(table: &ValidationTable, verdict: MetaVerdict) {
    let output = json!({
        "verdict": verdict,
        "results": table.results(),
        "summary": {
            "expectations": table.len(),
            "failures": table.failure_count(),
        }
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

#[allow(dead_code)]
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
