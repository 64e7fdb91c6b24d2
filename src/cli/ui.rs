use colored::*;
use console::Term;
use indicatif::{ ProgressBar, ProgressStyle };
use std::time::Duration;

use zoroastervers_docs::implementations::checks::SpecCheck;
use zoroastervers_docs::implementations::report::{ wrap_entry, SpecReport };
use zoroastervers_docs::models::diagram::{ DiagramReport, IssueSeverity };

/// Column count of stdout, `None` when it is not a terminal
fn terminal_width() -> Option<usize> {
    if !Term::stdout().is_term() {
        return None;
    }
    Term::stdout().size_checked().map(|(_, cols)| cols as usize)
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Print the specification sheet, wrapping long lines only on a terminal
pub fn print_report(report: &SpecReport) {
    let width = terminal_width().map(|cols| cols.saturating_sub(4).max(40));

    println!("{}", report.title.bold());
    println!("{}", "=".repeat(50));
    println!("Generated: {}", report.generated_at.dimmed());

    for section in &report.sections {
        println!("\n{}", section.heading().bold().cyan());
        println!("{}", "-".repeat(20));
        for line in &section.lines {
            for wrapped in wrap_entry(line, width) {
                println!("{}", wrapped);
            }
        }
    }
}

pub fn print_diagram_report(report: &DiagramReport) {
    print_result(
        "Diagram",
        &format!(
            "{} subgraphs, {} nodes, {} links",
            report.subgraph_count,
            report.node_count,
            report.edge_count
        )
    );
    for issue in &report.issues {
        let message = format!("line {}: {}", issue.line_number, issue.message);
        match issue.severity {
            IssueSeverity::Error => print_error(&message),
            IssueSeverity::Warning => print_warning(&message),
        }
    }
    if report.is_valid() {
        print_success("Diagram structure is valid");
    }
}

pub fn print_spec_check(check: &SpecCheck) {
    let mark = |ok: bool| if ok { "✓".green().bold() } else { "✗".red().bold() };
    println!("{} JSON round-trip", mark(check.round_trips));
    println!("{} Deterministic output", mark(check.deterministic));
    println!("{} Section keys present", mark(check.missing_keys.is_empty()));
    for key in &check.missing_keys {
        print_error(&format!("section key '{}' missing from JSON", key));
    }
}

/// Display a spinner while waiting for an operation to complete
pub fn spinner_with_message(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
