//! Display functions for command results

use super::formatters::{render_table, underline, wrap_words};
use crate::commands::SolveReport;
use crate::search::{WordEntry, WordsByLength};
use colored::Colorize;

/// Print the words of a solved grid followed by the summary
pub fn print_solve_report(report: &SolveReport, detailed: bool, width: usize) {
    println!();
    if detailed {
        print_detailed(&report.outcome.words);
    } else {
        print_compact(&report.outcome.words, width);
    }
    print_summary(report);
}

fn print_title(title: &str) {
    println!("{}", title.bright_cyan().bold());
    println!("{}", underline(title));
}

/// Words only, wrapped to `width`, one block per length
pub fn print_compact(words: &WordsByLength, width: usize) {
    for (length, entries) in words.iter() {
        print_title(&format!("{length}-letter words ({}):", entries.len()));

        if entries.is_empty() {
            println!("{}", "No words found.".bright_black());
        } else {
            let texts: Vec<&str> = entries.iter().map(WordEntry::word).collect();
            for line in wrap_words(&texts, width) {
                println!("{line}");
            }
        }
        println!();
    }
}

/// Every word with all of its paths, one table per non-empty length
pub fn print_detailed(words: &WordsByLength) {
    println!("Start Positions are denoted as (row, column), top left being (0, 0)");
    println!();

    for (length, entries) in words.iter() {
        if entries.is_empty() {
            continue;
        }
        let paths: usize = entries.iter().map(|e| e.paths().len()).sum();
        print_title(&format!(
            "{length}-letter words ({} words, {paths} paths):",
            entries.len()
        ));

        let rows: Vec<Vec<String>> = entries
            .iter()
            .map(|entry| {
                let starts: Vec<String> =
                    entry.paths().iter().map(|p| p.start().to_string()).collect();
                let moves: Vec<String> = entry.paths().iter().map(|p| p.moves_string()).collect();
                vec![entry.word().to_string(), starts.join("\n"), moves.join("\n")]
            })
            .collect();
        print!("{}", render_table(&["Word", "Start Position", "Moves"], &rows));
        println!();
    }
}

fn print_summary(report: &SolveReport) {
    let words = &report.outcome.words;
    let stats = &report.outcome.stats;

    print_title("SUMMARY:");
    println!("{} unique words found.", words.total_words().to_string().green());
    println!("{} unique paths found.", words.total_paths());
    println!("{} letters max search.", report.max_depth);
    if stats.timed_out > 0 {
        println!(
            "{}",
            format!("{} lookups timed out.", stats.timed_out).yellow()
        );
    }
    if report.outcome.interrupted {
        println!(
            "{}",
            format!("Interrupted: {} jobs skipped.", stats.skipped).red()
        );
    }
    println!("{:.3} seconds execution time.", report.duration.as_secs_f64());
}
