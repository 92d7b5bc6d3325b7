//! Display functions for CLI commands

use super::formatters::create_progress_bar;
use crate::core::TRIES;
use crate::daily::{DailyKey, format_countdown};
use crate::stats::Statistics;
use colored::Colorize;

/// Print played/win%/streak numbers and the guess distribution
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Played:           {}", stats.played);
    println!(
        "   Win %:            {}",
        format!("{}", stats.win_rate_percent).bright_yellow().bold()
    );
    println!(
        "   Current streak:   {}",
        format!("{}", stats.current_streak).green()
    );
    println!(
        "   Max streak:       {}",
        format!("{}", stats.max_streak).yellow()
    );

    println!("\n📈 {}", "Guess Distribution:".bright_cyan().bold());
    let max = stats.max_bucket();
    for guesses in 1..=TRIES {
        let count = stats.guess_distribution[guesses];
        let bar = create_progress_bar(count, max, 40);
        println!("   {guesses}: {} {count:4}", bar.green());
    }
}

/// Print today's key and the time left until the next puzzle
pub fn print_today(key: DailyKey, seconds_left: u64) {
    println!("Today's puzzle: {}", key.to_string().bright_yellow().bold());
    println!("Next puzzle in: {}", format_countdown(seconds_left).cyan());
}

/// Print the share text of a finished or in-progress board
pub fn print_share(text: &str, finished: bool) {
    println!("{text}");
    if !finished {
        println!("\n{}", "(today's puzzle is still in progress)".bright_black());
    }
}
