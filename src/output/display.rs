//! Display functions for command results

use super::formatters::{colored_tile, create_progress_bar};
use crate::commands::{ScoreResult, SimulationResult};
use colored::Colorize;

/// Print a scored guess as tiles plus its emoji line
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().to_uppercase().bright_yellow().bold(),
        result.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let tiles: String = result
        .tiles()
        .map(|(letter, class)| format!("{} ", colored_tile(letter, class)))
        .collect();
    println!("\n  {tiles}");
    println!("  {}  {}", result.feedback.to_emoji(), result.feedback);

    if result.feedback.is_solved() {
        println!("\n{}", "Solved!".green().bold());
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    let stats = &result.stats;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", stats.games_played);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", stats.win_rate()).bright_yellow().bold()
    );
    match stats.average_guesses() {
        Some(avg) => println!(
            "   Average guesses:  {}",
            format!("{avg:.2}").bright_yellow().bold()
        ),
        None => println!("   Average guesses:  {}", "n/a".bright_black()),
    }
    println!("   Longest streak:   {}", stats.max_streak);
    println!("   Game time:        {:.1}s simulated", result.average_game_time);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let pct = if stats.games_played > 0 {
            count as f64 / stats.games_played as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {}: {} {count:4} ({pct:5.1}%)", i + 1, bar.green());
    }

    let losses: Vec<_> = result.losses().map(|r| r.secret.to_uppercase()).collect();
    if !losses.is_empty() {
        println!(
            "\n❌ {} {}",
            format!("Lost {}:", losses.len()).red().bold(),
            losses.iter().take(10).cloned().collect::<Vec<_>>().join(", ")
        );
    }
}
