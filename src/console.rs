//! Colored startup banner.
//! Used by: main.

use colored::{ColoredString, Colorize};

use crate::config::AppConfig;

const FRAME_WIDTH: usize = 59;
const FRAME_INDENT: usize = 5;

/// Spaces needed after `text` so the right border lands on the frame edge.
fn frame_padding(text: &str) -> usize {
    FRAME_WIDTH.saturating_sub(FRAME_INDENT + text.chars().count())
}

fn frame_line(text: &str, styled: ColoredString) {
    println!(
        "{}{}{}{}",
        format!("║{}", " ".repeat(FRAME_INDENT)).cyan(),
        styled,
        " ".repeat(frame_padding(text)),
        "║".cyan()
    );
}

pub fn print_banner() {
    let title = format!("Infra Health API v{}", env!("CARGO_PKG_VERSION"));
    let tagline = "Liveness and database readiness probes";

    println!();
    println!("{}", format!("╔{}╗", "═".repeat(FRAME_WIDTH)).cyan());
    frame_line("", "".normal());
    frame_line(&title, title.bold().white());
    frame_line(tagline, tagline.dimmed());
    frame_line("", "".normal());
    println!("{}", format!("╚{}╝", "═".repeat(FRAME_WIDTH)).cyan());
    println!();
}

pub fn print_startup(config: &AppConfig) {
    println!("{} {}", "✓".green().bold(), "Server ready".white().bold());
    println!("  {} {}", "→".dimmed(), format!("http://{}", config.bind_addr()).cyan().underline());
    println!("  {} {}", "env:".dimmed(), config.environment.yellow());
    println!(
        "  {} {}",
        "db:".dimmed(),
        format!(
            "{}@{}:{}/{}",
            config.database.user, config.database.host, config.database.port, config.database.database
        )
        .white()
    );
    println!();
    println!("{}", "Endpoints:".white().bold());
    println!("  {} {}                   {}", "GET".green(), "/".white(), "Liveness".dimmed());
    println!("  {} {}         {}", "GET".green(), "/api/health".white(), "Database readiness".dimmed());
    println!("  {} {}  {}", "GET".green(), "/api/health/report".white(), "Full health report".dimmed());
    println!("  {} {}                   {}", "GET".green(), "*".white(), format!("Static files from {}", config.public_dir.display()).dimmed());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_fills_frame_width() {
        let title = format!("Infra Health API v{}", env!("CARGO_PKG_VERSION"));
        for text in [title.as_str(), "Liveness and database readiness probes", ""] {
            assert_eq!(FRAME_INDENT + text.chars().count() + frame_padding(text), FRAME_WIDTH);
        }
    }

    #[test]
    fn overlong_text_gets_no_padding() {
        assert_eq!(frame_padding(&"x".repeat(80)), 0);
    }
}
