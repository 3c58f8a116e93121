use crate::trending::{TrendingDeveloper, TrendingRepository};
use console::style;
use std::fmt::Write;

/// Descriptions longer than this many characters are cut short
pub const DESCRIPTION_WIDTH: usize = 80;

const ELLIPSIS: &str = "...";

/// Wraps `text` in an OSC 8 terminal hyperlink to `url`
pub fn hyperlink(url: &str, text: &str) -> String {
    format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", url, text)
}

/// Shortens `text` to `width` characters, ending in `...` when cut
///
/// Counts characters rather than bytes so multi-byte text is never split.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }

    let keep = width.saturating_sub(ELLIPSIS.len());
    let mut short: String = text.chars().take(keep).collect();
    short.push_str(ELLIPSIS);
    short
}

/// Renders the repositories listing, numbered from 1
pub fn render_repositories(repos: &[TrendingRepository]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style("TRENDING REPOSITORIES ON GITHUB").bold().cyan());
    let _ = writeln!(out);

    if repos.is_empty() {
        let _ = writeln!(out, "{}", style("No trending repositories found.").yellow());
        return out;
    }

    for (idx, repo) in repos.iter().enumerate() {
        let name = repo.repo_name.trim_start_matches('/');
        let _ = writeln!(
            out,
            "{:>3}. {}  {} {}  {}",
            idx + 1,
            style(hyperlink(&repo.url, name)).bold(),
            style("★").yellow(),
            repo.stars,
            style(&repo.language).green()
        );
        let _ = writeln!(
            out,
            "     {}",
            style(truncate(&repo.description, DESCRIPTION_WIDTH)).dim()
        );
    }

    out
}

/// Renders the developers listing, numbered from 1
pub fn render_developers(devs: &[TrendingDeveloper]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style("TRENDING DEVELOPERS ON GITHUB").bold().cyan());
    let _ = writeln!(out);

    if devs.is_empty() {
        let _ = writeln!(out, "{}", style("No trending developers found.").yellow());
        return out;
    }

    for (idx, dev) in devs.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {}  {} {}",
            idx + 1,
            style(hyperlink(&dev.url, &dev.dev_name)).bold(),
            style("repo:").dim(),
            style(&dev.repo_name).green()
        );
        if !dev.description.is_empty() {
            let _ = writeln!(
                out,
                "     {}",
                style(truncate(&dev.description, DESCRIPTION_WIDTH)).dim()
            );
        }
    }

    out
}

pub fn print_repositories(repos: &[TrendingRepository]) {
    print!("{}", render_repositories(repos));
}

pub fn print_developers(devs: &[TrendingDeveloper]) {
    print!("{}", render_developers(devs));
}
