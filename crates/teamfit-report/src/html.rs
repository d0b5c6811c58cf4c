//! HTML result page generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use teamfit_core::model::{Category, CategoryInfo};
use teamfit_core::report::{QuizResult, ScoreLine};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn push_list(html: &mut String, heading: &str, items: &[&str]) {
    html.push_str("<div>\n");
    html.push_str(&format!("<h4>{}</h4>\n<ul>\n", html_escape(heading)));
    for item in items {
        html.push_str(&format!("<li>{}</li>\n", html_escape(item)));
    }
    html.push_str("</ul>\n</div>\n");
}

fn push_team_details(html: &mut String, info: &CategoryInfo) {
    html.push_str("<div class=\"columns\">\n");
    push_list(html, "Typical roles", info.roles);
    push_list(html, "Core responsibilities", info.core);
    html.push_str("</div>\n");
}

/// Generate an HTML page from a quiz result.
pub fn generate_html(result: &QuizResult) -> String {
    let mut html = String::new();
    let best = result.best.info();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>{}: {}</title>\n",
        html_escape(&result.bank.title),
        html_escape(best.name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(&result.bank.title)));
    html.push_str(&format!(
        "<p class=\"meta\">{} of {} questions answered | {}</p>\n",
        result.answered_count(),
        result.bank.question_count,
        result.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Best fit
    html.push_str("<section class=\"card best\">\n");
    html.push_str("<p class=\"meta\">Your best fit</p>\n");
    html.push_str(&format!("<h2>{}</h2>\n", html_escape(best.name)));
    html.push_str(&format!("<p>{}</p>\n", html_escape(best.summary)));
    push_team_details(&mut html, best);
    html.push_str(&format!(
        "<p><strong>Cadence:</strong> {}.</p>\n",
        html_escape(best.cadence)
    ));
    if let Some(runner_up) = result.runner_up {
        html.push_str(&format!(
            "<p class=\"meta\">Runner-up: <a href=\"#{}\">{}</a></p>\n",
            runner_up.key(),
            html_escape(runner_up.info().name)
        ));
    }
    html.push_str("</section>\n");

    // Scores
    let lines = result.score_lines();
    html.push_str("<section class=\"card\">\n");
    html.push_str("<h2>How your answers scored</h2>\n");
    html.push_str(&generate_bar_chart(&lines));
    html.push_str("<table class=\"scores\">\n");
    html.push_str("<thead><tr><th>Team</th><th>Score</th><th>Max</th><th>%</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for line in &lines {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}%</td></tr>\n",
            html_escape(line.category.info().name),
            line.score,
            line.max,
            line.percent
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Explore all teams
    html.push_str("<section class=\"explore\">\n");
    html.push_str("<h2>Explore every team</h2>\n");
    for category in Category::ALL {
        let info = category.info();
        let class = if category == result.best {
            "card team highlight"
        } else {
            "card team"
        };
        html.push_str(&format!(
            "<article id=\"{}\" class=\"{}\">\n",
            category.key(),
            class
        ));
        html.push_str(&format!("<h3>{}</h3>\n", html_escape(info.name)));
        html.push_str(&format!(
            "<p class=\"tagline\">{}</p>\n",
            html_escape(info.tagline)
        ));
        html.push_str(&format!("<p>{}</p>\n", html_escape(info.summary)));
        push_team_details(&mut html, info);
        html.push_str("</article>\n");
    }
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(result)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("<footer class=\"meta\">This quiz provides guidance, not gatekeeping. \
                   You can thrive in multiple areas.</footer>\n");
    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML result page to a file.
pub fn write_html_report(result: &QuizResult, path: &Path) -> Result<()> {
    let html = generate_html(result);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn generate_bar_chart(lines: &[ScoreLine]) -> String {
    let bar_height = 24;
    let max_width = 400;
    let padding = 8;
    let label_width = 140;

    let total_height = lines.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 80,
        total_height
    );

    for (i, line) in lines.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let width = line.percent as usize * max_width / 100;

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(line.category.info().name)
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"var(--track)\" rx=\"6\"/>\n",
            label_width, y, max_width, bar_height
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"currentColor\" rx=\"6\"/>\n",
            label_width, y, width, bar_height
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{} / {}</text>\n",
            label_width + max_width + 8,
            y + bar_height / 2,
            line.score,
            line.max
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #f8fafc; --fg: #0f172a; --card: #fff; --border: #e2e8f0; --track: #e5e7eb; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --card: #1f2937; --border: #374151; --track: #374151; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0 auto; max-width: 64rem; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 1.5rem; }
.meta { color: #64748b; }
.card { background: var(--card); border: 1px solid var(--border); border-radius: 1rem; padding: 1.5rem; margin: 1.5rem 0; }
.highlight { outline: 2px solid var(--fg); }
.tagline { color: #475569; }
.columns { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 1rem; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; max-width: 100%; }
"#;
