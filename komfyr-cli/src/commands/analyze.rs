//! Analysis command handler

use anyhow::Result;
use colored::*;
use komfyr_core::domain::analysis::{Analysis, Insights};
use komfyr_core::domain::log::LogLevel;
use komfyr_core::dto::analysis::AnalyzeRequest;

use super::logs::colorize_level;
use crate::config::Config;

/// Number of tags shown in the summary
const TOP_TAGS: usize = 10;

/// Run an analysis and print it
pub async fn analyze(config: &Config, group: Option<String>, refresh: bool, json: bool) -> Result<()> {
    let key = config.require_api_key()?;
    let req = AnalyzeRequest { group, refresh };
    let response = config.client().analyze(key, &req).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if response.cached {
        println!("{}", "(cached analysis; use --refresh for a new one)".dimmed());
    }
    print_analysis(&response.analysis);

    Ok(())
}

fn print_analysis(analysis: &Analysis) {
    let scope = analysis.group.as_deref().unwrap_or("all logs");
    println!("{}", format!("Analysis of {}", scope).bold());
    println!("  Analyzed: {} log(s)", analysis.analyzed_logs);
    println!("  At:       {}", analysis.timestamp.dimmed());

    let aggregation = &analysis.aggregation;
    let levels: Vec<String> = LogLevel::ALL
        .into_iter()
        .filter_map(|level| {
            let count = aggregation.level_count(level);
            (count > 0).then(|| format!("{} {}", colorize_level(level), count))
        })
        .collect();
    if !levels.is_empty() {
        println!("  Levels:   {}", levels.join("  "));
    }

    let mut tags: Vec<(&String, &u64)> = aggregation.tag_counts.iter().collect();
    tags.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    if !tags.is_empty() {
        let shown: Vec<String> = tags
            .iter()
            .take(TOP_TAGS)
            .map(|(tag, count)| format!("{} ({})", tag, count))
            .collect();
        println!("  Tags:     {}", shown.join(", "));
    }

    if !aggregation.data_fields.is_empty() {
        println!("\n{}", "Data fields:".bold());
        for (field, summary) in &aggregation.data_fields {
            println!("  {} = {}", field.cyan(), summary);
        }
    }

    println!("\n{}", "Insights:".bold());
    match &analysis.ai_insights {
        Insights::Text(text) => println!("  {}", text),
        Insights::Report(report) => {
            println!("  {} {}", colorize_severity(&report.severity), report.summary);
            for finding in &report.findings {
                println!(
                    "  {} {} [{}]: {}",
                    "▸".cyan(),
                    finding.title.bold(),
                    colorize_severity(&finding.severity),
                    finding.description
                );
            }
            if !report.recommendations.is_empty() {
                println!("\n{}", "Recommendations:".bold());
                for rec in &report.recommendations {
                    println!("  [{}] {}", colorize_severity(&rec.priority), rec.action);
                }
            }
        }
    }
}

/// Colorize a severity or priority label
fn colorize_severity(label: &str) -> ColoredString {
    match label {
        "critical" | "high" => label.red().bold(),
        "warning" | "medium" => label.yellow(),
        "normal" | "info" | "low" => label.green(),
        _ => label.normal(),
    }
}
