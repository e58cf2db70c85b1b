//! Moodlog CLI
//!
//! Command-line interface for the mood journal:
//! - Log a mood for a day
//! - Browse and search entries
//! - Run analytics
//! - Export data and reports

use chrono::{Duration, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "moodlog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Personal mood journal with analytics")]
#[command(
    long_about = "Moodlog tracks one mood rating (1-5) and journal entry per day.\nLog daily, then ask it about trends, patterns, streaks, and volatility."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8086", global = true)]
    pub api_url: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log today's mood (or another day's with --date)
    Log {
        /// Mood rating, 1-5
        mood: u8,
        /// Journal text
        #[arg(short, long, default_value = "")]
        journal: String,
        /// Date (default: today). Supports: "today", "yesterday", YYYY-MM-DD
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show the entry for one day
    Show {
        /// Date: "today", "yesterday", or YYYY-MM-DD
        date: String,
    },

    /// List recent entries
    History {
        /// Number of trailing days to show
        #[arg(short, long, default_value = "14")]
        days: i64,
    },

    /// Search journal text
    Search {
        /// Text to look for (case-insensitive)
        query: String,
    },

    /// Show basic statistics and the current streak
    Stats,

    /// Run an analysis
    Analyze {
        /// One of: trend, weekly, monthly, correlations, streaks, volatility, summary
        #[arg(default_value = "summary")]
        what: String,
    },

    /// Print the analytics report
    Report {
        /// Output format (json, text)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Export the mood log
    Export {
        /// Output format (csv, json)
        #[arg(short, long, default_value = "csv")]
        format: String,
        /// Start date (YYYY-MM-DD, default: everything)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Log {
            mood,
            journal,
            date,
        } => {
            let date = parse_date(date.as_deref().unwrap_or("today"))?;

            let body = serde_json::json!({
                "date": date,
                "mood": mood,
                "journal": journal,
            });

            let response = client
                .post(format!("{}/api/v1/entries", cli.api_url))
                .json(&body)
                .send()
                .await?;

            if response.status().is_success() {
                let ack: serde_json::Value = response.json().await?;
                println!(
                    "{} entry for {}: mood {}/5",
                    ack["status"].as_str().unwrap_or("saved"),
                    date,
                    mood
                );
            } else {
                return Err(request_error(response).await);
            }
        }

        Commands::Show { date } => {
            let date = parse_date(&date)?;
            let response = client
                .get(format!("{}/api/v1/entries/{}", cli.api_url, date))
                .send()
                .await?;

            if response.status() == reqwest::StatusCode::NOT_FOUND {
                println!("No entry for {}", date);
            } else if response.status().is_success() {
                let entry: serde_json::Value = response.json().await?;
                print_entry(&entry);
            } else {
                return Err(request_error(response).await);
            }
        }

        Commands::History { days } => {
            let end = Utc::now().date_naive();
            let start = end - Duration::days(days - 1);

            let response = client
                .get(format!(
                    "{}/api/v1/entries?start={}&end={}",
                    cli.api_url, start, end
                ))
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(request_error(response).await);
            }

            let entries: Vec<serde_json::Value> = response.json().await?;
            if entries.is_empty() {
                println!("No entries in the last {} days", days);
            } else {
                for entry in &entries {
                    print_entry(entry);
                }
                println!();
                println!("{} entries", entries.len());
            }
        }

        Commands::Search { query } => {
            let response = client
                .get(format!("{}/api/v1/entries/search", cli.api_url))
                .query(&[("q", &query)])
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(request_error(response).await);
            }

            let entries: Vec<serde_json::Value> = response.json().await?;
            if entries.is_empty() {
                println!("No entries matching '{}'", query);
            } else {
                for entry in &entries {
                    print_entry(entry);
                }
            }
        }

        Commands::Stats => {
            let response = client
                .get(format!("{}/api/v1/stats", cli.api_url))
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(request_error(response).await);
            }

            let data: serde_json::Value = response.json().await?;
            if data["stats"].is_null() {
                println!("No entries logged yet.");
                println!();
                println!("Log your first mood with:");
                println!("  moodlog-cli log 4 --journal \"First entry\"");
            } else {
                let stats = &data["stats"];
                println!("Entries:      {}", stats["total_entries"]);
                println!(
                    "Period:       {} to {}",
                    stats["first_date"].as_str().unwrap_or("-"),
                    stats["last_date"].as_str().unwrap_or("-")
                );
                println!(
                    "Average mood: {:.2}/5",
                    stats["average_mood"].as_f64().unwrap_or(0.0)
                );
                println!(
                    "Median mood:  {:.1}/5",
                    stats["median_mood"].as_f64().unwrap_or(0.0)
                );
                println!(
                    "Best day:     {}",
                    stats["best_mood_date"].as_str().unwrap_or("-")
                );
                println!(
                    "Worst day:    {}",
                    stats["worst_mood_date"].as_str().unwrap_or("-")
                );
                println!(
                    "Current streak: {} days",
                    data["current_streak"].as_u64().unwrap_or(0)
                );
            }
        }

        Commands::Analyze { what } => {
            let valid = [
                "trend",
                "weekly",
                "monthly",
                "correlations",
                "streaks",
                "volatility",
                "summary",
            ];
            if !valid.contains(&what.as_str()) {
                eprintln!("Unknown analysis '{}'. Expected one of: {}", what, valid.join(", "));
                std::process::exit(1);
            }

            let response = client
                .get(format!("{}/api/v1/analytics/{}", cli.api_url, what))
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(request_error(response).await);
            }

            let data: serde_json::Value = response.json().await?;
            println!("{}", serde_json::to_string_pretty(&data)?);
        }

        Commands::Report { format } => {
            let response = client
                .get(format!("{}/api/v1/report", cli.api_url))
                .query(&[("format", &format)])
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(request_error(response).await);
            }

            println!("{}", response.text().await?);
        }

        Commands::Export {
            format,
            start,
            end,
            output,
        } => {
            let mut url = format!("{}/api/v1/export?format={}", cli.api_url, format);
            if let Some(start) = start {
                url.push_str(&format!("&start={}", start));
            }
            if let Some(end) = end {
                url.push_str(&format!("&end={}", end));
            }

            let response = client.get(&url).send().await?;

            if !response.status().is_success() {
                return Err(request_error(response).await);
            }

            let data = response.text().await?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &data)?;
                    println!("Exported to {:?}", path);
                }
                None => {
                    print!("{}", data);
                }
            }
        }

        Commands::Status => {
            let response = client.get(format!("{}/health", cli.api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!("Moodlog v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "API status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    println!(
                        "Entries:    {}",
                        health["entries"].as_u64().unwrap_or(0)
                    );
                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!("Uptime:     {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to Moodlog API at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the Moodlog API server is running:");
                    eprintln!("  cargo run --bin moodlog-api");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let config = moodlog::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    match s.trim().to_lowercase().as_str() {
        "today" => Ok(Utc::now().date_naive()),
        "yesterday" => Ok(Utc::now().date_naive() - Duration::days(1)),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d").map_err(|_| {
            anyhow::anyhow!("Invalid date: {}. Use today, yesterday, or YYYY-MM-DD", s)
        }),
    }
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}

fn print_entry(entry: &serde_json::Value) {
    let journal = entry["journal"].as_str().unwrap_or("");
    if journal.is_empty() {
        println!(
            "{}  {}/5",
            entry["date"].as_str().unwrap_or("-"),
            entry["mood"]
        );
    } else {
        println!(
            "{}  {}/5  {}",
            entry["date"].as_str().unwrap_or("-"),
            entry["mood"],
            journal
        );
    }
}

async fn request_error(response: reqwest::Response) -> anyhow::Error {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    anyhow::anyhow!("Request failed ({}): {}", status, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_accepts_keywords_and_iso() {
        assert_eq!(parse_date("today").unwrap(), Utc::now().date_naive());
        assert_eq!(
            parse_date("yesterday").unwrap(),
            Utc::now().date_naive() - Duration::days(1)
        );
        assert_eq!(
            parse_date("2024-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        let err = parse_date("03/01/2024").unwrap_err();
        assert!(err.to_string().contains("Invalid date"));
    }
}
