// src/cli.rs
use crate::core::ConfigManager;
use crate::mock_data;
use crate::views::listing::summary;
use crate::views::ListingFilter;
use crate::web::start_web_server;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "parsu")]
#[command(about = "Alumni and career networking platform prototype")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(long, default_value = "config.yaml")]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API (default)
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the job listing for a search and tag selection
    Jobs {
        #[arg(long)]
        search: Option<String>,
        /// Repeat for several tags, e.g. --filter Internship --filter Remote
        #[arg(long = "filter")]
        filters: Vec<String>,
    },
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    let config = ConfigManager::load_from(&cli.config)?;

    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => {
            let config = match port {
                Some(port) => config.with_port(port),
                None => config,
            };
            start_web_server(config).await
        }

        Command::Jobs { search, filters } => {
            for line in job_listing_lines(search, filters) {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

/// The job board as plain text: summary line first, then one line per card
pub fn job_listing_lines(search: Option<String>, filters: Vec<String>) -> Vec<String> {
    let filter = ListingFilter::from_query(search, filters);
    let catalog = mock_data::job_filter_catalog();
    for tag in catalog.unknown_tags(&filter) {
        warn!("Filter '{}' is not offered on the job board", tag);
    }

    let jobs = mock_data::jobs();
    let shown = filter.apply(&jobs);
    info!("{} of {} jobs match", shown.len(), jobs.len());

    let mut lines = vec![summary(shown.len(), "opportunities")];
    lines.extend(shown.iter().map(|job| {
        format!(
            "{} | {} | {} | {}{} | {}",
            job.id,
            job.title,
            job.company,
            job.job_type.label(),
            if job.remote { " (Remote)" } else { "" },
            job.salary
        )
    }));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_serve() {
        let cli = Cli::parse_from(["parsu"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("config.yaml"));
    }

    #[test]
    fn test_jobs_command_parses_repeated_filters() {
        let cli = Cli::parse_from(["parsu", "jobs", "--filter", "Internship", "--filter", "Remote"]);
        match cli.command {
            Some(Command::Jobs { search, filters }) => {
                assert!(search.is_none());
                assert_eq!(filters, vec!["Internship", "Remote"]);
            }
            _ => panic!("expected jobs command"),
        }
    }

    #[test]
    fn test_job_listing_lines() {
        let lines = job_listing_lines(None, vec!["Internship".to_string()]);
        assert_eq!(lines[0], "Showing 2 opportunities");
        assert_eq!(lines.len(), 3);

        let lines = job_listing_lines(Some("zzz".to_string()), Vec::new());
        assert_eq!(lines, vec!["Showing 0 opportunities"]);
    }
}
