use chrono::NaiveDate;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use swc_client::sdk::api::{BulkFileFormat, BulkResource, ListParams};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// SportsWorldCentral fantasy football API client
///
/// Query leagues, teams, players and weekly performances, or download
/// full bulk exports as CSV or Parquet files.
///
/// The API location and retry behaviour come from the config file and the
/// SWC_* environment variables (see `swc_client config --list`).
#[derive(Parser, Debug)]
#[command(about, version, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Also print logs to stderr.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that the API is reachable
    Health,

    /// Show how many leagues, teams and players exist
    Counts,

    /// List leagues
    Leagues {
        #[command(flatten)]
        page: PageArgs,

        /// Only the league with this exact name
        #[arg(long = "name")]
        league_name: Option<String>,
    },

    /// List teams
    Teams {
        #[command(flatten)]
        page: PageArgs,

        /// Only the team with this exact name
        #[arg(long = "name")]
        team_name: Option<String>,

        /// Only teams of this league
        #[arg(long = "league-id")]
        league_id: Option<i64>,
    },

    /// List players
    Players {
        #[command(flatten)]
        page: PageArgs,

        #[arg(long = "first-name")]
        first_name: Option<String>,

        #[arg(long = "last-name")]
        last_name: Option<String>,
    },

    /// List weekly performances
    Performances {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Show one league and its teams
    League {
        id: i64,
        #[arg(long)]
        json: bool,
    },

    /// Show one team and its roster
    Team {
        id: i64,
        #[arg(long)]
        json: bool,
    },

    /// Show one player and their performances
    Player {
        id: i64,
        #[arg(long)]
        json: bool,
    },

    /// Download a bulk export and write it to disk unchanged
    Bulk {
        /// players, leagues, performances, teams or team_player
        resource: BulkResource,

        /// csv or parquet. Defaults to the configured format.
        #[arg(long)]
        format: Option<BulkFileFormat>,

        /// Output file. Defaults to e.g. players_file.csv in the current directory.
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Show or update the saved configuration
    Config(ConfigArgs),
}

/// Pagination and incremental-sync options shared by list commands
#[derive(clap::Args, Debug, Clone)]
pub struct PageArgs {
    /// Number of records to skip
    #[arg(long, default_value_t = 0)]
    pub skip: u32,

    /// Maximum number of records to return
    #[arg(long, default_value_t = 100)]
    pub limit: u32,

    /// Only records changed on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<NaiveDate>,

    /// Print records as JSON
    #[arg(long)]
    pub json: bool,
}

impl PageArgs {
    pub fn to_params(&self) -> ListParams {
        let params = ListParams::new().skip(self.skip).limit(self.limit);
        match self.since {
            Some(date) => params.changed_since(date),
            None => params,
        }
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct ConfigArgs {
    /// List current configuration settings
    #[arg(long = "list", short = 'l')]
    pub list: bool,

    /// Save a new API base URL
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Save the default bulk file format
    #[arg(long = "bulk-format", value_name = "FORMAT")]
    pub bulk_format: Option<BulkFileFormat>,

    /// Enable retries with exponential backoff
    #[arg(long, conflicts_with = "no_backoff")]
    pub backoff: bool,

    /// Disable retries
    #[arg(long = "no-backoff")]
    pub no_backoff: bool,

    /// Save a custom log file path
    #[arg(long = "set-log-file", value_name = "PATH")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path and use the default location
    #[arg(long = "clear-log-file", conflicts_with = "new_log_file_path")]
    pub clear_log_file: bool,
}

impl ConfigArgs {
    /// True when any setting would be written
    pub fn has_updates(&self) -> bool {
        self.base_url.is_some()
            || self.bulk_format.is_some()
            || self.backoff
            || self.no_backoff
            || self.new_log_file_path.is_some()
            || self.clear_log_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_players_command_parses_filters() {
        let args = Args::parse_from([
            "swc_client",
            "players",
            "--skip",
            "20",
            "--limit",
            "10",
            "--since",
            "2024-04-01",
            "--first-name",
            "Bryce",
        ]);
        match args.command {
            Command::Players {
                page, first_name, ..
            } => {
                let params = page.to_params();
                assert_eq!(params.skip, 20);
                assert_eq!(params.limit, 10);
                assert_eq!(
                    params.minimum_last_changed_date,
                    NaiveDate::from_ymd_opt(2024, 4, 1)
                );
                assert_eq!(first_name.as_deref(), Some("Bryce"));
            }
            other => panic!("Unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_bulk_command_parses_resource_and_format() {
        let args = Args::parse_from(["swc_client", "bulk", "team_player", "--format", "parquet"]);
        match args.command {
            Command::Bulk {
                resource, format, ..
            } => {
                assert_eq!(resource, BulkResource::TeamPlayer);
                assert_eq!(format, Some(BulkFileFormat::Parquet));
            }
            other => panic!("Unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_unknown_bulk_format_is_rejected() {
        let result = Args::try_parse_from(["swc_client", "bulk", "players", "--format", "xlsx"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_backoff_flags_conflict() {
        let result =
            Args::try_parse_from(["swc_client", "config", "--backoff", "--no-backoff"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_debug_flag_after_subcommand() {
        let args = Args::parse_from(["swc_client", "health", "--debug"]);
        assert!(args.debug);
        assert!(matches!(args.command, Command::Health));
    }
}
