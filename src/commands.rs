use crate::cli::{Command, ConfigArgs, PageArgs};
use serde::Serialize;
use std::path::{Path, PathBuf};
use swc_client::config::Config;
use swc_client::error::AppError;
use swc_client::sdk::api::{BulkFileFormat, BulkResource, SwcClient, write_bulk_file};
use swc_client::sdk::models::{League, Performance, Player, Team};
use tracing::{info, warn};

/// Runs a parsed subcommand to completion.
///
/// Only API commands load and validate the configuration, so `config` can
/// repair a broken config file.
pub async fn run(command: Command) -> Result<(), AppError> {
    match command {
        Command::Config(config_args) => handle_config_command(&config_args).await,
        command => {
            let config = Config::load().await?;
            let client = SwcClient::new(config)?;
            run_api_command(&client, command).await
        }
    }
}

async fn run_api_command(client: &SwcClient, command: Command) -> Result<(), AppError> {
    match command {
        Command::Health => {
            let health = client.health_check().await?;
            println!("{}", health.message);
        }
        Command::Counts => {
            let counts = client.get_counts().await?;
            println!("Leagues: {}", counts.league_count);
            println!("Teams:   {}", counts.team_count);
            println!("Players: {}", counts.player_count);
        }
        Command::Leagues { page, league_name } => {
            let mut params = page.to_params();
            if let Some(name) = league_name {
                params = params.league_name(name);
            }
            let leagues = client.list_leagues(&params).await?;
            print_records(&leagues, &page, format_league_line)?;
        }
        Command::Teams {
            page,
            team_name,
            league_id,
        } => {
            let mut params = page.to_params();
            if let Some(name) = team_name {
                params = params.team_name(name);
            }
            if let Some(id) = league_id {
                params = params.league_id(id);
            }
            let teams = client.list_teams(&params).await?;
            print_records(&teams, &page, format_team_line)?;
        }
        Command::Players {
            page,
            first_name,
            last_name,
        } => {
            let mut params = page.to_params();
            if let Some(name) = first_name {
                params = params.first_name(name);
            }
            if let Some(name) = last_name {
                params = params.last_name(name);
            }
            let players = client.list_players(&params).await?;
            print_records(&players, &page, format_player_line)?;
        }
        Command::Performances { page } => {
            let performances = client.list_performances(&page.to_params()).await?;
            print_records(&performances, &page, format_performance_line)?;
        }
        Command::League { id, json } => {
            let league = client.get_league_by_id(id).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&league)?);
            } else {
                println!("{}", format_league_line(&league));
                for team in &league.teams {
                    println!("  {:>6}  {}", team.team_id, team.team_name);
                }
            }
        }
        Command::Team { id, json } => {
            let team = client.get_team_by_id(id).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&team)?);
            } else {
                println!("{}", format_team_line(&team));
                for player in &team.players {
                    println!(
                        "  {:>6}  {} {} ({})",
                        player.player_id, player.first_name, player.last_name, player.position
                    );
                }
            }
        }
        Command::Player { id, json } => {
            let player = client.get_player_by_id(id).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&player)?);
            } else {
                println!("{}", format_player_line(&player));
                for performance in &player.performances {
                    println!(
                        "  week {}  {:>6.2} pts",
                        performance.week_number, performance.fantasy_points
                    );
                }
            }
        }
        Command::Bulk {
            resource,
            format,
            output,
        } => {
            let format = format.unwrap_or(client.config().bulk_file_format);
            let contents = client.get_bulk_file_as(resource, format).await?;
            let path = bulk_output_path(resource, format, output);
            write_bulk_file(&path, &contents).await?;
            println!("Wrote {} bytes to {}", contents.len(), path.display());
        }
        Command::Config(config_args) => handle_config_command(&config_args).await?,
    }

    Ok(())
}

/// Prints a page as JSON or as one line per record.
fn print_records<R: Serialize>(
    records: &[R],
    page: &PageArgs,
    line: fn(&R) -> String,
) -> Result<(), AppError> {
    if page.json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No records (skip {}, limit {})", page.skip, page.limit);
    }
    for record in records {
        println!("{}", line(record));
    }
    Ok(())
}

fn format_league_line(league: &League) -> String {
    format!(
        "{:>6}  {}  [{}]  changed {}",
        league.league_id, league.league_name, league.scoring_type, league.last_changed_date
    )
}

fn format_team_line(team: &Team) -> String {
    format!(
        "{:>6}  {}  (league {})  changed {}",
        team.team_id, team.team_name, team.league_id, team.last_changed_date
    )
}

fn format_player_line(player: &Player) -> String {
    format!(
        "{:>6}  {:<28} {:<4} changed {}",
        player.player_id,
        player.full_name(),
        player.position,
        player.last_changed_date
    )
}

fn format_performance_line(performance: &Performance) -> String {
    format!(
        "{:>6}  player {:>6}  week {}  {:>6.2} pts  changed {}",
        performance.performance_id,
        performance.player_id,
        performance.week_number,
        performance.fantasy_points,
        performance.last_changed_date
    )
}

fn bulk_output_path(
    resource: BulkResource,
    format: BulkFileFormat,
    output: Option<PathBuf>,
) -> PathBuf {
    output.unwrap_or_else(|| PathBuf::from(resource.file_name(format)))
}

/// Handles `config`: lists settings or updates and saves the config file.
///
/// Updates start from the saved file only, so environment overrides never
/// end up persisted.
pub async fn handle_config_command(args: &ConfigArgs) -> Result<(), AppError> {
    if !args.has_updates() {
        return Config::display().await;
    }

    let config_path = Config::get_config_path();
    let mut config = load_config_for_update(&config_path).await;

    apply_config_updates(&mut config, args);
    config.validate()?;
    config.save_to_path(&config_path).await?;
    info!("Saved configuration to {config_path}");
    println!("Config updated successfully!");

    if args.list {
        Config::display().await?;
    }
    Ok(())
}

/// Starts a config update from the saved file. An unreadable file falls back
/// to defaults, and the user is told on stderr that saving will replace it.
async fn load_config_for_update(config_path: &str) -> Config {
    if !Path::new(config_path).exists() {
        return Config::default();
    }
    match Config::load_from_path(config_path).await {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring unreadable config file {config_path}: {e}");
            eprintln!(
                "Warning: could not read config file {config_path}: {e}\n\
                 Saving will replace it with default settings plus the requested changes."
            );
            Config::default()
        }
    }
}

fn apply_config_updates(config: &mut Config, args: &ConfigArgs) {
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(format) = args.bulk_format {
        config.bulk_file_format = format;
    }
    if args.backoff {
        config.backoff = true;
    } else if args.no_backoff {
        config.backoff = false;
    }
    if let Some(path) = &args.new_log_file_path {
        config.log_file_path = Some(path.clone());
    } else if args.clear_log_file {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }
}
