//! Bulk export resources and formats
//!
//! A bulk export is a full-table dump served as a flat file. The client
//! hands the bytes back exactly as received; nothing here parses or
//! validates file contents.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::error::AppError;

/// File format requested from the bulk export endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkFileFormat {
    /// Comma separated text with a header row, UTF-8 (possibly with a BOM)
    #[default]
    Csv,
    /// Columnar, self-describing binary format
    Parquet,
}

impl BulkFileFormat {
    /// Value of the `file_format` query parameter
    pub fn as_query_value(&self) -> &'static str {
        match self {
            BulkFileFormat::Csv => "csv",
            BulkFileFormat::Parquet => "parquet",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_query_value()
    }
}

impl fmt::Display for BulkFileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

impl FromStr for BulkFileFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(BulkFileFormat::Csv),
            "parquet" => Ok(BulkFileFormat::Parquet),
            other => Err(AppError::config_error(format!(
                "Unknown bulk file format '{other}' (expected 'csv' or 'parquet')"
            ))),
        }
    }
}

/// A table available through `GET /v0/bulk/{file}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BulkResource {
    Players,
    Leagues,
    Performances,
    Teams,
    TeamPlayer,
}

impl BulkResource {
    pub const ALL: [BulkResource; 5] = [
        BulkResource::Players,
        BulkResource::Leagues,
        BulkResource::Performances,
        BulkResource::Teams,
        BulkResource::TeamPlayer,
    ];

    /// Path segment after `/v0/bulk/`
    pub fn endpoint_name(&self) -> &'static str {
        match self {
            BulkResource::Players => "player_data",
            BulkResource::Leagues => "league_data",
            BulkResource::Performances => "performance_data",
            BulkResource::Teams => "team_data",
            BulkResource::TeamPlayer => "team_player_data",
        }
    }

    /// Column names of the CSV header row, in file order.
    pub fn csv_header(&self) -> &'static [&'static str] {
        match self {
            BulkResource::Players => &[
                "player_id",
                "gsis_id",
                "first_name",
                "last_name",
                "position",
                "last_changed_date",
            ],
            BulkResource::Leagues => &[
                "league_id",
                "league_name",
                "scoring_type",
                "last_changed_date",
            ],
            BulkResource::Performances => &[
                "performance_id",
                "week_number",
                "fantasy_points",
                "player_id",
                "last_changed_date",
            ],
            BulkResource::Teams => &["team_id", "team_name", "league_id", "last_changed_date"],
            BulkResource::TeamPlayer => &["team_id", "player_id", "last_changed_date"],
        }
    }

    /// Default on-disk file name, e.g. `players_file.csv`.
    pub fn file_name(&self, format: BulkFileFormat) -> String {
        let stem = match self {
            BulkResource::Players => "players_file",
            BulkResource::Leagues => "leagues_file",
            BulkResource::Performances => "performances_file",
            BulkResource::Teams => "teams_file",
            BulkResource::TeamPlayer => "team_player_file",
        };
        format!("{stem}.{}", format.extension())
    }
}

impl fmt::Display for BulkResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BulkResource::Players => "players",
            BulkResource::Leagues => "leagues",
            BulkResource::Performances => "performances",
            BulkResource::Teams => "teams",
            BulkResource::TeamPlayer => "team_player",
        };
        f.write_str(name)
    }
}

impl FromStr for BulkResource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "players" | "player" | "player_data" => Ok(BulkResource::Players),
            "leagues" | "league" | "league_data" => Ok(BulkResource::Leagues),
            "performances" | "performance" | "performance_data" => Ok(BulkResource::Performances),
            "teams" | "team" | "team_data" => Ok(BulkResource::Teams),
            "team_player" | "team_players" | "team_player_data" => Ok(BulkResource::TeamPlayer),
            other => Err(AppError::config_error(format!(
                "Unknown bulk resource '{other}'"
            ))),
        }
    }
}

/// Writes a bulk export buffer to disk unchanged, creating parent directories.
pub async fn write_bulk_file(path: impl AsRef<Path>, contents: &Bytes) -> Result<(), AppError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        debug!("Creating directory {}", parent.display());
        fs::create_dir_all(parent).await?;
    }

    let mut file = fs::File::create(path).await?;
    file.write_all(contents).await?;
    file.flush().await?;
    info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_format_parsing() {
        assert_eq!("csv".parse::<BulkFileFormat>().unwrap(), BulkFileFormat::Csv);
        assert_eq!(
            "PARQUET".parse::<BulkFileFormat>().unwrap(),
            BulkFileFormat::Parquet
        );
        let err = "xlsx".parse::<BulkFileFormat>().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_format_default_is_csv() {
        assert_eq!(BulkFileFormat::default(), BulkFileFormat::Csv);
    }

    #[test]
    fn test_csv_headers() {
        assert_eq!(
            BulkResource::Players.csv_header().join(","),
            "player_id,gsis_id,first_name,last_name,position,last_changed_date"
        );
        assert_eq!(
            BulkResource::Leagues.csv_header().join(","),
            "league_id,league_name,scoring_type,last_changed_date"
        );
        assert_eq!(
            BulkResource::Performances.csv_header().join(","),
            "performance_id,week_number,fantasy_points,player_id,last_changed_date"
        );
        assert_eq!(
            BulkResource::Teams.csv_header().join(","),
            "team_id,team_name,league_id,last_changed_date"
        );
        assert_eq!(
            BulkResource::TeamPlayer.csv_header().join(","),
            "team_id,player_id,last_changed_date"
        );
    }

    #[test]
    fn test_resource_parsing_accepts_display_names() {
        for resource in BulkResource::ALL {
            let parsed: BulkResource = resource.to_string().parse().unwrap();
            assert_eq!(parsed, resource);
            let by_endpoint: BulkResource = resource.endpoint_name().parse().unwrap();
            assert_eq!(by_endpoint, resource);
        }
        assert!("coaches".parse::<BulkResource>().is_err());
    }

    #[test]
    fn test_file_names() {
        assert_eq!(
            BulkResource::Players.file_name(BulkFileFormat::Csv),
            "players_file.csv"
        );
        assert_eq!(
            BulkResource::TeamPlayer.file_name(BulkFileFormat::Parquet),
            "team_player_file.parquet"
        );
    }

    #[tokio::test]
    async fn test_write_bulk_file_creates_directories_and_keeps_bytes() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("leagues_file.csv");
        // BOM followed by a header row
        let contents = Bytes::from_static(
            b"\xEF\xBB\xBFleague_id,league_name,scoring_type,last_changed_date\n",
        );

        write_bulk_file(&path, &contents).await.unwrap();

        let written = tokio::fs::read(&path).await.unwrap();
        assert_eq!(written, contents.to_vec());
    }
}
