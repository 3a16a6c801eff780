use bytes::Bytes;
use swc_client::{
    config::SwcConfig,
    sdk::api::{BulkFileFormat, BulkResource, SwcClient, write_bulk_file},
    testing_utils::{TestDataBuilder, UTF8_BOM},
};
use tempfile::tempdir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_bulk(server: &MockServer, resource: BulkResource, format: &str, body: Vec<u8>) {
    Mock::given(method("GET"))
        .and(path(format!("/v0/bulk/{}", resource.endpoint_name())))
        .and(query_param("file_format", format))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .mount(server)
        .await;
}

/// Strips a leading BOM and splits into lines, as a consumer would
fn decode_csv(bytes: &Bytes) -> Vec<String> {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes.as_ref());
    String::from_utf8(body.to_vec())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_every_csv_export_has_expected_header_and_rows() {
    let server = MockServer::start().await;
    for (i, resource) in BulkResource::ALL.iter().enumerate() {
        let rows = 3 + i;
        mount_bulk(
            &server,
            *resource,
            "csv",
            TestDataBuilder::bulk_csv(*resource, rows, true),
        )
        .await;
    }

    let client = SwcClient::new(SwcConfig::new(server.uri())).unwrap();
    for (i, resource) in BulkResource::ALL.iter().enumerate() {
        let bytes = client.get_bulk_file(*resource).await.unwrap();
        let lines = decode_csv(&bytes);

        assert_eq!(lines[0], resource.csv_header().join(","), "{resource}");
        assert_eq!(lines.len(), 3 + i + 1, "{resource}");
    }
}

#[tokio::test]
async fn test_byte_order_mark_is_preserved() {
    let server = MockServer::start().await;
    let body = TestDataBuilder::bulk_csv(BulkResource::Leagues, 5, true);
    mount_bulk(&server, BulkResource::Leagues, "csv", body.clone()).await;

    let client = SwcClient::new(SwcConfig::new(server.uri())).unwrap();
    let bytes = client.get_bulk_league_file().await.unwrap();

    assert!(bytes.starts_with(UTF8_BOM));
    assert_eq!(bytes.as_ref(), body.as_slice());
}

#[tokio::test]
async fn test_parquet_bytes_are_returned_verbatim() {
    let server = MockServer::start().await;
    let body: Vec<u8> = b"PAR1\x15\x04\x15\x00\xff\xfeopaque\x00PAR1".to_vec();
    mount_bulk(&server, BulkResource::Performances, "parquet", body.clone()).await;

    let client = SwcClient::new(SwcConfig::new(server.uri())).unwrap();
    let bytes = client
        .get_bulk_file_as(BulkResource::Performances, BulkFileFormat::Parquet)
        .await
        .unwrap();

    assert_eq!(bytes.as_ref(), body.as_slice());
}

#[tokio::test]
async fn test_downloaded_file_is_written_unchanged() {
    let server = MockServer::start().await;
    let body = TestDataBuilder::bulk_csv(BulkResource::TeamPlayer, 8, true);
    mount_bulk(&server, BulkResource::TeamPlayer, "csv", body.clone()).await;

    let client = SwcClient::new(SwcConfig::new(server.uri())).unwrap();
    let bytes = client.get_bulk_team_player_file().await.unwrap();

    let temp_dir = tempdir().unwrap();
    let target = temp_dir
        .path()
        .join("exports")
        .join(BulkResource::TeamPlayer.file_name(BulkFileFormat::Csv));
    write_bulk_file(&target, &bytes).await.unwrap();

    assert!(target.ends_with("team_player_file.csv"));
    let on_disk = tokio::fs::read(&target).await.unwrap();
    assert_eq!(on_disk, body);
}

#[tokio::test]
async fn test_bulk_not_retried_on_client_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/bulk/team_data"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let client = SwcClient::new(SwcConfig::new(server.uri())).unwrap();
    let err = client.get_bulk_team_file().await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
