//! Dashboard subcommands against a mock Grafana server.

mod common;

use common::*;
use std::fs;

#[test]
fn test_list_searches_dash_db() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/search")
        .match_query(Matcher::UrlEncoded("type".into(), "dash-db".into()))
        .match_header("authorization", AUTH_HEADER)
        .with_status(200)
        .with_body(r#"[{"uid":"d1","title":"Ops Overview"}]"#)
        .create();

    grafana_cmd_for(&server)
        .args(["dashboards", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ops Overview"));

    mock.assert();
}

#[test]
fn test_get_missing_dashboard_prints_error_and_exits_1() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/dashboards/uid/xyz")
        .with_status(404)
        .with_body(r#"{"message":"Dashboard not found"}"#)
        .create();

    grafana_cmd_for(&server)
        .args(["dashboards", "get", "xyz"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(r#""customStatusCode": 404"#))
        .stdout(predicate::str::contains("Dashboard not found"));

    mock.assert();
}

#[test]
fn test_create_from_file_with_folder_and_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("board.json");
    fs::write(&file, r#"{"dashboard":{"title":"Ops","panels":[]}}"#).unwrap();

    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/dashboards/db")
        .match_header("authorization", AUTH_HEADER)
        .match_body(Matcher::Json(json!({
            "dashboard": {"title": "Ops", "panels": []},
            "folderUid": "ops",
            "message": "initial",
            "overwrite": true
        })))
        .with_status(200)
        .with_body(r#"{"status":"success","uid":"d1","version":1}"#)
        .create();

    grafana_cmd_for(&server)
        .args(["dashboards", "create", "--file"])
        .arg(&file)
        .args(["--folder-uid", "ops", "--message", "initial", "--overwrite", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""status": "success""#));

    mock.assert();
}

#[test]
fn test_create_rejects_non_object_definition() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("board.json");
    fs::write(&file, "[1, 2, 3]").unwrap();

    grafana_cmd()
        .env("GRAFANA_URL", "http://127.0.0.1:1")
        .args(["dashboards", "create", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a JSON object"));
}

#[test]
fn test_delete_with_empty_body_reports_status_code() {
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", "/api/dashboards/uid/d1")
        .with_status(200)
        .create();

    grafana_cmd_for(&server)
        .args(["dashboards", "delete", "d1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""statusCode": 200"#));

    mock.assert();
}

#[test]
fn test_success_body_with_status_key_exits_0() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/dashboards/uid/x")
        .with_status(200)
        .with_body(r#"{"uid":"x","statusCode":500}"#)
        .create();

    grafana_cmd_for(&server)
        .args(["dashboards", "get", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""statusCode": 500"#));

    mock.assert();
}
