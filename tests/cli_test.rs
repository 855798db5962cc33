use std::process::{Command, Output};

use mockito::{Matcher, Server, ServerGuard};

const TOKEN_BODY: &str = r#"{"access_token":"test-token","token_type":"Bearer","expires_in":3600}"#;

// Runs the binary against the mock server. Every variable it reads is set
// explicitly so `.env` files on the machine cannot leak in.
fn run_toptracks(server: &ServerGuard, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_toptracks"))
        .args(args)
        .env("SPOTIFY_CLIENT_ID", "client")
        .env("SPOTIFY_CLIENT_SECRET", "secret")
        .env("SPOTIFY_API_TOKEN_URL", format!("{}/api/token", server.url()))
        .env("SPOTIFY_API_URL", format!("{}/v1", server.url()))
        .env("SPOTIFY_MARKET", "US")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn mock_token_and_search(server: &mut ServerGuard, search_body: &str) {
    server
        .mock("POST", "/api/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(TOKEN_BODY)
        .create();
    server
        .mock("GET", "/v1/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(search_body)
        .create();
}

#[test]
fn test_tracks_command_prints_only_listing_on_stdout() {
    let mut server = Server::new();
    mock_token_and_search(
        &mut server,
        r#"{"artists":{"items":[{"id":"123","name":"Good Kid"}],"total":1}}"#,
    );
    server
        .mock("GET", "/v1/artists/123/top-tracks")
        .match_query(Matcher::UrlEncoded("market".into(), "US".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"tracks":[{"name":"Soft Spot"},{"name":"Conversations"}]}"#)
        .create();

    let output = run_toptracks(&server, &["tracks", "Good Kid"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "1. Soft Spot\n2. Conversations\n"
    );
}

#[test]
fn test_no_such_artist_warning_goes_to_stderr() {
    let mut server = Server::new();
    mock_token_and_search(&mut server, r#"{"artists":{"items":[],"total":0}}"#);

    let output = run_toptracks(&server, &["tracks", "Nobody At All"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No such artist!"));
}

#[test]
fn test_empty_top_tracks_warning_goes_to_stderr() {
    let mut server = Server::new();
    mock_token_and_search(
        &mut server,
        r#"{"artists":{"items":[{"id":"123","name":"Good Kid"}],"total":1}}"#,
    );
    server
        .mock("GET", "/v1/artists/123/top-tracks")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"tracks":[]}"#)
        .create();

    let output = run_toptracks(&server, &["tracks", "Good Kid"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No top tracks for Good Kid"));
}
