use std::process::{Command, Output};

fn run_restaurant(args: &[&str]) -> Output {
    run_restaurant_with_env(args, &[])
}

fn run_restaurant_with_env(args: &[&str], vars: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_restaurant"))
        .args(args)
        .env_remove("RESTAURANT_ADDRESS")
        .env_remove("RESTAURANT_DATABASE")
        .env_remove("RESTAURANT_CONNECT_TIMEOUT")
        .env("RUST_LOG", "error")
        .envs(vars.iter().copied())
        .output()
        .expect("failed to spawn restaurant binary")
}

#[test]
fn unreachable_address_exits_before_success_line() {
    let output = run_restaurant(&[
        "--address",
        "mongodb://127.0.0.1:1",
        "--timeout",
        "1",
        "collection",
        "foods",
    ]);

    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("mongodb://127.0.0.1:1"));
    assert!(!stdout.contains("connected to mongodb"));
    assert!(!stdout.contains("restaurant.foods"));
}

#[test]
fn malformed_address_exits_with_failure() {
    let output = run_restaurant(&["--address", "not-a-uri", "collection", "foods"]);

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "not-a-uri");
}

#[test]
fn timeout_flag_replaces_zero_timeout_from_env() {
    let output = run_restaurant_with_env(
        &["--address", "not-a-uri", "--timeout", "1", "collection", "foods"],
        &[("RESTAURANT_CONNECT_TIMEOUT", "0")],
    );

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "not-a-uri");
}

#[test]
fn zero_timeout_from_env_without_flag_is_fatal() {
    let output = run_restaurant_with_env(
        &["--address", "not-a-uri", "collection", "foods"],
        &[("RESTAURANT_CONNECT_TIMEOUT", "0")],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("at least one second"));
}

#[test]
fn numeric_database_from_env_is_accepted() {
    let output = run_restaurant_with_env(
        &["--address", "not-a-uri", "collection", "foods"],
        &[("RESTAURANT_DATABASE", "2024")],
    );

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "not-a-uri");
}

#[test]
fn fatal_error_reaches_stderr_with_logging_off() {
    let output = run_restaurant_with_env(
        &["--address", "not-a-uri", "collection", "foods"],
        &[("RUST_LOG", "off")],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid MongoDB address not-a-uri"));
}

#[test]
fn resolves_collection_against_live_server() {
    let Ok(address) = std::env::var("RESTAURANT_TEST_ADDRESS") else {
        return;
    };

    let output = run_restaurant(&["--address", &address, "collection", "foods"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec![address.as_str(), "connected to mongodb", "restaurant.foods"]);
}
