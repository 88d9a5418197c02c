#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use rstest::rstest;

fn hostlookup() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hostlookup"));
    cmd.env("RUST_BACKTRACE", "0");
    cmd
}

fn stdout_of(output: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(output.get_output().stdout.clone()).unwrap()
}

fn stderr_of(output: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(output.get_output().stderr.clone()).unwrap()
}

#[test]
fn help_goes_to_stderr() {
    let output = hostlookup().arg("-h").assert().success();
    assert!(stdout_of(&output).is_empty());

    let stderr = stderr_of(&output);
    assert!(stderr.contains("Usage:"));
    assert!(stderr.contains("HOST-OR-ADDRESS"));
    assert!(stderr.contains("-4"));
    assert!(stderr.contains("-u"));
}

#[test]
fn help_skips_resolution() {
    // An unresolvable host would fail with status 1 if a lookup happened.
    let output = hostlookup()
        .args(["-h", "does-not-exist.invalid"])
        .assert()
        .success();
    assert!(stdout_of(&output).is_empty());
    assert!(!stderr_of(&output).contains("getaddrinfo"));
}

#[rstest]
#[case(&["-x", "example.com"])]
#[case(&[])]
#[case(&["example.com", "80", "extra"])]
#[case(&["-4"])]
fn usage_errors_exit_2(#[case] args: &[&str]) {
    let output = hostlookup().args(args).assert().code(2);
    assert!(stdout_of(&output).is_empty());
    assert!(!stderr_of(&output).is_empty());
}

#[rstest]
#[case(&["-4", "-4", "127.0.0.1"])]
#[case(&["-t", "-t", "127.0.0.1", "80"])]
#[case(&["-6", "-4", "-4", "127.0.0.1"])]
fn repeated_flags_are_accepted(#[case] args: &[&str]) {
    let output = hostlookup().args(args).assert().success();
    assert!(stdout_of(&output).starts_with("IPv4 address 127.0.0.1"));
}

#[test]
fn usage_line_shows_required_host() {
    let output = hostlookup().arg("-h").assert().success();
    assert!(stderr_of(&output).contains("<HOST-OR-ADDRESS> [SERVICE]"));
}

#[test]
fn ipv4_literal_without_service() {
    let output = hostlookup().arg("127.0.0.1").assert().success();
    let stdout = stdout_of(&output);

    let address_lines: Vec<&str> = stdout
        .lines()
        .filter(|l| l.starts_with("IPv4 address 127.0.0.1"))
        .collect();
    assert_eq!(address_lines.len(), 1, "{stdout}");
    assert!(!stdout.contains(" port "));
    assert!(!stdout.contains("Canonical name"));
}

#[test]
fn ipv4_literal_with_service_shows_ports() {
    let output = hostlookup()
        .args(["-4", "127.0.0.1", "80"])
        .assert()
        .success();
    let stdout = stdout_of(&output);

    assert!(!stdout.is_empty());
    for line in stdout.lines() {
        assert!(line.starts_with("IPv4 address 127.0.0.1, "), "{line}");
        assert!(line.contains(" port 80"), "{line}");
    }
}

#[test]
fn stream_filter_with_service_is_tcp_only() {
    let output = hostlookup()
        .args(["-t", "127.0.0.1", "8080"])
        .assert()
        .success();
    let stdout = stdout_of(&output);

    assert_eq!(stdout.lines().count(), 1, "{stdout}");
    assert!(stdout.starts_with("IPv4 address 127.0.0.1, TCP port 8080"));
}

#[test]
fn family_filter_keeps_ipv4_only() {
    let output = hostlookup().args(["-4", "localhost"]).assert().success();
    let stdout = stdout_of(&output);

    for line in stdout.lines() {
        assert!(
            line.starts_with("IPv4 address ") || line.starts_with("Canonical name "),
            "{line}"
        );
    }
}

#[test]
fn forward_failure_exits_1() {
    let output = hostlookup().arg("does-not-exist.invalid").assert().code(1);
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).starts_with("getaddrinfo: "));
}
