use std::process::{Command, Output};

fn passgen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_passgen"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn passgen")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn prints_password_and_newline() {
    let out = passgen(&["-l", "24"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.ends_with('\n'));
    assert_eq!(text.trim_end().chars().count(), 24);
    assert!(stderr(&out).is_empty());
}

#[test]
fn default_length_is_sixteen() {
    let out = passgen(&[]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out).trim_end().chars().count(), 16);
}

#[test]
fn exclusions_apply() {
    let out = passgen(&["--length", "200", "--exclude", "{}[]"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(!stdout(&out).chars().any(|c| "{}[]".contains(c)));
}

#[test]
fn out_of_range_lengths_exit_one() {
    for bad in ["0", "-5", "1001"] {
        let out = passgen(&["-l", bad]);
        assert_eq!(out.status.code(), Some(1), "length {bad}");
        assert!(out.stdout.is_empty());
        assert!(stderr(&out).contains("password length"));
    }
}

#[test]
fn malformed_and_missing_values_exit_one() {
    for args in [&["-l", "twelve"][..], &["-l"][..], &["-e"][..]] {
        let out = passgen(args);
        assert_eq!(out.status.code(), Some(1), "args {args:?}");
        assert!(out.stdout.is_empty());
        assert!(!out.stderr.is_empty());
    }
}

#[test]
fn unknown_argument_prints_error_and_help() {
    let out = passgen(&["--frobnicate"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("--frobnicate"));
    assert!(stdout(&out).contains("Usage:"));
}

#[test]
fn help_flags_agree_and_win() {
    let short = passgen(&["-h"]);
    let long = passgen(&["--help"]);
    let noisy = passgen(&["-l", "0", "--bogus", "-h"]);
    for out in [&short, &long, &noisy] {
        assert_eq!(out.status.code(), Some(0));
        assert!(out.stderr.is_empty());
    }
    assert_eq!(short.stdout, long.stdout);
    assert_eq!(short.stdout, noisy.stdout);
    assert!(stdout(&short).contains("--exclude <CHARS>"));
}

#[test]
fn empty_alphabet_exits_one() {
    let all = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+-=[]{}|;:,.<>?";
    let out = passgen(&["-e", all]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(stderr(&out).contains("failed to generate password"));
}

#[test]
fn version_flags_are_rejected() {
    for flag in ["-V", "--version"] {
        let out = passgen(&[flag]);
        assert_eq!(out.status.code(), Some(1), "flag {flag}");
        assert!(stderr(&out).contains(flag));
        assert!(stdout(&out).contains("Usage:"));
    }
}
