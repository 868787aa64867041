//! Tests for the load subcommand.

use super::{parse, try_parse};
use crate::cli::CliCommand;

#[test]
fn cli_parse_load() {
    match parse(&["filearg", "load", "body.json!10-20"]) {
        CliCommand::Load {
            file,
            strip,
            digest,
            output,
        } => {
            assert_eq!(file, "body.json!10-20");
            assert!(!strip);
            assert!(!digest);
            assert!(output.is_none());
        }
        _ => panic!("expected Load"),
    }
}

#[test]
fn cli_parse_load_flags() {
    match parse(&[
        "filearg", "load", "token.txt", "--strip", "--digest", "-o", "/tmp/out",
    ]) {
        CliCommand::Load {
            file,
            strip,
            digest,
            output,
        } => {
            assert_eq!(file, "token.txt");
            assert!(strip);
            assert!(digest);
            assert_eq!(output.as_deref(), Some(std::path::Path::new("/tmp/out")));
        }
        _ => panic!("expected Load with flags"),
    }
}

#[test]
fn cli_parse_load_stdin() {
    match parse(&["filearg", "load", "-"]) {
        CliCommand::Load { file, .. } => assert_eq!(file, "-"),
        _ => panic!("expected Load from stdin"),
    }
}

#[test]
fn cli_load_requires_file() {
    assert!(try_parse(&["filearg", "load"]).is_err());
}
