use clap::Parser;
use jvis::cli::{Args, Command};
use jvis::registry::StackCategory;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("jvis")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_new_single_stack() {
    let args = make_args(&[
        "new",
        "--name",
        "my-api",
        "--stack",
        "python-fastapi",
        "--path",
        "./my-api",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(!parsed.verbose);
    match parsed.command {
        Command::New(new) => {
            assert_eq!(new.name, "my-api");
            assert_eq!(new.stack.as_deref(), Some("python-fastapi"));
            assert_eq!(new.path, PathBuf::from("./my-api"));
            assert_eq!(new.entity, "item");
            assert_eq!(new.description, "");
            assert!(new.database.is_none());
        }
        other => panic!("Expected New command, got {other:?}"),
    }
}

#[test]
fn test_new_short_flags() {
    let args = make_args(&[
        "-v", "new", "-n", "shop", "-s", "custom", "-p", "out", "-d", "mysql", "-e", "product",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    let Command::New(new) = parsed.command else {
        panic!("Expected New command");
    };
    assert_eq!(new.database.as_deref(), Some("mysql"));
    assert_eq!(new.entity, "product");
}

#[test]
fn test_new_monorepo() {
    let args = make_args(&[
        "new",
        "--name",
        "shop",
        "--backend",
        "rust-axum",
        "--frontend",
        "react-vite",
        "--path",
        "out",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    let Command::New(new) = parsed.command else {
        panic!("Expected New command");
    };
    assert!(new.stack.is_none());
    assert_eq!(new.backend.as_deref(), Some("rust-axum"));
    assert_eq!(new.frontend.as_deref(), Some("react-vite"));
}

#[test]
fn test_new_requires_a_stack() {
    let args = make_args(&["new", "--name", "shop", "--path", "out"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_stack_conflicts_with_monorepo_flags() {
    let args = make_args(&[
        "new", "--name", "shop", "--stack", "custom", "--backend", "rust-axum", "--path", "out",
    ]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_list_with_type_filter() {
    let parsed = Args::try_parse_from(make_args(&["list", "--type", "frontend"])).unwrap();
    match parsed.command {
        Command::List { category } => assert_eq!(category, Some(StackCategory::Frontend)),
        other => panic!("Expected List command, got {other:?}"),
    }

    assert!(Args::try_parse_from(make_args(&["list", "--type", "desktop"])).is_err());
}

#[test]
fn test_global_data_dir() {
    let parsed =
        Args::try_parse_from(make_args(&["show", "custom", "--data-dir", "/opt/data"])).unwrap();
    assert_eq!(parsed.data_dir, Some(PathBuf::from("/opt/data")));
    match parsed.command {
        Command::Show { id } => assert_eq!(id, "custom"),
        other => panic!("Expected Show command, got {other:?}"),
    }
}

#[test]
fn test_missing_subcommand() {
    assert!(Args::try_parse_from(make_args(&[])).is_err());
}

#[test]
fn test_new_monorepo_with_mobile() {
    let args = make_args(&[
        "new", "--name", "apps", "--backend", "rust-axum", "--mobile", "expo", "--path", "out",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    let Command::New(new) = parsed.command else {
        panic!("Expected New command");
    };
    assert_eq!(new.mobile.as_deref(), Some("expo"));
    assert!(new.frontend.is_none());

    let mobile_only = make_args(&["new", "--name", "apps", "--mobile", "expo", "--path", "out"]);
    assert!(Args::try_parse_from(mobile_only).is_ok());

    let conflicting = make_args(&[
        "new", "--name", "apps", "--stack", "custom", "--mobile", "expo", "--path", "out",
    ]);
    assert!(Args::try_parse_from(conflicting).is_err());
}
