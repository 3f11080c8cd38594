use std::fs;

use clap::Parser;
use tempfile::TempDir;
use treestore::config::{OutputFormat, TreeStoreConfig};
use treestore::tooling::cli::{Cli, CliContext, Commands};
use treestore::{ApiError, Identifier};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["treestore", "all"],
        vec!["treestore", "item", "7"],
        vec!["treestore", "item", "root"],
        vec!["treestore", "children", "4"],
        vec!["treestore", "all-children", "2"],
        vec!["treestore", "all-parents", "7"],
        vec!["treestore", "demo"],
        vec!["treestore", "--format", "text", "all"],
        vec!["treestore", "--input", "items.yaml", "--log-level", "debug", "all"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_bad_input() {
    assert!(Cli::try_parse_from(["treestore", "item"]).is_err());
    assert!(Cli::try_parse_from(["treestore", "--format", "xml", "all"]).is_err());
    assert!(Cli::try_parse_from(["treestore", "grandparents", "7"]).is_err());
}

#[test]
fn parse_identifier_prefers_integer() {
    let cli = Cli::try_parse_from(["treestore", "item", "7"]).unwrap();
    match cli.command {
        Commands::Item { id } => assert_eq!(id, Identifier::Int(7)),
        other => panic!("unexpected command: {other:?}"),
    }

    let cli = Cli::try_parse_from(["treestore", "children", "abc"]).unwrap();
    match cli.command {
        Commands::Children { id } => assert_eq!(id, Identifier::from("abc")),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parsed_integer_ids_query_the_sample() {
    let cli =
        CliContext::with_config(&TreeStoreConfig::default(), None, Some(OutputFormat::Json))
            .unwrap();

    let parsed = Cli::try_parse_from(["treestore", "item", "7"]).unwrap();
    assert_eq!(
        cli.execute(&parsed.command).unwrap(),
        r#"{"id":7,"parent":4,"type":null}"#
    );

    let parsed = Cli::try_parse_from(["treestore", "all-parents", "7"]).unwrap();
    assert_eq!(
        cli.execute(&parsed.command).unwrap(),
        concat!(
            r#"[{"id":4,"parent":2,"type":"test"},{"id":2,"parent":1,"type":"test"},"#,
            r#"{"id":1,"parent":"root"}]"#
        )
    );
}

#[test]
fn json_dataset_with_string_ids() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("items.json");
    fs::write(
        &input,
        r#"[{"id":"a","parent":"root"},{"id":"b","parent":"a","type":"leaf"},{"id":"c","parent":"b"}]"#,
    )
    .unwrap();

    let cli =
        CliContext::with_config(&TreeStoreConfig::default(), Some(input), Some(OutputFormat::Json))
            .unwrap();
    let output = cli
        .execute(&Commands::AllParents {
            id: Identifier::from("c"),
        })
        .unwrap();

    assert_eq!(
        output,
        r#"[{"id":"b","parent":"a","type":"leaf"},{"id":"a","parent":"root"}]"#
    );
}

#[test]
fn config_file_selects_dataset_and_format() {
    let temp_dir = TempDir::new().unwrap();
    let dataset = temp_dir.path().join("items.yaml");
    fs::write(&dataset, "- id: 1\n  parent: root\n- id: 2\n  parent: 1\n").unwrap();

    let config_path = temp_dir.path().join("treestore.toml");
    fs::write(
        &config_path,
        format!(
            "dataset = {:?}\n\n[output]\nformat = \"text\"\n",
            dataset.to_string_lossy()
        ),
    )
    .unwrap();

    let cli = CliContext::new(None, Some(config_path), None).unwrap();
    assert_eq!(cli.index().len(), 2);

    let output = cli
        .execute(&Commands::Children {
            id: Identifier::from(1),
        })
        .unwrap();
    assert!(output.contains("parent"));
    assert!(!output.starts_with('['));
}

#[test]
fn missing_dataset_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let result = CliContext::with_config(
        &TreeStoreConfig::default(),
        Some(temp_dir.path().join("absent.json")),
        None,
    );
    assert!(matches!(result, Err(ApiError::DatasetError(_))));
}

#[test]
fn all_children_on_unknown_id_fails() {
    let cli =
        CliContext::with_config(&TreeStoreConfig::default(), None, Some(OutputFormat::Json))
            .unwrap();
    let err = cli
        .execute(&Commands::AllChildren {
            id: Identifier::from(100),
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "Node not found: 100");
}
