use ddlgen::errors::DdlError;
use ddlgen::oracle::{ALIAS_RESOLUTION_ERROR, AUTHENTICATION_ERROR};
use ddlgen::services::{ExtractArgs, validate_and_connect};
use ddlgen::types::ObjectType;
use ddlgen::utils::ProgressReporter;
use tempfile::tempdir;

use crate::common::{FakeCatalog, FakeConnector};

fn tables_args(dburl: &str, output_path: &str) -> ExtractArgs {
    ExtractArgs {
        object_flags: vec![(ObjectType::Table, "EMP".to_string())],
        dburl: dburl.to_string(),
        output_path: output_path.to_string(),
    }
}

#[test]
fn test_bad_connect_strings_never_connect() {
    let tmp = tempdir().unwrap();
    let dir = tmp.path().to_str().unwrap();
    let connector = FakeConnector::new(FakeCatalog::new());

    for dburl in ["", "scott", "scott/tiger", "scott@orcl", "/tiger@orcl", "scott/tiger@"] {
        let res = validate_and_connect(&tables_args(dburl, dir), &connector, ProgressReporter::Silent);
        assert!(
            matches!(res, Err(DdlError::BadConnectionStringFormat)),
            "'{}' should be rejected",
            dburl
        );
    }
    assert_eq!(connector.attempts.get(), 0);
}

#[test]
fn test_no_objects_never_connects() {
    let tmp = tempdir().unwrap();
    let connector = FakeConnector::new(FakeCatalog::new());
    let args = ExtractArgs {
        object_flags: vec![
            (ObjectType::Table, String::new()),
            (ObjectType::View, String::new()),
        ],
        dburl: "scott/tiger@orcl".to_string(),
        output_path: tmp.path().to_str().unwrap().to_string(),
    };

    let res = validate_and_connect(&args, &connector, ProgressReporter::Silent);

    assert!(matches!(res, Err(DdlError::NoObjectsSpecified)));
    assert_eq!(connector.attempts.get(), 0);
}

#[test]
fn test_missing_output_dir_never_connects() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("missing");
    let connector = FakeConnector::new(FakeCatalog::new());

    let res = validate_and_connect(
        &tables_args("scott/tiger@orcl", missing.to_str().unwrap()),
        &connector,
        ProgressReporter::Silent,
    );

    assert!(matches!(res, Err(DdlError::OutputDirNotFound { .. })));
    assert_eq!(connector.attempts.get(), 0);
}

#[test]
fn test_connect_error_kinds() {
    let tmp = tempdir().unwrap();
    let args = tables_args("scott/tiger@orcl", tmp.path().to_str().unwrap());

    let res = validate_and_connect(
        &args,
        &FakeConnector::failing(ALIAS_RESOLUTION_ERROR),
        ProgressReporter::Silent,
    );
    assert!(matches!(res, Err(DdlError::BadAlias)));

    let res = validate_and_connect(
        &args,
        &FakeConnector::failing(AUTHENTICATION_ERROR),
        ProgressReporter::Silent,
    );
    assert!(matches!(res, Err(DdlError::BadCredentials)));

    let res = validate_and_connect(&args, &FakeConnector::failing(12541), ProgressReporter::Silent);
    match res {
        Err(DdlError::Connection { message }) => {
            assert_eq!(message, "ORA-12541: simulated failure")
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("connection should fail"),
    }
}

#[test]
fn test_valid_args_connect_once() {
    let tmp = tempdir().unwrap();
    let connector = FakeConnector::new(FakeCatalog::new());

    let (config, _session) = validate_and_connect(
        &tables_args("hr/hr@xepdb1", tmp.path().to_str().unwrap()),
        &connector,
        ProgressReporter::Silent,
    )
    .unwrap();

    assert_eq!(config.schema(), "HR");
    assert_eq!(connector.attempts.get(), 1);
}
