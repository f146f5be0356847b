//! エラーケーステスト
//!
//! 入力ファイルの不備は照合前に全体エラーになることを検証

use roster_match::error::RosterMatchError;
use roster_match::{loader, scanner};
use roster_match_common::{EmployeeColumns, ReportColumns};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// 存在しない名簿
#[test]
fn test_missing_roster() {
    let result = loader::load_employees(Path::new("/nonexistent/employees.xlsx"), &EmployeeColumns::default());
    assert!(matches!(result, Err(RosterMatchError::FileNotFound(_))));
}

/// 存在しない日報フォルダ
#[test]
fn test_missing_reports_dir() {
    let result = scanner::collect_report_paths(&[], Some(Path::new("/nonexistent/reports")));
    assert!(matches!(result, Err(RosterMatchError::FolderNotFound(_))));
}

/// 日報なし
#[test]
fn test_no_reports() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();

    let result = scanner::collect_report_paths(&[], Some(dir.path()));
    assert!(matches!(result, Err(RosterMatchError::NoReportsFound)));
}

/// 1件でも壊れた日報があれば全体がエラー
#[test]
fn test_one_corrupt_report_fails_all() {
    let dir = tempdir().expect("Failed to create temp dir");

    let good = dir.path().join("2024_01_Bob.xlsx");
    let mut workbook = rust_xlsxwriter::Workbook::new();
    workbook.add_worksheet().write_string(0, 0, "Candidate Name").unwrap();
    workbook.save(&good).unwrap();

    let bad = dir.path().join("2024_02_Carol.xlsx");
    std::fs::write(&bad, b"broken").unwrap();

    let paths: Vec<PathBuf> = vec![good, bad];
    let result = loader::load_reports(&paths, &ReportColumns::default(), false);
    assert!(matches!(result, Err(RosterMatchError::Spreadsheet { .. })));
}

/// RosterMatchErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        RosterMatchError::Config("テスト設定エラー".to_string()),
        RosterMatchError::FileNotFound("employees.xlsx".to_string()),
        RosterMatchError::FolderNotFound("/path/to/reports".to_string()),
        RosterMatchError::NoReportsFound,
        RosterMatchError::Spreadsheet {
            file: "2024_01_Bob.xlsx".to_string(),
            message: "Cannot detect file format".to_string(),
        },
        RosterMatchError::EmptyWorkbook("empty.xlsx".to_string()),
        RosterMatchError::Export("書き込み失敗".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: RosterMatchError = io_err.into();

    assert!(matches!(err, RosterMatchError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: RosterMatchError = json_err.into();

    assert!(matches!(err, RosterMatchError::JsonParse(_)));
}

/// common::Errorは透過的に表示される
#[test]
fn test_common_error_transparent() {
    let common_err = roster_match_common::Error::Excel("シート名設定エラー".to_string());
    let err: RosterMatchError = common_err.into();

    assert!(matches!(err, RosterMatchError::Common(_)));
    assert_eq!(format!("{}", err), "Excel error: シート名設定エラー");
}
