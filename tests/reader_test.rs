//! スプレッドシート読み込みテスト

use roster_match::error::RosterMatchError;
use roster_match::reader::{read_table, read_table_from_bytes};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use tempfile::tempdir;

#[test]
fn test_header_row_and_values() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("employees.xlsx");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Roster").unwrap();
    worksheet.write_string(0, 0, "Employee Name").unwrap();
    worksheet.write_string(0, 1, " Join Date ").unwrap();
    worksheet.write_string(0, 2, "Role").unwrap();
    worksheet.write_string(1, 0, "Jane Doe").unwrap();
    worksheet.write_number(1, 1, 20230101.0).unwrap();
    worksheet.write_string(1, 2, "Engineer").unwrap();
    workbook.save(&path).unwrap();

    let table = read_table(&path).unwrap();
    assert_eq!(table.sheet_name, "Roster");
    assert_eq!(table.len(), 1);

    let row = &table.rows[0];
    assert_eq!(row.get("Employee Name").map(String::as_str), Some("Jane Doe"));
    // ヘッダーはtrim、整数値の小数点は出さない
    assert_eq!(row.get("Join Date").map(String::as_str), Some("20230101"));
    assert_eq!(row.get("Role").map(String::as_str), Some("Engineer"));
}

#[test]
fn test_blank_rows_skipped_and_empty_cells_absent() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("2024_01_Bob.xlsx");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    // 1行目は空、2行目がヘッダー
    worksheet.write_string(1, 0, "Candidate Name").unwrap();
    worksheet.write_string(1, 1, "Status").unwrap();
    worksheet.write_string(2, 0, "Jane Doe").unwrap();
    // 3行目は空行
    worksheet.write_string(4, 1, "Pass").unwrap();
    workbook.save(&path).unwrap();

    let table = read_table(&path).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[0].get("Candidate Name").map(String::as_str), Some("Jane Doe"));
    assert!(table.rows[0].get("Status").is_none());
    assert!(table.rows[1].get("Candidate Name").is_none());
    assert_eq!(table.rows[1].get("Status").map(String::as_str), Some("Pass"));
}

#[test]
fn test_date_cell_rendered_as_iso_date() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("employees.xlsx");

    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let join_date = ExcelDateTime::from_ymd(2023, 1, 1).unwrap();

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "Employee Name").unwrap();
    worksheet.write_string(0, 1, "Join Date").unwrap();
    worksheet.write_string(1, 0, "Jane Doe").unwrap();
    worksheet
        .write_datetime_with_format(1, 1, &join_date, &date_format)
        .unwrap();
    workbook.save(&path).unwrap();

    let table = read_table(&path).unwrap();
    assert_eq!(table.rows[0].get("Join Date").map(String::as_str), Some("2023-01-01"));
}

#[test]
fn test_only_first_sheet_is_read() {
    let mut workbook = Workbook::new();
    let first = workbook.add_worksheet();
    first.write_string(0, 0, "Employee Name").unwrap();
    first.write_string(1, 0, "Jane Doe").unwrap();
    let second = workbook.add_worksheet();
    second.write_string(0, 0, "Employee Name").unwrap();
    second.write_string(1, 0, "Other").unwrap();
    second.write_string(2, 0, "Another").unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let table = read_table_from_bytes(&bytes, "employees.xlsx").unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows[0].get("Employee Name").map(String::as_str), Some("Jane Doe"));
}

#[test]
fn test_empty_sheet_gives_no_rows() {
    let mut workbook = Workbook::new();
    workbook.add_worksheet();
    let bytes = workbook.save_to_buffer().unwrap();

    let table = read_table_from_bytes(&bytes, "empty.xlsx").unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_corrupt_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("2024_01_Bob.xlsx");
    std::fs::write(&path, b"this is not excel").unwrap();

    let err = read_table(&path).unwrap_err();
    assert!(matches!(err, RosterMatchError::Spreadsheet { .. }));
    assert!(format!("{}", err).contains("2024_01_Bob.xlsx"));
}
