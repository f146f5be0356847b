//! スプレッドシート読み込み
//!
//! 先頭シートの最初の非空行をヘッダーとし、以降の行を
//! ヘッダー名 → セル値 のマップに変換する。

mod cell;

pub use cell::render_cell;

use crate::error::{RosterMatchError, Result};
use calamine::{open_workbook_auto_from_rs, Data, Reader, Sheets};
use roster_match_common::TableRow;
use std::io::Cursor;
use std::path::Path;

/// 読み込んだ表（先頭シート）
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub sheet_name: String,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// ファイルから表を読み込み
pub fn read_table(path: &Path) -> Result<Table> {
    if !path.is_file() {
        return Err(RosterMatchError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    read_table_from_bytes(&bytes, &path.display().to_string())
}

/// バイト列から表を読み込み（xlsx / xls / xlsb / ods を自動判別）
///
/// `label` はエラーメッセージ用のファイル名。
pub fn read_table_from_bytes(bytes: &[u8], label: &str) -> Result<Table> {
    let mut workbook: Sheets<_> = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| RosterMatchError::Spreadsheet {
            file: label.to_string(),
            message: e.to_string(),
        })?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| RosterMatchError::EmptyWorkbook(label.to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| RosterMatchError::Spreadsheet {
            file: label.to_string(),
            message: format!("シート '{}' を読めません: {}", sheet_name, e),
        })?;

    let mut lines = range.rows();

    let Some(header_line) = lines.by_ref().find(|line| !is_blank(line)) else {
        return Ok(Table { sheet_name, rows: Vec::new() });
    };
    let headers = build_headers(header_line);

    let rows = lines
        .filter_map(|line| {
            let row: TableRow = line
                .iter()
                .zip(headers.iter())
                .filter_map(|(cell, header)| {
                    let header = header.as_ref()?;
                    render_cell(cell).map(|value| (header.clone(), value))
                })
                .collect();
            // 空行は読み飛ばす
            (!row.is_empty()).then_some(row)
        })
        .collect();

    Ok(Table { sheet_name, rows })
}

fn is_blank(line: &[Data]) -> bool {
    line.iter().all(|cell| render_cell(cell).is_none())
}

/// ヘッダー行から列名を作る
///
/// 空のヘッダーと、既出の列名は None（その列は読まない）。
fn build_headers(line: &[Data]) -> Vec<Option<String>> {
    let mut headers: Vec<Option<String>> = Vec::with_capacity(line.len());

    for cell in line {
        let name = render_cell(cell)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let header = match name {
            Some(name) if headers.iter().flatten().any(|h| *h == name) => None,
            other => other,
        };
        headers.push(header);
    }

    headers
}
