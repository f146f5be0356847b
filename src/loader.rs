//! 名簿・日報の読み込み
//!
//! スプレッドシートを表として読み、列マッピングでレコードに変換する。
//! 日報は並列に読み込むが、結果は入力順を保つ。

use crate::error::{RosterMatchError, Result};
use crate::reader;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use roster_match_common::{EmployeeColumns, EmployeeRecord, ReportColumns, ReportFile, ReportRow};
use std::path::{Path, PathBuf};
use tracing::info;

/// 社員名簿を読み込み（元の行順）
pub fn load_employees(path: &Path, columns: &EmployeeColumns) -> Result<Vec<EmployeeRecord>> {
    let table = reader::read_table(path)?;
    info!(file = %path.display(), sheet = %table.sheet_name, rows = table.len(), "社員名簿を読み込み");

    Ok(table
        .rows
        .iter()
        .map(|row| EmployeeRecord::from_row(row, columns))
        .collect())
}

/// 日報1ファイルを読み込み、ファイル名からレビュアー名を導出
pub fn load_report(path: &Path, columns: &ReportColumns) -> Result<ReportFile> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| RosterMatchError::FileNotFound(path.display().to_string()))?;

    let table = reader::read_table(path)?;
    let rows: Vec<ReportRow> = table
        .rows
        .iter()
        .map(|row| ReportRow::from_row(row, columns))
        .collect();

    let report = ReportFile::from_file_name(&file_name, rows);
    info!(file = %file_name, reviewer = %report.provenance, rows = report.rows.len(), "日報を読み込み");

    Ok(report)
}

/// 日報を並列に読み込み（入力順を保持）
///
/// 1件でも失敗したら全体をエラーにする。
pub fn load_reports(
    paths: &[PathBuf],
    columns: &ReportColumns,
    show_progress: bool,
) -> Result<Vec<ReportFile>> {
    let progress = if show_progress {
        let pb = ProgressBar::new(paths.len() as u64);
        if let Ok(style) = ProgressStyle::with_template("  {bar:30} {pos}/{len} {msg}") {
            pb.set_style(style);
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let reports = paths
        .par_iter()
        .map(|path| {
            let report = load_report(path, columns);
            progress.inc(1);
            report
        })
        .collect::<Result<Vec<_>>>();

    progress.finish_and_clear();
    reports
}
