use crate::error::{RosterMatchError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

const REPORT_EXTENSIONS: &[&str] = &["xls", "xlsx"];

/// 日報ファイルとして扱う拡張子か
fn is_report_extension(ext: &str) -> bool {
    REPORT_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
}

/// Excelのロックファイル（~$）や隠しファイル
fn is_ignored_file_name(file_name: &str) -> bool {
    file_name.starts_with("~$") || file_name.starts_with('.')
}

/// フォルダ直下の日報ファイルを列挙（ファイル名順）
pub fn scan_reports(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(RosterMatchError::FolderNotFound(folder.display().to_string()));
    }

    let mut reports: Vec<(String, PathBuf)> = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        if is_ignored_file_name(&file_name) {
            continue;
        }

        let is_report = path
            .extension()
            .map(|ext| is_report_extension(&ext.to_string_lossy()))
            .unwrap_or(false);

        if is_report {
            reports.push((file_name, path.to_path_buf()));
        }
    }

    // ファイル名でソート
    reports.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(reports.into_iter().map(|(_, path)| path).collect())
}

/// 処理対象の日報ファイルを決定
///
/// 明示指定 → フォルダ内（ファイル名順）の順。同じパスは1回だけ。
pub fn collect_report_paths(explicit: &[PathBuf], folder: Option<&Path>) -> Result<Vec<PathBuf>> {
    let mut candidates: Vec<PathBuf> = explicit.to_vec();
    if let Some(folder) = folder {
        candidates.extend(scan_reports(folder)?);
    }

    let mut seen = HashSet::new();
    let mut paths = Vec::with_capacity(candidates.len());

    for path in candidates {
        if !path.is_file() {
            return Err(RosterMatchError::FileNotFound(path.display().to_string()));
        }

        let identity = path.canonicalize().unwrap_or_else(|_| path.clone());
        if !seen.insert(identity) {
            warn!(file = %path.display(), "同じ日報が複数回指定されたため1回だけ読み込みます");
            continue;
        }
        paths.push(path);
    }

    if paths.is_empty() {
        return Err(RosterMatchError::NoReportsFound);
    }

    Ok(paths)
}
