pub mod json;
pub mod excel;

use crate::cli::ExportFormat;
use crate::error::Result;
use roster_match_common::MatchedCandidate;
use std::path::{Path, PathBuf};

pub const DEFAULT_STEM: &str = "matched";

fn output_path_for_format(output: &Path, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", DEFAULT_STEM, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let json_path = output.join(format!("{}.json", DEFAULT_STEM));
        let excel_path = output.join(format!("{}.xlsx", DEFAULT_STEM));
        (json_path, excel_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(DEFAULT_STEM);
        let json_path = parent.join(format!("{}.json", stem));
        let excel_path = parent.join(format!("{}.xlsx", stem));
        (json_path, excel_path)
    }
}

/// 照合結果を出力し、書き込んだファイルを返す
pub fn export_results(
    results: &[MatchedCandidate],
    format: ExportFormat,
    output: &Path,
) -> Result<Vec<PathBuf>> {
    let written = match format {
        ExportFormat::Json => {
            let output_path = output_path_for_format(output, "json");
            json::write_json(results, &output_path)?;
            vec![output_path]
        }
        ExportFormat::Excel => {
            let output_path = output_path_for_format(output, "xlsx");
            excel::write_excel(results, &output_path)?;
            vec![output_path]
        }
        ExportFormat::Both => {
            let (json_path, excel_path) = output_paths_for_both(output);
            json::write_json(results, &json_path)?;
            excel::write_excel(results, &excel_path)?;
            vec![json_path, excel_path]
        }
    };

    Ok(written)
}
