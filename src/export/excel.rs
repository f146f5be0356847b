//! Excel出力（CLI版）
//!
//! 共通ライブラリで生成したバッファをファイルに書き込む

use crate::error::{RosterMatchError, Result};
use roster_match_common::export::excel_core::generate_excel_buffer;
use roster_match_common::MatchedCandidate;
use std::path::Path;

pub fn write_excel(results: &[MatchedCandidate], output_path: &Path) -> Result<()> {
    let buffer = generate_excel_buffer(results)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, buffer)
        .map_err(|e| RosterMatchError::Export(format!("{}: {}", output_path.display(), e)))?;

    Ok(())
}
