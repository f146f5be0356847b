//! JSON出力
//!
//! `[{"name", "joinDate", "role", "reviewer"}, ...]` の配列

use crate::error::Result;
use roster_match_common::MatchedCandidate;
use std::path::Path;

pub fn to_json(results: &[MatchedCandidate]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

pub fn write_json(results: &[MatchedCandidate], output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, to_json(results)?)?;
    Ok(())
}
