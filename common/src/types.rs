//! 照合で扱う型定義
//!
//! - EmployeeRecord: 社員名簿の1行
//! - ReportRow: 日報の1行
//! - ReportFile: 日報1ファイル分（行 + レビュアー名）
//! - MatchedCandidate: 照合結果の1行
//! - MatchKey: 重複排除用の複合キー

use serde::{Deserialize, Serialize};

/// 社員名簿の1行
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    /// 社員名（照合キー）
    pub name: String,

    #[serde(default)]
    pub join_date: String,        // 入社日（そのまま出力）

    #[serde(default)]
    pub role: String,             // 職種（そのまま出力）

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_card: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// 日報の1行
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportRow {
    pub candidate_name: String,
    pub role: String,
    /// 合否（"pass" のみ意味を持つ）
    pub status: String,
    /// 面接有無（"yes" のみ意味を持つ）
    pub interview: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// 日報ファイル（行 + ファイル名から導出したレビュアー名）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFile {
    pub provenance: String,
    pub rows: Vec<ReportRow>,
}

impl ReportFile {
    /// 元のファイル名からレビュアー名を導出して作成
    pub fn from_file_name(file_name: &str, rows: Vec<ReportRow>) -> Self {
        Self {
            provenance: crate::provenance::derive_provenance(file_name),
            rows,
        }
    }
}

/// 照合結果の1行
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedCandidate {
    pub name: String,
    pub join_date: String,
    pub role: String,
    pub reviewer: String,
}

impl MatchedCandidate {
    pub fn from_employee(employee: &EmployeeRecord, reviewer: &str) -> Self {
        Self {
            name: employee.name.clone(),
            join_date: employee.join_date.clone(),
            role: employee.role.clone(),
            reviewer: reviewer.to_string(),
        }
    }
}

/// 重複排除キー: (候補者名, 日報側の職種)
///
/// どちらもtrim済み。大文字小文字は区別する。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchKey {
    pub candidate_name: String,
    pub role: String,
}

impl MatchKey {
    pub fn new(candidate_name: &str, role: &str) -> Self {
        Self {
            candidate_name: candidate_name.trim().to_string(),
            role: role.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matched_candidate_serializes_camel_case() {
        let candidate = MatchedCandidate {
            name: "Jane Doe".into(),
            join_date: "2023-01-01".into(),
            role: "Engineer".into(),
            reviewer: "Bob".into(),
        };
        let json = serde_json::to_value(&candidate).unwrap();

        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["joinDate"], "2023-01-01");
        assert_eq!(json["role"], "Engineer");
        assert_eq!(json["reviewer"], "Bob");
    }

    #[test]
    fn test_match_key_keeps_separator_characters_apart() {
        // 文字列連結キーだと衝突する組み合わせ
        let a = MatchKey::new("a__b", "c");
        let b = MatchKey::new("a", "b__c");
        assert_ne!(a, b);
    }

    #[test]
    fn test_match_key_trims_but_keeps_case() {
        assert_eq!(MatchKey::new(" Jane ", " Engineer"), MatchKey::new("Jane", "Engineer"));
        assert_ne!(MatchKey::new("Jane", "engineer"), MatchKey::new("Jane", "Engineer"));
    }

    #[test]
    fn test_report_file_from_file_name() {
        let file = ReportFile::from_file_name("2024_01_Bob.xlsx", Vec::new());
        assert_eq!(file.provenance, "Bob");
        assert!(file.rows.is_empty());
    }
}
