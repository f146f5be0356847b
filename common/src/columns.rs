//! 列マッピング
//!
//! スプレッドシートの1行（ヘッダー名 → セル値）を
//! EmployeeRecord / ReportRow に変換する。

use crate::types::{EmployeeRecord, ReportRow};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 表の1行（ヘッダー名 → セル値）。空セルの列はキー自体が存在しない。
pub type TableRow = HashMap<String, String>;

/// 社員名簿の列名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeColumns {
    pub name: String,
    pub join_date: String,
    pub role: String,
    pub dob: String,
    pub id_card: String,
    pub remark: String,
}

impl Default for EmployeeColumns {
    fn default() -> Self {
        Self {
            name: "Employee Name".into(),
            join_date: "Join Date".into(),
            role: "Role".into(),
            dob: "DOB".into(),
            id_card: "ID Card".into(),
            remark: "Remark".into(),
        }
    }
}

/// 日報の列名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportColumns {
    pub candidate_name: String,
    pub role: String,
    pub status: String,
    pub interview: String,
    pub date: String,
}

impl Default for ReportColumns {
    fn default() -> Self {
        Self {
            candidate_name: "Candidate Name".into(),
            role: "Role".into(),
            status: "Status".into(),
            interview: "Interview".into(),
            date: "Date".into(),
        }
    }
}

fn field(row: &TableRow, column: &str) -> String {
    row.get(column).cloned().unwrap_or_default()
}

fn optional_field(row: &TableRow, column: &str) -> Option<String> {
    row.get(column).cloned()
}

impl EmployeeRecord {
    /// 表の1行から作成（欠けている列は空文字列）
    pub fn from_row(row: &TableRow, columns: &EmployeeColumns) -> Self {
        Self {
            name: field(row, &columns.name),
            join_date: field(row, &columns.join_date),
            role: field(row, &columns.role),
            dob: optional_field(row, &columns.dob),
            id_card: optional_field(row, &columns.id_card),
            remark: optional_field(row, &columns.remark),
        }
    }
}

impl ReportRow {
    /// 表の1行から作成（欠けている列は空文字列）
    pub fn from_row(row: &TableRow, columns: &ReportColumns) -> Self {
        Self {
            candidate_name: field(row, &columns.candidate_name),
            role: field(row, &columns.role),
            status: field(row, &columns.status),
            interview: field(row, &columns.interview),
            date: optional_field(row, &columns.date),
        }
    }
}
