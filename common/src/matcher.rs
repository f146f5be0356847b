//! 候補者照合モジュール
//!
//! 日報で「合格・面接済み」となった候補者を社員名簿と突き合わせ、
//! (候補者名, 職種) ごとに最初の1件だけを残す。
//! I/Oは行わない純粋関数。

use crate::types::{EmployeeRecord, MatchKey, MatchedCandidate, ReportFile};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// 適格判定に使う値（小文字化して比較）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    pub pass_value: String,
    pub yes_value: String,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            pass_value: "pass".into(),
            yes_value: "yes".into(),
        }
    }
}

/// 小文字化済みの適格条件（照合開始時に1回だけ作る）
struct Eligibility {
    pass_value: String,
    yes_value: String,
}

impl Eligibility {
    fn new(options: &MatchOptions) -> Self {
        Self {
            pass_value: options.pass_value.to_lowercase(),
            yes_value: options.yes_value.to_lowercase(),
        }
    }

    /// status == pass かつ interview == yes
    ///
    /// 行の値は小文字化のみ行い、trimしない。
    fn accepts(&self, status: &str, interview: &str) -> bool {
        status.to_lowercase() == self.pass_value && interview.to_lowercase() == self.yes_value
    }
}

/// 照合の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    /// 処理した日報行の総数
    pub rows_seen: usize,
    /// 適格条件を満たさなかった行
    pub ineligible: usize,
    /// 適格だが名簿に存在しなかった行
    pub unmatched: usize,
    /// 既出キーのため捨てた行
    pub duplicates: usize,
    /// 出力件数
    pub matched: usize,
}

/// 正規化した社員名 → 名簿の最初の該当行
struct RosterIndex<'a> {
    by_name: HashMap<String, &'a EmployeeRecord>,
}

impl<'a> RosterIndex<'a> {
    fn new(employees: &'a [EmployeeRecord]) -> Self {
        let mut by_name = HashMap::with_capacity(employees.len());
        for employee in employees {
            let name = normalize_name(&employee.name);
            // 社員名のない行は照合対象にしない
            if name.is_empty() {
                continue;
            }
            // 同名は先勝ち
            by_name.entry(name).or_insert(employee);
        }
        Self { by_name }
    }

    fn find(&self, candidate_name: &str) -> Option<&'a EmployeeRecord> {
        let name = normalize_name(candidate_name);
        if name.is_empty() {
            return None;
        }
        self.by_name.get(&name).copied()
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// 既定の適格条件で照合
pub fn match_candidates(
    employees: &[EmployeeRecord],
    reports: &[ReportFile],
) -> Vec<MatchedCandidate> {
    match_with_report(employees, reports, &MatchOptions::default()).0
}

/// 照合して集計も返す
///
/// 出力順は日報ファイルの順 → ファイル内の行順。
/// 同じ (候補者名, 日報側の職種) は最初に見つかったものだけを残す。
pub fn match_with_report(
    employees: &[EmployeeRecord],
    reports: &[ReportFile],
    options: &MatchOptions,
) -> (Vec<MatchedCandidate>, MatchReport) {
    let roster = RosterIndex::new(employees);
    let eligibility = Eligibility::new(options);
    let mut seen: HashSet<MatchKey> = HashSet::new();
    let mut matched = Vec::new();
    let mut report = MatchReport::default();

    for file in reports {
        for row in &file.rows {
            report.rows_seen += 1;

            let candidate_name = row.candidate_name.trim();
            let role = row.role.trim();

            if !eligibility.accepts(&row.status, &row.interview) {
                debug!(
                    candidate = candidate_name,
                    role,
                    status = %row.status,
                    interview = %row.interview,
                    "対象外"
                );
                report.ineligible += 1;
                continue;
            }

            let Some(employee) = roster.find(candidate_name) else {
                debug!(candidate = candidate_name, role, "名簿に該当なし");
                report.unmatched += 1;
                continue;
            };

            if !seen.insert(MatchKey::new(candidate_name, role)) {
                debug!(candidate = candidate_name, role, reviewer = %file.provenance, "重複のためスキップ");
                report.duplicates += 1;
                continue;
            }

            debug!(candidate = candidate_name, role, reviewer = %file.provenance, "一致");
            matched.push(MatchedCandidate::from_employee(employee, &file.provenance));
        }
    }

    report.matched = matched.len();
    (matched, report)
}
