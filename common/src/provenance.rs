//! レビュアー名の導出
//!
//! 日報ファイル名 `<日付>_<連番>_<レビュアー名>.xlsx` から
//! レビュアー名を取り出す。

use regex::Regex;

/// ファイル名からレビュアー名を導出
///
/// 1. ディレクトリ部分を除く
/// 2. `_` で分割し先頭2トークンを捨てる
/// 3. 残りを空白で連結
/// 4. 末尾の `.xls` / `.xlsx` を除去してtrim
///
/// トークンが3個未満の場合は空文字列（エラーにはしない）。
///
/// # Examples
/// ```
/// use roster_match_common::derive_provenance;
///
/// assert_eq!(derive_provenance("2024_01_Alice_Smith.xlsx"), "Alice Smith");
/// assert_eq!(derive_provenance("report.xlsx"), "");
/// ```
pub fn derive_provenance(file_name: &str) -> String {
    lazy_static::lazy_static! {
        static ref EXCEL_SUFFIX_RE: Regex = Regex::new(r"\.xlsx?$").unwrap();
    }

    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    let joined = base.split('_').skip(2).collect::<Vec<_>>().join(" ");

    EXCEL_SUFFIX_RE.replace(&joined, "").trim().to_string()
}
