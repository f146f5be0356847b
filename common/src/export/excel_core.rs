//! 照合結果のExcel生成（共通ライブラリ）
//!
//! ファイルには書き込まず、xlsxのバイト列を返す。

use crate::error::{Error, Result};
use crate::types::MatchedCandidate;
use rust_xlsxwriter::*;

pub const SHEET_NAME: &str = "Matched";

/// ヘッダー行（列幅付き）
pub const HEADERS: [(&str, f64); 4] = [
    ("Employee Name", 24.0),
    ("Join Date", 14.0),
    ("Role", 20.0),
    ("Reviewer", 20.0),
];

fn xlsx_error(context: &str, e: XlsxError) -> Error {
    Error::Excel(format!("{}: {}", context, e))
}

/// 照合結果をxlsxバッファに生成
///
/// 1シート構成。1行目がヘッダー、以降は出力順に1件1行。
pub fn generate_excel_buffer(results: &[MatchedCandidate]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| xlsx_error("シート名設定エラー", e))?;

    for (col, (title, width)) in HEADERS.iter().enumerate() {
        let col = col as u16;
        worksheet
            .write_string_with_format(0, col, *title, &header_format)
            .map_err(|e| xlsx_error("ヘッダー書き込みエラー", e))?;
        worksheet
            .set_column_width(col, *width)
            .map_err(|e| xlsx_error("列幅設定エラー", e))?;
    }
    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| xlsx_error("ウィンドウ枠固定エラー", e))?;

    for (idx, candidate) in results.iter().enumerate() {
        let row = (idx + 1) as u32;
        let values = [
            &candidate.name,
            &candidate.join_date,
            &candidate.role,
            &candidate.reviewer,
        ];
        for (col, value) in values.iter().enumerate() {
            worksheet
                .write_string(row, col as u16, value.as_str())
                .map_err(|e| xlsx_error("セル書き込みエラー", e))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| xlsx_error("xlsx生成エラー", e))
}
