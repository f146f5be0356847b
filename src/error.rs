use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterMatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("日報ファイルが指定されていません。REPORTS か --reports-dir で指定してください")]
    NoReportsFound,

    #[error("スプレッドシート読み込みエラー ({file}): {message}")]
    Spreadsheet { file: String, message: String },

    #[error("シートがありません: {0}")]
    EmptyWorkbook(String),

    #[error("出力エラー: {0}")]
    Export(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] roster_match_common::Error),
}

pub type Result<T> = std::result::Result<T, RosterMatchError>;
