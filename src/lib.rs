//! 社員名簿と面接日報の照合ツール
//!
//! 照合ロジック本体は `roster-match-common` にあり、
//! このクレートはスプレッドシート読み込み・出力・CLIを担当する。

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod logging;
pub mod reader;
pub mod scanner;
