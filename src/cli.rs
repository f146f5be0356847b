use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roster-match")]
#[command(about = "社員名簿と面接日報の照合ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力（行ごとの判定）
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// ログをJSON形式で出力
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 名簿と日報を照合して結果を出力
    Match {
        /// 社員名簿ファイル（xlsx/xls）
        #[arg(short, long, required = true)]
        employees: PathBuf,

        /// 日報ファイル（指定順に処理）
        reports: Vec<PathBuf>,

        /// 日報フォルダ（直下の xls/xlsx をファイル名順に追加）
        #[arg(short = 'd', long)]
        reports_dir: Option<PathBuf>,

        /// 出力ファイル/ディレクトリ（デフォルト: ./matched.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (json/excel/both)（省略時は設定値）
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// ファイルに書かず標準出力にJSONを出す
        #[arg(long)]
        stdout: bool,
    },

    /// ファイル名から導出されるレビュアー名を表示
    Reviewer {
        /// 日報ファイル名
        #[arg(required = true)]
        file_names: Vec<String>,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 設定ファイルのパスを表示
        #[arg(long)]
        path: bool,

        /// 設定を初期値に戻す
        #[arg(long)]
        reset: bool,

        /// Status列の合格値を設定
        #[arg(long)]
        set_pass: Option<String>,

        /// Interview列の面接済み値を設定
        #[arg(long)]
        set_yes: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Excel,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use json, excel, or both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}
