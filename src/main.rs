use anyhow::Context;
use clap::Parser;
use roster_match::{cli, config, export, loader, logging, scanner};
use roster_match_common::{derive_provenance, match_with_report};
use cli::{Cli, Commands};
use config::Config;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, cli.log_json);

    match cli.command {
        Commands::Match { employees, reports, reports_dir, output, format, stdout } => {
            let config = Config::load()?;

            // --stdout 時は標準出力をJSON専用にする
            let say = |msg: String| {
                if stdout {
                    eprintln!("{}", msg);
                } else {
                    println!("{}", msg);
                }
            };

            say("🔎 roster-match - 名簿照合\n".to_string());

            // 1. 社員名簿
            say("[1/3] 社員名簿を読み込み中...".to_string());
            let roster = loader::load_employees(&employees, &config.employee_columns)?;
            say(format!("✔ {}名を読み込み\n", roster.len()));

            // 2. 日報
            say("[2/3] 日報を読み込み中...".to_string());
            let report_paths = scanner::collect_report_paths(&reports, reports_dir.as_deref())?;
            let report_files = loader::load_reports(
                &report_paths,
                &config.report_columns,
                !cli.verbose && !stdout,
            )?;
            let total_rows: usize = report_files.iter().map(|r| r.rows.len()).sum();
            say(format!("✔ {}ファイル / {}行を読み込み\n", report_files.len(), total_rows));

            // 3. 照合
            say("[3/3] 照合中...".to_string());
            let (matched, summary) =
                match_with_report(&roster, &report_files, &config.match_options());
            tracing::info!(
                rows = summary.rows_seen,
                ineligible = summary.ineligible,
                unmatched = summary.unmatched,
                duplicates = summary.duplicates,
                matched = summary.matched,
                "照合完了"
            );
            say(format!(
                "✔ {}件一致（対象外 {} / 該当なし {} / 重複 {}）\n",
                summary.matched, summary.ineligible, summary.unmatched, summary.duplicates
            ));

            if stdout {
                println!("{}", export::json::to_json(&matched)?);
            } else {
                let format = format.unwrap_or(config.default_format);
                let output = output.unwrap_or_else(|| PathBuf::from("."));
                let written = export::export_results(&matched, format, &output)
                    .with_context(|| format!("結果の書き込みに失敗: {}", output.display()))?;
                for path in written {
                    println!("✔ 結果を保存: {}", path.display());
                }
            }

            say("✅ 照合完了".to_string());
        }

        Commands::Reviewer { file_names } => {
            for file_name in file_names {
                println!("{} → \"{}\"", file_name, derive_provenance(&file_name));
            }
        }

        Commands::Config { show, path, reset, set_pass, set_yes } => {
            // --reset は壊れた設定ファイルを読まずに上書きする
            let mut config = if reset {
                let config = Config::reset()?;
                println!("✔ 設定を初期値に戻しました");
                config
            } else {
                Config::load()?
            };
            let changed = set_pass.is_some() || set_yes.is_some();

            if let Some(value) = set_pass {
                config.pass_value = value;
            }
            if let Some(value) = set_yes {
                config.yes_value = value;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if path {
                println!("{}", Config::config_path()?.display());
            }

            if show || !(changed || reset || path) {
                println!("設定:");
                println!("  出力形式: {}", config.default_format);
                println!("  合格値 (Status): {}", config.pass_value);
                println!("  面接済み値 (Interview): {}", config.yes_value);
                println!("  名簿の列:");
                println!("    社員名: {}", config.employee_columns.name);
                println!("    入社日: {}", config.employee_columns.join_date);
                println!("    職種: {}", config.employee_columns.role);
                println!("    生年月日: {}", config.employee_columns.dob);
                println!("    IDカード: {}", config.employee_columns.id_card);
                println!("    備考: {}", config.employee_columns.remark);
                println!("  日報の列:");
                println!("    候補者名: {}", config.report_columns.candidate_name);
                println!("    職種: {}", config.report_columns.role);
                println!("    合否: {}", config.report_columns.status);
                println!("    面接: {}", config.report_columns.interview);
                println!("    日付: {}", config.report_columns.date);
            }
        }
    }

    Ok(())
}
