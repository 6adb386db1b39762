use crate::config::DeleteOptions;
use crate::error::{Error, Result};
use crate::github::PlatformClient;
use crate::output;
use crate::prompt::LineReader;
use crate::select::select;
use crate::types::{Confirmation, DeleteReport, SelectionMode};
use colored::Colorize;
use std::io::{self, Write};
use tracing::{debug, error, info};

const CONFIRM_PROMPT: &str = "Are you sure you want to continue? (y/n)";

/// `delete` の終了状態
#[derive(Debug)]
pub enum Outcome {
    /// 削除前に中断（モード未指定、トークンなし、取得失敗、不明な名前、不正な入力）
    Aborted(Error),
    NothingToDelete,
    /// ドライラン：削除されるはずだったリポジトリ
    Previewed(Vec<String>),
    /// ユーザーが n を選択
    Cancelled,
    Completed(DeleteReport),
}

impl Outcome {
    /// 一行サマリー（ログ用）
    pub fn summary(&self) -> String {
        match self {
            Outcome::Aborted(e) => format!("aborted: {e}"),
            Outcome::NothingToDelete => "nothing to delete".to_string(),
            Outcome::Previewed(names) => format!("dry run, {} selected", names.len()),
            Outcome::Cancelled => "cancelled".to_string(),
            Outcome::Completed(report) => format!(
                "deleted {}, failed {}",
                report.deleted.len(),
                report.failed.len()
            ),
        }
    }
}

/// `delete` コマンドを実行
///
/// `connect` はモードが決まってから呼ぶ。モード未指定やトークンなしでは
/// ネットワークに触れない。論理的な失敗はすべて `out` に出力し、
/// 戻り値のエラーは `out` への書き込み失敗のみ。
pub fn run<C, F, R, W>(
    connect: F,
    options: &DeleteOptions,
    reader: &mut R,
    out: &mut W,
) -> io::Result<Outcome>
where
    C: PlatformClient,
    F: FnOnce() -> Result<C>,
    R: LineReader,
    W: Write,
{
    if options.mode == SelectionMode::Unspecified {
        return abort(out, Error::NoModeSelected);
    }

    let client = match connect() {
        Ok(c) => c,
        Err(e) => return abort(out, e),
    };

    // リポジトリ一覧を取得
    writeln!(out, "Fetching your repositories...")?;
    let listing = match client.list_repositories() {
        Ok(l) => l,
        Err(e) => {
            writeln!(out, "{}: Error while fetching repos: {}", "Error".red(), e)?;
            return Ok(Outcome::Aborted(e));
        }
    };
    if listing.truncated {
        output::print_truncated_warning(out)?;
    }
    let all_names: Vec<String> = listing.repositories.into_iter().map(|r| r.name).collect();

    // 削除対象を決定
    let selected = match select(&all_names, &options.mode, !listing.truncated) {
        Ok(s) => s,
        Err(e) => return abort(out, e),
    };
    debug!(selected = selected.len(), total = all_names.len(), "selection computed");

    if selected.is_empty() {
        writeln!(out, "No repositories to delete.")?;
        return Ok(Outcome::NothingToDelete);
    }

    if options.dry_run {
        writeln!(out, "Dry run: the following repositories would be deleted:")?;
        output::print_selection(out, &selected)?;
        return Ok(Outcome::Previewed(selected));
    }

    // 確認
    writeln!(out, "The following repositories will be deleted:")?;
    output::print_selection(out, &selected)?;
    out.flush()?;

    let answer = reader
        .read_line(CONFIRM_PROMPT)
        .map(|line| Confirmation::parse(&line))
        .unwrap_or_else(|e| {
            debug!("failed to read confirmation: {e}");
            Confirmation::Invalid(String::new())
        });

    match answer {
        Confirmation::Yes => {}
        Confirmation::No => {
            writeln!(out, "Deletion cancelled.")?;
            return Ok(Outcome::Cancelled);
        }
        Confirmation::Invalid(input) => {
            return abort(out, Error::InvalidConfirmation(input));
        }
    }

    // 削除には所有者名が必要
    let owner = match client.current_user() {
        Ok(login) => login,
        Err(e) => {
            writeln!(out, "{}: Error fetching user: {}", "Error".red(), e)?;
            return Ok(Outcome::Aborted(e));
        }
    };

    let report = delete_all(&client, &owner, &selected, out)?;
    Ok(Outcome::Completed(report))
}

/// 選択順に一件ずつ削除（失敗しても続行）
fn delete_all<C, W>(
    client: &C,
    owner: &str,
    names: &[String],
    out: &mut W,
) -> io::Result<DeleteReport>
where
    C: PlatformClient,
    W: Write,
{
    let mut report = DeleteReport::default();

    for name in names {
        // 削除実行
        write!(out, "Deleting {}... ", name)?;
        out.flush()?;
        match client.delete_repository(owner, name) {
            Ok(()) => {
                writeln!(out, "{}", "done".green())?;
                info!(owner, repo = %name, "deleted repository");
                report.deleted.push(name.clone());
            }
            Err(source) => {
                writeln!(out, "{}: {}", "failed".red(), source)?;
                let err = Error::DeleteFailed {
                    name: name.clone(),
                    source: Box::new(source),
                };
                error!("{err}");
                report.failed.push(err);
            }
        }
    }

    writeln!(out, "{}", "Repositories deleted successfully.".green())?;
    if !report.failed.is_empty() {
        writeln!(
            out,
            "{}: Failed to delete {} of {} repositories: {}",
            "Warning".yellow(),
            report.failed.len(),
            report.attempted(),
            report.failed_names().join(", ")
        )?;
    }

    Ok(report)
}

fn abort<W: Write>(out: &mut W, err: Error) -> io::Result<Outcome> {
    writeln!(out, "{}: {}", "Warning".yellow(), err)?;
    Ok(Outcome::Aborted(err))
}
