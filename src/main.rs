//! medqa - MedQA JSONL LOADER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

use medqa::{
    cli::Args,
    filter::{filter_by_answer_substring, filter_by_answer_text},
    loader::{load_with_options, LoadOptions},
    stats::SkippedLine,
    table::Table,
};

fn main() -> Result<()> {
    let args = Args::parse();

    // 로거 초기화 (RUST_LOG 우선)
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.default_log_filter()),
    )
    .init();

    // 스레드 풀 설정
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("스레드 풀 초기화 실패")?;
    }

    // 입력 파일 확인
    validate_input(&args)?;

    // 헤더 출력
    print_header(&args);

    let options = LoadOptions::new()
        .with_limit(args.limit)
        .with_strict(args.strict);

    let spinner = create_spinner(&args.input);
    let loaded = load_with_options(&args.input, &options);
    spinner.finish_and_clear();
    let outcome = loaded.with_context(|| format!("적재 실패: {:?}", args.input))?;

    // 통계 출력
    outcome.report.print_summary();
    print_skipped(&outcome.report.skipped, args.verbose);

    if !args.has_query() {
        println!("\n{} 검색어가 없어 적재만 수행했습니다.\n", "ℹ️".bright_blue());
        return Ok(());
    }

    if let Some(ref text) = args.search {
        let found = filter_by_answer_substring(&outcome.table, text);
        print_matches("보기", text, &found, args.head);
    }

    if let Some(ref keyword) = args.answer {
        let found = filter_by_answer_text(&outcome.table, keyword);
        print_matches("정답", keyword, &found, args.head);
    }

    println!();
    Ok(())
}

/// 입력 경로 유효성 검사
///
/// 존재하지 않는 파일은 로더의 파일 열기 에러로 보고됩니다.
fn validate_input(args: &Args) -> Result<()> {
    if args.input.is_dir() {
        anyhow::bail!("입력 경로가 파일이 아닙니다: {:?}", args.input);
    }
    Ok(())
}

/// 헤더 출력
fn print_header(args: &Args) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!("{}", " 🩺 MedQA JSONL LOADER".bright_white().bold());
    println!("{}", "═".repeat(50).bright_blue());
    println!("  {} 입력 파일: {:?}", "📂".bright_cyan(), args.input);

    if let Some(limit) = args.limit.filter(|&n| n > 0) {
        println!("  {} 줄 수 한도: {}", "📏".bright_white(), limit);
    }

    if let Some(ref text) = args.search {
        println!("  {} 보기 검색: {}", "🔍".bright_magenta(), text);
    }

    if let Some(ref keyword) = args.answer {
        println!("  {} 정답 검색: {}", "🎯".bright_cyan(), keyword);
    }

    if args.strict {
        println!(
            "  {} {}",
            "⚠️".bright_yellow(),
            "strict 모드 (객체가 아닌 줄은 건너뜀)".yellow()
        );
    }

    println!("{}", "═".repeat(50).bright_blue());
}

/// 적재 중 스피너 생성
fn create_spinner(path: &Path) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );
    spinner.set_message(format!(
        "📥 적재 중... {}",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// 건너뛴 줄 목록 출력
fn print_skipped(skipped: &[SkippedLine], verbose: bool) {
    if skipped.is_empty() {
        return;
    }

    println!("\n{}", "❌ 건너뛴 줄:".bright_red());
    for entry in skipped {
        println!("  {} 줄 {}", "•".red(), entry.line);
        if verbose {
            println!("    {}", entry.reason.dimmed());
        }
    }
}

/// 검색 결과 요약과 미리보기 출력
fn print_matches(column: &str, query: &str, found: &Table, head: usize) {
    println!(
        "\n{} {}에 '{}'을(를) 포함한 문항: {}개",
        "✅".bright_green(),
        column,
        query.bright_white(),
        found.len().to_string().bright_green()
    );

    for row in found.head(head).iter() {
        let record = &row.record;
        println!(
            "\n  {} {}",
            format!("[{}]", row.line).bright_cyan(),
            truncate_chars(&record.question, 100)
        );
        for (label, text) in record.option_texts() {
            let marker = if label == record.answer_idx {
                "✓".green()
            } else {
                " ".normal()
            };
            println!("    {} {}. {}", marker, label, text);
        }
        if !record.answer.is_empty() {
            println!("    {} {}", "정답:".dimmed(), record.answer);
        }
    }

    if found.len() > head {
        println!(
            "\n  {} 외 {}개",
            "…".dimmed(),
            (found.len() - head).to_string().dimmed()
        );
    }
}

/// 문자 단위로 잘라 말줄임표 추가
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args_for(input: PathBuf) -> Args {
        Args {
            input,
            search: None,
            answer: None,
            limit: None,
            strict: false,
            head: 5,
            threads: None,
            verbose: false,
        }
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("abcdef", 3), "abc…");
        assert_eq!(truncate_chars("폐색전증 환자", 4), "폐색전증…");
    }

    #[test]
    fn test_validate_input_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        let args = args_for(temp_dir.path().to_path_buf());

        assert!(validate_input(&args).is_err());
    }

    #[test]
    fn test_validate_input_leaves_missing_file_to_loader() {
        let args = args_for(PathBuf::from("/nonexistent/medqa.jsonl"));
        assert!(validate_input(&args).is_ok());
    }

    #[test]
    fn test_default_log_filter() {
        let mut args = args_for(PathBuf::from("train.jsonl"));
        assert_eq!(args.default_log_filter(), "warn");

        args.verbose = true;
        assert_eq!(args.default_log_filter(), "info");
    }
}
