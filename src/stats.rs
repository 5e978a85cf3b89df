//! 통계 및 유틸리티 모듈
//!
//! 적재 결과 보고서와 포맷팅을 담당합니다.

use colored::Colorize;
use std::time::Duration;

/// 건너뛴 줄 정보
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 0부터 시작하는 줄 번호
    pub line: usize,
    /// 실패 사유
    pub reason: String,
}

/// 적재 결과 보고서
///
/// 호출자가 "N개 줄 건너뜀"과 조용한 성공을 코드로 구분할 수 있도록
/// 로더가 테이블과 함께 반환합니다.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// 입력 파일 이름
    pub file_name: String,
    /// 파싱을 시도한 줄 수
    pub lines_read: usize,
    /// 테이블에 적재된 레코드 수
    pub loaded: usize,
    /// 건너뛴 줄 목록
    pub skipped: Vec<SkippedLine>,
    /// 처리한 바이트 수 (줄바꿈 포함)
    pub bytes_read: u64,
    /// 줄 수 한도에 도달해 읽기를 멈췄는지 여부
    pub limit_reached: bool,
    /// 적재 소요 시간
    pub elapsed: Duration,
}

impl LoadReport {
    /// 건너뛴 줄 수
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// 건너뛴 줄이 있는지 확인
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }

    /// 적재 성공률 (%). 읽은 줄이 없으면 None
    pub fn success_rate(&self) -> Option<f64> {
        if self.lines_read == 0 {
            return None;
        }
        Some((self.loaded as f64 / self.lines_read as f64) * 100.0)
    }

    /// 적재 통계 요약 출력
    pub fn print_summary(&self) {
        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 적재 통계".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!("  {} 파일:         {}", "📄".bright_cyan(), self.file_name);
        println!("  {} 읽은 줄:      {}", "📁".bright_cyan(), self.lines_read);
        println!(
            "  {} 적재:         {}",
            "✅".bright_green(),
            self.loaded.to_string().green()
        );

        if self.has_skipped() {
            println!(
                "  {} 건너뜀:       {}",
                "❌".bright_red(),
                self.skipped_count().to_string().red()
            );
        } else {
            println!("  {} 건너뜀:       {}", "✅".bright_green(), "0".green());
        }

        println!(
            "  {} 입력 용량:    {}",
            "📥".bright_yellow(),
            format_bytes(self.bytes_read)
        );

        if let Some(rate) = self.success_rate() {
            println!("  {} 성공률:       {:.1}%", "📈".bright_white(), rate);
        }

        if self.limit_reached {
            println!(
                "  {} {}",
                "⚠️".bright_yellow(),
                "줄 수 한도에 도달해 나머지는 읽지 않았습니다".yellow()
            );
        }

        println!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed)
        );

        println!("{}", "═".repeat(50).bright_blue());
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Examples
/// ```
/// use medqa::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 60 {
        format!("{}분 {}초", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}.{:03}초", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}
