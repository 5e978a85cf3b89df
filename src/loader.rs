//! JSONL 적재 모듈
//!
//! JSONL 파일을 한 줄씩 읽어 [`Table`]로 만듭니다.
//! 잘못된 줄은 건너뛰고 보고서에 기록하며, 파일 접근 실패만 호출자에게 전파합니다.

use log::{debug, info, warn};
use memmap2::Mmap;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::error::{MedQaError, Result};
use crate::record::{json_kind, Record};
use crate::stats::{LoadReport, SkippedLine};
use crate::table::{Row, Table};

/// 적재 결과: 테이블과 보고서
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub table: Table,
    pub report: LoadReport,
}

/// 적재 옵션
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// 읽을 최대 줄 수 (None 또는 0이면 제한 없음)
    pub limit: Option<usize>,
    /// 객체가 아닌 JSON 줄을 잘못된 줄로 취급
    pub strict: bool,
    /// 대용량 파일 임계값 (이상이면 메모리 매핑 사용)
    pub mmap_threshold: u64,
}

impl LoadOptions {
    /// 기본 옵션 생성
    pub fn new() -> Self {
        Self {
            mmap_threshold: 10 * 1024 * 1024, // 10MB
            ..Default::default()
        }
    }

    /// 줄 수 한도 설정
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// strict 모드 설정
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// 메모리 매핑 임계값 설정
    pub fn with_mmap_threshold(mut self, threshold: u64) -> Self {
        self.mmap_threshold = threshold;
        self
    }

    /// 실제로 적용되는 줄 수 한도
    pub fn effective_limit(&self) -> Option<usize> {
        self.limit.filter(|&n| n > 0)
    }
}

/// JSONL 파일을 테이블로 적재
///
/// # Arguments
/// * `path` - JSONL 파일 경로
/// * `limit` - 읽을 최대 줄 수 (테스트용)
///
/// # Returns
/// 파싱에 성공한 줄마다 하나의 행을 가진 테이블
pub fn load(path: impl AsRef<Path>, limit: Option<usize>) -> Result<Table> {
    let options = LoadOptions::new().with_limit(limit);
    load_with_options(path, &options).map(|outcome| outcome.table)
}

/// 옵션을 지정해 적재하고 보고서도 함께 반환
pub fn load_with_options(path: impl AsRef<Path>, options: &LoadOptions) -> Result<LoadOutcome> {
    let path = path.as_ref();
    let started = Instant::now();

    let file = File::open(path).map_err(|e| MedQaError::FileOpen {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let file_size = file.metadata().map(|m| m.len()).unwrap_or(0);

    let mut ingest = Ingest::new(options);
    if file_size > 0 && file_size >= options.mmap_threshold {
        // 대용량 파일: 메모리 매핑 사용
        debug!("메모리 매핑으로 읽습니다: {:?} ({} bytes)", path, file_size);
        read_with_mmap(path, &file, &mut ingest)?;
    } else {
        // 일반 파일: 버퍼 리더 사용
        read_with_reader(path, file, &mut ingest)?;
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let outcome = ingest.finish(file_name, started);

    info!(
        "{}에서 문항 {}개를 적재했습니다",
        outcome.report.file_name, outcome.report.loaded
    );
    if outcome.report.has_skipped() {
        info!("잘못된 줄 {}개를 건너뛰었습니다", outcome.report.skipped_count());
    }

    Ok(outcome)
}

/// 한 줄 디코딩
fn decode_line(index: usize, line: &str, strict: bool) -> Result<Record> {
    let value: Value = serde_json::from_str(line).map_err(|e| MedQaError::LineDecode {
        line: index,
        reason: e.to_string(),
    })?;

    if strict && !value.is_object() {
        return Err(MedQaError::NotAnObject {
            line: index,
            kind: json_kind(&value),
        });
    }

    Record::from_value(value).map_err(|e| MedQaError::LineDecode {
        line: index,
        reason: e.to_string(),
    })
}

/// 줄 단위 적재 상태
struct Ingest<'a> {
    options: &'a LoadOptions,
    rows: Vec<Row>,
    skipped: Vec<SkippedLine>,
    lines_read: usize,
    bytes_read: u64,
    limit_reached: bool,
}

impl<'a> Ingest<'a> {
    fn new(options: &'a LoadOptions) -> Self {
        Self {
            options,
            rows: Vec::new(),
            skipped: Vec::new(),
            lines_read: 0,
            bytes_read: 0,
            limit_reached: false,
        }
    }

    /// 한도에 도달했으면 false를 반환하고 이후 줄은 파싱하지 않음
    fn accepts(&mut self, index: usize) -> bool {
        match self.options.effective_limit() {
            Some(limit) if index >= limit => {
                self.limit_reached = true;
                false
            }
            _ => true,
        }
    }

    fn push_line(&mut self, index: usize, line: &str) {
        self.lines_read += 1;
        self.bytes_read += line.len() as u64 + 1; // +1 for newline

        match decode_line(index, line, self.options.strict) {
            Ok(record) => self.rows.push(Row {
                line: index,
                record,
            }),
            Err(e) => {
                debug_assert!(e.is_recoverable());
                warn!("⚠️ 잘못된 줄 {}을(를) 건너뜁니다: {}", index, e);
                self.skipped.push(SkippedLine {
                    line: index,
                    reason: e.to_string(),
                });
            }
        }
    }

    fn finish(self, file_name: String, started: Instant) -> LoadOutcome {
        let report = LoadReport {
            file_name,
            lines_read: self.lines_read,
            loaded: self.rows.len(),
            skipped: self.skipped,
            bytes_read: self.bytes_read,
            limit_reached: self.limit_reached,
            elapsed: started.elapsed(),
        };

        LoadOutcome {
            table: Table::from_rows(self.rows),
            report,
        }
    }
}

/// 버퍼 리더를 사용한 줄 단위 읽기
fn read_with_reader(path: &Path, file: File, ingest: &mut Ingest<'_>) -> Result<()> {
    let reader = BufReader::new(file);

    for (index, line) in reader.lines().enumerate() {
        if !ingest.accepts(index) {
            break;
        }
        let line = line.map_err(|e| MedQaError::FileRead {
            file: path.to_path_buf(),
            line: index,
            reason: e.to_string(),
        })?;
        ingest.push_line(index, &line);
    }

    Ok(())
}

/// 메모리 매핑을 사용한 줄 단위 읽기 (대용량 파일용)
fn read_with_mmap(path: &Path, file: &File, ingest: &mut Ingest<'_>) -> Result<()> {
    let mmap = unsafe {
        Mmap::map(file).map_err(|e| MedQaError::FileOpen {
            file: path.to_path_buf(),
            reason: format!("메모리 매핑 실패: {}", e),
        })?
    };

    for (index, raw) in split_lines(&mmap).enumerate() {
        if !ingest.accepts(index) {
            break;
        }
        let line = std::str::from_utf8(raw).map_err(|e| MedQaError::FileRead {
            file: path.to_path_buf(),
            line: index,
            reason: e.to_string(),
        })?;
        ingest.push_line(index, line);
    }

    Ok(())
}

/// `BufRead::lines`와 같은 규칙으로 바이트를 줄로 나눔
///
/// 마지막 줄바꿈 뒤에는 빈 줄을 만들지 않고, 줄 끝의 `\r`은 제거합니다.
fn split_lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let lines = if bytes.is_empty() {
        None
    } else {
        Some(body.split(|b| *b == b'\n'))
    };

    lines
        .into_iter()
        .flatten()
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_options_builder() {
        let options = LoadOptions::new()
            .with_limit(Some(100))
            .with_strict(true)
            .with_mmap_threshold(0);

        assert_eq!(options.limit, Some(100));
        assert!(options.strict);
        assert_eq!(options.mmap_threshold, 0);
    }

    #[test]
    fn test_zero_limit_means_unlimited() {
        assert_eq!(LoadOptions::new().with_limit(Some(0)).effective_limit(), None);
        assert_eq!(LoadOptions::new().with_limit(None).effective_limit(), None);
        assert_eq!(
            LoadOptions::new().with_limit(Some(3)).effective_limit(),
            Some(3)
        );
    }

    #[test]
    fn test_decode_line_permissive() {
        let record = decode_line(0, "42", false).unwrap();
        assert_eq!(record, Record::default());

        let record = decode_line(0, r#"{"answer": "Sepsis"}"#, false).unwrap();
        assert_eq!(record.answer, "Sepsis");
    }

    #[test]
    fn test_decode_line_strict() {
        let err = decode_line(5, r#""just a string""#, true).unwrap_err();
        assert!(matches!(err, MedQaError::NotAnObject { line: 5, kind: "string" }));

        assert!(decode_line(5, r#"{"answer": "Sepsis"}"#, true).is_ok());
    }

    #[test]
    fn test_decode_line_malformed() {
        let err = decode_line(2, "not json at all", false).unwrap_err();
        assert!(matches!(err, MedQaError::LineDecode { line: 2, .. }));

        let err = decode_line(3, "", false).unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_split_lines() {
        let lines: Vec<&[u8]> = split_lines(b"a\r\nb\nc\n").collect();
        assert_eq!(lines, vec![&b"a"[..], &b"b"[..], &b"c"[..]]);

        let lines: Vec<&[u8]> = split_lines(b"a\n\nb").collect();
        assert_eq!(lines, vec![&b"a"[..], &b""[..], &b"b"[..]]);

        assert_eq!(split_lines(b"").count(), 0);
        assert_eq!(split_lines(b"\n").count(), 1);
    }
}
