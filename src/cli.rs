//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

/// medqa CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "medqa",
    author = "YourName <your@email.com>",
    version,
    about = "MedQA JSONL LOADER - MedQA 문항을 적재하고 보기 텍스트로 검색하는 CLI 도구",
    long_about = r#"
MedQA JSONL LOADER
==================

MedQA 형식의 JSONL 파일을 한 줄씩 읽어 테이블로 적재한 뒤,
객관식 보기(options) 또는 정답(answer)에 특정 텍스트가 들어간 문항을 찾습니다.

특징:
  • 잘못된 줄은 건너뛰고 줄 번호와 사유를 보고
  • 대소문자를 무시하는 부분 문자열 검색
  • 대용량 파일 메모리 매핑 및 병렬 필터

예제:
  medqa -i data/phrases_no_exclude_train.jsonl -s "pulmonary embolism"
  medqa -i data/train.jsonl -n 1000 -a "anxiety disorder" --head 10
  medqa -i data/train.jsonl --strict --verbose
"#
)]
pub struct Args {
    /// MedQA JSONL 입력 파일 경로
    #[arg(short, long)]
    pub input: PathBuf,

    /// 보기(options)에서 찾을 텍스트 (대소문자 무시)
    #[arg(short, long)]
    pub search: Option<String>,

    /// 정답(answer)에서 찾을 키워드 (대소문자 무시)
    #[arg(short, long)]
    pub answer: Option<String>,

    /// 읽을 최대 줄 수 (0이면 제한 없음)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// 객체가 아닌 JSON 줄도 잘못된 줄로 취급
    #[arg(long)]
    pub strict: bool,

    /// 검색 결과 미리보기 행 수
    #[arg(long, default_value_t = 5)]
    pub head: usize,

    /// 병렬 처리 스레드 수 (기본값: CPU 코어 수)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// 상세 출력 모드
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// RUST_LOG가 없을 때 사용할 기본 로그 필터
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "info"
        } else {
            "warn"
        }
    }

    /// 검색 요청이 하나라도 있는지 확인
    pub fn has_query(&self) -> bool {
        self.search.is_some() || self.answer.is_some()
    }
}
