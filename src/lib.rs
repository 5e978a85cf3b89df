//! medqa - MedQA JSONL LOADER
//!
//! MedQA 형식의 JSONL 데이터셋을 메모리 테이블로 적재하고,
//! 객관식 보기(options)에 특정 텍스트가 포함된 문항을 검색하는 도구입니다.
//!
//! # 주요 기능
//!
//! - 📥 **관대한 적재**: 줄마다 독립적으로 디코딩하고, 잘못된 줄은 건너뛰며 보고
//! - 🧱 **고정 컬럼**: 모든 레코드가 여섯 개 필드를 기본값과 함께 보유
//! - 🔍 **보기 검색**: 대소문자를 무시하는 부분 문자열 검색
//! - 🎯 **정답 검색**: answer 컬럼 키워드 검색
//! - 📊 **적재 보고서**: 건너뛴 줄 번호와 사유, 성공률, 처리 시간
//! - 🚀 **대용량 파일**: 메모리 매핑 읽기와 Rayon 병렬 필터
//!
//! # 예제
//!
//! ```bash
//! # 보기에 "pulmonary embolism"이 들어간 문항 검색
//! medqa -i data/phrases_no_exclude_train.jsonl -s "pulmonary embolism"
//!
//! # 앞의 100줄만 읽고 정답 키워드 검색
//! medqa -i data/train.jsonl -n 100 -a "disorder"
//! ```

pub mod cli;
pub mod error;
pub mod filter;
pub mod loader;
pub mod matcher;
pub mod record;
pub mod stats;
pub mod table;

// Re-exports for convenient access
pub use cli::Args;
pub use error::{MedQaError, Result};
pub use filter::{filter_by_answer_substring, filter_by_answer_text};
pub use loader::{load, load_with_options, LoadOptions, LoadOutcome};
pub use matcher::TextMatcher;
pub use record::Record;
pub use stats::{format_bytes, LoadReport, SkippedLine};
pub use table::{Row, Table, COLUMNS};
