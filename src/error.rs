//! 에러 타입 정의 모듈
//!
//! medqa에서 호출자에게 전파되는 에러와 줄 단위 디코딩 실패를 정의합니다.

use std::path::PathBuf;
use thiserror::Error;

/// medqa에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum MedQaError {
    /// 입력 파일 열기 실패 (존재하지 않거나 권한 없음)
    #[error("파일을 열 수 없습니다 ({file}): {reason}")]
    FileOpen { file: PathBuf, reason: String },

    /// 읽는 도중 I/O 실패 또는 UTF-8 디코딩 실패
    #[error("파일 읽기 실패 ({file}, 줄 {line}): {reason}")]
    FileRead {
        file: PathBuf,
        line: usize,
        reason: String,
    },

    /// 한 줄의 JSON 디코딩 실패 (로더 내부에서 복구됨)
    #[error("JSON 파싱 실패 (줄 {line}): {reason}")]
    LineDecode { line: usize, reason: String },

    /// strict 모드에서 객체가 아닌 JSON 값
    #[error("JSON 객체가 아닙니다 (줄 {line}): {kind}")]
    NotAnObject { line: usize, kind: &'static str },
}

impl MedQaError {
    /// 로더가 줄을 버리고 계속 진행하는 종류의 에러인지 확인
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MedQaError::LineDecode { .. } | MedQaError::NotAnObject { .. }
        )
    }
}

/// medqa 결과 타입 별칭
pub type Result<T> = std::result::Result<T, MedQaError>;
