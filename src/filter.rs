//! 필터 모듈
//!
//! 적재된 테이블에서 보기 또는 정답 텍스트로 문항을 골라냅니다.
//! 입력 테이블은 변경하지 않고 항상 새 테이블을 돌려줍니다.

use log::info;

use crate::matcher::TextMatcher;
use crate::record::{render_option_value, Record};
use crate::table::Table;

/// 보기(options) 중 하나라도 `text`를 포함하는 문항만 반환
///
/// # Arguments
/// * `table` - 적재된 테이블
/// * `text` - 찾을 보기 텍스트 (대소문자 무시)
///
/// # Returns
/// 일치하는 행만 원래 순서대로 담은 새 테이블
pub fn filter_by_answer_substring(table: &Table, text: &str) -> Table {
    let matcher = TextMatcher::new(text);
    let result = table.select(|record| options_contain(record, &matcher));

    info!(
        "보기에 '{}'을(를) 포함한 문항 {}개를 찾았습니다",
        matcher.as_str(),
        result.len()
    );
    result
}

/// 정답(answer) 컬럼이 `keyword`를 포함하는 문항만 반환
///
/// `keyword`는 정규식이 아닌 리터럴 부분 문자열로 취급합니다 (`.`, `*` 등도 문자 그대로).
/// 문자열이 아닌 정답 값은 적재 시 텍스트로 렌더링되므로 그 텍스트를 대상으로 검사합니다.
pub fn filter_by_answer_text(table: &Table, keyword: &str) -> Table {
    let matcher = TextMatcher::new(keyword);
    let result = table.select(|record| matcher.matches(&record.answer));

    info!(
        "정답에 '{}'을(를) 포함한 문항 {}개를 찾았습니다",
        matcher.as_str(),
        result.len()
    );
    result
}

/// 보기 값을 텍스트로 렌더링해 검사. 보기가 없으면 불일치
fn options_contain(record: &Record, matcher: &TextMatcher) -> bool {
    record
        .options
        .values()
        .any(|value| matcher.matches(&render_option_value(value)))
}
