//! 문항 레코드 모듈
//!
//! JSONL 한 줄을 여섯 개의 고정 필드를 가진 [`Record`]로 디코딩합니다.
//! 각 필드는 독립적으로 기본값을 가지며, 타입이 맞지 않는 값도 에러 없이 흡수합니다.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// 하나의 MedQA 문항
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Record {
    /// 문제 본문
    #[serde(default, deserialize_with = "lenient_text")]
    pub question: String,
    /// 정답 텍스트
    #[serde(default, deserialize_with = "lenient_text")]
    pub answer: String,
    /// 정답 보기 라벨 (예: "C")
    #[serde(default, deserialize_with = "lenient_text")]
    pub answer_idx: String,
    /// 보기 라벨 → 보기 값. 객체가 아니면 빈 맵
    #[serde(default, deserialize_with = "lenient_options")]
    pub options: Map<String, Value>,
    /// 메타 정보 (예: "step1")
    #[serde(default, deserialize_with = "lenient_text")]
    pub meta_info: String,
    /// MetaMap 추출 구문
    #[serde(default, deserialize_with = "lenient_phrases")]
    pub metamap_phrases: Vec<String>,
}

impl Record {
    /// 디코딩된 JSON 값으로부터 레코드 생성
    ///
    /// 객체가 아닌 값(숫자, 문자열, 배열, null)은 필드가 하나도 없는 것으로 보고
    /// 모든 필드가 기본값인 레코드를 돌려줍니다.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        if value.is_object() {
            serde_json::from_value(value)
        } else {
            Ok(Self::default())
        }
    }

    /// 보기를 (라벨, 텍스트) 쌍으로 순회
    pub fn option_texts(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.options
            .iter()
            .map(|(label, value)| (label.as_str(), render_option_value(value)))
    }
}

/// JSON 값을 텍스트로 렌더링
///
/// 문자열은 그대로, null은 빈 문자열, 나머지는 압축 JSON 표기를 사용합니다.
pub fn render_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// 보기 값을 검색용 텍스트로 렌더링
///
/// 텍스트 컬럼과 달리 null도 다른 비문자열 값처럼 JSON 표기(`null`)를 사용합니다.
pub fn render_option_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        other => render_text(other),
    }
}

/// 로그 출력용 JSON 값 종류 이름
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(render_text(&value))
}

fn lenient_options<'de, D>(deserializer: D) -> std::result::Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

fn lenient_phrases<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items.iter().map(render_text).collect()),
        _ => Ok(Vec::new()),
    }
}
