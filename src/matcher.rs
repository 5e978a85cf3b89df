//! 텍스트 매칭 모듈
//!
//! 대소문자를 구분하지 않는 부분 문자열 검색을 담당합니다.

/// 미리 소문자로 변환해 둔 검색어
#[derive(Debug, Clone, Default)]
pub struct TextMatcher {
    query: String,
    needle: String,
}

impl TextMatcher {
    /// 새 매처 생성
    ///
    /// # Arguments
    /// * `text` - 검색어 (빈 문자열이면 모든 텍스트와 일치)
    ///
    /// # Examples
    /// ```
    /// use medqa::matcher::TextMatcher;
    ///
    /// let matcher = TextMatcher::new("EMBOLISM");
    /// assert!(matcher.matches("Pulmonary embolism"));
    /// assert!(!matcher.matches("Sepsis"));
    /// ```
    pub fn new(text: &str) -> Self {
        Self {
            query: text.to_string(),
            needle: text.to_lowercase(),
        }
    }

    /// 텍스트가 검색어를 포함하는지 확인 (대소문자 무시)
    pub fn matches(&self, haystack: &str) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        haystack.to_lowercase().contains(&self.needle)
    }

    /// 검색어가 비어 있는지 확인
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// 사용자가 입력한 원래 검색어
    pub fn as_str(&self) -> &str {
        &self.query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        let matcher = TextMatcher::new("pulmonary embolism");
        assert!(matcher.matches("Pulmonary Embolism"));
        assert!(matcher.matches("Acute PULMONARY EMBOLISM with shock"));
        assert!(!matcher.matches("Pulmonary edema"));
    }

    #[test]
    fn test_partial_word() {
        let matcher = TextMatcher::new("EMBOL");
        assert!(matcher.matches("embolism"));
        assert!(matcher.matches("Thromboembolic disease"));
    }

    #[test]
    fn test_empty_matches_everything() {
        let matcher = TextMatcher::new("");
        assert!(matcher.is_empty());
        assert!(matcher.matches(""));
        assert!(matcher.matches("anything"));
    }

    #[test]
    fn test_non_ascii() {
        let matcher = TextMatcher::new("ÉDÈME");
        assert!(matcher.matches("œdème pulmonaire, édème"));
        assert_eq!(matcher.as_str(), "ÉDÈME");
    }
}
