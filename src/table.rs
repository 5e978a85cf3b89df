//! 테이블 모듈
//!
//! 적재된 레코드를 파일 줄 순서대로 보관하는 불변 컬렉션입니다.

use rayon::prelude::*;

use crate::record::Record;

/// 모든 테이블이 공유하는 컬럼 집합
pub const COLUMNS: [&str; 6] = [
    "question",
    "answer",
    "answer_idx",
    "options",
    "meta_info",
    "metamap_phrases",
];

/// 원본 줄 번호(0부터 시작)를 유지하는 테이블 행
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// 원본 파일에서의 줄 번호
    pub line: usize,
    /// 디코딩된 레코드
    pub record: Record,
}

/// 레코드의 순서 있는 컬렉션
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// 빈 테이블 생성
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// 컬럼 이름 목록
    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// 레코드만 순회
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.rows.iter().map(|row| &row.record)
    }

    /// 앞에서부터 `n`개 행만 담은 새 테이블
    pub fn head(&self, n: usize) -> Table {
        Table::from_rows(self.rows.iter().take(n).cloned().collect())
    }

    /// 조건을 만족하는 행만 담은 새 테이블
    ///
    /// 행 평가는 rayon 스레드 풀에서 병렬로 수행되지만 결과 순서는 입력 순서를 따릅니다.
    pub fn select<F>(&self, predicate: F) -> Table
    where
        F: Fn(&Record) -> bool + Sync + Send,
    {
        let rows: Vec<Row> = self
            .rows
            .par_iter()
            .filter(|row| predicate(&row.record))
            .cloned()
            .collect();

        Table::from_rows(rows)
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
