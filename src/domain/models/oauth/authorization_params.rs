//! 인증 리다이렉트 쿼리 파라미터
//!
//! 인증 리다이렉트 요청마다 새로 만들어지는 순서 있는 키-값 집합입니다.

/// 순서를 보존하는 쿼리 파라미터 집합
///
/// 같은 키를 다시 설정하면 기존 위치의 값을 덮어씁니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizationParams {
    pairs: Vec<(String, String)>,
}

impl AuthorizationParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// 파라미터를 설정합니다.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.pairs.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// 다른 파라미터 집합을 뒤에 이어 붙입니다. 겹치는 키는 `other`의 값이 우선합니다.
    pub fn extend(&mut self, other: &AuthorizationParams) {
        for (key, value) in other.iter() {
            self.set(key, value);
        }
    }

    /// `application/x-www-form-urlencoded` 쿼리 문자열로 직렬화합니다.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
