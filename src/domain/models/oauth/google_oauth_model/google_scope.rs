//! Google OAuth 스코프 모델
//!
//! 전략 설정에서 받은 스코프 입력(문자열 또는 타입 리스트)을
//! 하나의 정규화된 `Vec<GoogleScope>`로 변환합니다.
//!
//! @see <https://developers.google.com/identity/protocols/oauth2/scopes#oauth2>

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 스코프 문자열 구분자
pub const GOOGLE_SCOPE_SEPARATOR: &str = " ";

/// 스코프를 지정하지 않았을 때 요청하는 기본 스코프
pub const GOOGLE_DEFAULT_SCOPES: [GoogleScope; 3] =
    [GoogleScope::OpenId, GoogleScope::Profile, GoogleScope::Email];

/// Google 로그인에서 요청할 수 있는 스코프
///
/// OpenID Connect 기본 스코프 세 가지는 타입으로 표현하고,
/// `https://www.googleapis.com/auth/...` 형태의 API 스코프는 `Other`로 그대로 보존합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GoogleScope {
    OpenId,
    Email,
    Profile,
    Other(String),
}

impl GoogleScope {
    /// 스코프 리터럴로부터 변환합니다. 알 수 없는 값은 `Other`가 됩니다.
    pub fn parse(literal: &str) -> Self {
        match literal {
            "openid" => GoogleScope::OpenId,
            "email" => GoogleScope::Email,
            "profile" => GoogleScope::Profile,
            other => GoogleScope::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            GoogleScope::OpenId => "openid",
            GoogleScope::Email => "email",
            GoogleScope::Profile => "profile",
            GoogleScope::Other(scope) => scope,
        }
    }
}

impl fmt::Display for GoogleScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for GoogleScope {
    fn from(literal: &str) -> Self {
        GoogleScope::parse(literal)
    }
}

impl Serialize for GoogleScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GoogleScope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let literal = String::deserialize(deserializer)?;
        Ok(GoogleScope::parse(&literal))
    }
}

/// 설정 경계에서만 쓰이는 스코프 입력 형태
///
/// 공백으로 구분된 문자열이나 이미 타입이 지정된 리스트 둘 다 허용합니다.
/// 생성 시점에 [`normalize_scope`]로 변환된 뒤에는 더 이상 사용되지 않습니다.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScopeInput {
    Delimited(String),
    List(Vec<GoogleScope>),
}

impl From<&str> for ScopeInput {
    fn from(scope: &str) -> Self {
        ScopeInput::Delimited(scope.to_string())
    }
}

impl From<String> for ScopeInput {
    fn from(scope: String) -> Self {
        ScopeInput::Delimited(scope)
    }
}

impl From<Vec<GoogleScope>> for ScopeInput {
    fn from(scopes: Vec<GoogleScope>) -> Self {
        ScopeInput::List(scopes)
    }
}

/// 스코프 입력을 정규화된 리스트로 변환합니다.
///
/// - `None` 또는 빈 문자열: 기본 스코프 `["openid", "profile", "email"]`
/// - 문자열: 단일 공백으로 분리 (연속 공백으로 생기는 빈 토큰도 그대로 유지)
/// - 리스트: 변경 없이 그대로 통과
pub fn normalize_scope(scope: Option<ScopeInput>) -> Vec<GoogleScope> {
    match scope {
        None => GOOGLE_DEFAULT_SCOPES.to_vec(),
        Some(ScopeInput::Delimited(raw)) if raw.is_empty() => GOOGLE_DEFAULT_SCOPES.to_vec(),
        Some(ScopeInput::Delimited(raw)) => raw
            .split(GOOGLE_SCOPE_SEPARATOR)
            .map(GoogleScope::parse)
            .collect(),
        Some(ScopeInput::List(scopes)) => scopes,
    }
}

/// 스코프 리스트를 쿼리 파라미터 값으로 합칩니다.
pub fn join_scopes(scopes: &[GoogleScope]) -> String {
    scopes
        .iter()
        .map(GoogleScope::as_str)
        .collect::<Vec<_>>()
        .join(GOOGLE_SCOPE_SEPARATOR)
}
