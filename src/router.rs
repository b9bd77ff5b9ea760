//! Client-side route table
//!
//! - `/` - login
//! - `/results/{studentId}` - results for one student
//! - `/404` - not found
//!
//! Any other path resolves to the not-found view.

use std::fmt;

use crate::dataset::StudentId;

/// Name of the id parameter in [`Route::RESULTS_PATTERN`]
pub const STUDENT_ID_PARAM: &str = "student_id";

/// Identifier taken from a `/results/{studentId}` path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteStudentId {
    /// A well-formed decimal integer
    Parsed(StudentId),
    /// Anything else. Behaves as id 0 but never matches a student.
    Malformed,
}

impl RouteStudentId {
    /// Parse the leading integer of a path segment
    ///
    /// Leading whitespace is skipped, then an optional sign and the run of
    /// decimal digits that follows are read; anything after the digits is
    /// ignored, so `"7abc"` and `"7.0"` both give 7. Without digits, or when
    /// the value overflows, the id is malformed.
    pub fn parse(segment: &str) -> Self {
        let rest = segment.trim_start();
        let unsigned = rest.strip_prefix(['+', '-']).unwrap_or(rest);
        let sign_len = rest.len() - unsigned.len();
        let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();

        if digits == 0 {
            return RouteStudentId::Malformed;
        }

        match rest[..sign_len + digits].parse::<StudentId>() {
            Ok(id) => RouteStudentId::Parsed(id),
            Err(_) => RouteStudentId::Malformed,
        }
    }

    /// Numeric value, 0 when malformed
    pub fn value(&self) -> StudentId {
        match self {
            RouteStudentId::Parsed(id) => *id,
            RouteStudentId::Malformed => 0,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, RouteStudentId::Malformed)
    }
}

/// A view the application can display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    /// Results page; keeps the raw segment so malformed ids survive a round trip
    Results(String),
    NotFound,
}

impl Route {
    /// Results route as a client router declares it
    pub const RESULTS_PATTERN: &'static str = "/results/:student_id";

    /// Catch-all for paths no other route matches
    pub const FALLBACK_PATTERN: &'static str = "/*any";

    /// Route to the results page of a known student
    pub fn results(id: StudentId) -> Self {
        Route::Results(id.to_string())
    }

    /// Resolve a URL path
    ///
    /// Query strings and fragments are ignored, a trailing slash is tolerated.
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        if trimmed.is_empty() {
            return Route::Login;
        }

        let segments: Vec<&str> = trimmed.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            ["results", id] if !id.is_empty() => Route::Results((*id).to_string()),
            _ => Route::NotFound,
        }
    }

    /// Student identifier for a results route
    pub fn student_id(&self) -> Option<RouteStudentId> {
        match self {
            Route::Results(segment) => Some(RouteStudentId::parse(segment)),
            _ => None,
        }
    }

    /// Pattern a client router registers this route under
    pub fn pattern(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Results(_) => Self::RESULTS_PATTERN,
            Route::NotFound => "/404",
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/".to_string(),
            Route::Results(segment) => format!("/results/{}", segment),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Whether the requested path differs from where this route lives
    ///
    /// Unmatched paths redirect to `/404`.
    pub fn redirect_for(path: &str) -> Option<Route> {
        match Route::parse(path) {
            Route::NotFound if path.trim_end_matches('/') != "/404" => Some(Route::NotFound),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Route::Login);
        assert_eq!(Route::parse(""), Route::Login);
        assert_eq!(Route::parse("/results/7"), Route::Results("7".to_string()));
        assert_eq!(Route::parse("/results/7/"), Route::Results("7".to_string()));
        assert_eq!(Route::parse("/404"), Route::NotFound);
    }

    #[test]
    fn test_unmatched_paths_redirect_to_not_found() {
        assert_eq!(Route::parse("/admin"), Route::NotFound);
        assert_eq!(Route::parse("/results"), Route::NotFound);
        assert_eq!(Route::parse("/results/7/extra"), Route::NotFound);

        assert_eq!(Route::redirect_for("/admin"), Some(Route::NotFound));
        assert_eq!(Route::redirect_for("/404"), None);
        assert_eq!(Route::redirect_for("/results/3"), None);
    }

    #[test]
    fn test_query_string_ignored() {
        assert_eq!(Route::parse("/results/12?tab=1"), Route::Results("12".to_string()));
        assert_eq!(Route::parse("/?lang=ar"), Route::Login);
    }

    #[test]
    fn test_student_id_parsing() {
        assert_eq!(RouteStudentId::parse("7"), RouteStudentId::Parsed(7));
        assert_eq!(RouteStudentId::parse("-3"), RouteStudentId::Parsed(-3));

        let malformed = RouteStudentId::parse("abc");
        assert!(malformed.is_malformed());
        assert_eq!(malformed.value(), 0);

        assert_eq!(RouteStudentId::parse("12abc"), RouteStudentId::Parsed(12));
        assert_eq!(RouteStudentId::parse("7.0"), RouteStudentId::Parsed(7));
        assert_eq!(RouteStudentId::parse("  +5"), RouteStudentId::Parsed(5));
        assert!(RouteStudentId::parse("").is_malformed());
        assert!(RouteStudentId::parse("-").is_malformed());
        assert!(RouteStudentId::parse("x7").is_malformed());
        assert!(RouteStudentId::parse("99999999999999999999").is_malformed());
    }

    #[test]
    fn test_patterns_match_paths() {
        assert_eq!(Route::Login.pattern(), Route::Login.path());
        assert_eq!(Route::NotFound.pattern(), Route::NotFound.path());

        let concrete = Route::RESULTS_PATTERN.replace(&format!(":{}", STUDENT_ID_PARAM), "7");
        assert_eq!(Route::parse(&concrete), Route::results(7));
        assert_eq!(Route::results(7).pattern(), Route::RESULTS_PATTERN);
    }

    #[test]
    fn test_path_round_trip() {
        assert_eq!(Route::results(7).path(), "/results/7");
        assert_eq!(Route::Login.to_string(), "/");
        assert_eq!(Route::NotFound.path(), "/404");
        assert_eq!(
            Route::parse("/results/7").student_id(),
            Some(RouteStudentId::Parsed(7))
        );
        assert_eq!(Route::Login.student_id(), None);
    }
}
