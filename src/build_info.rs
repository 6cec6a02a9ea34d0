use chrono::{DateTime, Datelike, Utc};

/// RFC 3339 timestamp stamped by the build script.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn build_time() -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

pub fn build_year() -> Option<i32> {
    build_time().map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_time_parses() {
        let year = build_year().expect("build script should stamp an RFC 3339 time");
        assert!(year >= 2024);
    }
}
