//! API endpoint URL builders
//!
//! Every builder tolerates a trailing `/` on the base URL.

fn join(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Build dataset list URL
pub fn datasets_url(base_url: &str) -> String {
    join(base_url, "/api/v1/datasets")
}

/// Build keyword search URL
pub fn search_url(base_url: &str) -> String {
    join(base_url, "/api/v1/datasets/search")
}

/// Build email filter URL
pub fn filter_by_email_url(base_url: &str) -> String {
    join(base_url, "/api/v1/datasets/filter-by-email")
}

/// Build unique owner emails URL
pub fn emails_url(base_url: &str) -> String {
    join(base_url, "/api/v1/datasets/emails")
}

/// Build unique dataset names URL
pub fn names_url(base_url: &str) -> String {
    join(base_url, "/api/v1/datasets/names")
}

/// Build health check URL
pub fn health_url(base_url: &str) -> String {
    join(base_url, "/api/health")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datasets_url() {
        assert_eq!(
            datasets_url("http://localhost:8001"),
            "http://localhost:8001/api/v1/datasets"
        );
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(
            search_url("http://localhost:8001/"),
            "http://localhost:8001/api/v1/datasets/search"
        );
    }

    #[test]
    fn test_filter_and_listing_urls() {
        let base = "https://datasets.example.org";
        assert_eq!(
            filter_by_email_url(base),
            "https://datasets.example.org/api/v1/datasets/filter-by-email"
        );
        assert_eq!(emails_url(base), "https://datasets.example.org/api/v1/datasets/emails");
        assert_eq!(names_url(base), "https://datasets.example.org/api/v1/datasets/names");
    }

    #[test]
    fn test_health_url() {
        assert_eq!(health_url("http://localhost:8001"), "http://localhost:8001/api/health");
    }
}
