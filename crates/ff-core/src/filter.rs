//! Visitor filtering policy: decide before the first byte leaves the page.

/// Reserved identifier the service returns when it classified the visit as
/// the operator's own. Records and actions carrying it are never updated.
pub const SELF_VISIT_ID: &str = "88888888-8888-8888-8888-888888888888";

const BOT_MARKERS: [&str; 4] = ["bot", "crawler", "spider", "crawling"];

/// True for origins that never leave the developer's machine.
pub fn is_localhost(hostname: &str) -> bool {
    matches!(hostname, "" | "localhost" | "127.0.0.1" | "::1")
}

/// Case-insensitive scan for the usual crawler markers.
pub fn is_bot(user_agent: &str) -> bool {
    let user_agent = user_agent.to_ascii_lowercase();
    BOT_MARKERS.iter().any(|marker| user_agent.contains(marker))
}

/// Whether the service flagged this id as an operator self-visit.
pub fn is_self_visit(id: &str) -> bool {
    id == SELF_VISIT_ID
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localhost_matches_exactly_four_values() {
        for hostname in ["", "localhost", "127.0.0.1", "::1"] {
            assert!(is_localhost(hostname), "{hostname:?} should match");
        }
        for hostname in ["example.com", "localhost.example.com", "127.0.0.2", "::2"] {
            assert!(!is_localhost(hostname), "{hostname:?} should not match");
        }
    }

    #[test]
    fn bot_markers_match_case_insensitively() {
        assert!(is_bot("Googlebot/2.1 (+http://www.google.com/bot.html)"));
        assert!(is_bot("some-CRAWLER/1.0"));
        assert!(is_bot("Mozilla/5.0 (compatible; Spider)"));
        assert!(is_bot("crawling agent"));
        assert!(!is_bot("Mozilla/5.0 (X11; Linux x86_64)"));
        assert!(!is_bot(""));
    }

    #[test]
    fn self_visit_is_exact_equality() {
        assert!(is_self_visit("88888888-8888-8888-8888-888888888888"));
        assert!(!is_self_visit("88888888-8888-8888-8888-888888888889"));
        assert!(!is_self_visit(""));
    }
}
