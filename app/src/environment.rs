//! Process-environment probe backing the `VisitEnvironment` port.
//!
//! A headless agent has no document or navigator to ask, so the page
//! context comes from `FF_PAGE_*` variables set by the embedding process:
//! `FF_PAGE_HOSTNAME`, `FF_PAGE_USER_AGENT`, `FF_PAGE_HIDDEN`, and one
//! variable per attribute key (`siteLocation` -> `FF_PAGE_SITE_LOCATION`).

use ff_types::ports::env::VisitEnvironment;
use serde_json::Value;

pub struct ProcessEnvironment;

fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// `siteLocation` -> `SITE_LOCATION`.
fn screaming_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() && !out.is_empty() {
            out.push('_');
        }
        out.push(ch.to_ascii_uppercase());
    }
    out
}

impl VisitEnvironment for ProcessEnvironment {
    fn hostname(&self) -> String {
        var("FF_PAGE_HOSTNAME").unwrap_or_default()
    }

    fn user_agent(&self) -> String {
        var("FF_PAGE_USER_AGENT").unwrap_or_default()
    }

    fn tab_hidden(&self) -> bool {
        matches!(
            std::env::var("FF_PAGE_HIDDEN").as_deref(),
            Ok("1") | Ok("true")
        )
    }

    fn page_value(&self, key: &str) -> Option<Value> {
        let raw = var(&format!("FF_PAGE_{}", screaming_snake(key)))?;
        // Numeric attributes (screen sizes, color depth) stay numbers.
        if let Ok(number) = raw.parse::<i64>() {
            return Some(number.into());
        }
        Some(raw.into())
    }
}
