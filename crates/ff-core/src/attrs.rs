//! Attribute assembly from the environment probe.

use ff_types::ports::env::VisitEnvironment;
use ff_types::Attributes;
use serde_json::Value;

const DEFAULT_KEYS: [&str; 2] = ["siteLocation", "siteReferrer"];

const DETAILED_KEYS: [&str; 12] = [
    "siteLanguage",
    "screenWidth",
    "screenHeight",
    "screenColorDepth",
    "deviceName",
    "deviceManufacturer",
    "osName",
    "osVersion",
    "browserName",
    "browserVersion",
    "browserWidth",
    "browserHeight",
];

/// Gathers visit attributes from the environment. Empty strings, nulls and
/// absent values are skipped so the payload only carries what the page
/// actually knows. `detailed` adds the device/screen/browser fields.
pub fn attributes(env: &dyn VisitEnvironment, detailed: bool) -> Attributes {
    let mut out = Attributes::new();
    collect_into(&mut out, env, &DEFAULT_KEYS);
    if detailed {
        collect_into(&mut out, env, &DETAILED_KEYS);
    }
    out
}

fn collect_into(out: &mut Attributes, env: &dyn VisitEnvironment, keys: &[&str]) {
    for key in keys {
        match env.page_value(key) {
            Some(Value::String(s)) if s.is_empty() => {}
            Some(Value::Null) | None => {}
            Some(value) => {
                out.insert((*key).to_owned(), value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ff_test_utils::StaticEnvironment;
    use serde_json::json;

    fn env() -> StaticEnvironment {
        StaticEnvironment::new("site.example.com")
            .with_value("siteLocation", json!("https://site.example.com/a"))
            .with_value("siteReferrer", json!(""))
            .with_value("screenWidth", json!(1920))
            .with_value("browserName", json!("Firefox"))
            .with_value("deviceName", json!(null))
    }

    #[test]
    fn default_set_skips_empty_values() {
        let attrs = attributes(&env(), false);
        assert_eq!(attrs.get("siteLocation"), Some(&json!("https://site.example.com/a")));
        assert!(!attrs.contains_key("siteReferrer"));
        assert!(!attrs.contains_key("screenWidth"));
    }

    #[test]
    fn detailed_set_adds_device_fields_but_never_nulls() {
        let attrs = attributes(&env(), true);
        assert_eq!(attrs.get("screenWidth"), Some(&json!(1920)));
        assert_eq!(attrs.get("browserName"), Some(&json!("Firefox")));
        assert!(!attrs.contains_key("deviceName"));
        assert!(!attrs.contains_key("osName"));
    }
}
