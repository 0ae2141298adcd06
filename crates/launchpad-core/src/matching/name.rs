//! Feature name normalization (`basicProfile` -> `BASIC_PROFILE`).

/// Convert a free-form feature name into a canonical registry key.
///
/// A `_` is inserted where an uppercase run starts after a lowercase letter or
/// digit; `-`, `_` and whitespace collapse into a single `_`; the result is
/// upper-cased with leading and trailing separators removed. Canonical keys
/// map to themselves.
pub fn normalize_feature_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;

    for c in name.trim().chars() {
        if c == '-' || c == '_' || c.is_whitespace() {
            if !out.ends_with('_') {
                out.push('_');
            }
        } else {
            let starts_run = c.is_uppercase()
                && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
            if starts_run && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_uppercase());
        }
        prev = Some(c);
    }

    out.trim_matches('_').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("homePage", "HOME_PAGE")]
    #[case("HomePage", "HOME_PAGE")]
    #[case("basicProfile", "BASIC_PROFILE")]
    #[case("goalSelect", "GOAL_SELECT")]
    #[case("trackerSelection", "TRACKER_SELECTION")]
    #[case("activityTracker", "ACTIVITY_TRACKER")]
    #[case("userProgress", "USER_PROGRESS")]
    #[case("hra", "HRA")]
    #[case("HRA", "HRA")]
    #[case("onboarding", "ONBOARDING")]
    #[case("basic-profile", "BASIC_PROFILE")]
    #[case("basic profile", "BASIC_PROFILE")]
    #[case("basic_Profile", "BASIC_PROFILE")]
    #[case("  search  ", "SEARCH")]
    #[case("_leading", "LEADING")]
    #[case("step2Data", "STEP2_DATA")]
    #[case("", "")]
    fn test_normalize_feature_name(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_feature_name(input), expected);
    }

    #[rstest]
    #[case("BASIC_PROFILE")]
    #[case("HOME_PAGE")]
    #[case("HRA")]
    #[case("TRACKER_SELECTION")]
    #[case("NAVIGATION")]
    fn test_normalize_is_idempotent_on_canonical_keys(#[case] key: &str) {
        assert_eq!(normalize_feature_name(key), key);
        assert_eq!(normalize_feature_name(&normalize_feature_name(key)), key);
    }
}
