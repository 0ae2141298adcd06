//! Path template placeholders, substitution, and matching.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([A-Za-z0-9_]+)").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateMatch {
    pub matched: bool,
    pub params: HashMap<String, String>,
}

/// Placeholder names in template order.
pub fn placeholders(template: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(template)
        .map(|caps| caps[1].to_owned())
        .collect()
}

/// Replace the first placeholder token with `value`.
///
/// Later placeholders are left untouched; a template without placeholders is
/// returned unchanged.
pub fn substitute_first(template: &str, value: &str) -> String {
    match PLACEHOLDER.find(template) {
        Some(m) => {
            let mut out = String::with_capacity(template.len() + value.len());
            out.push_str(&template[..m.start()]);
            out.push_str(value);
            out.push_str(&template[m.end()..]);
            out
        }
        None => template.to_owned(),
    }
}

/// Replace every placeholder with its value from `params`.
///
/// Returns `None` when a placeholder has no value.
pub fn substitute_all(template: &str, params: &HashMap<String, String>) -> Option<String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for caps in PLACEHOLDER.captures_iter(template) {
        let whole = caps.get(0)?;
        let value = params.get(&caps[1])?;
        out.push_str(&template[last..whole.start()]);
        out.push_str(value);
        last = whole.end();
    }
    out.push_str(&template[last..]);
    Some(out)
}

/// Match a concrete path against a template, capturing placeholder values.
pub fn template_matches(template: &str, path: &str) -> TemplateMatch {
    let template = normalize_path(template);
    let path = normalize_path(path);

    let (regex, param_names) = template_to_regex(&template);

    let Some(caps) = regex.captures(&path) else {
        return TemplateMatch::default();
    };

    let params = param_names
        .into_iter()
        .enumerate()
        .filter_map(|(i, name)| caps.get(i + 1).map(|m| (name, m.as_str().to_owned())))
        .collect();

    TemplateMatch {
        matched: true,
        params,
    }
}

fn normalize_path(path: &str) -> String {
    let without_query = path.split('?').next().unwrap_or("");
    let trimmed = without_query.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".into()
    } else {
        trimmed.into()
    }
}

fn template_to_regex(template: &str) -> (Regex, Vec<String>) {
    let mut param_names = Vec::new();
    let mut regex_str = String::new();
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let Some(whole) = caps.get(0) else { continue };
        regex_str.push_str(&regex::escape(&template[last..whole.start()]));
        regex_str.push_str("([^/]+)");
        param_names.push(caps[1].to_owned());
        last = whole.end();
    }
    regex_str.push_str(&regex::escape(&template[last..]));

    let regex = Regex::new(&format!("^{regex_str}/?$")).expect("escaped template is a valid regex");
    (regex, param_names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/api/v1/home", &[])]
    #[case("/api/v1/hra/:step", &["step"])]
    #[case("/api/v1/onboarding/:step/save", &["step"])]
    #[case("/api/v1/users/:userId/posts/:post_id", &["userId", "post_id"])]
    fn test_placeholders(#[case] template: &str, #[case] expected: &[&str]) {
        assert_eq!(placeholders(template), expected);
    }

    #[rstest]
    #[case("/api/v1/hra/:step", "3", "/api/v1/hra/3")]
    #[case("/api/v1/goals/:step/save", "1", "/api/v1/goals/1/save")]
    #[case("/api/v1/home", "7", "/api/v1/home")]
    #[case("/api/v1/a/:x/b/:y", "1", "/api/v1/a/1/b/:y")]
    #[case("/api/v1/a/:x/b/:x", "1", "/api/v1/a/1/b/:x")]
    #[case("/api/v1/hra/:step", "", "/api/v1/hra/")]
    fn test_substitute_first(#[case] template: &str, #[case] value: &str, #[case] expected: &str) {
        assert_eq!(substitute_first(template, value), expected);
    }

    #[rstest]
    fn test_substitute_all() {
        let params: HashMap<String, String> = [("x", "1"), ("y", "2")]
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        assert_eq!(
            substitute_all("/a/:x/b/:y", &params).as_deref(),
            Some("/a/1/b/2")
        );
        assert_eq!(substitute_all("/a/:z", &params), None);
        assert_eq!(substitute_all("/plain", &params).as_deref(), Some("/plain"));
    }

    #[rstest]
    #[case("/api/v1/home", "/api/v1/home", true, &[])]
    #[case("/api/v1/home", "/api/v1/home/", true, &[])]
    #[case("/api/v1/home", "/api/v1/home?x=1", true, &[])]
    #[case("/api/v1/hra/:step", "/api/v1/hra/2", true, &[("step", "2")])]
    #[case("/api/v1/hra/:step", "/api/v1/hra/report", true, &[("step", "report")])]
    #[case("/api/v1/hra/:step/save", "/api/v1/hra/2/save", true, &[("step", "2")])]
    #[case("/api/v1/hra/:step", "/api/v1/hra", false, &[])]
    #[case("/api/v1/hra/:step", "/api/v1/hra/2/extra", false, &[])]
    #[case("/api/v1/search", "/api/v1/search/query", false, &[])]
    #[case("/api/v1/user.json", "/api/v1/userXjson", false, &[])]
    #[case("/", "/", true, &[])]
    fn test_template_matches(
        #[case] template: &str,
        #[case] path: &str,
        #[case] expected: bool,
        #[case] params: &[(&str, &str)],
    ) {
        let result = template_matches(template, path);
        assert_eq!(result.matched, expected);
        for (k, v) in params {
            assert_eq!(result.params.get(*k), Some(&(*v).to_owned()));
        }
    }
}
