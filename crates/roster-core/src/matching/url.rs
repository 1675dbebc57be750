//! URL pattern matching with path parameters.

use regex::Regex;
use std::collections::HashMap;

/// Compiled URL pattern such as `/api/employees/{id}`.
#[derive(Debug, Clone)]
pub struct UrlPattern {
    pattern: String,
    regex: Regex,
    param_names: Vec<String>,
}

impl UrlPattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let pattern = normalize_url(pattern);
        let (regex, param_names) = pattern_to_regex(&pattern)?;
        Ok(Self {
            pattern,
            regex,
            param_names,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Match a request URL, returning percent-decoded path parameters.
    ///
    /// The query string and a trailing slash are ignored.
    pub fn captures(&self, url: &str) -> Option<HashMap<String, String>> {
        let url = normalize_url(url);
        let caps = self.regex.captures(&url)?;

        let params = self
            .param_names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| {
                caps.get(i + 1).map(|m| {
                    let value = urlencoding::decode(m.as_str())
                        .map(|v| v.into_owned())
                        .unwrap_or_else(|_| m.as_str().to_owned());
                    (name.clone(), value)
                })
            })
            .collect();

        Some(params)
    }

    pub fn matches(&self, url: &str) -> bool {
        self.captures(url).is_some()
    }
}

impl PartialEq for UrlPattern {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for UrlPattern {}

fn normalize_url(url: &str) -> String {
    let without_query = url.split('?').next().unwrap_or("");
    let trimmed = without_query.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".into()
    } else {
        trimmed.into()
    }
}

fn pattern_to_regex(pattern: &str) -> Result<(Regex, Vec<String>), regex::Error> {
    let mut param_names = Vec::new();
    let mut regex_str = String::new();
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        if c == '{' {
            let name: String = chars.by_ref().take_while(|&c| c != '}').collect();
            param_names.push(name);
            regex_str.push_str("([^/]+)");
        } else {
            regex_str.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
        }
    }

    let regex = Regex::new(&format!("^{regex_str}/?$"))?;
    Ok((regex, param_names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/api/employees", "/api/employees", true, &[])]
    #[case("/api/employees", "/api/employees/", true, &[])]
    #[case("/api/employees/{id}", "/api/employees/3", true, &[("id", "3")])]
    #[case("/api/employees/{id}", "/api/employees/1700000000000", true, &[("id", "1700000000000")])]
    #[case("/api/employees/{id}", "/api/employees/a%20b", true, &[("id", "a b")])]
    #[case("/api/employees/{id}", "/api/employees/7?verbose=1", true, &[("id", "7")])]
    #[case("/api/employees", "/api/departments", false, &[])]
    #[case("/api/employees/{id}", "/api/employees", false, &[])]
    #[case("/api/employees/{id}", "/api/employees/1/extra", false, &[])]
    #[case("/", "/", true, &[])]
    #[case("/api/employees", "/api/employees?page=1", true, &[])]
    #[case("/api/employees.json", "/api/employees.json", true, &[])]
    #[case("/api/employees.json", "/api/employeesXjson", false, &[])]
    fn test_url_pattern_captures(
        #[case] pattern: &str,
        #[case] url: &str,
        #[case] expected: bool,
        #[case] params: &[(&str, &str)],
    ) {
        let pattern = UrlPattern::new(pattern).expect("valid pattern");
        let result = pattern.captures(url);
        assert_eq!(result.is_some(), expected);
        if let Some(captured) = result {
            assert_eq!(captured.len(), params.len());
            for (k, v) in params {
                assert_eq!(captured.get(*k), Some(&(*v).to_owned()));
            }
        }
    }

    #[rstest]
    #[case("/api/employees/", "/api/employees")]
    #[case("/api/employees?x=1", "/api/employees")]
    fn test_url_pattern_normalizes_source(#[case] pattern: &str, #[case] expected: &str) {
        assert_eq!(UrlPattern::new(pattern).unwrap().as_str(), expected);
    }
}
