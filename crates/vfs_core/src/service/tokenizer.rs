//! Shell input splitting.
//!
//! Quoted segments become one argument. A quoted segment that contains a
//! space keeps double quotes around it so the name policy sees its quoted
//! form; otherwise the quotes are dropped.

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]*)"|'([^']*)'|\S+"#).expect("valid token regex"));

/// Splits one input line into arguments.
pub fn parse_input(line: &str) -> Vec<String> {
    TOKEN_RE
        .captures_iter(line)
        .map(|caps| match caps.get(1).or_else(|| caps.get(2)) {
            Some(quoted) => {
                let interior = quoted.as_str().trim();
                if interior.contains(' ') {
                    format!("\"{interior}\"")
                } else {
                    interior.to_string()
                }
            }
            None => caps[0].to_string(),
        })
        .collect()
}
