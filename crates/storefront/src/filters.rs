//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns the content hash for main.css.
///
/// The hash is computed at build time from the CSS file content.
///
/// Usage in templates: `{{ ""|css_hash }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

/// Short badge text for a bank: the first three characters, uppercased.
///
/// Usage in templates: `{{ bank.short|badge }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn badge(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(badge_text(&value.to_string()))
}

fn badge_text(value: &str) -> String {
    value.chars().take(3).collect::<String>().to_uppercase()
}
