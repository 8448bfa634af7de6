//! Advisory notices shown to the user on the current or next rendered page.
//!
//! Notices produced while handling the request that renders them are passed
//! straight to the template. Notices that must survive a redirect (e.g. the
//! success message after a form POST) ride in a short-lived JSON cookie and
//! are taken, and cleared, by the next page render.

use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

const FLASH_COOKIE: &str = "coophome_flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Success,
}

impl Severity {
    /// CSS class suffix used by the templates.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Success => "success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub severity: Severity,
    pub text: String,
    /// When true the text contains trusted HTML and is rendered unescaped.
    pub safe: bool,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Notice { severity: Severity::Info, text: text.into(), safe: false }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Notice { severity: Severity::Warning, text: text.into(), safe: false }
    }

    pub fn warning_html(text: impl Into<String>) -> Self {
        Notice { severity: Severity::Warning, text: text.into(), safe: true }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Notice { severity: Severity::Success, text: text.into(), safe: false }
    }
}

/// Append a notice to the flash cookie, preserving any already queued.
pub fn flash(jar: CookieJar, notice: Notice) -> CookieJar {
    let mut queued = peek_flash(&jar);
    queued.push(notice);
    let value = serde_json::to_string(&queued).unwrap_or_default();
    let cookie = Cookie::build((FLASH_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

/// Drain the flash cookie, returning the jar with the cookie cleared.
pub fn take_flash(jar: CookieJar) -> (CookieJar, Vec<Notice>) {
    let queued = peek_flash(&jar);
    if queued.is_empty() {
        return (jar, queued);
    }
    let removal = Cookie::build((FLASH_COOKIE, ""))
        .path("/")
        .max_age(time::Duration::ZERO)
        .build();
    (jar.add(removal), queued)
}

fn peek_flash(jar: &CookieJar) -> Vec<Notice> {
    jar.get(FLASH_COOKIE)
        .and_then(|c| serde_json::from_str(c.value()).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_roundtrip_preserves_order() {
        let jar = CookieJar::new();
        let jar = flash(jar, Notice::success("WG membership updated successfully."));
        let jar = flash(jar, Notice::info("second"));

        let (_, notices) = take_flash(jar);
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].severity, Severity::Success);
        assert_eq!(notices[1].text, "second");
    }

    #[test]
    fn take_flash_on_empty_jar_is_empty() {
        let (_, notices) = take_flash(CookieJar::new());
        assert!(notices.is_empty());
    }
}
