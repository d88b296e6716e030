// src/domain/services/template.rs
/*
Message Template Rendering

Pure token substitution for notification subjects and bodies. The token
grammar is fixed: a known set of literal placeholders, replaced by plain
string substitution. This is deliberately not a template engine — hosts store
these templates as opaque option values and expect unknown text, including
braces, to pass through verbatim.
*/

use chrono::{DateTime, Utc};

use crate::domain::entities::{DeviceInfo, User};

/// Body used when neither the caller nor the settings supply one.
pub const DEFAULT_BODY_TEMPLATE: &str = "Hi, {display_name} [{user_login}],
Your account on {homeurl} was logged into at {time},
from a {os} machine running {browser}.
The IP address was {ip},{country}{flag}.
You are receiving this email to make sure it was you.
To review activity on your account visit {profile_url} or login to your admin on {homeurl} and navigate to your profile.
";

/// Subject used when neither the caller nor the settings supply one.
pub const DEFAULT_SUBJECT_TEMPLATE: &str = "Successful login for {user_login}";

/// Concrete values for the non-user tokens, assembled by the caller for one
/// render pass.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub home_url: String,
    pub profile_url: String,
    /// Current server time, already formatted for display.
    pub time: String,
    pub device: DeviceInfo,
    /// Empty unless a geolocation service resolved the current IP.
    pub country: String,
    /// Empty unless a geolocation service resolved the current IP.
    pub flag: String,
}

/// Fill placeholder tokens in `template` from the user and context.
///
/// Literal string replacement, order-independent, one pass per token.
/// Unknown tokens are left verbatim. An empty template renders to the empty
/// string; without a user the template is returned unchanged.
pub fn render(template: &str, user: Option<&User>, ctx: &RenderContext) -> String {
    if template.is_empty() {
        return String::new();
    }
    let user = match user {
        Some(user) => user,
        None => return template.to_string(),
    };

    template
        .replace("{user_login}", &user.login)
        .replace("{display_name}", &user.display_name)
        .replace("{homeurl}", &ctx.home_url)
        .replace("{time}", &ctx.time)
        .replace("{ip}", &ctx.device.ip)
        .replace("{browser}", &ctx.device.browser)
        .replace("{os}", &ctx.device.os)
        .replace("{profile_url}", &ctx.profile_url)
        .replace("{country}", &ctx.country)
        .replace("{flag}", &ctx.flag)
}

/// Format a timestamp with the host's configured date and time display
/// formats, joined as `<date> @ <time>`.
pub fn format_host_time(
    timestamp: DateTime<Utc>,
    date_format: &str,
    time_format: &str,
) -> String {
    format!(
        "{} @ {}",
        timestamp.format(date_format),
        timestamp.format(time_format)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Email;
    use chrono::TimeZone;

    fn test_user() -> User {
        User::new(
            "alice".to_string(),
            "Alice Example".to_string(),
            Email::new("alice@example.com".to_string()).unwrap(),
            vec!["editor".to_string()],
        )
    }

    fn test_ctx() -> RenderContext {
        RenderContext {
            home_url: "https://example.com".to_string(),
            profile_url: "https://example.com/profile".to_string(),
            time: "March 1, 2024 @ 3:45 pm".to_string(),
            device: DeviceInfo {
                ip: "1.2.3.4".to_string(),
                browser: "Firefox".to_string(),
                os: "Linux".to_string(),
            },
            country: String::new(),
            flag: String::new(),
        }
    }

    #[test]
    fn test_replaces_every_occurrence_of_a_token() {
        let out = render("{user_login} and again {user_login}", Some(&test_user()), &test_ctx());
        assert_eq!(out, "alice and again alice");
    }

    #[test]
    fn test_unknown_tokens_left_verbatim() {
        let out = render("{user_login} {mystery} {os}", Some(&test_user()), &test_ctx());
        assert_eq!(out, "alice {mystery} Linux");
    }

    #[test]
    fn test_empty_template_renders_empty() {
        assert_eq!(render("", Some(&test_user()), &test_ctx()), "");
    }

    #[test]
    fn test_missing_user_returns_template_unchanged() {
        let template = "Hello {user_login} from {ip}";
        assert_eq!(render(template, None, &test_ctx()), template);
    }

    #[test]
    fn test_geo_tokens_default_to_empty() {
        let out = render("ip {ip},{country}{flag}.", Some(&test_user()), &test_ctx());
        assert_eq!(out, "ip 1.2.3.4,.");
    }

    #[test]
    fn test_geo_tokens_filled_when_present() {
        let mut ctx = test_ctx();
        ctx.country = " Iceland".to_string();
        ctx.flag = " \u{1F1EE}\u{1F1F8}".to_string();
        let out = render("{country}{flag}", Some(&test_user()), &ctx);
        assert_eq!(out, " Iceland \u{1F1EE}\u{1F1F8}");
    }

    #[test]
    fn test_default_body_renders_clean() {
        let out = render(DEFAULT_BODY_TEMPLATE, Some(&test_user()), &test_ctx());
        assert!(out.contains("Alice Example [alice]"));
        assert!(out.contains("from a Linux machine running Firefox"));
        assert!(!out.contains('{'));
    }

    #[test]
    fn test_format_host_time() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 15, 45, 0).unwrap();
        assert_eq!(
            format_host_time(ts, "%B %-d, %Y", "%-I:%M %P"),
            "March 1, 2024 @ 3:45 pm"
        );
    }
}
