/*
Pattern Device Parser

Default implementation of the device parser port: a small ordered pattern
list that classifies the common browser and OS families. Order matters on
both lists — Chromium-family strings embed "Safari", Edge embeds "Chrome",
Android embeds "Linux", and iOS devices claim "like Mac OS X" — so the more
specific patterns sit first.

Hosts that ship a full user-agent database can implement the port with that
instead; the notification and table flows only need family names.
*/

use regex::Regex;

use crate::application::ports::output::DeviceParserPort;
use crate::domain::entities::ParsedDevice;

const UNKNOWN: &str = "Unknown";

pub struct PatternDeviceParser {
    browser_patterns: Vec<(Regex, &'static str)>,
    os_patterns: Vec<(Regex, &'static str)>,
}

impl PatternDeviceParser {
    pub fn new() -> Self {
        let browser_patterns = vec![
            (Regex::new(r"Edg(e|A|iOS)?/").unwrap(), "Microsoft Edge"),
            (Regex::new(r"OPR/|Opera").unwrap(), "Opera"),
            (Regex::new(r"MSIE |Trident/").unwrap(), "Internet Explorer"),
            (Regex::new(r"Firefox/|FxiOS/").unwrap(), "Firefox"),
            (Regex::new(r"Chrome/|CriOS/").unwrap(), "Chrome"),
            (Regex::new(r"Safari/").unwrap(), "Safari"),
        ];
        let os_patterns = vec![
            (Regex::new(r"Windows").unwrap(), "Windows"),
            (Regex::new(r"Android").unwrap(), "Android"),
            (Regex::new(r"iPhone|iPad|iPod").unwrap(), "iOS"),
            (Regex::new(r"Mac OS X|Macintosh").unwrap(), "macOS"),
            (Regex::new(r"Linux|X11").unwrap(), "Linux"),
        ];

        Self {
            browser_patterns,
            os_patterns,
        }
    }

    fn first_match(patterns: &[(Regex, &'static str)], user_agent: &str) -> String {
        patterns
            .iter()
            .find(|(pattern, _)| pattern.is_match(user_agent))
            .map(|(_, name)| (*name).to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }
}

impl Default for PatternDeviceParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceParserPort for PatternDeviceParser {
    fn parse(&self, user_agent: &str) -> ParsedDevice {
        ParsedDevice {
            browser: Self::first_match(&self.browser_patterns, user_agent),
            os: Self::first_match(&self.os_patterns, user_agent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIREFOX_LINUX: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";
    const CHROME_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    const EDGE_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0";
    const SAFARI_IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_6 like Mac OS X) \
         AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1";
    const CHROME_ANDROID: &str = "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/119.0.6045.163 Mobile Safari/537.36";

    fn parse(ua: &str) -> ParsedDevice {
        PatternDeviceParser::new().parse(ua)
    }

    #[test]
    fn test_firefox_on_linux() {
        let device = parse(FIREFOX_LINUX);
        assert_eq!(device.browser, "Firefox");
        assert_eq!(device.os, "Linux");
    }

    #[test]
    fn test_chrome_on_windows() {
        let device = parse(CHROME_WINDOWS);
        assert_eq!(device.browser, "Chrome");
        assert_eq!(device.os, "Windows");
    }

    #[test]
    fn test_edge_wins_over_embedded_chrome() {
        let device = parse(EDGE_WINDOWS);
        assert_eq!(device.browser, "Microsoft Edge");
        assert_eq!(device.os, "Windows");
    }

    #[test]
    fn test_iphone_safari_is_ios_not_macos() {
        let device = parse(SAFARI_IPHONE);
        assert_eq!(device.browser, "Safari");
        assert_eq!(device.os, "iOS");
    }

    #[test]
    fn test_android_wins_over_embedded_linux() {
        let device = parse(CHROME_ANDROID);
        assert_eq!(device.browser, "Chrome");
        assert_eq!(device.os, "Android");
    }

    #[test]
    fn test_unrecognized_agent_is_unknown() {
        let device = parse("curl/8.4.0");
        assert_eq!(device.browser, "Unknown");
        assert_eq!(device.os, "Unknown");
    }

    #[test]
    fn test_empty_agent_is_unknown() {
        let device = parse("");
        assert_eq!(device.browser, "Unknown");
        assert_eq!(device.os, "Unknown");
    }
}
