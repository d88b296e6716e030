/*
Integration Test for the Login Notification Flow

This test exercises the complete notification path with real adapters where
possible:
- Settings loaded from the host's stored option values
- Decision policy (role allow-list, repeat-session suppression, hooks)
- Template resolution and token rendering
- Envelope assembly and hand-off to the mail transport

The mail transport is the crate's recording adapter and the session store is
a fixed in-memory fake; the device parser is the real pattern parser.
*/

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use login_sentry::application::ports::output::{
    NotifyDecision, SessionStoreError, SessionStorePort, SuppressReason,
};
use login_sentry::application::service::{DeliveryOutcome, LoginNotifier, LoginRequest};
use login_sentry::config::{NotifySettings, RepeatPolicy};
use login_sentry::domain::entities::{Email, Session, User};
use login_sentry::infrastructure::adapters::device::PatternDeviceParser;
use login_sentry::infrastructure::adapters::notifications::{
    RecordingAdapterConfig, RecordingMailAdapter,
};

const FIREFOX_LINUX: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct FixedSessionStore {
    sessions: Vec<Session>,
}

#[async_trait]
impl SessionStorePort for FixedSessionStore {
    async fn list_sessions(&self, _user_id: Uuid) -> Result<Vec<Session>, SessionStoreError> {
        Ok(self.sessions.clone())
    }
}

fn test_user() -> User {
    User::new(
        "alice".to_string(),
        "Alice Example".to_string(),
        Email::new("alice@example.com".to_string()).unwrap(),
        vec!["editor".to_string()],
    )
}

fn notifier(
    settings: NotifySettings,
    sessions: Vec<Session>,
    transport: Arc<RecordingMailAdapter>,
) -> LoginNotifier {
    LoginNotifier::new(
        settings,
        Arc::new(FixedSessionStore { sessions }),
        Arc::new(PatternDeviceParser::new()),
        transport,
    )
}

/// Repeat-session suppression, end to end: same stored option value the host
/// persists ("2"), one existing session, matching vs. non-matching request.
#[tokio::test]
async fn test_repeat_suppression_end_to_end() {
    init_logs();

    let settings: NotifySettings =
        serde_yaml::from_str("notify_repeat: \"2\"").unwrap();
    assert_eq!(settings.notify_repeat, RepeatPolicy::SkipKnownDevice);

    let existing = Session::new(
        "9.9.9.9".to_string(),
        "UA-1".to_string(),
        Utc::now() - Duration::hours(1),
        Utc::now() + Duration::hours(47),
    );

    let transport = Arc::new(RecordingMailAdapter::new(RecordingAdapterConfig::default()));
    let notifier = notifier(settings, vec![existing], transport.clone());
    let user = test_user();

    // Same IP and user-agent as the stored session: suppressed, no mail.
    let receipt = notifier
        .notify_login(&user, &LoginRequest::new("9.9.9.9".to_string(), "UA-1".to_string()))
        .await;
    assert_eq!(
        receipt.decision,
        NotifyDecision::Suppress(SuppressReason::RepeatSession)
    );
    assert_eq!(receipt.delivery, DeliveryOutcome::Skipped);
    assert!(transport.sent().unwrap().is_empty());

    // New IP, same user-agent: notified.
    let receipt = notifier
        .notify_login(&user, &LoginRequest::new("8.8.8.8".to_string(), "UA-1".to_string()))
        .await;
    assert_eq!(receipt.decision, NotifyDecision::Send);
    assert_eq!(receipt.delivery, DeliveryOutcome::Accepted);
    assert_eq!(transport.sent().unwrap().len(), 1);
}

#[tokio::test]
async fn test_notification_email_content_end_to_end() {
    init_logs();

    let settings = NotifySettings {
        site_name: "Acme CMS".to_string(),
        home_url: "https://acme.example".to_string(),
        cc_addresses: Some("security@acme.example".to_string()),
        ..NotifySettings::default()
    };

    let transport = Arc::new(RecordingMailAdapter::new(RecordingAdapterConfig::default()));
    let notifier = notifier(settings, vec![], transport.clone());

    let receipt = notifier
        .notify_login(
            &test_user(),
            &LoginRequest::new("1.2.3.4".to_string(), FIREFOX_LINUX.to_string()),
        )
        .await;
    assert!(receipt.was_sent());

    let sent = transport.sent().unwrap();
    assert_eq!(sent.len(), 1);

    let envelope = &sent[0];
    assert_eq!(envelope.to, "alice@example.com");
    assert_eq!(envelope.subject, "[Acme CMS] Successful login for alice");
    assert_eq!(envelope.cc_addresses(), vec!["security@acme.example"]);
    assert!(envelope.message.contains("Hi, Alice Example [alice]"));
    assert!(envelope.message.contains("Your account on https://acme.example"));
    assert!(envelope.message.contains("from a Linux machine running Firefox"));
    assert!(envelope.message.contains("The IP address was 1.2.3.4"));
    // No stray tokens survive rendering of the default template.
    assert!(!envelope.message.contains('{'));
}

#[tokio::test]
async fn test_role_allow_list_end_to_end() {
    let settings = NotifySettings {
        notify_roles: Some(vec!["administrator".to_string()]),
        ..NotifySettings::default()
    };
    let transport = Arc::new(RecordingMailAdapter::new(RecordingAdapterConfig::default()));
    let notifier = notifier(settings, vec![], transport.clone());

    // An editor is filtered out.
    let receipt = notifier
        .notify_login(
            &test_user(),
            &LoginRequest::new("1.2.3.4".to_string(), FIREFOX_LINUX.to_string()),
        )
        .await;
    assert_eq!(
        receipt.decision,
        NotifyDecision::Suppress(SuppressReason::RoleFiltered)
    );

    // A super admin is always notified.
    let mut admin = test_user();
    admin.is_super_admin = true;
    let receipt = notifier
        .notify_login(
            &admin,
            &LoginRequest::new("1.2.3.4".to_string(), FIREFOX_LINUX.to_string()),
        )
        .await;
    assert!(receipt.was_sent());
    assert_eq!(transport.sent().unwrap().len(), 1);
}

#[tokio::test]
async fn test_settings_template_override_end_to_end() {
    let settings = NotifySettings {
        site_name: "Acme CMS".to_string(),
        email_subject: Some("New login from {ip}".to_string()),
        email_body: Some("{display_name} logged in with {browser} on {os}.".to_string()),
        ..NotifySettings::default()
    };
    let transport = Arc::new(RecordingMailAdapter::new(RecordingAdapterConfig::default()));
    let notifier = notifier(settings, vec![], transport.clone());

    notifier
        .notify_login(
            &test_user(),
            &LoginRequest::new("1.2.3.4".to_string(), FIREFOX_LINUX.to_string()),
        )
        .await;

    let sent = transport.sent().unwrap();
    assert_eq!(sent[0].subject, "[Acme CMS] New login from 1.2.3.4");
    assert_eq!(
        sent[0].message,
        "Alice Example logged in with Firefox on Linux."
    );
}
