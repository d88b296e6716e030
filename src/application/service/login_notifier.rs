/*
Login Notifier Application Service

Coordinates the post-login notification flow: evaluate the send/suppress
policy, compose and render the email, and hand it to the mail transport.
It depends on abstractions (ports) rather than concrete implementations,
so hosts wire in their own session store, parser, geolocation and transport.

The top-level entry point is infallible by contract: a login must never be
blocked or failed because of a notification problem. Delivery failures are
logged and recorded in the returned receipt, which keeps the decision
outcome and the delivery outcome separate.
*/

use std::sync::Arc;

use chrono::Utc;
use log::{info, warn};

use crate::application::ports::output::{
    DeviceParserPort, GeoLookupPort, HookRegistry, HookStage, MailTransportPort, NotifyDecision,
    SessionStorePort, SuppressReason,
};
use crate::config::{NotifySettings, RepeatPolicy};
use crate::domain::entities::{DeviceInfo, EmailEnvelope, User};
use crate::domain::services::{sessions, template};
use crate::domain::services::template::RenderContext;

/// The client fingerprint of the request that just authenticated.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub ip: String,
    pub user_agent: String,
}

impl LoginRequest {
    pub fn new(ip: String, user_agent: String) -> Self {
        Self { ip, user_agent }
    }
}

/// Caller-supplied subject/body, taking precedence over settings templates
/// and built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct ExplicitMessage {
    pub subject: Option<String>,
    pub body: Option<String>,
}

/// What happened to the composed email.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryOutcome {
    /// The transport accepted the message for delivery.
    Accepted,
    /// The transport refused the message; the failure was logged.
    Failed(String),
    /// Nothing was dispatched because the decision was to suppress.
    Skipped,
}

/// Result of one notification attempt. Always produced — the login flow
/// treats every attempt as successful regardless of delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct NotifyReceipt {
    pub decision: NotifyDecision,
    pub delivery: DeliveryOutcome,
}

impl NotifyReceipt {
    pub fn was_sent(&self) -> bool {
        self.delivery == DeliveryOutcome::Accepted
    }
}

pub struct LoginNotifier {
    settings: NotifySettings,
    session_store: Arc<dyn SessionStorePort>,
    device_parser: Arc<dyn DeviceParserPort>,
    mail_transport: Arc<dyn MailTransportPort>,
    geo_lookup: Option<Arc<dyn GeoLookupPort>>,
    hooks: HookRegistry,
}

impl LoginNotifier {
    pub fn new(
        settings: NotifySettings,
        session_store: Arc<dyn SessionStorePort>,
        device_parser: Arc<dyn DeviceParserPort>,
        mail_transport: Arc<dyn MailTransportPort>,
    ) -> Self {
        Self {
            settings,
            session_store,
            device_parser,
            mail_transport,
            geo_lookup: None,
            hooks: HookRegistry::new(),
        }
    }

    pub fn with_geo_lookup(mut self, geo_lookup: Arc<dyn GeoLookupPort>) -> Self {
        self.geo_lookup = Some(geo_lookup);
        self
    }

    pub fn with_hooks(mut self, hooks: HookRegistry) -> Self {
        self.hooks = hooks;
        self
    }

    /// Run the full post-login flow for an authenticated user.
    pub async fn notify_login(&self, user: &User, request: &LoginRequest) -> NotifyReceipt {
        self.notify_login_with(user, request, None).await
    }

    /// Same as [`notify_login`](Self::notify_login), with a caller-supplied
    /// message taking precedence over configured templates.
    pub async fn notify_login_with(
        &self,
        user: &User,
        request: &LoginRequest,
        explicit: Option<&ExplicitMessage>,
    ) -> NotifyReceipt {
        let decision = self.should_notify(user, request).await;
        if let NotifyDecision::Suppress(reason) = decision {
            info!("login notice for {} suppressed: {:?}", user.login, reason);
            return NotifyReceipt {
                decision,
                delivery: DeliveryOutcome::Skipped,
            };
        }

        let envelope = self.compose_envelope(user, request, explicit).await;
        let delivery = match self.mail_transport.send(&envelope).await {
            Ok(()) => {
                info!("login notice for {} sent to {}", user.login, envelope.to);
                DeliveryOutcome::Accepted
            }
            Err(e) => {
                warn!("login notice for {} was not sent: {}", user.login, e);
                DeliveryOutcome::Failed(e.to_string())
            }
        };

        NotifyReceipt { decision, delivery }
    }

    /// Evaluate the send/suppress policy for this login.
    ///
    /// Steps run in order and each built-in filter can only flip the
    /// decision from send to suppress. The hook chain runs last and may
    /// override in either direction.
    pub async fn should_notify(&self, user: &User, request: &LoginRequest) -> NotifyDecision {
        let mut decision = NotifyDecision::Send;

        // Super admins always get notified; everyone else must intersect
        // the allow-list when one is configured.
        if let Some(allowed) = &self.settings.notify_roles {
            if !user.is_super_admin && !user.has_any_role(allowed) {
                decision = NotifyDecision::Suppress(SuppressReason::RoleFiltered);
            }
        }

        if decision.should_send()
            && self.settings.notify_repeat == RepeatPolicy::SkipKnownDevice
            && self.has_matching_session(user, request).await
        {
            decision = NotifyDecision::Suppress(SuppressReason::RepeatSession);
        }

        self.hooks.apply_decision(decision, user.id)
    }

    /// Whether the user already holds a session with this exact IP and
    /// user-agent. Store failures are logged and treated as "no match" so a
    /// flaky backend can at most cause one extra notice.
    async fn has_matching_session(&self, user: &User, request: &LoginRequest) -> bool {
        match self.session_store.list_sessions(user.id).await {
            Ok(all_sessions) => {
                sessions::has_matching_session(&all_sessions, &request.ip, &request.user_agent)
            }
            Err(e) => {
                warn!("session lookup failed for {}: {}", user.login, e);
                false
            }
        }
    }

    /// Resolve templates, apply hooks, and render the final envelope.
    async fn compose_envelope(
        &self,
        user: &User,
        request: &LoginRequest,
        explicit: Option<&ExplicitMessage>,
    ) -> EmailEnvelope {
        let body = explicit
            .and_then(|m| m.body.clone())
            .or_else(|| self.settings.email_body.clone())
            .unwrap_or_else(|| template::DEFAULT_BODY_TEMPLATE.to_string());
        let body = self.hooks.apply_template(body);

        let subject = explicit
            .and_then(|m| m.subject.clone())
            .or_else(|| self.settings.email_subject.clone())
            .unwrap_or_else(|| template::DEFAULT_SUBJECT_TEMPLATE.to_string());
        let subject = format!("[{}] {}", self.settings.site_name, subject);

        let mut envelope = EmailEnvelope::new(user.email.to_string(), subject, body);
        for cc in self.settings.cc_list() {
            envelope.push_cc(&cc);
        }

        // Template tags are still intact here, so hooks may inject tokens.
        let mut envelope = self.hooks.apply_envelope(envelope, HookStage::PreRender);

        let ctx = self.render_context(request).await;
        envelope.subject = template::render(&envelope.subject, Some(user), &ctx);
        envelope.message = template::render(&envelope.message, Some(user), &ctx);

        self.hooks.apply_envelope(envelope, HookStage::PostRender)
    }

    async fn render_context(&self, request: &LoginRequest) -> RenderContext {
        let parsed = self.device_parser.parse(&request.user_agent);
        let device = DeviceInfo::from_parsed(parsed, request.ip.clone());

        let (country, flag) = match &self.geo_lookup {
            Some(geo) if self.settings.geo_enabled() => match geo.lookup(&device.ip).await {
                Some(found) => {
                    let flag = found.emoji_flag();
                    (found.country, flag)
                }
                None => (String::new(), String::new()),
            },
            _ => (String::new(), String::new()),
        };

        RenderContext {
            home_url: self.settings.home_url.clone(),
            profile_url: self.settings.profile_url.clone(),
            time: template::format_host_time(
                Utc::now(),
                &self.settings.date_format,
                &self.settings.time_format,
            ),
            device,
            country,
            flag,
        }
    }
}
