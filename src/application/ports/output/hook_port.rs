/*
Override Hook Ports

Named extension points that let a host adjust the notification flow without
patching this crate. Each hook receives the value being filtered and returns
it, possibly changed. Hooks of the same kind run in registration order and
the last returned value wins.

Four points are exposed, matching the flow in the login notifier:
- DecisionHook: the computed send/suppress decision, after the built-in
  filters have run. This is the only step that may flip suppress back to send.
- TemplateHook: the chosen body template, before token substitution.
- EnvelopeHook at HookStage::PreRender: the assembled envelope with template
  tags still intact, so hooks may inject their own tokens.
- EnvelopeHook at HookStage::PostRender: the rendered envelope, immediately
  before dispatch.
*/

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::EmailEnvelope;

/// Why a login notice was not sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
    /// The user's roles do not intersect the configured allow-list.
    RoleFiltered,
    /// An active session already exists for this IP and user-agent.
    RepeatSession,
    /// A decision hook vetoed the send.
    HookVetoed,
}

/// Outcome of the notification decision policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyDecision {
    Send,
    Suppress(SuppressReason),
}

impl NotifyDecision {
    pub fn should_send(&self) -> bool {
        matches!(self, NotifyDecision::Send)
    }
}

/// Where in the compose flow an envelope hook is being invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStage {
    PreRender,
    PostRender,
}

pub trait DecisionHook: Send + Sync {
    fn filter_decision(&self, decision: NotifyDecision, user_id: Uuid) -> NotifyDecision;
}

pub trait TemplateHook: Send + Sync {
    fn filter_template(&self, template: String) -> String;
}

pub trait EnvelopeHook: Send + Sync {
    fn filter_envelope(&self, envelope: EmailEnvelope, stage: HookStage) -> EmailEnvelope;
}

/// Ordered collection of registered hooks.
///
/// Invocation order is registration order; a registry with no hooks passes
/// every value through unchanged.
#[derive(Default)]
pub struct HookRegistry {
    decision_hooks: Vec<Arc<dyn DecisionHook>>,
    template_hooks: Vec<Arc<dyn TemplateHook>>,
    envelope_hooks: Vec<Arc<dyn EnvelopeHook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_decision_hook(&mut self, hook: Arc<dyn DecisionHook>) {
        self.decision_hooks.push(hook);
    }

    pub fn register_template_hook(&mut self, hook: Arc<dyn TemplateHook>) {
        self.template_hooks.push(hook);
    }

    pub fn register_envelope_hook(&mut self, hook: Arc<dyn EnvelopeHook>) {
        self.envelope_hooks.push(hook);
    }

    pub fn apply_decision(&self, mut decision: NotifyDecision, user_id: Uuid) -> NotifyDecision {
        for hook in &self.decision_hooks {
            decision = hook.filter_decision(decision, user_id);
        }
        decision
    }

    pub fn apply_template(&self, mut template: String) -> String {
        for hook in &self.template_hooks {
            template = hook.filter_template(template);
        }
        template
    }

    pub fn apply_envelope(&self, mut envelope: EmailEnvelope, stage: HookStage) -> EmailEnvelope {
        for hook in &self.envelope_hooks {
            envelope = hook.filter_envelope(envelope, stage);
        }
        envelope
    }
}
