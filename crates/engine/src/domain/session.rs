use std::sync::Arc;

use tracing::debug;
use url::Url;

use super::anchor::AnchorStore;
use super::chain_validator::ChainValidator;
use super::evaluate::{EvaluationContext, TrustEvaluator};
use super::navigation::{NavigationListener, NavigationObserver};
use super::types::{SessionConfig, TrustPolicyConfig};
use super::verdict::{ChallengeDisposition, TrustCredential};

/// One embedded web view's trust state: the anchors pinned at setup, the
/// policy they apply under, the navigation report slot, and the validation
/// backend.
///
/// Anchors are loaded synchronously during construction and immutable
/// afterwards, so every later evaluation sees the fully populated store.
pub struct WebViewSession<V> {
    anchors: AnchorStore,
    policy: TrustPolicyConfig,
    evaluator: TrustEvaluator<V>,
    navigation: NavigationObserver,
    initial_url: Option<Url>,
}

impl<V: ChainValidator> WebViewSession<V> {
    /// Builds the session from host setup arguments. Construction never
    /// fails: unusable certificate sources are skipped and an unusable
    /// initial URL becomes `None`.
    pub fn new(config: SessionConfig, validator: V) -> Self {
        let anchors = AnchorStore::from_sources(&config.anchor_sources);
        debug!(
            requested = config.anchor_sources.len(),
            loaded = anchors.len(),
            "session anchor store populated"
        );
        Self {
            anchors,
            policy: config.trust_policy,
            evaluator: TrustEvaluator::new(validator),
            navigation: NavigationObserver::new(),
            initial_url: parse_initial_url(config.initial_url.as_deref()),
        }
    }

    pub fn anchors(&self) -> &AnchorStore {
        &self.anchors
    }

    pub fn policy(&self) -> TrustPolicyConfig {
        self.policy
    }

    pub fn initial_url(&self) -> Option<&Url> {
        self.initial_url.as_ref()
    }

    /// Entry point for server-trust challenges, the platform's
    /// completion-handler flow rendered as a plain return value.
    ///
    /// `None` means the handshake carried no server-trust object; the
    /// evaluator is not consulted and the platform's ordinary validation
    /// proceeds. A rejected chain likewise falls back to default handling
    /// rather than failing the connection.
    pub fn handle_server_trust(&self, context: Option<EvaluationContext>) -> ChallengeDisposition {
        let Some(mut context) = context else {
            return ChallengeDisposition::PerformDefaultHandling;
        };
        if self.evaluator.evaluate(&mut context, &self.anchors, self.policy) {
            ChallengeDisposition::UseCredential(TrustCredential::new(context.into_chain_der()))
        } else {
            ChallengeDisposition::PerformDefaultHandling
        }
    }

    /// Registers the navigation listener, replacing any current one.
    pub fn subscribe_navigation(&self, listener: Arc<dyn NavigationListener>) {
        self.navigation.subscribe(listener);
    }

    pub fn unsubscribe_navigation(&self) {
        self.navigation.unsubscribe();
    }

    /// Reports a navigation request to the listener, if any. The report
    /// never gates the navigation; callers proceed regardless.
    pub fn on_navigation_request(&self, url: &str) {
        self.navigation.notify(url);
    }
}

fn parse_initial_url(raw: Option<&str>) -> Option<Url> {
    let raw = raw?;
    if raw.is_empty() {
        return None;
    }
    match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(err) => {
            debug!(error = %err, "ignoring unusable initial URL");
            None
        }
    }
}
