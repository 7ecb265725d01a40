use std::path::PathBuf;
use std::sync::Arc;

use pinview_engine::domain::error::EngineError;
use pinview_engine::domain::types as dt;

#[cfg(feature = "openssl")]
use pinview_engine::{EvaluationContext, NavigationListener, OpensslValidator, WebViewSession};

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("{message}")]
    Generic { message: String },
}

impl From<EngineError> for FfiError {
    fn from(e: EngineError) -> Self {
        FfiError::Generic {
            message: e.to_string(),
        }
    }
}

// ===== FFI types mirroring the public Rust API (FFI-friendly) =====

#[derive(uniffi::Enum, Debug, Clone)]
pub enum FfiCertSource { Path(String), Bytes(Vec<u8>) }

impl From<FfiCertSource> for dt::CertSource {
    fn from(v: FfiCertSource) -> Self {
        match v {
            FfiCertSource::Path(p) => dt::CertSource::Path(PathBuf::from(p)),
            FfiCertSource::Bytes(b) => dt::CertSource::Bytes(b),
        }
    }
}

#[derive(uniffi::Record, Debug, Clone, Copy)]
pub struct FfiTrustPolicyConfig {
    /// When true, only the pinned anchors may root a valid chain.
    pub anchors_only: bool,
}

impl From<FfiTrustPolicyConfig> for dt::TrustPolicyConfig {
    fn from(v: FfiTrustPolicyConfig) -> Self {
        dt::TrustPolicyConfig { anchors_only: v.anchors_only }
    }
}

#[derive(uniffi::Record, Debug, Clone)]
pub struct FfiSessionConfig {
    pub anchor_sources: Vec<FfiCertSource>,
    pub trust_policy: FfiTrustPolicyConfig,
    pub initial_url: Option<String>,
}

impl From<FfiSessionConfig> for dt::SessionConfig {
    fn from(v: FfiSessionConfig) -> Self {
        dt::SessionConfig {
            anchor_sources: v.anchor_sources.into_iter().map(Into::into).collect(),
            trust_policy: v.trust_policy.into(),
            initial_url: v.initial_url,
        }
    }
}

/// Verdict for one server-trust challenge. The host derives its platform
/// credential from its own handshake object when told to use one.
#[derive(uniffi::Enum, Debug, Clone, Copy)]
pub enum FfiChallengeDisposition { UseCredential, PerformDefaultHandling }

impl From<pinview_engine::ChallengeDisposition> for FfiChallengeDisposition {
    fn from(v: pinview_engine::ChallengeDisposition) -> Self {
        match v {
            pinview_engine::ChallengeDisposition::UseCredential(_) => {
                FfiChallengeDisposition::UseCredential
            }
            pinview_engine::ChallengeDisposition::PerformDefaultHandling => {
                FfiChallengeDisposition::PerformDefaultHandling
            }
        }
    }
}

/// Foreign navigation listener; the host implements this and receives every
/// navigation request URL, verbatim.
#[uniffi::export(with_foreign)]
pub trait FfiNavigationListener: Send + Sync {
    fn on_navigation_request(&self, url: String);
}

#[cfg(feature = "openssl")]
struct ListenerBridge(Arc<dyn FfiNavigationListener>);

#[cfg(feature = "openssl")]
impl NavigationListener for ListenerBridge {
    fn on_navigation_request(&self, url: &str) {
        self.0.on_navigation_request(url.to_string());
    }
}

// ===== Session object, mirroring the Rust surface =====

#[cfg(feature = "openssl")]
#[derive(uniffi::Object)]
pub struct FfiWebViewSession {
    inner: WebViewSession<OpensslValidator>,
}

#[cfg(feature = "openssl")]
#[uniffi::export]
impl FfiWebViewSession {
    /// Builds a session from host setup arguments. Never fails; unusable
    /// certificate sources degrade to a smaller (possibly empty) store.
    #[uniffi::constructor]
    pub fn new(config: FfiSessionConfig) -> Arc<Self> {
        Arc::new(Self {
            inner: WebViewSession::new(config.into(), OpensslValidator::new()),
        })
    }

    /// Builds a session from the serialized setup map hosts deliver over
    /// their channel. Fails only when the JSON itself does not decode.
    #[uniffi::constructor]
    pub fn from_json(json: String) -> Result<Arc<Self>, FfiError> {
        let config = dt::SessionConfig::from_json(&json).map_err(FfiError::from)?;
        Ok(Arc::new(Self {
            inner: WebViewSession::new(config, OpensslValidator::new()),
        }))
    }

    pub fn anchor_count(&self) -> u32 {
        self.inner.anchors().len() as u32
    }

    pub fn initial_url(&self) -> Option<String> {
        self.inner.initial_url().map(|u| u.to_string())
    }

    pub fn subscribe_navigation(&self, listener: Arc<dyn FfiNavigationListener>) {
        self.inner.subscribe_navigation(Arc::new(ListenerBridge(listener)));
    }

    pub fn unsubscribe_navigation(&self) {
        self.inner.unsubscribe_navigation();
    }

    /// Reports a navigation request. Fire-and-forget; the navigation itself
    /// always proceeds on the host side.
    pub fn on_navigation_request(&self, url: String) {
        self.inner.on_navigation_request(&url);
    }

    /// Evaluates one handshake's presented chain (DER, leaf first) and says
    /// what the host's network layer should do with the challenge.
    pub fn evaluate_server_trust(
        &self,
        chain_der: Vec<Vec<u8>>,
        server_name: Option<String>,
    ) -> FfiChallengeDisposition {
        let mut context = EvaluationContext::new(chain_der);
        if let Some(name) = server_name {
            context = context.with_server_name(name);
        }
        self.inner.handle_server_trust(Some(context)).into()
    }
}

uniffi::setup_scaffolding!();
