// crates/engine/src/lib.rs

//! Public facade for the PinView Engine.
//! Exposes a stable API and re-exports types for consumers (host shells, FFI).

pub mod adapters;
pub mod domain;

// High-level helpers for the common "pinned web view" path. They give host
// shells a simple entrypoint backed by the default validation backend.

/// Builds an [`AnchorStore`] from raw certificate buffers, skipping any that
/// do not parse.
pub fn load_anchors<I>(buffers: I) -> AnchorStore
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    AnchorStore::load(buffers)
}

pub fn load_anchor_sources(sources: &[CertSource]) -> AnchorStore {
    AnchorStore::from_sources(sources)
}

/// Evaluates a handshake context against `anchors` under `policy` using the
/// default backend. Errors only when the crate was built without one; the
/// evaluation itself always produces a verdict.
pub fn evaluate_trust(
    context: &mut EvaluationContext,
    anchors: &AnchorStore,
    policy: TrustPolicyConfig,
) -> EngineResult<bool> {
    #[cfg(not(feature = "openssl"))]
    {
        let _ = (context, anchors, policy);
        return Err(EngineError::Feature("openssl"));
    }
    #[cfg(feature = "openssl")]
    {
        let evaluator = TrustEvaluator::new(OpensslValidator::new());
        Ok(evaluator.evaluate(context, anchors, policy))
    }
}

/// Opens a web-view session backed by the default validator. Never fails;
/// bad certificate sources degrade to a smaller store.
#[cfg(feature = "openssl")]
pub fn open_session(config: SessionConfig) -> WebViewSession<OpensslValidator> {
    WebViewSession::new(config, OpensslValidator::new())
}

// Re-exports for convenience
pub use domain::anchor::{AnchorStore, TrustAnchor};
pub use domain::chain_validator::ChainValidator;
pub use domain::error::{EngineError, EngineResult};
pub use domain::evaluate::{EvaluationContext, TrustEvaluator};
pub use domain::navigation::{NavigationListener, NavigationObserver};
pub use domain::session::WebViewSession;
pub use domain::types::{CertSource, EngineDefaults, SessionConfig, TrustPolicyConfig};
pub use domain::verdict::{ChallengeDisposition, TrustCredential};

#[cfg(feature = "openssl")]
pub use adapters::openssl::OpensslValidator;
