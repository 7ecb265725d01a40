use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::debug;

use super::anchor::{AnchorStore, TrustAnchor};
use super::chain_validator::ChainValidator;
use super::error::EngineError;
use super::types::TrustPolicyConfig;

/// Everything one server-trust evaluation works with: the chain presented
/// during a TLS handshake plus the trust settings installed before the
/// platform engine runs.
///
/// Built by the host's network layer once per handshake and consumed for a
/// single verdict.
pub struct EvaluationContext {
    chain_der: Vec<Vec<u8>>,
    server_name: Option<String>,
    installed_anchors: Vec<TrustAnchor>,
    anchors_only: bool,
}

impl EvaluationContext {
    /// Wraps a presented chain, leaf first, exactly as received from the
    /// network layer. No anchors installed yet, platform roots included.
    pub fn new(chain_der: Vec<Vec<u8>>) -> Self {
        Self {
            chain_der,
            server_name: None,
            installed_anchors: Vec::new(),
            anchors_only: false,
        }
    }

    /// Attaches the host name the handshake was addressed to, for backends
    /// that enforce host policy. Without it, validation is chain-only.
    pub fn with_server_name(mut self, name: impl Into<String>) -> Self {
        self.server_name = Some(name.into());
        self
    }

    /// Installs the session anchors, replacing any previously installed set.
    pub fn install_anchors(&mut self, anchors: &AnchorStore) {
        self.installed_anchors = anchors.anchors().to_vec();
    }

    /// Narrows or widens root selection: `true` excludes the platform trust
    /// store, `false` lets the anchors supplement it.
    pub fn set_anchors_only(&mut self, anchors_only: bool) {
        self.anchors_only = anchors_only;
    }

    pub fn chain_der(&self) -> &[Vec<u8>] {
        &self.chain_der
    }

    pub fn leaf_der(&self) -> Option<&[u8]> {
        self.chain_der.first().map(Vec::as_slice)
    }

    pub fn server_name(&self) -> Option<&str> {
        self.server_name.as_deref()
    }

    pub fn installed_anchors(&self) -> &[TrustAnchor] {
        &self.installed_anchors
    }

    pub fn anchors_only(&self) -> bool {
        self.anchors_only
    }

    /// Consumes the context, yielding the presented chain it was built
    /// around (single-verdict lifecycle).
    pub fn into_chain_der(self) -> Vec<Vec<u8>> {
        self.chain_der
    }
}

impl fmt::Debug for EvaluationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluationContext")
            .field("chain_len", &self.chain_der.len())
            .field("server_name", &self.server_name)
            .field("installed_anchors", &self.installed_anchors.len())
            .field("anchors_only", &self.anchors_only)
            .finish()
    }
}

/// Evaluates server trust by installing session anchors into a handshake
/// context and delegating chain validation to the platform backend.
pub struct TrustEvaluator<V> {
    validator: V,
}

impl<V: ChainValidator> TrustEvaluator<V> {
    pub fn new(validator: V) -> Self {
        Self { validator }
    }

    /// Returns whether the context's presented chain is trustworthy under
    /// the given anchors and policy.
    ///
    /// Anchors are installed in store order and the root-selection mode is
    /// taken from the policy before the backend runs. Any backend error or
    /// panic means "not trusted"; this function itself never fails, and
    /// evaluating the same context again yields the same verdict.
    pub fn evaluate(
        &self,
        context: &mut EvaluationContext,
        anchors: &AnchorStore,
        policy: TrustPolicyConfig,
    ) -> bool {
        context.install_anchors(anchors);
        context.set_anchors_only(policy.anchors_only);

        let outcome = catch_unwind(AssertUnwindSafe(|| self.validator.validate(context)))
            .unwrap_or_else(|_| Err(EngineError::Panic("chain validator panicked".to_string())));

        match outcome {
            Ok(trusted) => trusted,
            Err(err) => {
                debug!(error = %err, "chain validation error treated as not trusted");
                false
            }
        }
    }
}
