//! OpenSSL-backed chain validation.
//!
//! The only X.509 path logic in the crate lives behind the platform engine's
//! own verifier; this adapter materializes the evaluation context into an
//! `X509Store` plus untrusted stack and reads back the verdict.

use openssl::stack::Stack;
use openssl::x509::store::{X509Store, X509StoreBuilder};
use openssl::x509::verify::{X509VerifyFlags, X509VerifyParam};
use openssl::x509::{X509, X509StoreContext};
use tracing::debug;

use crate::domain::chain_validator::ChainValidator;
use crate::domain::error::EngineResult;
use crate::domain::evaluate::EvaluationContext;

/// [`ChainValidator`] over the platform's OpenSSL trust machinery.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpensslValidator;

impl OpensslValidator {
    pub fn new() -> Self {
        OpensslValidator
    }

    fn build_store(&self, context: &EvaluationContext) -> EngineResult<X509Store> {
        let mut builder = X509StoreBuilder::new()?;
        for anchor in context.installed_anchors() {
            builder.add_cert(X509::from_der(anchor.der())?)?;
        }
        if !context.anchors_only() {
            builder.set_default_paths()?;
        }

        let mut param = X509VerifyParam::new()?;
        // Installed anchors terminate chains even when they are not
        // self-signed roots; an intermediate may be pinned directly.
        param.set_flags(X509VerifyFlags::PARTIAL_CHAIN)?;
        if let Some(name) = context.server_name().filter(|n| !n.is_empty()) {
            param.set_host(name)?;
        }
        builder.set_param(&param)?;

        Ok(builder.build())
    }
}

impl ChainValidator for OpensslValidator {
    fn validate(&self, context: &EvaluationContext) -> EngineResult<bool> {
        let Some(leaf_der) = context.leaf_der() else {
            debug!("empty presented chain");
            return Ok(false);
        };
        let leaf = X509::from_der(leaf_der)?;
        let mut untrusted = Stack::new()?;
        for der in &context.chain_der()[1..] {
            untrusted.push(X509::from_der(der)?)?;
        }

        let store = self.build_store(context)?;
        let mut store_context = X509StoreContext::new()?;
        let trusted = store_context.init(&store, &leaf, &untrusted, |ctx| {
            let ok = ctx.verify_cert()?;
            if !ok {
                debug!(reason = ctx.error().error_string(), "chain rejected");
            }
            Ok(ok)
        })?;
        Ok(trusted)
    }
}
