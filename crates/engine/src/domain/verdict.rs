use std::fmt;

/// Credential material derived from a context that validated successfully:
/// the platform's "use this specific trust decision" object, reduced to the
/// chain it vouches for.
#[derive(Clone, PartialEq, Eq)]
pub struct TrustCredential {
    chain_der: Vec<Vec<u8>>,
}

impl TrustCredential {
    pub(crate) fn new(chain_der: Vec<Vec<u8>>) -> Self {
        Self { chain_der }
    }

    pub fn chain_der(&self) -> &[Vec<u8>] {
        &self.chain_der
    }

    pub fn leaf_der(&self) -> Option<&[u8]> {
        self.chain_der.first().map(Vec::as_slice)
    }
}

impl fmt::Debug for TrustCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrustCredential")
            .field("chain_len", &self.chain_der.len())
            .finish()
    }
}

/// What the host's network layer should do with a server-trust challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChallengeDisposition {
    /// The chain validated against the session anchors; proceed with this
    /// credential.
    UseCredential(TrustCredential),
    /// Hand the handshake back to the platform's ordinary validation.
    /// Returned both when evaluation rejects the chain and when there is
    /// nothing to evaluate; the engine never force-fails a connection.
    PerformDefaultHandling,
}

impl ChallengeDisposition {
    pub fn is_use_credential(&self) -> bool {
        matches!(self, ChallengeDisposition::UseCredential(_))
    }
}
