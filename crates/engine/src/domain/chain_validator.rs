use super::error::EngineResult;
use super::evaluate::EvaluationContext;

/// Capability expected from a platform chain-validation engine.
///
/// The trust layer never walks X.509 chains itself. It prepares an
/// [`EvaluationContext`] (presented chain, installed anchors, root-selection
/// mode) and hands it to one of these. Each platform supplies its native
/// backend; the default build ships an OpenSSL one.
pub trait ChainValidator {
    /// Runs full path validation for the context's presented chain: signature
    /// chain to a trusted root, validity window, basic and name constraints.
    /// Root candidates are the installed anchors, plus the platform trust
    /// store unless the context is anchors-only.
    fn validate(&self, context: &EvaluationContext) -> EngineResult<bool>;
}
