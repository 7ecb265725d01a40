#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pinview_engine as pe;
use rcgen::{
    BasicConstraints, Certificate, CertificateParams, DistinguishedName, DnType, IsCa, KeyPair,
    KeyUsagePurpose,
};
use tempfile::TempDir;

/// A generated certificate with its DER encoding. CA certs can issue others.
pub struct TestCert {
    pub cert: Certificate,
    pub der: Vec<u8>,
}

fn ca_params(common_name: &str) -> CertificateParams {
    let alg = &rcgen::PKCS_ECDSA_P256_SHA256;
    let key = KeyPair::generate(alg).expect("keypair");
    let mut params = CertificateParams::new(vec![]);
    params.alg = alg;
    let mut dn = DistinguishedName::new();
    dn.push(DnType::CommonName, common_name);
    params.distinguished_name = dn;
    params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    params.key_usages = vec![KeyUsagePurpose::KeyCertSign, KeyUsagePurpose::CrlSign];
    params.key_pair = Some(key);
    params
}

fn leaf_params(dns_name: &str) -> CertificateParams {
    let alg = &rcgen::PKCS_ECDSA_P256_SHA256;
    let key = KeyPair::generate(alg).expect("keypair");
    let mut params = CertificateParams::new(vec![dns_name.to_string()]);
    params.alg = alg;
    let mut dn = DistinguishedName::new();
    dn.push(DnType::CommonName, dns_name);
    params.distinguished_name = dn;
    params.key_pair = Some(key);
    params
}

/// Generate a self-signed root CA.
pub fn make_ca(common_name: &str) -> TestCert {
    let cert = Certificate::from_params(ca_params(common_name)).expect("ca cert");
    let der = cert.serialize_der().expect("ca der");
    TestCert { cert, der }
}

/// Generate an intermediate CA signed by `issuer`.
pub fn issue_intermediate(common_name: &str, issuer: &TestCert) -> TestCert {
    let cert = Certificate::from_params(ca_params(common_name)).expect("intermediate cert");
    let der = cert
        .serialize_der_with_signer(&issuer.cert)
        .expect("intermediate der");
    TestCert { cert, der }
}

/// Generate an end-entity certificate for `dns_name`, signed by `issuer`.
pub fn issue_leaf(dns_name: &str, issuer: &TestCert) -> TestCert {
    let cert = Certificate::from_params(leaf_params(dns_name)).expect("leaf cert");
    let der = cert
        .serialize_der_with_signer(&issuer.cert)
        .expect("leaf der");
    TestCert { cert, der }
}

/// Like `issue_leaf`, but with a validity window entirely in the past.
pub fn issue_expired_leaf(dns_name: &str, issuer: &TestCert) -> TestCert {
    let mut params = leaf_params(dns_name);
    params.not_before = rcgen::date_time_ymd(2020, 1, 1);
    params.not_after = rcgen::date_time_ymd(2021, 1, 1);
    let cert = Certificate::from_params(params).expect("expired leaf cert");
    let der = cert
        .serialize_der_with_signer(&issuer.cert)
        .expect("expired leaf der");
    TestCert { cert, der }
}

/// Concatenated-PEM bundle of self-signed certs, in the given order.
pub fn pem_bundle(certs: &[&TestCert]) -> String {
    certs
        .iter()
        .map(|c| c.cert.serialize_pem().expect("pem"))
        .collect::<Vec<_>>()
        .join("")
}

/// Write `bytes` under `name` in the temp dir and return the full path.
pub fn write_cert_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).expect("write cert file");
    path
}

// ===== Validator doubles =====

/// Records what every call saw (installed anchor count, anchors-only flag)
/// and answers a fixed verdict. Clones share the recording.
#[derive(Clone)]
pub struct RecordingValidator {
    verdict: bool,
    calls: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<(usize, bool)>>>,
}

impl RecordingValidator {
    pub fn trusting() -> Self {
        Self::with_verdict(true)
    }

    pub fn rejecting() -> Self {
        Self::with_verdict(false)
    }

    pub fn with_verdict(verdict: bool) -> Self {
        Self {
            verdict,
            calls: Arc::new(AtomicUsize::new(0)),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<(usize, bool)> {
        self.seen.lock().unwrap().clone()
    }
}

impl pe::ChainValidator for RecordingValidator {
    fn validate(&self, context: &pe::EvaluationContext) -> pe::EngineResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((context.installed_anchors().len(), context.anchors_only()));
        Ok(self.verdict)
    }
}

/// Always errors, standing in for a backend that cannot run.
pub struct FailingValidator;

impl pe::ChainValidator for FailingValidator {
    fn validate(&self, _context: &pe::EvaluationContext) -> pe::EngineResult<bool> {
        Err(pe::EngineError::Config("backend unavailable".to_string()))
    }
}

/// Panics on every call.
pub struct PanickingValidator;

impl pe::ChainValidator for PanickingValidator {
    fn validate(&self, _context: &pe::EvaluationContext) -> pe::EngineResult<bool> {
        panic!("validator blew up");
    }
}
