//! External certificate issuance.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

/// Program invoked by [`Certbot::new`].
pub const CERTBOT_PROGRAM: &str = "certbot";

/// Certificates to request for one zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRequest {
    /// Zone apex, e.g. `example.com`.
    pub zone: String,
    /// Credential file handed to the issuer's DNS plugin.
    pub credentials_file: PathBuf,
}

impl IssueRequest {
    /// Wildcard subjects: the apex and the `dns.` subdomain.
    pub fn domains(&self) -> [String; 2] {
        [format!("*.{}", self.zone), format!("*.dns.{}", self.zone)]
    }
}

/// Result of an issuer run that was started. The exit code is recorded but
/// not acted upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueOutcome {
    /// Process exit code; `None` when terminated by a signal.
    pub exit_code: Option<i32>,
}

impl IssueOutcome {
    pub fn success(self) -> bool {
        self.exit_code == Some(0)
    }
}

#[derive(Debug, Error)]
pub enum IssuerError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Something that obtains certificates for an [`IssueRequest`].
#[async_trait]
pub trait CertificateIssuer: Send + Sync {
    async fn issue(&self, request: &IssueRequest) -> Result<IssueOutcome, IssuerError>;
}

/// Runs `certbot certonly` with the `dns-cloudflare` plugin.
///
/// The child inherits stdin, stdout and stderr so certbot's prompts and output
/// reach the operator directly.
#[derive(Debug, Clone)]
pub struct Certbot {
    program: String,
}

impl Default for Certbot {
    fn default() -> Self {
        Self::new()
    }
}

impl Certbot {
    pub fn new() -> Self {
        Self::with_program(CERTBOT_PROGRAM)
    }

    /// Use a different executable, taking the same arguments as certbot.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn args(request: &IssueRequest) -> Vec<OsString> {
        let [apex, dns] = request.domains();
        vec![
            "certonly".into(),
            "--dns-cloudflare".into(),
            "--dns-cloudflare-credentials".into(),
            request.credentials_file.clone().into_os_string(),
            "-d".into(),
            apex.into(),
            "-d".into(),
            dns.into(),
        ]
    }
}

#[async_trait]
impl CertificateIssuer for Certbot {
    async fn issue(&self, request: &IssueRequest) -> Result<IssueOutcome, IssuerError> {
        let args = Self::args(request);
        tracing::info!("Running {} {:?}", self.program, args);

        let status = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| IssuerError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let outcome = IssueOutcome {
            exit_code: status.code(),
        };
        tracing::info!("{} exited with {status}", self.program);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> IssueRequest {
        IssueRequest {
            zone: "example.com".to_string(),
            credentials_file: PathBuf::from("/root/cloudflare.ini"),
        }
    }

    #[test]
    fn domains_cover_apex_and_dns_subdomain() {
        assert_eq!(request().domains(), ["*.example.com", "*.dns.example.com"]);
    }

    #[test]
    fn certbot_argument_shape() {
        let args = Certbot::args(&request());
        let expected: Vec<OsString> = [
            "certonly",
            "--dns-cloudflare",
            "--dns-cloudflare-credentials",
            "/root/cloudflare.ini",
            "-d",
            "*.example.com",
            "-d",
            "*.dns.example.com",
        ]
        .into_iter()
        .map(OsString::from)
        .collect();
        assert_eq!(args, expected);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn exit_code_is_reported_not_judged() {
        let ok = Certbot::with_program("true").issue(&request()).await.unwrap();
        assert!(ok.success());

        let failed = Certbot::with_program("false").issue(&request()).await.unwrap();
        assert_eq!(failed.exit_code, Some(1));
        assert!(!failed.success());
    }

    #[tokio::test]
    async fn missing_program_is_spawn_error() {
        let err = Certbot::with_program("wildcard-renew-no-such-program")
            .issue(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, IssuerError::Spawn { .. }), "{err:?}");
    }
}
