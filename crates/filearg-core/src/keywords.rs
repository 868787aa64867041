//! Keyword-valued options.
//!
//! Unknown keywords fall back to a default with a warning, except for the
//! TLS ceiling, where a typo must not silently change security settings.

use crate::error::ParamError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FtpFileMethod {
    SingleCwd,
    NoCwd,
    MultiCwd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FtpCccMethod {
    Passive,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GssapiDelegation {
    None,
    Policy,
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMax {
    Default,
    Tls1_0,
    Tls1_1,
    Tls1_2,
    Tls1_3,
}

pub fn ftp_file_method(s: &str) -> FtpFileMethod {
    match s.to_ascii_lowercase().as_str() {
        "singlecwd" => FtpFileMethod::SingleCwd,
        "nocwd" => FtpFileMethod::NoCwd,
        "multicwd" => FtpFileMethod::MultiCwd,
        _ => {
            tracing::warn!("unrecognized ftp file method '{}', using default", s);
            FtpFileMethod::MultiCwd
        }
    }
}

pub fn ftp_ccc_method(s: &str) -> FtpCccMethod {
    match s.to_ascii_lowercase().as_str() {
        "passive" => FtpCccMethod::Passive,
        "active" => FtpCccMethod::Active,
        _ => {
            tracing::warn!("unrecognized ftp CCC method '{}', using default", s);
            FtpCccMethod::Passive
        }
    }
}

pub fn gssapi_delegation(s: &str) -> GssapiDelegation {
    match s.to_ascii_lowercase().as_str() {
        "none" => GssapiDelegation::None,
        "policy" => GssapiDelegation::Policy,
        "always" => GssapiDelegation::Always,
        _ => {
            tracing::warn!("unrecognized delegation method '{}', using none", s);
            GssapiDelegation::None
        }
    }
}

/// Maximum TLS version. Matching is exact (case-sensitive).
pub fn tls_max(s: Option<&str>) -> Result<TlsMax, ParamError> {
    match s.ok_or(ParamError::RequiresParameter)? {
        "default" => Ok(TlsMax::Default),
        "1.0" => Ok(TlsMax::Tls1_0),
        "1.1" => Ok(TlsMax::Tls1_1),
        "1.2" => Ok(TlsMax::Tls1_2),
        "1.3" => Ok(TlsMax::Tls1_3),
        _ => Err(ParamError::BadUse),
    }
}
