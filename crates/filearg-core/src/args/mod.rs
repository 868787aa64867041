//! Final fix-ups applied to one operation's arguments before use.

mod prompt;

use crate::error::ParamError;

pub use prompt::{PasswordPrompt, StdinPrompt};

/// Upper bound on a `user:password` string built from a prompt.
pub const MAX_USERPWD_LENGTH: usize = 100 * 1024;

/// Request-level settings collected from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestArgs {
    /// `--json` was given.
    pub json: bool,
    /// Custom headers, `Name: value`.
    pub headers: Vec<String>,
    /// Server credentials, `user[:password][;options]`.
    pub userpwd: Option<String>,
    /// Proxy credentials, same format.
    pub proxyuserpwd: Option<String>,
    /// A bearer token replaces server credentials.
    pub oauth_bearer: bool,
    pub useragent: Option<String>,
}

/// `filearg/<version>`.
pub fn default_user_agent() -> String {
    format!("filearg/{}", env!("CARGO_PKG_VERSION"))
}

/// True if `headers` already sets `name` (case-insensitive; the name must
/// be followed by `:` or `;`).
pub fn has_header(headers: &[String], name: &str) -> bool {
    headers.iter().any(|h| {
        h.len() > name.len()
            && h.is_char_boundary(name.len())
            && h[..name.len()].eq_ignore_ascii_case(name)
            && matches!(h.as_bytes()[name.len()], b':' | b';')
    })
}

/// Completes `args` for operation `index` (0-based); `last` is true when no
/// operation follows it.
///
/// Adds JSON content headers for `--json`, prompts for missing passwords and
/// fills in the default user agent.
pub fn finalize_args(
    args: &mut RequestArgs,
    index: usize,
    last: bool,
    prompt: &mut dyn PasswordPrompt,
) -> Result<(), ParamError> {
    if args.json {
        if !has_header(&args.headers, "Content-Type") {
            args.headers
                .push("Content-Type: application/json".to_string());
        }
        if !has_header(&args.headers, "Accept") {
            args.headers.push("Accept: application/json".to_string());
        }
    }

    if !args.oauth_bearer {
        if let Some(userpwd) = args.userpwd.as_mut() {
            complete_password("host", index, last, userpwd, prompt)?;
        }
    }
    if let Some(userpwd) = args.proxyuserpwd.as_mut() {
        complete_password("proxy", index, last, userpwd, prompt)?;
    }

    if args.useragent.is_none() {
        args.useragent = Some(default_user_agent());
    }
    Ok(())
}

/// Appends `:password` to `userpwd` when it names a user but no password.
fn complete_password(
    kind: &str,
    index: usize,
    last: bool,
    userpwd: &mut String,
    prompt: &mut dyn PasswordPrompt,
) -> Result<(), ParamError> {
    if userpwd.contains(':') || userpwd.starts_with(';') {
        return Ok(());
    }

    let user = userpwd.split(';').next().unwrap_or_default();
    let text = if index == 0 && last {
        format!("Enter {} password for user '{}':", kind, user)
    } else {
        format!(
            "Enter {} password for user '{}' on URL #{}:",
            kind,
            user,
            index + 1
        )
    };

    let password = prompt.read_password(&text).map_err(ParamError::Prompt)?;
    let combined = format!("{}:{}", userpwd, password);
    if combined.len() > MAX_USERPWD_LENGTH {
        return Err(ParamError::CredentialTooLong {
            limit: MAX_USERPWD_LENGTH,
        });
    }
    *userpwd = combined;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Replays canned answers and records the prompts shown.
    #[derive(Default)]
    struct Scripted {
        answers: Vec<String>,
        shown: Vec<String>,
    }

    impl PasswordPrompt for Scripted {
        fn read_password(&mut self, prompt: &str) -> io::Result<String> {
            self.shown.push(prompt.to_string());
            if self.answers.is_empty() {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no input"));
            }
            Ok(self.answers.remove(0))
        }
    }

    fn scripted(answers: &[&str]) -> Scripted {
        Scripted {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            shown: Vec::new(),
        }
    }

    #[test]
    fn json_adds_missing_headers() {
        let mut args = RequestArgs {
            json: true,
            headers: vec!["accept: text/plain".to_string()],
            ..Default::default()
        };
        finalize_args(&mut args, 0, true, &mut scripted(&[])).unwrap();
        assert_eq!(
            args.headers,
            vec![
                "accept: text/plain".to_string(),
                "Content-Type: application/json".to_string()
            ]
        );
    }

    #[test]
    fn header_match_needs_separator() {
        let headers = vec!["Content-Typeish: x".to_string(), "Accept;".to_string()];
        assert!(!has_header(&headers, "Content-Type"));
        assert!(has_header(&headers, "accept"));
        assert!(!has_header(&headers, "Accept-Encoding"));
    }

    #[test]
    fn prompts_for_missing_password() {
        let mut args = RequestArgs {
            userpwd: Some("alice".to_string()),
            ..Default::default()
        };
        let mut p = scripted(&["s3cret"]);
        finalize_args(&mut args, 0, true, &mut p).unwrap();
        assert_eq!(args.userpwd.as_deref(), Some("alice:s3cret"));
        assert_eq!(p.shown, vec!["Enter host password for user 'alice':"]);
    }

    #[test]
    fn prompt_mentions_url_number_and_hides_options() {
        let mut args = RequestArgs {
            proxyuserpwd: Some("bob;AUTH=NTLM".to_string()),
            ..Default::default()
        };
        let mut p = scripted(&["pw"]);
        finalize_args(&mut args, 1, false, &mut p).unwrap();
        assert_eq!(args.proxyuserpwd.as_deref(), Some("bob;AUTH=NTLM:pw"));
        assert_eq!(
            p.shown,
            vec!["Enter proxy password for user 'bob' on URL #2:"]
        );
    }

    #[test]
    fn no_prompt_when_password_present_or_bearer() {
        let mut args = RequestArgs {
            userpwd: Some("alice:pw".to_string()),
            proxyuserpwd: Some(";opts".to_string()),
            ..Default::default()
        };
        let mut p = scripted(&[]);
        finalize_args(&mut args, 0, true, &mut p).unwrap();
        assert!(p.shown.is_empty());

        let mut bearer = RequestArgs {
            userpwd: Some("alice".to_string()),
            oauth_bearer: true,
            ..Default::default()
        };
        finalize_args(&mut bearer, 0, true, &mut p).unwrap();
        assert_eq!(bearer.userpwd.as_deref(), Some("alice"));
        assert!(p.shown.is_empty());
    }

    #[test]
    fn prompt_failure_and_overlong_credentials() {
        let mut args = RequestArgs {
            userpwd: Some("alice".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            finalize_args(&mut args, 0, true, &mut scripted(&[])),
            Err(ParamError::Prompt(_))
        ));

        let long = "x".repeat(MAX_USERPWD_LENGTH);
        let mut p = scripted(&[long.as_str()]);
        assert!(matches!(
            finalize_args(&mut args, 0, true, &mut p),
            Err(ParamError::CredentialTooLong { .. })
        ));
        assert_eq!(args.userpwd.as_deref(), Some("alice"));
    }

    #[test]
    fn default_user_agent_filled_in() {
        let mut args = RequestArgs::default();
        finalize_args(&mut args, 0, true, &mut scripted(&[])).unwrap();
        assert_eq!(args.useragent, Some(default_user_agent()));
        assert!(default_user_agent().starts_with("filearg/"));

        let mut custom = RequestArgs {
            useragent: Some("agent/1".to_string()),
            ..Default::default()
        };
        finalize_args(&mut custom, 0, true, &mut scripted(&[])).unwrap();
        assert_eq!(custom.useragent.as_deref(), Some("agent/1"));
    }
}
