//! Protocol allow/deny lists.
//!
//! A protocol spec is a comma-separated list of names, each optionally
//! prefixed by `+` (allow, the default), `-` (deny) or `=` (allow only this).
//! The name `all` stands for every protocol in the table.

mod table;

use crate::error::ParamError;

pub use table::{ProtocolTable, BUILTIN_PROTOCOLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Allow,
    Deny,
    Set,
}

/// Splits leading modifier characters off `token`.
fn split_modifiers(token: &str) -> Result<(Action, &str), ParamError> {
    let mut action = Action::Allow;
    let mut rest = token;
    loop {
        match rest.chars().next() {
            Some(c) if c.is_ascii_alphanumeric() => return Ok((action, rest)),
            Some('=') => action = Action::Set,
            Some('-') => action = Action::Deny,
            Some('+') => action = Action::Allow,
            _ => return Err(ParamError::BadUse),
        }
        rest = &rest[1..];
    }
}

fn include<'t>(set: &mut Vec<&'t str>, proto: &'t str) {
    if !set.contains(&proto) {
        set.push(proto);
    }
}

/// Applies `spec` to the starting set `defaults` and returns the resulting
/// protocols, sorted case-insensitively and joined with `,`.
///
/// Names missing from `table` are skipped with a warning; with `=` they
/// leave the set empty. A token made only of modifiers, or starting with any
/// other punctuation, is [`ParamError::BadUse`].
pub fn apply_protocol_spec<S: AsRef<str>>(
    table: &ProtocolTable,
    defaults: &[S],
    spec: &str,
) -> Result<String, ParamError> {
    let mut set: Vec<&str> = Vec::new();
    for d in defaults {
        if let Some(p) = table.token(d.as_ref()) {
            include(&mut set, p);
        }
    }

    for token in spec.split(',').filter(|t| !t.is_empty()) {
        let (action, name) = split_modifiers(token)?;

        if name.eq_ignore_ascii_case("all") {
            match action {
                Action::Deny => set.clear(),
                Action::Allow | Action::Set => set = table.names().collect(),
            }
            continue;
        }

        match table.token(name) {
            Some(p) => match action {
                Action::Deny => set.retain(|s| *s != p),
                Action::Set => {
                    set.clear();
                    include(&mut set, p);
                }
                Action::Allow => include(&mut set, p),
            },
            None => {
                if action == Action::Set {
                    set.clear();
                }
                tracing::warn!("unrecognized protocol '{}'", name);
            }
        }
    }

    set.sort_by_key(|p| p.to_ascii_lowercase());
    Ok(set.join(","))
}

/// Checks that `name` is a protocol in `table`.
pub fn check_protocol(table: &ProtocolTable, name: Option<&str>) -> Result<(), ParamError> {
    let name = name.ok_or(ParamError::RequiresParameter)?;
    match table.token(name) {
        Some(_) => Ok(()),
        None => Err(ParamError::UnsupportedProtocol(name.to_string())),
    }
}
