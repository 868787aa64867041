//! Read-only table of known protocol names.

/// Protocol names recognized when no other table is supplied.
pub const BUILTIN_PROTOCOLS: &[&str] = &[
    "dict", "file", "ftp", "ftps", "gopher", "gophers", "http", "https", "imap", "imaps", "ipfs",
    "ipns", "ldap", "ldaps", "mqtt", "pop3", "pop3s", "rtmp", "rtmpe", "rtmps", "rtmpt", "rtmpte",
    "rtmpts", "rtsp", "scp", "sftp", "smb", "smbs", "smtp", "smtps", "telnet", "tftp", "ws", "wss",
];

/// The set of protocol names a protocol spec may refer to.
///
/// Passed explicitly to every function that needs it; never global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolTable {
    names: Vec<String>,
}

impl ProtocolTable {
    /// Builds a table from `names`, lowercased and deduplicated.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().to_ascii_lowercase();
            if !name.is_empty() && !out.contains(&name) {
                out.push(name);
            }
        }
        Self { names: out }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_PROTOCOLS)
    }

    /// The table's own spelling of `name`, matched case-insensitively.
    pub fn token(&self, name: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|n| n.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ProtocolTable {
    fn default() -> Self {
        Self::builtin()
    }
}
