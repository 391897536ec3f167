use std::env;
use std::path::PathBuf;

/// Where the session token is persisted between CLI invocations.
///
/// The token is a plain string in a file, nothing more. Configured via
/// `HOMOLOGA_TOKEN_FILE`; defaults to `$HOME/.homologa/token`, falling back
/// to `.homologa-token` in the working directory when `HOME` is unset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenConfig {
    pub path: PathBuf,
}

impl TokenConfig {
    pub fn from_env() -> Self {
        let path = env::var("HOMOLOGA_TOKEN_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_path);

        Self { path }
    }

    fn default_path() -> PathBuf {
        match env::var("HOME") {
            Ok(home) if !home.trim().is_empty() => {
                PathBuf::from(home).join(".homologa").join("token")
            }
            _ => PathBuf::from(".homologa-token"),
        }
    }
}
