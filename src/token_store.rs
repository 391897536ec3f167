//! Persistence of the session token between invocations.
//!
//! The token is a plain string in a file; nothing is encrypted or signed
//! here. The file path comes from [`TokenConfig`].

use std::fs;
use std::io::ErrorKind;

use anyhow::Context;
use homologa_config::TokenConfig;

/// Writes the token, creating the parent directory if needed.
pub fn save(config: &TokenConfig, token: &str) -> anyhow::Result<()> {
    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("no se pudo crear {}", parent.display()))?;
        }
    }
    fs::write(&config.path, token)
        .with_context(|| format!("no se pudo guardar el token en {}", config.path.display()))
}

/// Reads the persisted token, if any.
pub fn load(config: &TokenConfig) -> anyhow::Result<Option<String>> {
    match fs::read_to_string(&config.path) {
        Ok(token) => {
            let token = token.trim().to_string();
            Ok((!token.is_empty()).then_some(token))
        }
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err).with_context(|| format!("no se pudo leer {}", config.path.display())),
    }
}

/// Removes the persisted token. A missing file is not an error.
pub fn clear(config: &TokenConfig) -> anyhow::Result<()> {
    match fs::remove_file(&config.path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => {
            Err(err).with_context(|| format!("no se pudo borrar {}", config.path.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    fn temp_config(name: &str) -> TokenConfig {
        let mut path = env::temp_dir();
        path.push(format!("homologa-test-{}-{}", std::process::id(), name));
        path.push("token");
        TokenConfig { path }
    }

    #[test]
    fn test_save_load_roundtrip() {
        let config = temp_config("roundtrip");
        save(&config, "abc123").unwrap();
        assert_eq!(load(&config).unwrap(), Some("abc123".to_string()));
        clear(&config).unwrap();
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let config = TokenConfig {
            path: PathBuf::from("/definitely/not/here/token"),
        };
        assert_eq!(load(&config).unwrap(), None);
    }

    #[test]
    fn test_load_trims_whitespace() {
        let config = temp_config("trim");
        save(&config, "  abc123\n").unwrap();
        assert_eq!(load(&config).unwrap(), Some("abc123".to_string()));
        clear(&config).unwrap();
    }

    #[test]
    fn test_load_empty_file_is_none() {
        let config = temp_config("empty");
        save(&config, "").unwrap();
        assert_eq!(load(&config).unwrap(), None);
        clear(&config).unwrap();
    }

    #[test]
    fn test_clear_twice_is_ok() {
        let config = temp_config("clear");
        save(&config, "abc").unwrap();
        clear(&config).unwrap();
        clear(&config).unwrap();
    }
}
