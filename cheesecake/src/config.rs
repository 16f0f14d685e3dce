use std::env;
use std::fmt;
use std::str::FromStr;

/// Which storage sits behind the comment and gallery endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BackendKind {
    /// Read-only JSON files from the data directory
    #[default]
    Static,
    /// Embedded native_db store
    Document,
    /// Supabase REST API
    Supabase,
}

impl BackendKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BackendKind::Static => "static",
            BackendKind::Document => "document",
            BackendKind::Supabase => "supabase",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(BackendKind::Static),
            "document" => Ok(BackendKind::Document),
            "supabase" => Ok(BackendKind::Supabase),
            other => anyhow::bail!("unknown backend '{other}' (expected static, document or supabase)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub backend: BackendKind,
    pub data_dir: String,
    pub public_dir: String,
    pub database_path: String,
    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<String>,
    pub comments_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8787,
            backend: BackendKind::Static,
            data_dir: "./public/data".to_string(),
            public_dir: "./public".to_string(),
            database_path: "./cheesecake.db".to_string(),
            supabase_url: None,
            supabase_anon_key: None,
            comments_limit: crate::comments::DEFAULT_COMMENTS_LIMIT,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let backend = match lookup("BACKEND") {
            Some(value) => value.parse()?,
            None => defaults.backend,
        };

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: lookup("SERVER_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.server_port),
            backend,
            data_dir: lookup("DATA_DIR").unwrap_or(defaults.data_dir),
            public_dir: lookup("PUBLIC_DIR").unwrap_or(defaults.public_dir),
            database_path: lookup("DATABASE_PATH").unwrap_or(defaults.database_path),
            supabase_url: lookup("SUPABASE_URL").filter(|v| !v.is_empty()),
            supabase_anon_key: lookup("SUPABASE_ANON_KEY").filter(|v| !v.is_empty()),
            comments_limit: lookup("COMMENTS_LIMIT")
                .and_then(|l| l.parse().ok())
                .unwrap_or(defaults.comments_limit),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.backend, BackendKind::Static);
        assert_eq!(config.bind_address(), "0.0.0.0:8787");
        assert_eq!(config.data_dir, "./public/data");
        assert_eq!(config.comments_limit, 10);
        assert!(config.supabase_url.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("BACKEND", "Supabase"),
            ("SERVER_PORT", "9000"),
            ("SUPABASE_URL", "https://example.supabase.co"),
            ("SUPABASE_ANON_KEY", ""),
            ("COMMENTS_LIMIT", "25"),
        ])
        .unwrap();

        assert_eq!(config.backend, BackendKind::Supabase);
        assert_eq!(config.server_port, 9000);
        assert_eq!(config.supabase_url.as_deref(), Some("https://example.supabase.co"));
        assert!(config.supabase_anon_key.is_none());
        assert_eq!(config.comments_limit, 25);
    }

    #[test]
    fn test_unparseable_port_falls_back() {
        let config = config_from(&[("SERVER_PORT", "eighty")]).unwrap();
        assert_eq!(config.server_port, 8787);
    }

    #[test]
    fn test_unknown_backend_is_an_error() {
        assert!(config_from(&[("BACKEND", "mongo")]).is_err());
    }

    #[test]
    fn test_cli_names_match_env_names() {
        use clap::ValueEnum;

        for kind in BackendKind::value_variants() {
            let name = kind.to_possible_value().map(|v| v.get_name().to_string());
            assert_eq!(name.as_deref(), Some(kind.as_str()));
        }
    }
}
