use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/todos.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub data_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unparsable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("APP_HOST")
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let data_path = lookup("APP_DATA_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        Self {
            host,
            port,
            data_path,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_bind_loopback() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.addr(), SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(config.data_path, PathBuf::from("data/todos.json"));
    }

    #[test]
    fn env_values_override_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("APP_HOST", "0.0.0.0"),
            ("PORT", "9191"),
            ("APP_DATA_PATH", "/tmp/widget.json"),
        ]));
        assert_eq!(config.addr(), SocketAddr::from(([0, 0, 0, 0], 9191)));
        assert_eq!(config.data_path, PathBuf::from("/tmp/widget.json"));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "http"),
            ("APP_HOST", "local"),
            ("APP_DATA_PATH", " "),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.data_path, PathBuf::from("data/todos.json"));
    }
}
