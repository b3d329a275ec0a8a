use std::net::Ipv4Addr;

/// Runtime settings read from the environment (loaded from .env in
/// development via dotenvy).
pub struct Config {
    pub host: Ipv4Addr,
    pub port: u16,
    pub upstream_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let host: Ipv4Addr = std::env::var("HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string())
            .parse()
            .expect("HOST is not in the correct format");

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "4001".to_string())
            .parse()
            .expect("PORT is not the correct format");

        let upstream_base_url = std::env::var("UPSTREAM_BASE_URL")
            .expect("UPSTREAM_BASE_URL must be set in .env");

        Self {
            host,
            port,
            upstream_base_url,
        }
    }
}
