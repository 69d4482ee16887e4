use std::net::{IpAddr, Ipv4Addr};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub rpc_prefix: String,
    pub seed_fixtures: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let host = std::env::var("HOST").map_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED), |h| {
            h.parse::<IpAddr>().expect("HOST must be an ip address")
        });

        let port = std::env::var("PORT").map_or(8080, |p| {
            p.parse::<u16>().expect("PORT must be number")
        });

        let rpc_prefix = std::env::var("RPC_PREFIX").unwrap_or("/trpc".to_string());

        let seed_fixtures = std::env::var("SEED_FIXTURES")
            .map(|v| v.eq("true"))
            .unwrap_or(true);

        Self {
            host,
            port,
            rpc_prefix: normalize_prefix(&rpc_prefix),
            seed_fixtures,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            rpc_prefix: "/trpc".to_string(),
            seed_fixtures: true,
        }
    }
}

/// Leading slash, no trailing slash, as `Router::nest` expects.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/trpc".to_string()
    } else {
        format!("/{trimmed}")
    }
}
