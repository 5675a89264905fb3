use std::net::SocketAddr;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    pub tmdb: TmdbConfig,
}

/// Connection settings for the TMDB v3 API.
#[derive(Clone, Debug)]
pub struct TmdbConfig {
    pub base_url: String,
    pub image_base_url: String,
    /// Token for `/search/movie` (`SEARCH_ALL_BEARER`).
    pub search_token: String,
    /// Token for `/movie/{id}` (`SEARCH_BEARER`).
    pub detail_token: String,
    pub rps: u32,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().context("PORT")?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://movies.db?mode=rwc".to_string());

        let search_token = required_token("SEARCH_ALL_BEARER")?;
        let detail_token = required_token("SEARCH_BEARER")?;

        let base_url = std::env::var("TMDB_BASE_URL")
            .unwrap_or_else(|_| "https://api.themoviedb.org/3".to_string());
        let image_base_url = std::env::var("TMDB_IMAGE_BASE_URL")
            .unwrap_or_else(|_| "https://image.tmdb.org/t/p/w500".to_string());

        let rps: u32 = std::env::var("TMDB_RPS").ok().and_then(|s| s.parse().ok()).unwrap_or(4);

        let timeout_secs: u64 =
            std::env::var("TMDB_TIMEOUT_SECS").ok().and_then(|s| s.parse().ok()).unwrap_or(30);

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            database_url,
            tmdb: TmdbConfig {
                base_url,
                image_base_url,
                search_token,
                detail_token,
                rps,
                timeout_secs,
            },
        })
    }
}

fn required_token(name: &str) -> anyhow::Result<String> {
    let raw = std::env::var(name).with_context(|| format!("{name} must be set"))?;
    normalize_bearer(&raw).with_context(|| format!("{name} must not be blank"))
}

/// Accepts either a bare token or a full `Bearer <token>` header value.
pub fn normalize_bearer(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let token = match trimmed.split_once(char::is_whitespace) {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        _ if trimmed.eq_ignore_ascii_case("bearer") => "",
        _ => trimmed,
    };
    (!token.is_empty()).then(|| token.to_string())
}
