use std::{num::NonZeroU32, sync::Arc};

use anyhow::Context;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use jiff::civil::Date;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::{
    config::TmdbConfig,
    error::AppResult,
    models::{NewMovie, SearchCandidate},
};

pub struct TmdbClient {
    client: reqwest::Client,
    base_url: String,
    image_base_url: String,
    search_token: String,
    detail_token: String,
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl TmdbClient {
    pub fn new(client: reqwest::Client, config: &TmdbConfig) -> Self {
        let rps = NonZeroU32::new(config.rps).unwrap_or(NonZeroU32::MIN);
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            image_base_url: config.image_base_url.trim_end_matches('/').to_string(),
            search_token: config.search_token.clone(),
            detail_token: config.detail_token.clone(),
            limiter: Arc::new(RateLimiter::direct(Quota::per_second(rps))),
        }
    }

    pub async fn search_movies(&self, title: &str) -> AppResult<Vec<SearchCandidate>> {
        self.limiter.until_ready().await;

        let url = format!("{}/search/movie", self.base_url);
        let resp: SearchResponse = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .bearer_auth(&self.search_token)
            .query(&[("query", title)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::debug!(title, results = resp.results.len(), "TMDB search finished");

        Ok(resp.results.into_iter().map(|m| m.into_candidate(&self.image_base_url)).collect())
    }

    pub async fn movie_details(&self, tmdb_id: i32) -> AppResult<NewMovie> {
        self.limiter.until_ready().await;

        let url = format!("{}/movie/{}", self.base_url, tmdb_id);
        let details: MovieDetails = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .bearer_auth(&self.detail_token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let year = details
            .release_date
            .as_deref()
            .and_then(release_year)
            .with_context(|| format!("TMDB movie {tmdb_id} has no usable release date"))?;

        Ok(NewMovie {
            title: details.original_title,
            year: i32::from(year),
            description: details.overview.unwrap_or_default(),
            img_url: details
                .poster_path
                .as_deref()
                .map(|path| poster_url(&self.image_base_url, path))
                .unwrap_or_default(),
        })
    }
}

/// Year of a TMDB `YYYY-MM-DD` release date. TMDB sends `""` for unknown dates.
pub fn release_year(date: &str) -> Option<i16> {
    date.trim().parse::<Date>().ok().map(|d| d.year())
}

pub fn poster_url(image_base_url: &str, poster_path: &str) -> String {
    format!("{}/{}", image_base_url.trim_end_matches('/'), poster_path.trim_start_matches('/'))
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchMovie>,
}

#[derive(Debug, Deserialize)]
struct SearchMovie {
    id: i32,
    title: String,
    release_date: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
}

impl SearchMovie {
    fn into_candidate(self, image_base_url: &str) -> SearchCandidate {
        SearchCandidate {
            tmdb_id: self.id,
            year: self.release_date.as_deref().and_then(release_year),
            title: self.title,
            overview: self.overview.unwrap_or_default(),
            poster_url: self.poster_path.as_deref().map(|p| poster_url(image_base_url, p)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MovieDetails {
    original_title: String,
    release_date: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_year_parses_tmdb_dates() {
        assert_eq!(release_year("1999-03-30"), Some(1999));
        assert_eq!(release_year(""), None);
        assert_eq!(release_year("soon"), None);
    }

    #[test]
    fn poster_url_joins_without_double_slash() {
        assert_eq!(
            poster_url("https://image.tmdb.org/t/p/w500/", "/abc.jpg"),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(
            poster_url("https://image.tmdb.org/t/p/w500", "abc.jpg"),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
    }

    #[test]
    fn search_results_tolerate_missing_fields() {
        let body = r#"{"page":1,"results":[{"id":603,"title":"The Matrix","release_date":"1999-03-30","poster_path":null}]}"#;
        let resp: SearchResponse = serde_json::from_str(body).unwrap();
        let candidates: Vec<SearchCandidate> =
            resp.results.into_iter().map(|m| m.into_candidate("https://img")).collect();
        assert_eq!(
            candidates,
            vec![SearchCandidate {
                tmdb_id: 603,
                title: "The Matrix".to_string(),
                year: Some(1999),
                overview: String::new(),
                poster_url: None,
            }]
        );
    }

    #[test]
    fn search_response_requires_results() {
        assert!(serde_json::from_str::<SearchResponse>(r#"{"page":1}"#).is_err());
    }
}
