pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod forms;
pub mod models;
pub mod ranking;
pub mod routes;
pub mod store;
pub mod templates;
pub mod tmdb;

use std::{sync::Arc, time::Duration};

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{config::Config, store::MovieStore, tmdb::TmdbClient};

#[derive(Clone)]
pub struct AppState {
    pub store: MovieStore,
    pub tmdb: Arc<TmdbClient>,
}

impl AppState {
    pub async fn from_config(config: Config) -> anyhow::Result<Arc<Self>> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("movieshelf/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.tmdb.timeout_secs))
            .build()?;

        let db = db::connect_and_migrate(&config.database_url).await?;
        let tmdb = TmdbClient::new(http, &config.tmdb);

        Ok(Arc::new(Self {
            store: MovieStore::new(db),
            tmdb: Arc::new(tmdb),
        }))
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/edit/{movie_id}", get(routes::edit_form).post(routes::edit))
        .route("/delete/{movie_id}", get(routes::delete).post(routes::delete))
        .route("/add", get(routes::add_form).post(routes::search))
        .route("/add_db/{tmdb_id}", get(routes::add_db).post(routes::add_db))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
