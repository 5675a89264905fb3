use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::info;

use crate::{
    AppState,
    error::{AppError, AppResult},
    forms::{FormErrors, RatingForm, TitleForm},
    templates,
};

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.store.rank_all().await?;
    Ok(Html(templates::movie_list(&movies)))
}

pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i32>,
) -> AppResult<Html<String>> {
    let movie =
        state.store.get(movie_id).await?.ok_or_else(|| AppError::movie_not_found(movie_id))?;
    Ok(Html(templates::edit_page(&movie, &RatingForm::default(), &FormErrors::default())))
}

pub async fn edit(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i32>,
    Form(form): Form<RatingForm>,
) -> AppResult<Response> {
    match form.validate() {
        Ok(update) => {
            let movie = state.store.update_review(movie_id, update).await?;
            info!(movie_id, rating = movie.rating, "movie rating updated");
            Ok(Redirect::to("/").into_response())
        },
        Err(errors) => {
            let movie = state
                .store
                .get(movie_id)
                .await?
                .ok_or_else(|| AppError::movie_not_found(movie_id))?;
            let body = templates::edit_page(&movie, &form, &errors);
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(body)).into_response())
        },
    }
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i32>,
) -> AppResult<Redirect> {
    state.store.delete(movie_id).await?;
    info!(movie_id, "movie deleted");
    Ok(Redirect::to("/"))
}

pub async fn add_form() -> Html<String> {
    Html(templates::add_page(&TitleForm::default(), &FormErrors::default()))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Form(form): Form<TitleForm>,
) -> AppResult<Response> {
    let title = match form.validate() {
        Ok(title) => title,
        Err(errors) => {
            let body = templates::add_page(&form, &errors);
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(body)).into_response());
        },
    };

    let candidates = state.tmdb.search_movies(&title).await?;
    info!(title = %title, results = candidates.len(), "movie search");
    Ok(Html(templates::select_page(&title, &candidates)).into_response())
}

pub async fn add_db(
    State(state): State<Arc<AppState>>,
    Path(tmdb_id): Path<i32>,
) -> AppResult<Redirect> {
    let new_movie = state.tmdb.movie_details(tmdb_id).await?;
    let movie = state.store.insert(new_movie).await?;
    info!(movie_id = movie.id, tmdb_id, title = %movie.title, "movie added");
    Ok(Redirect::to(&format!("/edit/{}", movie.id)))
}
