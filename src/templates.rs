use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, html};

use crate::{
    entities::movie,
    forms::{FormErrors, RatingForm, TitleForm},
    models::SearchCandidate,
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const INPUT_CLASS: &str = "mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500";
const BUTTON_CLASS: &str =
    "w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700";

pub fn movie_list(movies: &[movie::Model]) -> String {
    page(
        "My Top Movies",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Top Movies" }
                            p class="mt-2 text-gray-600" { "These are my all-time favourite movies." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/add" { "Add Movie" }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No movies yet. Add one to get started." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for movie in movies {
                                (movie_card(movie))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn edit_page(movie: &movie::Model, form: &RatingForm, errors: &FormErrors) -> String {
    page(
        "Edit Movie",
        html! {
            (narrow_card(html! {
                h1 class="text-2xl font-bold text-gray-900" { (movie.title) }
                p class="mt-2 text-gray-600" { "Edit Movie Rating" }

                form class="mt-8 space-y-6" method="post" action=(format!("/edit/{}", movie.id)) {
                    (text_field("new_rating", "Your Rating Out of 10 e.g. 7.5", &form.new_rating, errors))
                    (text_field("new_review", "Your Review", &form.new_review, errors))
                    button class=(BUTTON_CLASS) type="submit" { "Done" }
                }
            }))
        },
    )
}

pub fn add_page(form: &TitleForm, errors: &FormErrors) -> String {
    page(
        "Add Movie",
        html! {
            (narrow_card(html! {
                h1 class="text-2xl font-bold text-gray-900" { "Add a Movie" }

                form class="mt-8 space-y-6" method="post" action="/add" {
                    (text_field("new_title", "Movie Title", &form.new_title, errors))
                    button class=(BUTTON_CLASS) type="submit" { "Add Movie" }
                }
            }))
        },
    )
}

pub fn select_page(query: &str, candidates: &[SearchCandidate]) -> String {
    page(
        "Select Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    h1 class="text-3xl font-bold text-gray-900" { "Select Movie" }
                    p class="mt-2 text-gray-600" { "Results for \"" (query) "\"" }

                    @if candidates.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No movies found." }
                            a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/add" { "Try another title" }
                        }
                    } @else {
                        ul class="mt-10 space-y-3" {
                            @for candidate in candidates {
                                li class="bg-white shadow rounded-lg p-4 flex gap-4" {
                                    @if let Some(poster) = &candidate.poster_url {
                                        img class="w-12 rounded" src=(poster) alt=(candidate.title);
                                    }
                                    div {
                                        a class="text-lg font-semibold text-blue-600 hover:text-blue-800" href=(format!("/add_db/{}", candidate.tmdb_id)) {
                                            (candidate.title)
                                            @if let Some(year) = candidate.year {
                                                " - " (year)
                                            }
                                        }
                                        @if !candidate.overview.is_empty() {
                                            p class="mt-1 text-sm text-gray-600" { (candidate.overview) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn error_page(status: StatusCode, message: String) -> String {
    page(
        "Error",
        html! {
            (narrow_card(html! {
                h1 class="text-2xl font-bold text-gray-900" {
                    (status.canonical_reason().unwrap_or("Error"))
                }
                p class="mt-4 text-gray-700" { (message) }
                a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
            }))
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

fn narrow_card(inner: Markup) -> Markup {
    html! {
        div class="min-h-screen bg-gray-50 flex items-center justify-center" {
            div class="max-w-xl w-full px-6" {
                div class="bg-white shadow rounded-lg p-8" { (inner) }
            }
        }
    }
}

fn text_field(name: &str, label: &str, value: &str, errors: &FormErrors) -> Markup {
    html! {
        div {
            label class="block text-sm font-medium text-gray-700" for=(name) { (label) }
            input class=(INPUT_CLASS) type="text" name=(name) id=(name) value=(value) required;
            @if let Some(err) = errors.get(name) {
                p class="mt-2 text-sm text-red-600" { (err.to_string()) }
            }
        }
    }
}

fn movie_card(movie: &movie::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6 flex gap-6" {
            @if !movie.img_url.is_empty() {
                img class="w-24 rounded" src=(movie.img_url) alt=(movie.title);
            }
            div class="flex-1" {
                div class="flex items-start justify-between gap-4" {
                    h2 class="text-xl font-semibold text-gray-900" {
                        @if let Some(ranking) = movie.ranking {
                            span class="mr-2 text-gray-400" { "#" (ranking) }
                        }
                        (movie.title)
                        span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                    }
                    @if let Some(rating) = movie.rating {
                        span class="text-lg font-semibold text-amber-600" { (format!("{rating:.1}")) }
                    }
                }
                @if let Some(review) = &movie.review {
                    p class="mt-2 italic text-gray-700" { "\"" (review) "\"" }
                }
                p class="mt-2 text-sm text-gray-600" { (movie.description) }
                div class="mt-4 flex gap-4 text-sm" {
                    a class="text-blue-600 hover:text-blue-800" href=(format!("/edit/{}", movie.id)) { "Update" }
                    a class="text-red-600 hover:text-red-800" href=(format!("/delete/{}", movie.id)) { "Delete" }
                }
            }
        }
    }
}
