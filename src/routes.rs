use axum::{
    extract::{Form, Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    AppState,
    error::{AppError, AppResult},
    ranking,
    store::NewMovie,
    templates,
};

const MAX_DESCRIPTION_CHARS: usize = 500;
const MAX_REVIEW_CHARS: usize = 250;

pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let movies = state.store.list_all().await?;
    let ranked = ranking::rank(movies);
    Ok(Html(templates::index_page(&ranked)))
}

pub async fn add_form() -> Html<String> {
    Html(templates::add_page(None))
}

#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub title: String,
}

pub async fn add_submit(Form(form): Form<AddForm>) -> Response {
    let title = form.title.trim();
    if title.is_empty() {
        return Html(templates::add_page(Some("Enter a movie title."))).into_response();
    }
    Redirect::to(&format!("/select/{}", urlencoding::encode(title))).into_response()
}

pub async fn select(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<Html<String>> {
    match state.tmdb.search(&title).await {
        Ok(candidates) => {
            Ok(Html(templates::select_page(&title, &candidates, &state.config.image_base_url)))
        }
        Err(AppError::LookupUnavailable(reason)) => {
            tracing::warn!(%title, %reason, "movie lookup failed");
            Ok(Html(templates::select_unavailable_page(&title)))
        }
        Err(err) => Err(err),
    }
}

#[derive(Debug, Deserialize)]
pub struct SaveQuery {
    pub title: String,
    pub year: String,
    pub description: String,
    pub img_url: String,
}

pub async fn save(
    State(state): State<AppState>,
    Query(q): Query<SaveQuery>,
) -> AppResult<Redirect> {
    // Provider dates arrive as YYYY-MM-DD; only the year is stored. TMDB
    // sometimes omits the date entirely.
    let raw_year = q.year.trim();
    let year: i32 = raw_year
        .get(..4)
        .unwrap_or(raw_year)
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("release year {:?}", q.year)))?;

    let movie = state
        .store
        .insert(NewMovie {
            title: q.title,
            year,
            description: clamp_chars(&q.description, MAX_DESCRIPTION_CHARS),
            img_url: format!("{}{}", state.config.image_base_url, q.img_url),
        })
        .await?;

    Ok(Redirect::to(&format!("/edit?id={}", movie.id)))
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: i32,
}

pub async fn edit_form(
    State(state): State<AppState>,
    Query(q): Query<IdQuery>,
) -> AppResult<Html<String>> {
    let movie = state.store.get(q.id).await?;
    Ok(Html(templates::edit_page(&movie)))
}

#[derive(Debug, Deserialize)]
pub struct EditForm {
    pub rating: String,
    pub review: String,
}

pub async fn edit_submit(
    State(state): State<AppState>,
    Query(q): Query<IdQuery>,
    Form(form): Form<EditForm>,
) -> AppResult<Redirect> {
    // A non-numeric rating keeps the stored value; the review always wins.
    let rating = match form.rating.trim().parse::<f64>() {
        Ok(rating) => Some(rating),
        Err(_) => {
            tracing::warn!(id = q.id, input = %form.rating, "ignoring non-numeric rating");
            None
        }
    };

    state.store.update(q.id, rating, clamp_chars(&form.review, MAX_REVIEW_CHARS)).await?;
    Ok(Redirect::to("/"))
}

pub async fn delete(
    State(state): State<AppState>,
    Query(q): Query<IdQuery>,
) -> AppResult<Redirect> {
    state.store.delete(q.id).await?;
    Ok(Redirect::to("/"))
}

fn clamp_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
