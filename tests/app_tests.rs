use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use reelrank::{
    AppState, build_router,
    config::Config,
    db,
    store::{MovieStore, NewMovie},
    tmdb::TmdbClient,
};

// No access token configured, so the TMDB client serves mock data.
async fn test_app() -> (TestServer, MovieStore) {
    test_app_with_tmdb(String::new(), "https://api.themoviedb.org/3".to_string()).await
}

async fn test_app_with_tmdb(access_token: String, base_url: String) -> (TestServer, MovieStore) {
    let config = Arc::new(Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        database_url: "sqlite::memory:".to_string(),
        tmdb_access_token: access_token,
        tmdb_base_url: base_url,
        image_base_url: "https://image.tmdb.org/t/p/original".to_string(),
    });

    let db = db::connect_and_migrate(&config.database_url).await.expect("in-memory db");
    let store = MovieStore::new(db);
    let tmdb = Arc::new(TmdbClient::new(
        reqwest::Client::new(),
        config.tmdb_access_token.clone(),
        config.tmdb_base_url.clone(),
    ));

    let state = AppState { config, store: store.clone(), tmdb };
    (TestServer::new(build_router(state)).unwrap(), store)
}

#[tokio::test]
async fn empty_list_renders() {
    let (server, _store) = test_app().await;

    let response = server.get("/").await;
    response.assert_status_ok();
    assert!(response.text().contains("Nothing here yet"));
}

#[tokio::test]
async fn list_orders_best_rated_first() {
    let (server, store) = test_app().await;

    for (title, rating) in [("Low", 3.0), ("High", 7.0), ("Mid", 5.0)] {
        let movie = store
            .insert(NewMovie {
                title: title.to_string(),
                year: 2000,
                description: "d".to_string(),
                img_url: "/p.jpg".to_string(),
            })
            .await
            .unwrap();
        store.update(movie.id, Some(rating), " ".to_string()).await.unwrap();
    }

    let body = server.get("/").await.text();
    let pos = |needle: &str| body.find(needle).unwrap();
    assert!(pos("High") < pos("Mid"));
    assert!(pos("Mid") < pos("Low"));
    assert!(pos("#1") < pos("#2"));
}

#[tokio::test]
async fn add_redirects_to_select() {
    let (server, _store) = test_app().await;

    let response = server.post("/add").form(&[("title", "The Matrix")]).await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location").to_str().unwrap(), "/select/The%20Matrix");
}

#[tokio::test]
async fn add_rejects_blank_title() {
    let (server, _store) = test_app().await;

    let response = server.post("/add").form(&[("title", "   ")]).await;
    response.assert_status_ok();
    assert!(response.text().contains("Enter a movie title"));
}

#[tokio::test]
async fn select_renders_candidates() {
    let (server, _store) = test_app().await;

    let response = server.get("/select/Fight%20Club").await;
    response.assert_status_ok();
    assert!(response.text().contains("Fight Club"));
}

#[tokio::test]
async fn unreachable_provider_renders_lookup_unavailable_page() {
    // A real token forces a network call, and nothing listens on port 1.
    let (server, _store) =
        test_app_with_tmdb("test-token".to_string(), "http://127.0.0.1:1".to_string()).await;

    let response = server.get("/select/Interstellar").await;
    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Movie lookup unavailable"));
    assert!(body.contains("Interstellar"));
}

#[tokio::test]
async fn saving_a_duplicate_title_is_a_conflict() {
    let (server, store) = test_app().await;

    let first = server
        .get("/save")
        .add_query_param("title", "Inception")
        .add_query_param("year", "2010-07-16")
        .add_query_param("description", "D")
        .add_query_param("img_url", "/poster.jpg")
        .await;
    first.assert_status(StatusCode::SEE_OTHER);

    let second = server
        .get("/save")
        .add_query_param("title", "Inception")
        .add_query_param("year", "2010-07-16")
        .add_query_param("description", "D")
        .add_query_param("img_url", "/poster.jpg")
        .await;
    second.assert_status(StatusCode::CONFLICT);
    assert!(second.text().contains("already in the list"));

    assert_eq!(store.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn save_with_unparseable_year_is_a_bad_request() {
    let (server, store) = test_app().await;

    let response = server
        .get("/save")
        .add_query_param("title", "Undated")
        .add_query_param("year", "")
        .add_query_param("description", "D")
        .add_query_param("img_url", "/poster.jpg")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("invalid input"));

    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn save_round_trip_truncates_year_and_prefixes_poster() {
    let (server, store) = test_app().await;

    let response = server
        .get("/save")
        .add_query_param("title", "Dune")
        .add_query_param("year", "2021-10-01")
        .add_query_param("description", "D")
        .add_query_param("img_url", "/poster.jpg")
        .await;
    response.assert_status(StatusCode::SEE_OTHER);

    let movies = store.list_all().await.unwrap();
    assert_eq!(movies.len(), 1);
    let movie = &movies[0];
    assert_eq!(movie.year, 2021);
    assert_eq!(movie.img_url, "https://image.tmdb.org/t/p/original/poster.jpg");
    assert_eq!(
        response.header("location").to_str().unwrap(),
        format!("/edit?id={}", movie.id)
    );
}

#[tokio::test]
async fn edit_of_missing_movie_is_404() {
    let (server, _store) = test_app().await;

    let response = server.get("/edit").add_query_param("id", "999").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn non_numeric_rating_keeps_previous_value() {
    let (server, store) = test_app().await;

    let movie = store
        .insert(NewMovie {
            title: "Arrival".to_string(),
            year: 2016,
            description: "d".to_string(),
            img_url: "/p.jpg".to_string(),
        })
        .await
        .unwrap();
    store.update(movie.id, Some(7.5), " ".to_string()).await.unwrap();

    let response = server
        .post("/edit")
        .add_query_param("id", movie.id)
        .form(&[("rating", "abc"), ("review", "Still great.")])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);

    let updated = store.get(movie.id).await.unwrap();
    assert_eq!(updated.rating, 7.5);
    assert_eq!(updated.review, "Still great.");
}

#[tokio::test]
async fn valid_rating_is_applied() {
    let (server, store) = test_app().await;

    let movie = store
        .insert(NewMovie {
            title: "Sicario".to_string(),
            year: 2015,
            description: "d".to_string(),
            img_url: "/p.jpg".to_string(),
        })
        .await
        .unwrap();

    let response = server
        .post("/edit")
        .add_query_param("id", movie.id)
        .form(&[("rating", "8.2"), ("review", "Tense.")])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);

    let updated = store.get(movie.id).await.unwrap();
    assert_eq!(updated.rating, 8.2);
    assert_eq!(updated.review, "Tense.");
}

#[tokio::test]
async fn delete_redirects_and_removes() {
    let (server, store) = test_app().await;

    let movie = store
        .insert(NewMovie {
            title: "Se7en".to_string(),
            year: 1995,
            description: "d".to_string(),
            img_url: "/p.jpg".to_string(),
        })
        .await
        .unwrap();

    let response = server.get("/delete").add_query_param("id", movie.id).await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert!(store.get(movie.id).await.is_err());
}

#[tokio::test]
async fn delete_of_missing_movie_is_404() {
    let (server, _store) = test_app().await;

    let response = server.get("/delete").add_query_param("id", "999").await;
    response.assert_status_not_found();
}
