use maud::{DOCTYPE, Markup, html};

use crate::{entities::movie, ranking::RankedMovie, tmdb::Candidate};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn index_page(ranked: &[RankedMovie]) -> String {
    page(
        "My Top Movies",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-3xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Top Movies" }
                            p class="mt-2 text-gray-600" { "Ranked by your ratings." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/add" { "Add Movie" }
                    }

                    @if ranked.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "Nothing here yet. Add your first movie." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            // Ascending input, best rated shown first.
                            @for entry in ranked.iter().rev() {
                                (movie_card(entry))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn add_page(notice: Option<&str>) -> String {
    page(
        "Add Movie",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Add Movie" }
                        @if let Some(notice) = notice {
                            p class="mt-4 text-sm text-red-600" { (notice) }
                        }
                        form class="mt-6 space-y-6" method="post" action="/add" {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="title" { "Movie title" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="title" id="title" required;
                            }
                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Search" }
                        }
                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

pub fn select_page(title: &str, candidates: &[Candidate], image_base_url: &str) -> String {
    page(
        "Select Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-3xl mx-auto px-6 py-12" {
                    h1 class="text-3xl font-bold text-gray-900" { "Results for " "\u{201c}" (title) "\u{201d}" }

                    @if candidates.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No matches found. Try a different title." }
                            a class="mt-4 inline-block text-blue-600 hover:text-blue-800" href="/add" { "Search again" }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for candidate in candidates {
                                (candidate_card(candidate, image_base_url))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn select_unavailable_page(title: &str) -> String {
    page(
        "Lookup unavailable",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Movie lookup unavailable" }
                        p class="mt-4 text-gray-700" {
                            "The metadata provider could not be reached while searching for "
                            "\u{201c}" (title) "\u{201d}" ". Try again in a moment."
                        }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/add" { "Back" }
                    }
                }
            }
        },
    )
}

pub fn edit_page(movie: &movie::Model) -> String {
    page(
        "Rate Movie",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { (movie.title) " (" (movie.year) ")" }
                        form class="mt-6 space-y-6" method="post" action=(format!("/edit?id={}", movie.id)) {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="rating" { "Your rating out of 10" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="rating" id="rating" value=(movie.rating) required;
                            }
                            div {
                                label class="block text-sm font-medium text-gray-700" for="review" { "Your review" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="review" id="review" value=(movie.review) maxlength="250";
                            }
                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Done" }
                        }
                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
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

fn movie_card(entry: &RankedMovie) -> Markup {
    let movie = &entry.movie;
    html! {
        div class="bg-white shadow rounded-lg p-6 flex gap-6" {
            img class="h-36 w-24 rounded object-cover bg-gray-200" src=(movie.img_url) alt=(movie.title);
            div class="flex-1" {
                div class="flex items-start justify-between gap-4" {
                    h2 class="text-xl font-semibold text-gray-900" {
                        span class="text-gray-400" { "#" (entry.rank) " " }
                        (movie.title)
                        span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                    }
                    span class="text-lg font-semibold text-gray-900" { (movie.rating) "/10" }
                }
                p class="mt-2 text-sm text-gray-600" { (movie.description) }
                @if !movie.review.trim().is_empty() {
                    p class="mt-2 text-sm italic text-gray-700" { "\u{201c}" (movie.review) "\u{201d}" }
                }
                div class="mt-4 flex gap-4 text-sm" {
                    a class="text-blue-600 hover:text-blue-800" href=(format!("/edit?id={}", movie.id)) { "Edit" }
                    a class="text-red-600 hover:text-red-800" href=(format!("/delete?id={}", movie.id)) { "Delete" }
                }
            }
        }
    }
}

fn candidate_card(candidate: &Candidate, image_base_url: &str) -> Markup {
    let save_url = format!(
        "/save?title={}&year={}&description={}&img_url={}",
        urlencoding::encode(&candidate.title),
        urlencoding::encode(&candidate.release_date),
        urlencoding::encode(&candidate.overview),
        urlencoding::encode(candidate.poster_path.as_deref().unwrap_or("")),
    );

    html! {
        a class="bg-white shadow rounded-lg p-6 flex gap-6 hover:ring-2 hover:ring-blue-500" href=(save_url) {
            @if let Some(path) = &candidate.poster_path {
                img class="h-36 w-24 rounded object-cover bg-gray-200" src=(format!("{image_base_url}{path}")) alt=(candidate.title);
            }
            div {
                h2 class="text-xl font-semibold text-gray-900" {
                    (candidate.title)
                    @if !candidate.year().is_empty() {
                        span class="ml-2 font-normal text-gray-500" { "(" (candidate.year()) ")" }
                    }
                }
                p class="mt-2 text-sm text-gray-600" { (candidate.overview) }
            }
        }
    }
}
