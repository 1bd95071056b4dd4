use serde::Deserialize;

use crate::error::{AppError, AppResult};

pub struct TmdbClient {
    client: reqwest::Client,
    access_token: String,
    base_url: String,
}

/// A search result from the metadata provider, not yet persisted.
#[derive(Clone, Debug, Deserialize)]
pub struct Candidate {
    pub title: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
}

impl Candidate {
    /// TMDB release dates are YYYY-MM-DD; the picker only shows the year.
    pub fn year(&self) -> &str {
        let date = self.release_date.trim();
        date.get(..4).unwrap_or(date)
    }
}

impl TmdbClient {
    pub fn new(client: reqwest::Client, access_token: String, base_url: String) -> Self {
        // Warn once on app load if using mock data
        if access_token.trim().is_empty() {
            tracing::warn!("Using mock TMDB data - no TMDB_ACCESS_TOKEN provided");
        }
        Self { client, access_token, base_url }
    }

    /// Searches the provider for a title. An unreachable provider or a
    /// non-2xx response maps to `LookupUnavailable`; an empty result list
    /// is an `Ok`.
    pub async fn search(&self, title: &str) -> AppResult<Vec<Candidate>> {
        // Use mock data if access token is not provided
        if self.access_token.trim().is_empty() {
            return Ok(mock_results());
        }

        let url = format!("{}/search/movie", self.base_url.trim_end_matches('/'));
        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .query(&[
                ("query", title),
                ("include_adult", "false"),
                ("language", "en-US"),
                ("page", "1"),
            ])
            .send()
            .await
            .map_err(lookup_err)?
            .error_for_status()
            .map_err(lookup_err)?
            .json::<SearchResponse>()
            .await
            .map_err(lookup_err)?;

        Ok(resp.results)
    }
}

fn lookup_err(err: reqwest::Error) -> AppError {
    AppError::LookupUnavailable(err.to_string())
}

fn mock_results() -> Vec<Candidate> {
    vec![
        Candidate {
            title: "Fight Club".to_string(),
            release_date: "1999-10-15".to_string(),
            overview: "An insomniac office worker and a soap maker form an \
                       underground fight club."
                .to_string(),
            poster_path: Some("/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg".to_string()),
        },
        Candidate {
            title: "Fight Club (Mock)".to_string(),
            release_date: "2006-09-29".to_string(),
            overview: "Mock search result returned without a TMDB access token.".to_string(),
            poster_path: None,
        },
    ]
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<Candidate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_truncates_full_dates() {
        let c = Candidate {
            title: "Dune".to_string(),
            release_date: "2021-10-01".to_string(),
            overview: String::new(),
            poster_path: None,
        };
        assert_eq!(c.year(), "2021");
    }

    #[test]
    fn year_passes_short_values_through() {
        let c = Candidate {
            title: "Unknown".to_string(),
            release_date: String::new(),
            overview: String::new(),
            poster_path: None,
        };
        assert_eq!(c.year(), "");
    }
}
