use crate::entities::movie;

/// A movie paired with its dense display rank.
#[derive(Clone, Debug)]
pub struct RankedMovie {
    pub rank: i32,
    pub movie: movie::Model,
}

/// Assigns dense ranks 1..N over a sequence sorted ascending by rating:
/// the last entry (highest rating) gets rank 1. Ranks are derived per
/// request and never written back to the store.
pub fn rank(movies: Vec<movie::Model>) -> Vec<RankedMovie> {
    let n = movies.len() as i32;
    movies
        .into_iter()
        .enumerate()
        .map(|(i, movie)| RankedMovie { rank: n - i as i32, movie })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i32, rating: f64) -> movie::Model {
        movie::Model {
            id,
            title: format!("Movie {id}"),
            year: 2000,
            description: "desc".to_string(),
            rating,
            ranking: 10,
            review: " ".to_string(),
            img_url: "/poster.jpg".to_string(),
        }
    }

    #[test]
    fn empty_list_yields_no_ranks() {
        assert!(rank(Vec::new()).is_empty());
    }

    #[test]
    fn highest_rating_gets_rank_one() {
        let mut movies = vec![movie(1, 3.0), movie(2, 7.0), movie(3, 5.0)];
        movies.sort_by(|a, b| a.rating.total_cmp(&b.rating));

        let ranked = rank(movies);

        let rank_of = |rating: f64| {
            ranked.iter().find(|r| r.movie.rating == rating).map(|r| r.rank).unwrap()
        };
        assert_eq!(rank_of(3.0), 3);
        assert_eq!(rank_of(5.0), 2);
        assert_eq!(rank_of(7.0), 1);
    }

    #[test]
    fn ranks_form_a_dense_permutation() {
        let movies: Vec<_> = (1..=6).map(|i| movie(i, i as f64)).collect();
        let mut ranks: Vec<i32> = rank(movies).iter().map(|r| r.rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn ties_keep_retrieval_order() {
        let ranked = rank(vec![movie(1, 5.0), movie(2, 5.0)]);
        assert_eq!(ranked[0].movie.id, 1);
        assert_eq!(ranked[0].rank, 2);
        assert_eq!(ranked[1].movie.id, 2);
        assert_eq!(ranked[1].rank, 1);
    }
}
