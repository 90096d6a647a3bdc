//! Quiz turn selection
//!
//! A turn builds the pool (one category or all of them), drops questions
//! already served in this session, and picks one uniformly at random.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Question;

/// `quiz_category` value meaning "every category"
pub const ALL_CATEGORIES: i32 = 0;

/// Drop every question whose id was already served.
pub fn unseen(candidates: Vec<Question>, previous: &[i32]) -> Vec<Question> {
    let seen: HashSet<i32> = previous.iter().copied().collect();
    candidates
        .into_iter()
        .filter(|q| !seen.contains(&q.id))
        .collect()
}

/// Pick the next question, or `None` once the pool is exhausted.
pub fn pick_next<R: Rng + ?Sized>(pool: &[Question], rng: &mut R) -> Option<Question> {
    pool.choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewQuestion;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn questions(ids: &[i32]) -> Vec<Question> {
        ids.iter().map(|id| NewQuestion::default().with_id(*id)).collect()
    }

    #[test]
    fn unseen_excludes_previous() {
        let pool = unseen(questions(&[1, 2, 3, 4]), &[2, 4, 9]);
        let ids: Vec<i32> = pool.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn pick_never_returns_previous() {
        let mut rng = StdRng::seed_from_u64(7);
        let previous = [1, 3, 5];
        let pool = unseen(questions(&[1, 2, 3, 4, 5, 6]), &previous);

        for _ in 0..100 {
            let next = pick_next(&pool, &mut rng).unwrap();
            assert!(!previous.contains(&next.id));
        }
    }

    #[test]
    fn pick_covers_whole_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = questions(&[10, 20, 30]);
        let picked: HashSet<i32> = (0..200)
            .filter_map(|_| pick_next(&pool, &mut rng))
            .map(|q| q.id)
            .collect();
        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn exhausted_pool_yields_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = unseen(questions(&[1, 2]), &[1, 2]);
        assert!(pick_next(&pool, &mut rng).is_none());
    }
}
