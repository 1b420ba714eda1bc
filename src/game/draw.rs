//! Drawing filler conversations from the shrinking pool.
//!
//! The service is stateless: callers thread the remaining pool through
//! successive draws.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{GameError, Result};

/// Permute `pool` in full, then split off the first `count` items.
///
/// Returns `(drawn, remaining)`. Asking for more than the pool holds is an
/// error rather than a short draw.
pub fn draw<T, R: Rng + ?Sized>(mut pool: Vec<T>, count: usize, rng: &mut R) -> Result<(Vec<T>, Vec<T>)> {
    if count > pool.len() {
        return Err(GameError::InsufficientPool {
            requested: count,
            available: pool.len(),
        });
    }
    pool.shuffle(rng);
    let remaining = pool.split_off(count);
    Ok((pool, remaining))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_draw_takes_distinct_items_from_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool: Vec<u32> = (1..=20).collect();

        let (drawn, remaining) = draw(pool.clone(), 6, &mut rng).unwrap();
        assert_eq!(drawn.len(), 6);
        assert_eq!(remaining.len(), 14);

        let drawn_set: HashSet<u32> = drawn.iter().copied().collect();
        assert_eq!(drawn_set.len(), 6);
        assert!(drawn.iter().all(|d| pool.contains(d)));
        assert!(remaining.iter().all(|r| !drawn_set.contains(r)));
    }

    #[test]
    fn test_draw_whole_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let (drawn, remaining) = draw(vec!['a', 'b', 'c'], 3, &mut rng).unwrap();
        assert_eq!(drawn.len(), 3);
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_draw_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let (drawn, remaining) = draw(vec![1, 2, 3], 0, &mut rng).unwrap();
        assert!(drawn.is_empty());
        assert_eq!(remaining.len(), 3);
    }

    #[test]
    fn test_draw_more_than_pool_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = draw(vec![1, 2, 3], 4, &mut rng);
        assert!(matches!(
            result,
            Err(GameError::InsufficientPool {
                requested: 4,
                available: 3
            })
        ));
    }

    #[test]
    fn test_draw_is_reproducible_with_same_seed() {
        let pool: Vec<u32> = (0..30).collect();
        let a = draw(pool.clone(), 10, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = draw(pool, 10, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }
}
