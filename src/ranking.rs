//! Rank derivation for the movie list.
//!
//! Movies are ordered ascending by rating and labelled `total - position`, so
//! the best-rated movie is rank 1. Unrated movies compare lowest, matching how
//! SQLite orders `NULL` in an ascending sort.

use std::cmp::Ordering;

/// Stable ascending sort by rating; equal ratings keep their input order.
pub fn sort_by_rating<T>(items: &mut [T], rating: impl Fn(&T) -> Option<f64>) {
    items.sort_by(|a, b| compare_ratings(rating(a), rating(b)));
}

fn compare_ratings(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.total_cmp(&b),
    }
}

pub fn rank_for(position: usize, total: usize) -> i32 {
    i32::try_from(total.saturating_sub(position)).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(ratings: &[Option<f64>]) -> Vec<(usize, i32)> {
        let mut items: Vec<(usize, Option<f64>)> = ratings.iter().copied().enumerate().collect();
        sort_by_rating(&mut items, |(_, r)| *r);
        let total = items.len();
        items.iter().enumerate().map(|(pos, (idx, _))| (*idx, rank_for(pos, total))).collect()
    }

    #[test]
    fn highest_rating_is_rank_one() {
        let ranks = ranked(&[Some(6.0), Some(9.1), Some(3.5)]);
        assert_eq!(ranks, vec![(2, 3), (0, 2), (1, 1)]);
    }

    #[test]
    fn ranks_are_a_permutation() {
        let ranks = ranked(&[Some(7.0), None, Some(2.0), Some(7.0), Some(10.0), None]);
        let mut values: Vec<i32> = ranks.iter().map(|(_, r)| *r).collect();
        values.sort_unstable();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn unrated_sort_first() {
        let ranks = ranked(&[Some(1.0), None]);
        assert_eq!(ranks, vec![(1, 2), (0, 1)]);
    }

    #[test]
    fn ties_keep_input_order() {
        let ranks = ranked(&[Some(8.0), Some(8.0), Some(8.0)]);
        assert_eq!(ranks, vec![(0, 3), (1, 2), (2, 1)]);
    }

    #[test]
    fn empty_list() {
        assert!(ranked(&[]).is_empty());
    }
}
