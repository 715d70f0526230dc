/// M-to-N overlap score between two distinct-value sets.
///
/// `distinct_union` must be the size of the union of the two sets, so
/// `left + right - union` is the number of shared values. The result is that
/// count divided by the smaller set's size: 1.0 when the smaller set is fully
/// contained in the larger, 0.0 when either set is empty.
pub fn overlap_score(distinct_left: usize, distinct_right: usize, distinct_union: usize) -> f64 {
    let smaller = distinct_left.min(distinct_right);
    if smaller == 0 {
        return 0.0;
    }
    shared_values(distinct_left, distinct_right, distinct_union) as f64 / smaller as f64
}

/// Values present on both sides, by inclusion-exclusion.
pub fn shared_values(distinct_left: usize, distinct_right: usize, distinct_union: usize) -> usize {
    (distinct_left + distinct_right).saturating_sub(distinct_union)
}
