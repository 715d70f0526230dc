use crate::model::JoinCandidate;

/// Keep informative columns and order them by score, best first.
///
/// The sort is stable: equal scores keep their input order.
pub fn rank_candidates<I>(candidates: I) -> Vec<JoinCandidate>
where
    I: IntoIterator<Item = JoinCandidate>,
{
    let mut ranked: Vec<JoinCandidate> = candidates
        .into_iter()
        .filter(JoinCandidate::is_informative)
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}
