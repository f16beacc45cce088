//! Pairwise similarity scoring: temporal kernel, adaptive signal
//! weighting, and candidate eligibility.

/// Year difference assumed when either side's year is unknown.
pub const UNKNOWN_YEAR_DIFF: f64 = 5.0;

/// Blending coefficients chosen from the magnitudes of the underlying
/// signals. Returns `(content_weight, text_weight)`; the first matching
/// rule wins. Both inputs enter symmetrically, so the selection is
/// symmetric in the pair.
pub fn adaptive_weights(text_sim: f64, tag_sim: f64) -> (f64, f64) {
    if text_sim > 0.6 {
        (0.80, 0.75)
    } else if text_sim > 0.3 {
        (0.85, 0.60)
    } else if tag_sim > 0.5 {
        (0.90, 0.30)
    } else {
        (0.90, 0.50)
    }
}

/// Gaussian kernel over the year gap. Unknown years on either side fall
/// back to a fixed gap of [`UNKNOWN_YEAR_DIFF`] rather than failing.
pub fn temporal_similarity(year_a: Option<i32>, year_b: Option<i32>, sigma: f64) -> f64 {
    let diff = match (year_a, year_b) {
        (Some(a), Some(b)) => (a - b).abs() as f64,
        _ => UNKNOWN_YEAR_DIFF,
    };
    (-diff * diff / (2.0 * sigma * sigma)).exp()
}

/// Blend the three similarity signals into one score.
pub fn final_score(text_sim: f64, tag_sim: f64, temporal_sim: f64) -> f64 {
    let (content_weight, text_weight) = adaptive_weights(text_sim, tag_sim);
    let tag_weight = 1.0 - text_weight;
    let content_sim = text_weight * text_sim + tag_weight * tag_sim;
    let temporal_weight = 1.0 - content_weight;
    content_weight * content_sim + temporal_weight * temporal_sim
}

/// Whether `candidate` may be recommended from `source`: never the entry
/// itself, never a locked entry. Locked entries remain valid sources.
pub fn pair_eligible(source: usize, candidate: usize, locked: &[bool]) -> bool {
    source != candidate && !locked[candidate]
}
