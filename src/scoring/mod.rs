use serde::{Deserialize, Serialize};


pub const MAX_SCORE: u64 = 5000;

/// Linear decay profile turning a guess distance into points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoringProfile {
    /// World-wide rounds.
    Wide,
    /// Continental rounds, where the same error is worth less.
    Narrow,
}

impl ScoringProfile {
    pub fn max_distance_km(self) -> f64 {
        match self {
            ScoringProfile::Wide => 4000.0,
            ScoringProfile::Narrow => 1500.0,
        }
    }

    pub fn coefficient(self) -> f64 {
        match self {
            ScoringProfile::Wide => 1.25,
            ScoringProfile::Narrow => 3.3334,
        }
    }
}

/// Points for a guess `distance_km` away from the truth, in `0..=MAX_SCORE`.
pub fn score(distance_km: f64, profile: ScoringProfile) -> u64 {
    // `!(a < b)` also sends NaN to zero.
    if !(distance_km < profile.max_distance_km()) {
        return 0;
    }
    let distance_km = distance_km.max(0.0);
    let max_score = MAX_SCORE as f64;
    (max_score - distance_km * profile.coefficient())
        .round()
        .clamp(0.0, max_score) as u64
}
