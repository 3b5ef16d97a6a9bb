/// Fixed component weights for the deterministic overall score.
///
/// A system constant: the same weights apply to every scoring call, and the
/// overall score is always exactly this linear combination of the five
/// components. Required-skill coverage dominates; project relevance carries
/// slightly more weight than the remaining signals.
pub const SCORE_WEIGHTS: Weights = Weights {
    required: 0.35,
    preferred: 0.15,
    semantic: 0.15,
    projects: 0.20,
    experience: 0.15,
};

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub required: f64,
    pub preferred: f64,
    pub semantic: f64,
    pub projects: f64,
    pub experience: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.required + self.preferred + self.semantic + self.projects + self.experience
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((SCORE_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }
}
