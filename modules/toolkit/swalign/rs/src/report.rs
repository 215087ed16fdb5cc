use swalign_alignment_rs::pairwise::scoring::Score;
use swalign_alignment_rs::pairwise::sw::Outcome;

/// Human readable representation of a single alignment outcome.
pub fn render<S: Score>(outcome: &Outcome<S>) -> String {
    match outcome {
        Outcome::Aligned(alignment) => format!("SCORE: {}\n{}", alignment.score(), alignment),
        Outcome::NoAlignment => "No alignment found".to_string(),
        Outcome::BelowMinScore { score, min_score } => {
            format!("Resulting alignment score < minscore value: {score} < {min_score}")
        }
        Outcome::BelowMinLength { length, min_length } => {
            format!("Resulting alignment length < minlength value: {length} < {min_length}")
        }
    }
}
