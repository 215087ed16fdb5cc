use rand::prelude::*;
use rand::rngs::StdRng;

use swalign_alignment_rs::pairwise::scoring::Linear;
use swalign_alignment_rs::pairwise::sw::{self, Cell, Filters, Outcome, ScoreMatrix, Selection};
use swalign_alignment_rs::pairwise::Op;

use super::local::Score;

const ALPHABET: &[u8] = b"ACGT";

fn random_seq(rng: &mut StdRng, maxlen: usize) -> String {
    let len = rng.gen_range(0..=maxlen);
    (0..len)
        .map(|_| *ALPHABET.choose(rng).unwrap() as char)
        .collect()
}

fn random_scheme(rng: &mut StdRng) -> Linear<Score> {
    Linear::new(
        rng.gen_range(1..=5),
        rng.gen_range(-5..=0),
        rng.gen_range(-5..=0),
    )
    .unwrap()
}

fn workloads(seed: u64, count: usize) -> Vec<(String, String, Linear<Score>)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let seq1 = random_seq(&mut rng, 40);
            let seq2 = random_seq(&mut rng, 40);
            (seq1, seq2, random_scheme(&mut rng))
        })
        .collect()
}

fn first_maximum(matrix: &ScoreMatrix<Score>) -> Option<(Cell, Score)> {
    let mut best: Option<(Cell, Score)> = None;
    for (cell, score) in matrix.cells() {
        if score > best.map(|x| x.1).unwrap_or(0) {
            best = Some((cell, score));
        }
    }
    best
}

#[test]
fn test_matrix_invariants() {
    for (seq1, seq2, scheme) in workloads(42, 200) {
        let matrix = ScoreMatrix::build(&seq1, &seq2, &scheme);
        assert_eq!(matrix.rows(), seq1.len() + 1);
        assert_eq!(matrix.cols(), seq2.len() + 1);

        for (cell, score) in matrix.cells() {
            assert!(score >= 0, "{seq1} & {seq2}: negative score at {cell}");
            if cell.row == 0 || cell.col == 0 {
                assert_eq!(score, 0, "{seq1} & {seq2}: non-zero boundary at {cell}");
            }
        }

        // The matrix depends on its inputs only
        assert_eq!(matrix, ScoreMatrix::build(&seq1, &seq2, &scheme));
    }
}

#[test]
fn test_best_is_first_maximum() {
    for (seq1, seq2, scheme) in workloads(7, 200) {
        let engine = sw::Engine::new(scheme);
        let matrix = engine.matrix(&seq1, &seq2);
        let outcomes = engine
            .align(&seq1, &seq2, Selection::Best, &Filters::default())
            .unwrap();
        assert_eq!(outcomes.len(), 1);

        match (first_maximum(&matrix), &outcomes[0]) {
            (None, Outcome::NoAlignment) => {}
            (Some((cell, score)), Outcome::Aligned(alignment)) => {
                assert_eq!(*alignment.score(), score);
                assert_eq!(alignment.seq1().end, cell.row);
                assert_eq!(alignment.seq2().end, cell.col);
            }
            (expected, observed) => {
                panic!("{seq1} & {seq2}: expected {expected:?}, got {observed:?}")
            }
        }
    }
}

#[test]
fn test_alignments_are_consistent() {
    for (seq1, seq2, scheme) in workloads(1234, 100) {
        let engine = sw::Engine::new(scheme);
        let matrix = engine.matrix(&seq1, &seq2);
        let outcomes = engine
            .align(&seq1, &seq2, Selection::Top(25), &Filters::default())
            .unwrap();

        for outcome in outcomes {
            let alignment = match outcome {
                Outcome::Aligned(x) => x,
                other => panic!("{seq1} & {seq2}: unfiltered outcome {other:?}"),
            };
            let (top, markers, bottom) = (alignment.top(), alignment.markers(), alignment.bottom());

            // Equal line lengths
            assert_eq!(top.len(), markers.len());
            assert_eq!(bottom.len(), markers.len());
            assert_eq!(alignment.len(), markers.len());
            assert!(!alignment.is_empty());

            // Gap-free lines are the aligned subsequences
            let (r1, r2) = (alignment.seq1().clone(), alignment.seq2().clone());
            assert_eq!(top.replace('-', ""), seq1[r1.clone()]);
            assert_eq!(bottom.replace('-', ""), seq2[r2.clone()]);

            // The score is read from the end point of the alignment
            assert_eq!(*alignment.score(), matrix[Cell::new(r1.end, r2.end)]);
            assert!(*alignment.score() > 0);

            // Column markers agree with the steps
            let ops: Vec<Op> = alignment
                .steps()
                .iter()
                .flat_map(|x| std::iter::repeat(*x.op()).take(*x.len()))
                .collect();
            let expected: String = ops.iter().map(|x| x.marker()).collect();
            assert_eq!(*markers, expected);

            let consumed = ops.iter().fold((0, 0), |acc, x| {
                let (a, b) = x.consumes();
                (acc.0 + a, acc.1 + b)
            });
            assert_eq!(consumed, (r1.len(), r2.len()));
        }
    }
}

#[test]
fn test_top_n_exhausts_index() {
    for (seq1, seq2, scheme) in workloads(99, 50) {
        let engine = sw::Engine::new(scheme);
        let index = sw::ScoreIndex::build(&engine.matrix(&seq1, &seq2));

        let requested = index.len() + 3;
        let outcomes = engine
            .align(&seq1, &seq2, Selection::Top(requested), &Filters::default())
            .unwrap();
        assert_eq!(outcomes.len(), index.len());

        let scores: Vec<_> = outcomes
            .iter()
            .map(|x| *x.alignment().unwrap().score())
            .collect();
        assert!(scores.windows(2).all(|x| x[0] >= x[1]));
    }
}
