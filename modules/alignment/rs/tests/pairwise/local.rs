use swalign_alignment_rs::pairwise::sw::{self, Cell, Filters, Outcome, Selection};
use swalign_alignment_rs::pairwise::{scoring, Alignment};

pub type Score = i32;
type Engine = sw::Engine<scoring::Linear<Score>>;

struct Workload<'a> {
    seq1: &'a str,
    seq2: &'a str,
    score: Score,
    lines: [&'a str; 3],
    rle: &'a str,
}

fn engine() -> Engine {
    sw::Engine::new(scoring::Linear::new(3, -3, -2).unwrap())
}

fn best(engine: &Engine, seq1: &str, seq2: &str) -> Alignment<Score> {
    let mut outcomes = engine
        .align(&seq1, &seq2, Selection::Best, &Filters::default())
        .unwrap();
    assert_eq!(outcomes.len(), 1);
    match outcomes.pop().unwrap() {
        Outcome::Aligned(alignment) => alignment,
        other => panic!("Aligner failed: {seq1} & {seq2} => {other:?}"),
    }
}

fn ensure(engine: &Engine, w: Workload<'_>) {
    let alignment = best(engine, w.seq1, w.seq2);
    assert_eq!(*alignment.score(), w.score);
    assert_eq!(
        [
            alignment.top().as_str(),
            alignment.markers().as_str(),
            alignment.bottom().as_str()
        ],
        w.lines
    );
    assert_eq!(alignment.rle(), w.rle);
    assert_eq!(alignment.len(), w.lines[0].len());
}

#[test]
fn test_matrix_maximum() {
    let engine = engine();

    let matrix = engine.matrix(&"AAC", &"AC");
    let seeds = sw::scan(&matrix, &mut sw::storage::Best::new());
    assert_eq!(seeds, vec![sw::Seed::new(Cell::new(3, 2), 6)]);

    let matrix = engine.matrix(&"AG", &"CG");
    let seeds = sw::scan(&matrix, &mut sw::storage::Best::new());
    assert_eq!(seeds, vec![sw::Seed::new(Cell::new(2, 2), 3)]);
}

#[test]
fn test_empty() {
    let engine = engine();
    let matrix = engine.matrix(&"", &"");
    assert_eq!((matrix.rows(), matrix.cols()), (1, 1));
    assert_eq!(matrix[Cell::new(0, 0)], 0);

    for (seq1, seq2) in [("ACGT", ""), ("", "ACGT"), ("", ""), ("ACGT", "----"), ("_", "A")] {
        let outcomes = engine
            .align(&seq1, &seq2, Selection::Best, &Filters::default())
            .unwrap();
        assert_eq!(outcomes, vec![Outcome::NoAlignment]);
    }
}

#[test]
fn test_no_gaps() {
    let engine = engine();
    let workload = vec![
        Workload {
            seq1: "AAC",
            seq2: "AC",
            score: 6,
            lines: ["AC", "||", "AC"],
            rle: "2=",
        },
        Workload {
            seq1: "AG",
            seq2: "CG",
            score: 3,
            lines: ["G", "|", "G"],
            rle: "1=",
        },
        Workload {
            seq1: "AAGAA",
            seq2: "AGA",
            score: 9,
            lines: ["AGA", "|||", "AGA"],
            rle: "3=",
        },
        Workload {
            seq1: "AGTCCCGTGTCCCAGGGG",
            seq2: "AGTC",
            score: 12,
            lines: ["AGTC", "||||", "AGTC"],
            rle: "4=",
        },
        Workload {
            seq1: "AAAACAAAA",
            seq2: "AAAAGAAAA",
            score: 21,
            lines: ["AAAACAAAA", "||||:||||", "AAAAGAAAA"],
            rle: "4=1X4=",
        },
    ];

    for w in workload {
        ensure(&engine, w);
    }
}

#[test]
fn test_gaps() {
    let engine = engine();
    let workload = vec![
        Workload {
            seq1: "ACGTACGT",
            seq2: "ACGTCGT",
            score: 19,
            lines: ["ACGTACGT", "|||| |||", "ACGT-CGT"],
            rle: "4=1^3=",
        },
        Workload {
            seq1: "ACGTCGT",
            seq2: "ACGTACGT",
            score: 19,
            lines: ["ACGT-CGT", "|||| |||", "ACGTACGT"],
            rle: "4=1v3=",
        },
    ];

    for w in workload {
        ensure(&engine, w);
    }
}

#[test]
fn test_top_n() {
    let engine = sw::Engine::new(scoring::Linear::new(3, -3, -3).unwrap());

    // Only (1, 1) and (2, 2) hold positive scores
    let outcomes = engine
        .align(&"AC", &"AC", Selection::Top(5), &Filters::default())
        .unwrap();
    assert_eq!(outcomes.len(), 2);

    let alignments: Vec<_> = outcomes.iter().map(|x| x.alignment().unwrap()).collect();
    assert_eq!(*alignments[0].score(), 6);
    assert_eq!(alignments[0].top(), "AC");
    assert_eq!(*alignments[1].score(), 3);
    assert_eq!(alignments[1].top(), "A");

    // Top(1) is the best alignment
    let top = engine
        .align(&"GATTACA", &"TTAC", Selection::Top(1), &Filters::default())
        .unwrap();
    let best = engine
        .align(&"GATTACA", &"TTAC", Selection::Best, &Filters::default())
        .unwrap();
    assert_eq!(top, best);
}

#[test]
fn test_score_index_matches_top_n() {
    let engine = engine();
    let (seq1, seq2) = ("CCAATCTACTACTGCTTGCAGTAC", "AGTCCGAGGGCTACTCTACTGAAC");
    let matrix = engine.matrix(&seq1, &seq2);
    let index = sw::ScoreIndex::build(&matrix);

    let scores: Vec<_> = index.scores().collect();
    assert!(scores.windows(2).all(|x| x[0] > x[1]));
    assert!(scores.iter().all(|x| *x > 0));

    let outcomes = engine
        .align(&seq1, &seq2, Selection::Top(index.len() + 10), &Filters::default())
        .unwrap();
    assert_eq!(outcomes.len(), index.len());

    let expected: Vec<_> = index.top(index.len()).map(|x| x.score).collect();
    let observed: Vec<_> = outcomes
        .iter()
        .map(|x| *x.alignment().unwrap().score())
        .collect();
    assert_eq!(observed, expected);
}
