use std::borrow::Borrow;

use derive_getters::{Dissolve, Getters};

use super::op::Op;

/// A run of identical operations in the local alignment
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct Step {
    /// The alignment operation
    op: Op,
    /// The number of consequent operations. Guaranteed to be greater than zero.
    len: usize,
}

impl Step {
    /// Collapse a sequence of single operations into runs.
    pub fn collapse(ops: impl IntoIterator<Item = Op>) -> Vec<Step> {
        let mut steps: Vec<Step> = Vec::new();
        for op in ops {
            match steps.last_mut() {
                Some(last) if last.op == op => last.len += 1,
                _ => steps.push(Step { op, len: 1 }),
            }
        }
        steps
    }

    pub fn rle_string(steps: impl Iterator<Item: Borrow<Step>>) -> String {
        // 2 symbols is an average length of a step
        let hint = match steps.size_hint() {
            (_, Some(upper)) => upper * 3,
            (lower, _) => lower * 3,
        };

        let mut result = String::with_capacity(hint);
        for step in steps {
            let step = step.borrow();
            result.push_str(&step.len.to_string());
            result.push(step.op.symbol());
        }
        result
    }
}
