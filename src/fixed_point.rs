//! Iteration to a fixed point.

use log::trace;

/// Finds the fixed point of the sequence `V, F(V), F(F(V)), ...` where `V` is
/// `start` and `F` is `step`.
///
/// Returns the first value `X` of the sequence such that `F(X) == X`. The step
/// must be monotone over a finite domain (it only ever adds elements drawn
/// from a finite universe), which guarantees termination. No step limit is
/// imposed.
pub fn fixed_point<T, F>(start: T, mut step: F) -> T
where
    T: PartialEq,
    F: FnMut(&T) -> T,
{
    let mut prev = start;
    let mut steps = 0usize;
    loop {
        let next = step(&prev);
        steps += 1;
        if next == prev {
            trace!("fixed point reached after {} steps", steps);
            return prev;
        }
        prev = next;
    }
}
