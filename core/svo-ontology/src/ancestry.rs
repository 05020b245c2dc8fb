use std::collections::VecDeque;

use svo_lexicon::LexicalDatabase;
use svo_protocol::SenseId;

/// Flattened hypernym ancestry of `sense`, the sense itself first.
///
/// Expansion is breadth-first over a worklist. An ancestor reachable along
/// several paths appears once per path. There is no depth limit; the
/// hypernym relation must be acyclic.
pub fn hypernym_ancestry<D: LexicalDatabase + ?Sized>(db: &D, sense: SenseId) -> Vec<SenseId> {
    let mut ancestry = Vec::new();
    let mut worklist = VecDeque::from([sense]);

    while let Some(current) = worklist.pop_front() {
        ancestry.push(current);
        worklist.extend(db.hypernym_parents(current));
    }
    ancestry
}
