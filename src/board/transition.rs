use crate::board::BoardItem;

/// Apply a status change to exactly one entity, returning the replacement
/// collection. The input is never mutated.
///
/// Stage membership is carried entirely by the status field, so the moved
/// entity keeps its position in the sequence and every other field. Any
/// stage may move to any other stage; there is no adjacency rule. A missing
/// id is a silent no-op and the result equals the input; callers that need
/// to detect that case check for the id themselves (see [`contains_id`]).
pub fn apply_transition<T: BoardItem + Clone>(items: &[T], id: &str, target: T::Status) -> Vec<T> {
    items
        .iter()
        .map(|item| {
            if item.id() == id {
                let mut moved = item.clone();
                moved.set_status(target);
                moved
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Whether a collection holds an entity with the given id.
pub fn contains_id<T: BoardItem>(items: &[T], id: &str) -> bool {
    items.iter().any(|item| item.id() == id)
}
