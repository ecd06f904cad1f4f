/// Removes value at `source_idx` and inserts it so that it ends up at `destination_idx` in the
/// resulting vec. Does nothing if the indices are equal or if either index is outside the vec
/// bounds. Returns `true` if the vec was changed.
///
/// This is the move semantics of [`crate::DropResult`]: `destination` is the final position of the
/// moved item, not an insertion point in the original vec.
pub fn move_item<T>(source_idx: usize, destination_idx: usize, vec: &mut Vec<T>) -> bool {
    if source_idx == destination_idx || source_idx >= vec.len() || destination_idx >= vec.len() {
        return false;
    }

    let item = vec.remove(source_idx);
    vec.insert(destination_idx, item);
    true
}

/// Number of entries in `centers` that lie strictly before `dragged_center`. With `centers`
/// holding the positions of every item except the dragged one, this is the slot the dragged item
/// would occupy if dropped now.
pub fn drop_slot(dragged_center: f32, centers: impl IntoIterator<Item = f32>) -> usize {
    centers
        .into_iter()
        .filter(|center| *center < dragged_center)
        .count()
}
