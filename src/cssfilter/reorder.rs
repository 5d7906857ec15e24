//! Position arithmetic for drag reordering.
//!
//! Moving an item removes it from its slot, closes the gap, and reinserts it
//! at the destination, shifting everything in between by one. Positions stay
//! dense (`0..len`) throughout.

use crate::model::EntryId;

/// Moves `items[from]` to `to` (clamped to the last slot). Returns the final
/// position, or `None` if `from` is out of bounds.
pub(crate) fn move_within<T>(items: &mut Vec<T>, from: usize, to: usize) -> Option<usize> {
    if from >= items.len() {
        return None;
    }
    let to = to.min(items.len() - 1);
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    Some(to)
}

/// The id order that results from moving `moving` to `destination`.
///
/// Returns `None` when `moving` is not in `order`.
pub fn reorder(order: &[EntryId], moving: EntryId, destination: usize) -> Option<Vec<EntryId>> {
    let from = order.iter().position(|id| *id == moving)?;
    let mut next = order.to_vec();
    move_within(&mut next, from, destination)?;
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(raw: &[u64]) -> Vec<EntryId> {
        raw.iter().copied().map(EntryId::new).collect()
    }

    #[test]
    fn moves_down_and_up() {
        let order = ids(&[1, 2, 3, 4]);
        assert_eq!(
            reorder(&order, EntryId::new(1), 2),
            Some(ids(&[2, 3, 1, 4]))
        );
        assert_eq!(
            reorder(&order, EntryId::new(4), 0),
            Some(ids(&[4, 1, 2, 3]))
        );
    }

    #[test]
    fn destination_is_clamped() {
        let order = ids(&[1, 2, 3]);
        assert_eq!(
            reorder(&order, EntryId::new(1), 99),
            Some(ids(&[2, 3, 1]))
        );
    }

    #[test]
    fn same_slot_is_identity() {
        let order = ids(&[1, 2, 3]);
        assert_eq!(reorder(&order, EntryId::new(2), 1), Some(order.clone()));
    }

    #[test]
    fn unknown_id_is_none() {
        assert_eq!(reorder(&ids(&[1, 2]), EntryId::new(9), 0), None);
        assert_eq!(reorder(&[], EntryId::new(1), 0), None);
    }

    proptest! {
        #[test]
        fn prop_reorder_is_a_permutation_with_mover_at_destination(
            len in 1usize..12,
            pick in any::<prop::sample::Index>(),
            destination in 0usize..16,
        ) {
            let order: Vec<EntryId> = (0..len as u64).map(EntryId::new).collect();
            let moving = order[pick.index(len)];
            let next = reorder(&order, moving, destination).unwrap();

            prop_assert_eq!(next.len(), len);
            let mut sorted = next.clone();
            sorted.sort();
            prop_assert_eq!(&sorted, &order);
            prop_assert_eq!(next[destination.min(len - 1)], moving);

            // Everything except the mover keeps its relative order.
            let others_before: Vec<_> = order.iter().filter(|id| **id != moving).collect();
            let others_after: Vec<_> = next.iter().filter(|id| **id != moving).collect();
            prop_assert_eq!(others_before, others_after);
        }
    }
}
