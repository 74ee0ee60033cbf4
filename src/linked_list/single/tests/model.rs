extern crate std;

use std::{vec, vec::Vec};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::linked_list::single::{Position, SingleLinkedList};

const STEPS: usize = 5_000;

#[test]
fn test_front_operations_match_persistent_list() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0001);
    let mut list = SingleLinkedList::new();
    let mut model = rpds::List::new();

    for _ in 0..STEPS {
        if rng.random_bool(0.6) {
            let value: i32 = rng.random_range(-100..100);
            list.push_front(value);
            model.push_front_mut(value);
        } else {
            let expected = model.first().copied();
            model.drop_first_mut();
            assert_eq!(list.pop_front(), expected);
        }
        assert_eq!(list.len(), model.len());
        assert_eq!(list.front(), model.first());
    }
    assert!(list.iter().eq(model.iter()));
}

#[test]
fn test_positional_edits_match_vec_model() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0002);
    let mut list = SingleLinkedList::new();
    let mut model: Vec<u32> = vec![];
    let mut positions: Vec<Position> = vec![];

    for step in 0..STEPS as u32 {
        // `None` stands for the sentinel, `Some(i)` for the i-th element.
        let anchor = match rng.random_range(0..=model.len()) {
            0 => None,
            n => Some(n - 1),
        };
        let anchor_pos = anchor.map_or(list.before_begin(), |i| positions[i]);
        let at = anchor.map_or(0, |i| i + 1);

        if rng.random_bool(0.55) {
            let pos = list.insert_after(anchor_pos, step);
            model.insert(at, step);
            positions.insert(at, pos);
        } else if at < model.len() {
            let next = list.erase_after(anchor_pos);
            model.remove(at);
            let stale = positions.remove(at);
            assert_eq!(list.get(stale), None);
            assert_eq!(next, positions.get(at).copied().unwrap_or(list.end()));
        } else {
            assert!(list.try_erase_after(anchor_pos).is_err());
        }

        assert_eq!(list.len(), model.len());
    }

    assert!(list.iter().eq(model.iter()));
    for (pos, value) in positions.iter().zip(&model) {
        assert_eq!(&list[*pos], value);
    }
    assert_eq!(list.positions().collect::<Vec<_>>(), positions);
}

#[test]
fn test_ordering_matches_vec_ordering() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0003);
    let random_values = |rng: &mut StdRng| -> Vec<u8> {
        let len = rng.random_range(0..5);
        (0..len).map(|_| rng.random_range(0..3)).collect()
    };

    for _ in 0..1_000 {
        let left = random_values(&mut rng);
        let right = random_values(&mut rng);
        let left_list = SingleLinkedList::from(&left[..]);
        let right_list = SingleLinkedList::from(&right[..]);

        assert_eq!(left_list.cmp(&right_list), left.cmp(&right));
        assert_eq!(left_list == right_list, left == right);
    }
}
