use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use street_routing::{ErrorKind, IndexedPriorityQueue};

#[test]
fn test_poll_returns_nondecreasing_priorities() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut queue = IndexedPriorityQueue::new();

    for id in 0..500u32 {
        queue.push(id, rng.gen_range(0..10_000u32)).unwrap();
    }
    // Lower a random subset of priorities in place.
    for id in (0..500u32).step_by(3) {
        let current = *queue.priority(&id).unwrap();
        queue.decrease_key(&id, current / 2).unwrap();
    }
    // Interleave a few polls and pushes.
    for id in 500..550u32 {
        queue.poll();
        queue.push(id, rng.gen_range(0..10_000u32)).unwrap();
    }

    let mut last = 0;
    let mut polled = 0;
    while let Some((id, priority)) = queue.poll() {
        assert!(priority >= last, "{} came out after a larger priority", id);
        assert!(!queue.contains(&id));
        last = priority;
        polled += 1;
    }
    assert_eq!(polled, 500);
    assert!(queue.is_empty());
}

#[test]
fn test_decrease_key_moves_element_to_front() {
    let mut queue = IndexedPriorityQueue::new();
    queue.push("far", 100).unwrap();
    queue.push("mid", 50).unwrap();
    queue.push("near", 10).unwrap();

    queue.decrease_key(&"far", 1).unwrap();
    assert_eq!(queue.peek(), Some((&"far", &1)));
    assert_eq!(queue.poll(), Some(("far", 1)));
    assert_eq!(queue.poll(), Some(("near", 10)));
    assert_eq!(queue.poll(), Some(("mid", 50)));
    assert_eq!(queue.poll(), None);
}

#[test]
fn test_contains_tracks_membership() {
    let mut queue = IndexedPriorityQueue::new();
    assert!(!queue.contains(&'a'));
    queue.push('a', 3).unwrap();
    queue.push('b', 1).unwrap();
    assert!(queue.contains(&'a'));
    assert!(queue.contains(&'b'));

    queue.poll();
    assert!(!queue.contains(&'b'));
    assert!(queue.contains(&'a'));
    assert_eq!(queue.len(), 1);

    queue.clear();
    assert!(!queue.contains(&'a'));
    assert!(queue.is_empty());
}

#[test]
fn test_rejects_duplicates_and_priority_increases() {
    let mut queue = IndexedPriorityQueue::new();
    queue.push(1, 5).unwrap();

    let duplicate = queue.push(1, 2).unwrap_err();
    assert_eq!(duplicate.kind(), ErrorKind::InvalidArgument);

    let increase = queue.decrease_key(&1, 9).unwrap_err();
    assert_eq!(increase.kind(), ErrorKind::InvalidArgument);

    let missing = queue.decrease_key(&2, 0).unwrap_err();
    assert_eq!(missing.kind(), ErrorKind::InvalidArgument);

    // Equal priority is allowed and leaves the queue unchanged.
    queue.decrease_key(&1, 5).unwrap();
    assert_eq!(queue.poll(), Some((1, 5)));
}
