use llrb_collections::red_black_tree::{RedBlackMap, RedBlackSet};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 10_000;

#[test]
fn int_test_red_black_map() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut map = RedBlackMap::new();
    let mut expected = BTreeMap::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0..NUM_OF_OPERATIONS as u32);
        let val = rng.gen::<u32>();

        assert_eq!(
            map.insert(key, val).map(|pair| pair.1),
            expected.insert(key, val),
        );
    }

    assert_eq!(map.len(), expected.len());
    assert!(map.validate().is_ok());
    assert_eq!(
        map.iter().collect::<Vec<(&u32, &u32)>>(),
        expected.iter().collect::<Vec<(&u32, &u32)>>(),
    );

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0..NUM_OF_OPERATIONS as u32);

        assert_eq!(map.get(&key), expected.get(&key));
        assert_eq!(
            map.floor(&key),
            expected.range(..=key).next_back().map(|pair| pair.0),
        );
        assert_eq!(map.ceil(&key), expected.range(key..).next().map(|pair| pair.0));
        assert_eq!(map.rank(&key), expected.range(..key).count());

        assert_eq!(
            map.remove(&key).map(|pair| pair.1),
            expected.remove(&key),
        );
    }

    assert_eq!(map.len(), expected.len());
    assert!(map.validate().is_ok());
    assert_eq!(
        map.into_iter().collect::<Vec<(u32, u32)>>(),
        expected.into_iter().collect::<Vec<(u32, u32)>>(),
    );
}

#[test]
fn int_test_red_black_map_interleaved() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut map = RedBlackMap::new();
    let mut expected = BTreeMap::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0..256u32);
        match rng.gen_range(0..4) {
            0 => assert_eq!(map.remove_min(), pop_first(&mut expected)),
            1 => assert_eq!(map.remove_max(), pop_last(&mut expected)),
            2 => assert_eq!(map.remove(&key), expected.remove(&key).map(|val| (key, val))),
            _ => assert_eq!(
                map.insert(key, key).map(|pair| pair.1),
                expected.insert(key, key),
            ),
        }

        assert_eq!(map.len(), expected.len());
        assert_eq!(map.min(), expected.keys().next());
        assert_eq!(map.max(), expected.keys().next_back());
        if let Err(err) = map.validate() {
            panic!("invalid tree after {} entries: {}", map.len(), err);
        }
    }
}

#[test]
fn int_test_rank_select_duality() {
    let mut rng = StdRng::seed_from_u64(3);
    let map: RedBlackMap<u32, ()> = (0..NUM_OF_OPERATIONS)
        .map(|_| (rng.gen::<u32>(), ()))
        .collect();

    for rank in 0..map.len() {
        let key = map.select(rank).expect("Expected rank to be in bounds.");
        assert_eq!(map.rank(key), rank);
    }
    assert_eq!(map.select(map.len()), None);
}

#[test]
fn int_test_remove_min_until_empty() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut keys = (1..=100).collect::<Vec<u32>>();
    keys.shuffle(&mut rng);

    let mut map = RedBlackMap::new();
    for key in keys {
        map.insert(key, key.to_string());
    }

    for expected in 1..=100 {
        assert_eq!(map.remove_min(), Some((expected, expected.to_string())));
        assert!(map.validate().is_ok());
    }

    assert!(map.is_empty());
    assert_eq!(map.remove_min(), None);
}

#[test]
fn int_test_random_entry() {
    let mut rng = StdRng::seed_from_u64(5);
    let map: RedBlackMap<u32, u32> = (0..10).map(|key| (key, key * key)).collect();

    let mut seen = [false; 10];
    for _ in 0..1_000 {
        let (key, value) = map.random(&mut rng).expect("Expected a non-empty map.");
        assert_eq!(*value, key * key);
        seen[*key as usize] = true;
    }
    assert!(seen.iter().all(|seen| *seen));
}

#[test]
fn int_test_red_black_set() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut set = RedBlackSet::new();
    let mut expected = Vec::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen::<u32>();
        if set.insert(key).is_none() {
            expected.push(key);
        }
    }

    expected.sort();
    assert_eq!(set.len(), expected.len());
    assert_eq!(
        set.iter().collect::<Vec<&u32>>(),
        expected.iter().collect::<Vec<&u32>>(),
    );
    assert!(set.validate().is_ok());
}

fn pop_first(map: &mut BTreeMap<u32, u32>) -> Option<(u32, u32)> {
    let key = *map.keys().next()?;
    map.remove(&key).map(|val| (key, val))
}

fn pop_last(map: &mut BTreeMap<u32, u32>) -> Option<(u32, u32)> {
    let key = *map.keys().next_back()?;
    map.remove(&key).map(|val| (key, val))
}
