use super::*;

use proptest::prelude::*;
use std::collections::BTreeMap;

fn validate_tree<V>(t: &Tree<V>) {
    let issues = t.verify_integrity();
    assert!(issues.is_empty(), "integrity issues: {issues:?}");
}

#[derive(Clone, Debug)]
enum Op {
    Insert(String, u64),
    Remove(String),
    Get(String),
    Sort(SortingTechnique),
}

fn key_strategy() -> impl Strategy<Value = String> + Clone {
    // A tiny alphabet makes shared prefixes, splits and merges the common case.
    "[abc:@]{1,8}"
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let op = prop_oneof![
        50 => (key.clone(), any::<u64>()).prop_map(|(k, v)| Op::Insert(k, v)),
        25 => key.clone().prop_map(Op::Remove),
        24 => key.clone().prop_map(Op::Get),
        1 => any::<SortingTechnique>().prop_map(Op::Sort),
    ];
    prop::collection::vec(op, 0..=500)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 50_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy()) {
        let mut t: Tree<u64> = Tree::new();
        let mut m: BTreeMap<String, u64> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    let size = t.size();
                    let old_t = t.insert(&key, value);
                    let old_m = m.insert(key, value);
                    if old_m.is_some() {
                        prop_assert_eq!(t.size(), size);
                    }
                    prop_assert_eq!(old_t, old_m);
                }
                Op::Remove(key) => {
                    let old_t = t.remove(&key);
                    let old_m = m.remove(&key);
                    prop_assert_eq!(old_t, old_m);
                    prop_assert!(!t.contains_key(&key));
                }
                Op::Get(key) => {
                    let got_t = t.get(&key).and_then(|n| n.value()).copied();
                    let got_m = m.get(&key).copied();
                    prop_assert_eq!(got_t, got_m);
                }
                Op::Sort(technique) => {
                    t.sort(technique);
                }
            }

            prop_assert_eq!(t.len(), m.len());
        }

        validate_tree(&t);
        t.sort(SortingTechnique::AscLabel);
        let got: Vec<(String, u64)> = t.iter().map(|(k, v)| (k, *v)).collect();
        let expected: Vec<(String, u64)> = m.into_iter().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_sort_idempotent(
        keys in prop::collection::vec(key_strategy(), 0..64),
        technique in any::<SortingTechnique>(),
    ) {
        let mut t: Tree<usize> = Tree::new();
        for (i, k) in keys.iter().enumerate() {
            t.insert(k, i);
        }

        t.sort(technique);
        let once: Vec<(String, usize)> = t.iter().map(|(k, v)| (k, *v)).collect();
        t.sort(technique);
        let twice: Vec<(String, usize)> = t.iter().map(|(k, v)| (k, *v)).collect();
        prop_assert_eq!(once, twice);
        validate_tree(&t);
    }

    #[test]
    fn prop_dynamic_capture(
        a in "[a-z0-9]{1,6}",
        b in "[a-z0-9]{1,6}",
    ) {
        let mut t: Tree<&str> = Tree::new();
        t.insert("test:@p1", "one");
        t.insert("test:@p1:@p2", "two");

        let input = format!("test:{a}:{b}");
        let m = t.get_dynamic(&input, '@', ':').unwrap();
        prop_assert_eq!(m.value(), Some(&"two"));
        prop_assert_eq!(m.params.get("p1"), Some(a.as_str()));
        prop_assert_eq!(m.params.get("p2"), Some(b.as_str()));

        let input = format!("test:{a}");
        let m = t.get_dynamic(&input, '@', ':').unwrap();
        prop_assert_eq!(m.value(), Some(&"one"));
        prop_assert_eq!(m.params.len(), 1);
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

const SMALL_SET: [&str; 6] = ["a", "b", "ab", "abc", "ac", "ba"];

#[test]
fn exhaustive_insert_order_small_set() {
    for_each_permutation(&SMALL_SET, |perm| {
        let mut t: Tree<u64> = Tree::new();
        let mut m: BTreeMap<String, u64> = BTreeMap::new();

        for (i, k) in perm.into_iter().enumerate() {
            let v = i as u64;
            assert_eq!(t.insert(k, v), m.insert(k.to_owned(), v));
        }

        validate_tree(&t);
        // The shape does not depend on insertion order.
        assert_eq!(t.size(), 7);
        t.sort(SortingTechnique::AscLabel);
        let got: Vec<(String, u64)> = t.iter().map(|(k, v)| (k, *v)).collect();
        let expected: Vec<(String, u64)> = m.into_iter().collect();
        assert_eq!(got, expected);
    });
}

#[test]
fn exhaustive_remove_order_small_set() {
    // Insert in a fixed order, then remove in all permutations.
    let mut base_tree: Tree<u64> = Tree::new();
    let mut base_map: BTreeMap<String, u64> = BTreeMap::new();
    for (i, k) in SMALL_SET.iter().enumerate() {
        let v = i as u64;
        assert_eq!(base_tree.insert(k, v), base_map.insert(k.to_string(), v));
    }

    for_each_permutation(&SMALL_SET, |perm| {
        let mut t = base_tree.clone();
        let mut m = base_map.clone();

        for k in perm {
            assert_eq!(t.remove(k), m.remove(k));
            assert_eq!(t.len(), m.len());
            validate_tree(&t);
            for (key, value) in &m {
                assert_eq!(t.get(key).and_then(|n| n.value()), Some(value));
            }
        }
        assert_eq!(t.len(), 0);
        assert_eq!(t.size(), 1);
        assert!(t.root().is_leaf());
    });
}
