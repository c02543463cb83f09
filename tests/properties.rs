use dicti::{CiMap, Error, SortedCiMap};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> { "[a-zA-Z][a-zA-Z0-9_]{0,7}" }

/// 随机改变键的大小写
fn recase(key: &str, mask: &[bool]) -> String {
    key.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
        .collect()
}

fn pairs_strategy() -> impl Strategy<Value = Vec<(String, i64)>> {
    proptest::collection::vec((key_strategy(), any::<i64>()), 0..32)
}

proptest! {
    #[test]
    fn lookup_ignores_case(key in key_strategy(), value in any::<i64>(), mask in proptest::collection::vec(any::<bool>(), 1..8)) {
        let mut d = CiMap::<String, i64>::new();
        d.insert(key.clone(), value);
        let variant = recase(&key, &mask);
        prop_assert_eq!(d.get(variant.as_str()), Some(&value));
        prop_assert!(d.contains_key(variant.as_str()));
        prop_assert_eq!(d.keys().next(), Some(&key));
    }

    #[test]
    fn pairs_round_trip(pairs in pairs_strategy()) {
        let d: CiMap<String, i64> = pairs.into_iter().collect();
        let copy: CiMap<String, i64> = d.to_pairs().into_iter().collect();
        prop_assert_eq!(&copy, &d);
        let sorted: SortedCiMap<String, i64> = d.to_pairs().into_iter().collect();
        prop_assert!(sorted == d);
    }

    #[test]
    fn delete_removes(pairs in pairs_strategy(), mask in proptest::collection::vec(any::<bool>(), 1..8)) {
        let mut d: CiMap<String, i64> = pairs.iter().cloned().collect();
        for (key, _) in &pairs {
            let variant = recase(key, &mask);
            if d.contains_key(variant.as_str()) {
                prop_assert!(d.delete(variant.as_str()).is_ok());
            }
            prop_assert!(!d.contains_key(key.as_str()));
            prop_assert!(matches!(d.try_get(key.as_str()), Err(Error::KeyNotFound(_))));
        }
        prop_assert!(d.is_empty());
    }
}
