use std::collections::HashSet;
use std::hash::Hash;

/// Sorts a pair of values into nondescending order.
pub fn sort_pair<K: Ord>(a: K, b: K) -> (K, K) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Collects items into a set, returning the set along with every item that
/// was seen more than once.  Each repeated item is reported once, in the
/// order its first repeat was encountered.
pub fn collect_unique<T: Eq + Hash + Clone>(
    items: impl IntoIterator<Item = T>,
) -> (HashSet<T>, Vec<T>) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for item in items {
        if seen.contains(&item) {
            if reported.insert(item.clone()) {
                duplicates.push(item);
            }
        } else {
            seen.insert(item);
        }
    }
    (seen, duplicates)
}
