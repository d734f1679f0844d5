//! Extremum search with deterministic tie-breaking.
//!
//! `Iterator::min_by_key` keeps the first minimum but `max_by_key` keeps the
//! last maximum. Targeting wants first-seen on both ends, so both go through
//! the same strict-improvement scan.

/// Returns the item with the smallest key. Ties keep the earliest item.
pub fn find_lowest<T, K, I, F>(items: I, mut key: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    F: FnMut(&T) -> K,
{
    find_by(items, |candidate, best| key(candidate) < key(best))
}

/// Returns the item with the largest key. Ties keep the earliest item.
pub fn find_highest<T, K, I, F>(items: I, mut key: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    F: FnMut(&T) -> K,
{
    find_by(items, |candidate, best| key(candidate) > key(best))
}

fn find_by<T, I, F>(items: I, mut improves: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> bool,
{
    let mut best: Option<T> = None;
    for item in items {
        let replace = match &best {
            Some(current) => improves(&item, current),
            None => true,
        };
        if replace {
            best = Some(item);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_none() {
        assert_eq!(find_lowest(Vec::<i32>::new(), |v| *v), None);
        assert_eq!(find_highest(Vec::<i32>::new(), |v| *v), None);
    }

    #[test]
    fn ties_keep_first_seen() {
        let items = [("a", 2), ("b", 1), ("c", 1), ("d", 3), ("e", 3)];
        assert_eq!(find_lowest(items, |(_, k)| *k), Some(("b", 1)));
        assert_eq!(find_highest(items, |(_, k)| *k), Some(("d", 3)));
    }

    #[test]
    fn works_over_borrowed_items() {
        let words = vec!["pear".to_string(), "fig".to_string(), "kiwi".to_string()];
        let shortest = find_lowest(&words, |w| w.len());
        assert_eq!(shortest.map(String::as_str), Some("fig"));
    }
}
