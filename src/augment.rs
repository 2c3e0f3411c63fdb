//! Recursive tree augmentation.
//!
//! [`augment`] walks a decoded [`Value`] tree depth-first and, for every
//! object node carrying the configured timestamp pair, inserts the computed
//! interval under the result key. The walk covers the whole tree: a match
//! never stops recursion into the matched node's own entries or into any
//! sibling branch, so nested and repeated matches are all found.
//!
//! ## Examples
//!
//! ```rust
//! use durapend::{augment, value, KeyFinder};
//!
//! let mut doc = value!([{
//!     "created_at": "2020-01-01 00:00:00",
//!     "updated_at": "2020-01-01 00:00:01"
//! }]);
//!
//! augment(&mut doc, &KeyFinder::default());
//!
//! let node = doc.as_array().unwrap()[0].as_object().unwrap();
//! assert_eq!(node.get("duration").and_then(|v| v.as_str()), Some("1s"));
//! ```

use crate::{Interval, KeyFinder, Value};

/// Walks the tree in place, augmenting every object node that matches.
///
/// Depth-first, pre-order per node, no short-circuit:
///
/// 1. Arrays: recurse into every element in order.
/// 2. Objects: if the finder matches and both timestamps parse, insert the
///    formatted interval under the result key, overwriting any existing
///    entry; a timestamp that fails to parse skips that one node silently.
///    Either way, recurse into every entry value.
/// 3. Scalars: nothing to do.
///
/// Never fails and never removes or reorders pre-existing entries. Repeated
/// application over unchanged from/to fields recomputes identical values, so
/// the operation is idempotent.
pub fn augment(value: &mut Value, finder: &KeyFinder) {
    match value {
        Value::Array(items) => {
            for item in items {
                augment(item, finder);
            }
        }
        Value::Object(node) => {
            let interval = finder
                .find_pair(node)
                .and_then(|pair| Interval::between(pair.from, pair.to).ok());
            if let Some(interval) = interval {
                node.insert(
                    finder.result_key().to_string(),
                    Value::String(interval.to_string()),
                );
            }
            for child in node.values_mut() {
                augment(child, finder);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    fn finder() -> KeyFinder {
        KeyFinder::default()
    }

    #[test]
    fn test_inserts_at_matching_node() {
        let mut doc = value!({
            "created_at": "2020-01-01 00:00:00",
            "updated_at": "2020-01-01 00:01:00"
        });
        augment(&mut doc, &finder());
        let node = doc.as_object().unwrap();
        assert_eq!(node.get("duration").and_then(|v| v.as_str()), Some("1m0s"));
        assert_eq!(node.len(), 3);
    }

    #[test]
    fn test_matches_at_every_depth() {
        let mut doc = value!({
            "created_at": "2020-01-01 00:00:00",
            "updated_at": "2020-01-01 00:00:01",
            "children": [{
                "created_at": "2020-01-01 00:00:00",
                "updated_at": "2020-01-01 00:00:02",
                "grandchild": {
                    "created_at": "2020-01-01 00:00:00",
                    "updated_at": "2020-01-01 00:00:03"
                }
            }]
        });
        augment(&mut doc, &finder());

        let root = doc.as_object().unwrap();
        assert_eq!(root.get("duration").and_then(|v| v.as_str()), Some("1s"));

        let child = root.get("children").unwrap().as_array().unwrap()[0]
            .as_object()
            .unwrap();
        assert_eq!(child.get("duration").and_then(|v| v.as_str()), Some("2s"));

        let grandchild = child.get("grandchild").unwrap().as_object().unwrap();
        assert_eq!(
            grandchild.get("duration").and_then(|v| v.as_str()),
            Some("3s")
        );
    }

    #[test]
    fn test_missing_key_is_silent() {
        let mut doc = value!({
            "hoge": "2020-01-01 00:00:00",
            "updated_at": "2020-01-01 00:00:01"
        });
        let before = doc.clone();
        augment(&mut doc, &finder());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_unparseable_timestamp_is_silent() {
        let mut doc = value!({
            "created_at": "hoge",
            "updated_at": "2020-01-01 00:00:01"
        });
        let before = doc.clone();
        augment(&mut doc, &finder());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_one_bad_node_does_not_stop_the_walk() {
        let mut doc = value!([
            {
                "created_at": "hoge",
                "updated_at": "2020-01-01 00:00:01"
            },
            {
                "created_at": "2020-01-01 00:00:00",
                "updated_at": "2020-01-01 00:00:01"
            }
        ]);
        augment(&mut doc, &finder());
        let items = doc.as_array().unwrap();
        assert!(items[0].as_object().unwrap().get("duration").is_none());
        assert_eq!(
            items[1]
                .as_object()
                .unwrap()
                .get("duration")
                .and_then(|v| v.as_str()),
            Some("1s")
        );
    }

    #[test]
    fn test_existing_result_key_is_overwritten() {
        let mut doc = value!({
            "created_at": "2020-01-01 00:00:00",
            "duration": "stale",
            "updated_at": "2020-01-01 00:00:05"
        });
        augment(&mut doc, &finder());
        let node = doc.as_object().unwrap();
        assert_eq!(node.get("duration").and_then(|v| v.as_str()), Some("5s"));
        assert_eq!(node.len(), 3);
    }

    #[test]
    fn test_idempotent() {
        let mut doc = value!([{
            "created_at": "2020-01-01 00:00:00",
            "updated_at": "2020-01-01 00:00:01"
        }]);
        augment(&mut doc, &finder());
        let once = doc.clone();
        augment(&mut doc, &finder());
        assert_eq!(doc, once);
    }

    #[test]
    fn test_scalar_root_is_untouched() {
        let mut doc = value!("2020-01-01 00:00:00");
        let before = doc.clone();
        augment(&mut doc, &finder());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_custom_keys() {
        let custom = KeyFinder::new("started", "finished", "elapsed");
        let mut doc = value!({
            "started": "2020-01-01 00:00:00",
            "finished": "2020-01-01 02:00:00",
            "created_at": "2020-01-01 00:00:00",
            "updated_at": "2020-01-01 00:00:01"
        });
        augment(&mut doc, &custom);
        let node = doc.as_object().unwrap();
        assert_eq!(
            node.get("elapsed").and_then(|v| v.as_str()),
            Some("2h0m0s")
        );
        // The default pair is not this finder's concern.
        assert!(node.get("duration").is_none());
    }
}
