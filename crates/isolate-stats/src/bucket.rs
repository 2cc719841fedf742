//! Chart-ready (category, count) buckets.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// One bar of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationBucket {
    /// Category value, e.g. a province or organism type
    #[serde(rename = "type")]
    pub category: String,
    /// Number of isolates in the bucket
    #[serde(rename = "value")]
    pub count: usize,
    /// Secondary grouping attribute (a cave's province)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// An ordered series of buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BucketSeries {
    buckets: Vec<AggregationBucket>,
}

impl BucketSeries {
    pub fn buckets(&self) -> &[AggregationBucket] {
        &self.buckets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AggregationBucket> {
        self.buckets.iter()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Sum of all bucket counts.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    /// First bucket with this category.
    pub fn get(&self, category: &str) -> Option<&AggregationBucket> {
        self.buckets.iter().find(|b| b.category == category)
    }

    /// Buckets partitioned by their group tag, groups in first-seen order.
    pub fn grouped(&self) -> Vec<(Option<&str>, Vec<&AggregationBucket>)> {
        let mut groups: Vec<(Option<&str>, Vec<&AggregationBucket>)> = Vec::new();
        for bucket in &self.buckets {
            let key = bucket.group.as_deref();
            match groups.iter_mut().find(|(g, _)| *g == key) {
                Some((_, members)) => members.push(bucket),
                None => groups.push((key, vec![bucket])),
            }
        }
        groups
    }
}

impl<'a> IntoIterator for &'a BucketSeries {
    type Item = &'a AggregationBucket;
    type IntoIter = std::slice::Iter<'a, AggregationBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

/// Accumulates counts per key, remembering first-seen order.
#[derive(Debug)]
pub(crate) struct Tally<K> {
    positions: HashMap<K, usize>,
    buckets: Vec<AggregationBucket>,
}

impl<K: Hash + Eq> Tally<K> {
    pub(crate) fn new() -> Self {
        Self {
            positions: HashMap::new(),
            buckets: Vec::new(),
        }
    }

    /// Count one observation. Label and group are taken from the first one.
    pub(crate) fn add(&mut self, key: K, label: &str, group: Option<&str>) {
        match self.positions.get(&key) {
            Some(&pos) => self.buckets[pos].count += 1,
            None => {
                self.positions.insert(key, self.buckets.len());
                self.buckets.push(AggregationBucket {
                    category: label.to_string(),
                    count: 1,
                    group: group.map(str::to_string),
                });
            }
        }
    }

    pub(crate) fn finish(self) -> BucketSeries {
        BucketSeries { buckets: self.buckets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_keeps_first_seen_order() {
        let mut t = Tally::new();
        t.add("b", "b", None);
        t.add("a", "a", None);
        t.add("b", "b", None);
        let series = t.finish();
        let cats: Vec<(&str, usize)> = series.iter().map(|b| (b.category.as_str(), b.count)).collect();
        assert_eq!(cats, vec![("b", 2), ("a", 1)]);
        assert_eq!(series.total(), 3);
    }

    #[test]
    fn grouped_by_tag() {
        let mut t = Tally::new();
        t.add(1, "Cave A", Some("Laguna"));
        t.add(2, "Cave B", Some("Rizal"));
        t.add(3, "Cave C", Some("Laguna"));
        t.add(4, "Cave D", None);
        let series = t.finish();
        let groups = series.grouped();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].0, Some("Laguna"));
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[2].0, None);
    }

    #[test]
    fn bucket_json_shape() {
        let bucket = AggregationBucket {
            category: "Bacteria".into(),
            count: 2,
            group: None,
        };
        assert_eq!(serde_json::to_string(&bucket).unwrap(), r#"{"type":"Bacteria","value":2}"#);

        let cave = AggregationBucket {
            category: "Cave A".into(),
            count: 1,
            group: Some("Laguna".into()),
        };
        assert_eq!(
            serde_json::to_string(&cave).unwrap(),
            r#"{"type":"Cave A","value":1,"group":"Laguna"}"#
        );
    }
}
