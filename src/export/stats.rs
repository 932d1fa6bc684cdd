//! Export statistics.

use std::collections::HashSet;

use crate::api::Item;

/// Totals reported after an export.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportStats {
    pub item_count: usize,
    pub total_likes: u64,
    pub distinct_tags: usize,
}

impl ExportStats {
    /// Compute statistics for a set of items.
    pub fn from_items(items: &[Item]) -> Self {
        let tags: HashSet<&str> = items.iter().flat_map(|item| item.tag_names()).collect();

        Self {
            item_count: items.len(),
            total_likes: items.iter().map(|i| i.likes_count).sum(),
            distinct_tags: tags.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Tag;
    use chrono::DateTime;

    fn item(likes: u64, tags: &[&str]) -> Item {
        let ts = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap();
        Item {
            id: format!("id{}", likes),
            title: String::new(),
            url: String::new(),
            body: String::new(),
            created_at: ts,
            updated_at: ts,
            likes_count: likes,
            tags: tags
                .iter()
                .map(|t| Tag {
                    name: t.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_stats_from_items() {
        let items = vec![item(3, &["rust", "cli"]), item(4, &["rust"]), item(0, &[])];
        let stats = ExportStats::from_items(&items);

        assert_eq!(stats.item_count, 3);
        assert_eq!(stats.total_likes, 7);
        assert_eq!(stats.distinct_tags, 2);
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(ExportStats::from_items(&[]), ExportStats::default());
    }
}
