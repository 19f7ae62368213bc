// file: src/query/filter.rs
// description: tag filter expression builder for the index filter language
// reference: https://www.meilisearch.com/docs/learn/filtering_and_sorting/filter_expression_reference

/// Build the index-side filter expression for a set of tags: one
/// `tags = "<t>"` clause per tag, joined with `AND`, in the given order.
/// The string is passed to the index opaquely; its semantics belong to the
/// engine. Returns `None` when no tags were given.
pub fn tag_filter(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }

    Some(
        tags.iter()
            .map(|t| format!("tags = \"{t}\""))
            .collect::<Vec<_>>()
            .join(" AND "),
    )
}
