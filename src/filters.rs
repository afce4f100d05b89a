//! Browse-filter metadata and listing query construction.

use crate::models::{FilterGroup, FilterOption};
use std::collections::HashMap;

/// Filter keys the category listing recognizes; anything else in the
/// host-supplied filter map is ignored.
pub const RECOGNIZED_KEYS: [&str; 5] = [
    "tag_id",
    "label_dimension_origin",
    "update_status",
    "pay_status",
    "sort",
];

const DEFAULTS: [(&str, &str); 5] = [
    ("tag_id", "0"),
    ("label_dimension_origin", "0"),
    ("update_status", "0"),
    ("sort", "1"),
    ("pay_status", "0"),
];

/// The static filter groups the browse UI always shows. The first group's
/// options get extended with the server-provided category taxonomy.
pub fn static_filter_groups() -> Vec<FilterGroup> {
    vec![
        FilterGroup {
            label: "题材".to_string(),
            name: "tag_id".to_string(),
            options: vec![FilterOption::new("全部", "0")],
        },
        FilterGroup {
            label: "区域".to_string(),
            name: "label_dimension_origin".to_string(),
            options: vec![
                FilterOption::new("全部", "0"),
                FilterOption::new("国漫", "2"),
                FilterOption::new("韩漫", "3"),
                FilterOption::new("日漫", "4"),
            ],
        },
        FilterGroup {
            label: "进度".to_string(),
            name: "update_status".to_string(),
            options: vec![
                FilterOption::new("全部", "0"),
                FilterOption::new("连载中", "0"),
                FilterOption::new("已完结", "0"),
            ],
        },
        FilterGroup {
            label: "收费".to_string(),
            name: "pay_status".to_string(),
            options: vec![
                FilterOption::new("全部", "0"),
                FilterOption::new("免费", "1"),
                FilterOption::new("付费", "2"),
            ],
        },
        FilterGroup {
            label: "排序".to_string(),
            name: "sort".to_string(),
            options: vec![
                FilterOption::new("推荐", "1"),
                FilterOption::new("最火热", "2"),
                FilterOption::new("新上架", "3"),
            ],
        },
    ]
}

/// Query pairs for a category-mode listing: documented defaults, overridden
/// by recognized keys from the host's filter map, plus paging.
pub fn category_query(
    page: u32,
    page_size: u32,
    filters: &HashMap<String, String>,
) -> Vec<(String, String)> {
    let mut query: Vec<(String, String)> = DEFAULTS
        .iter()
        .map(|(key, default)| {
            let value = filters.get(*key).cloned().unwrap_or_else(|| default.to_string());
            (key.to_string(), value)
        })
        .collect();
    query.push(("page".to_string(), page.to_string()));
    query.push(("size".to_string(), page_size.to_string()));
    query
}

/// Fixed query the filter-options builder uses to fetch the category
/// taxonomy: first page, all defaults.
pub fn taxonomy_query() -> Vec<(String, String)> {
    [
        ("page", "1"),
        ("size", "48"),
        ("tag_id", "0"),
        ("update_status", "0"),
        ("pay_status", "0"),
        ("label_dimension_origin", "0"),
        ("sort", "1"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
