use serde::{Deserialize, Serialize};

/// One selectable value inside a filter group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

/// A browse-filter group rendered by the host's manga list page.
///
/// `name` is the query parameter key the selected value is sent under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterGroup {
    pub label: String,
    pub name: String,
    pub options: Vec<FilterOption>,
}

/// A single entry of the manga list page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub title: String,
    pub url: String,
    pub cover_url: String,
}

/// The wrapper shape the host expects from the list operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MangaList {
    pub list: Vec<ListItem>,
}

/// A chapter entry of a manga's detail page. `url` is a synthetic
/// chapter-page address fed back into the chapter-image operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChapterRef {
    pub title: String,
    pub url: String,
}

/// Detail data of a single manga, locked chapters already excluded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MangaDetail {
    pub title: String,
    pub description: String,
    pub cover_url: String,
    pub chapter_list: Vec<ChapterRef>,
}

/// One page of a chapter, in reading order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChapterImage {
    pub url: String,
    pub width: i32,
    pub height: i32,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
