//! Wire types for the KuaiKan JSON API.
//!
//! Every endpoint wraps its payload in an envelope carrying a status code
//! and message. The filter and listing endpoints put the payload under
//! `hits`, the topic/comic detail endpoints under `data`.

use serde::Deserialize;

pub const STATUS_OK: i32 = 200;

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub hits: T,
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

/// Payload of the multi-filter endpoint: the category taxonomy plus one
/// page of topic listings.
#[derive(Debug, Deserialize)]
pub struct FilterPayload {
    #[serde(rename = "topicCategories", default)]
    pub topic_categories: Vec<TopicCategory>,
    #[serde(rename = "topicMessageList", default)]
    pub topic_message_list: Vec<TopicSummary>,
}

#[derive(Debug, Deserialize)]
pub struct TopicCategory {
    pub title: String,
    #[serde(rename = "tagId")]
    pub tag_id: i64,
}

/// A topic as it appears in listings and search hits.
#[derive(Debug, Deserialize)]
pub struct TopicSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub vertical_image_url: String,
}

#[derive(Debug, Deserialize)]
pub struct TopicDetailPayload {
    pub topic_info: TopicInfo,
}

#[derive(Debug, Deserialize)]
pub struct TopicInfo {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub vertical_image_url: String,
    #[serde(default)]
    pub comics: Vec<ComicSummary>,
}

/// A chapter entry inside a topic. `locked` marks paywalled chapters.
#[derive(Debug, Deserialize)]
pub struct ComicSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub cover_image_url: String,
}

#[derive(Debug, Deserialize)]
pub struct ComicDetailPayload {
    pub comic_info: ComicInfo,
}

#[derive(Debug, Deserialize)]
pub struct ComicInfo {
    pub title: String,
    #[serde(default)]
    pub comic_images: Vec<ComicImage>,
}

#[derive(Debug, Deserialize)]
pub struct ComicImage {
    pub url: String,
    pub width: i32,
    pub height: i32,
}
