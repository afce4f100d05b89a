//! Remote endpoint addresses and the synthetic page-address formats used
//! to hand identifiers between operations.

use crate::error::{Result, SourceError};
use regex::Regex;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://www.kuaikanmanhua.com";

const MULTI_FILTER_PATH: &str = "/search/mini/topic/multi_filter";
const SEARCH_PATH: &str = "/search/mini/topic/title_and_author";

/// Listing endpoint with the given query pairs.
pub fn multi_filter(base: &str, query: &[(String, String)]) -> Result<Url> {
    let url = Url::parse_with_params(&format!("{}{}", base, MULTI_FILTER_PATH), query)?;
    Ok(url)
}

/// Keyword search endpoint.
pub fn search(base: &str, keyword: &str, page: u32, size: u32) -> Result<Url> {
    let page = page.to_string();
    let size = size.to_string();
    let url = Url::parse_with_params(
        &format!("{}{}", base, SEARCH_PATH),
        [("q", keyword), ("page", page.as_str()), ("size", size.as_str())],
    )?;
    Ok(url)
}

/// Season/series record for one topic.
pub fn topic_detail(base: &str, id: u64) -> String {
    format!("{}/v2/pweb/topic/{}", base, id)
}

/// Chapter/episode record with the page images.
pub fn comic_detail(base: &str, id: u64) -> String {
    format!("{}/v2/pweb/comic/{}", base, id)
}

/// Detail-page address embedded in list results.
pub fn topic_page(base: &str, id: u64) -> String {
    format!("{}/web/topic/{}", base, id)
}

/// Chapter-page address embedded in detail results.
pub fn comic_page(base: &str, id: u64) -> String {
    format!("{}/web/comic/{}", base, id)
}

/// Pulls the topic id out of a detail-page address.
///
/// The pattern is strict: the digits must sit at the end of the address,
/// right after a literal `topic/` segment.
pub fn extract_topic_id(url: &str) -> Result<u64> {
    let pattern = Regex::new(r"topic/(\d+)$").unwrap();
    let captures = pattern.captures(url).ok_or(SourceError::NoSeasonId)?;
    captures[1].parse().map_err(|_| SourceError::InvalidSeasonId)
}

/// Pulls the comic id out of a chapter-page address.
///
/// Looser than [`extract_topic_id`]: any trailing digit run is accepted,
/// no preceding literal required.
pub fn extract_comic_id(url: &str) -> Result<u64> {
    let pattern = Regex::new(r"(\d+)$").unwrap();
    let captures = pattern.captures(url).ok_or(SourceError::NoEpisodeId)?;
    captures[1].parse().map_err(|_| SourceError::InvalidEpisodeId)
}
