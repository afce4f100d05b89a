//! Host-facing entry points. Arguments arrive exactly as the host delivers
//! them (strings), and every invocation terminates by calling exactly one
//! of the responder's two channels.

use crate::error::{Result, SourceError};
use crate::models::MangaList;
use crate::source::KuaiKanSource;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// The host's delivery surface: a successful value or a failure message,
/// nothing else.
pub trait Responder: Send + Sync {
    fn result(&self, value: Value);
    fn exception(&self, message: String);
}

/// Outer boundary shared by all operations: one responder call, whatever
/// happened inside the pipeline.
fn deliver<T: Serialize>(responder: &dyn Responder, outcome: Result<T>) {
    match outcome.and_then(|value| serde_json::to_value(value).map_err(SourceError::from)) {
        Ok(value) => responder.result(value),
        Err(e) => responder.exception(e.to_string()),
    }
}

/// Filter options for the manga list page. Failures were already absorbed
/// into an empty list inside the source, so this always delivers a result.
pub async fn set_manga_list_filter_options(source: &KuaiKanSource, responder: &dyn Responder) {
    let groups = source.filter_options().await;
    deliver(responder, Ok(groups));
}

/// Manga list. A non-empty keyword selects search mode unconditionally;
/// otherwise the (optionally JSON-encoded) filter options drive a category
/// query. Malformed filter JSON is treated as no filters at all.
pub async fn get_manga_list(
    source: &KuaiKanSource,
    responder: &dyn Responder,
    page: &str,
    page_size: &str,
    keyword: Option<&str>,
    raw_filter_options: Option<&str>,
) {
    let outcome = manga_list(source, page, page_size, keyword, raw_filter_options).await;
    deliver(responder, outcome);
}

async fn manga_list(
    source: &KuaiKanSource,
    page: &str,
    page_size: &str,
    keyword: Option<&str>,
    raw_filter_options: Option<&str>,
) -> Result<MangaList> {
    let page = parse_arg("page", page)?;
    let size = parse_arg("pageSize", page_size)?;

    if let Some(keyword) = keyword.filter(|keyword| !keyword.is_empty()) {
        return source.list_by_search(page, size, keyword).await;
    }

    let filter_options = raw_filter_options
        .and_then(|raw| {
            let parsed = serde_json::from_str::<HashMap<String, String>>(raw);
            if parsed.is_err() {
                debug!("[KUAIKAN] unusable filter options dropped: {:?}", raw);
            }
            parsed.ok()
        })
        .unwrap_or_default();

    source.list_by_category(page, size, &filter_options).await
}

/// Detail data for the manga behind a detail-page address.
pub async fn get_manga_data(source: &KuaiKanSource, responder: &dyn Responder, data_page_url: &str) {
    let outcome = source.manga_detail(data_page_url).await;
    deliver(responder, outcome);
}

/// Image list for the chapter behind a chapter-page address.
pub async fn get_chapter_image_list(
    source: &KuaiKanSource,
    responder: &dyn Responder,
    chapter_url: &str,
) {
    let outcome = source.chapter_images(chapter_url).await;
    deliver(responder, outcome);
}

/// Final image address resolution before the host downloads a page.
pub async fn get_image_url(source: &KuaiKanSource, responder: &dyn Responder, path: &str) {
    deliver(responder, Ok(source.image_url(path)));
}

fn parse_arg(name: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| SourceError::invalid_argument(format!("{} must be a number, got {:?}", name, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceConfig;
    use crate::transport::Transport;
    use mockito::Matcher;
    use std::sync::Arc;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingResponder {
        results: Mutex<Vec<Value>>,
        exceptions: Mutex<Vec<String>>,
    }

    impl Responder for RecordingResponder {
        fn result(&self, value: Value) {
            self.results.lock().unwrap().push(value);
        }

        fn exception(&self, message: String) {
            self.exceptions.lock().unwrap().push(message);
        }
    }

    impl RecordingResponder {
        fn results(&self) -> Vec<Value> {
            self.results.lock().unwrap().clone()
        }

        fn exceptions(&self) -> Vec<String> {
            self.exceptions.lock().unwrap().clone()
        }
    }

    struct DeadTransport;

    #[async_trait::async_trait]
    impl Transport for DeadTransport {
        async fn get(&self, _url: &str) -> crate::error::Result<String> {
            Err(SourceError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        }
    }

    fn source_for(server: &mockito::Server) -> KuaiKanSource {
        let config = SourceConfig {
            base_url: server.url(),
            ..SourceConfig::default()
        };
        KuaiKanSource::new(config)
    }

    fn dead_source() -> KuaiKanSource {
        KuaiKanSource::with_transport(SourceConfig::default(), Arc::new(DeadTransport))
    }

    const SEARCH_BODY: &str = r#"{
        "code": 200,
        "message": "OK",
        "hits": [
            {"id": 544, "title": "Hit", "description": "", "vertical_image_url": "https://img/h.webp"}
        ]
    }"#;

    #[tokio::test]
    async fn keyword_takes_precedence_over_filters() {
        let mut server = mockito::Server::new_async().await;
        // Only the search endpoint exists; touching the category endpoint
        // would return 501 and fail the comparison below.
        let search = server
            .mock("GET", "/search/mini/topic/title_and_author")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(SEARCH_BODY)
            .expect(2)
            .create_async()
            .await;

        let source = source_for(&server);

        let with_filters = RecordingResponder::default();
        get_manga_list(
            &source,
            &with_filters,
            "1",
            "20",
            Some("Hit"),
            Some(r#"{"tag_id": "46"}"#),
        )
        .await;

        let keyword_only = RecordingResponder::default();
        get_manga_list(&source, &keyword_only, "1", "20", Some("Hit"), None).await;

        search.assert_async().await;
        assert_eq!(with_filters.results(), keyword_only.results());
        assert!(with_filters.exceptions().is_empty());
    }

    #[tokio::test]
    async fn empty_keyword_falls_through_to_category_mode() {
        let mut server = mockito::Server::new_async().await;
        let category = server
            .mock("GET", "/search/mini/topic/multi_filter")
            .match_query(Matcher::UrlEncoded("tag_id".into(), "46".into()))
            .with_status(200)
            .with_body(r#"{"code": 200, "message": "OK", "hits": {"topicMessageList": []}}"#)
            .create_async()
            .await;

        let source = source_for(&server);
        let responder = RecordingResponder::default();
        get_manga_list(
            &source,
            &responder,
            "1",
            "20",
            Some(""),
            Some(r#"{"tag_id": "46"}"#),
        )
        .await;

        category.assert_async().await;
        assert_eq!(responder.results().len(), 1);
    }

    #[tokio::test]
    async fn malformed_filter_json_is_swallowed() {
        let mut server = mockito::Server::new_async().await;
        let category = server
            .mock("GET", "/search/mini/topic/multi_filter")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("tag_id".into(), "0".into()),
                Matcher::UrlEncoded("sort".into(), "1".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"code": 200, "message": "OK", "hits": {"topicMessageList": []}}"#)
            .create_async()
            .await;

        let source = source_for(&server);
        let responder = RecordingResponder::default();
        get_manga_list(&source, &responder, "1", "20", None, Some("{not json")).await;

        category.assert_async().await;
        assert_eq!(responder.results().len(), 1);
        assert!(responder.exceptions().is_empty());
    }

    #[tokio::test]
    async fn non_numeric_page_is_an_invalid_argument() {
        let source = dead_source();
        let responder = RecordingResponder::default();
        get_manga_list(&source, &responder, "one", "20", None, None).await;

        assert!(responder.results().is_empty());
        let exceptions = responder.exceptions();
        assert_eq!(exceptions.len(), 1);
        assert!(exceptions[0].contains("page"));
    }

    #[tokio::test]
    async fn every_operation_delivers_exactly_one_signal_on_transport_failure() {
        let source = dead_source();

        let responder = RecordingResponder::default();
        get_manga_list(&source, &responder, "1", "20", None, None).await;
        assert_eq!((responder.results().len(), responder.exceptions().len()), (0, 1));

        let responder = RecordingResponder::default();
        get_manga_list(&source, &responder, "1", "20", Some("kw"), None).await;
        assert_eq!((responder.results().len(), responder.exceptions().len()), (0, 1));

        let responder = RecordingResponder::default();
        get_manga_data(&source, &responder, "https://x/web/topic/1").await;
        assert_eq!((responder.results().len(), responder.exceptions().len()), (0, 1));

        let responder = RecordingResponder::default();
        get_chapter_image_list(&source, &responder, "https://x/web/comic/1").await;
        assert_eq!((responder.results().len(), responder.exceptions().len()), (0, 1));

        // The filter builder absorbs the failure into an empty result.
        let responder = RecordingResponder::default();
        set_manga_list_filter_options(&source, &responder).await;
        assert_eq!((responder.results().len(), responder.exceptions().len()), (1, 0));
        assert_eq!(responder.results()[0], serde_json::json!([]));
    }

    #[tokio::test]
    async fn bad_addresses_surface_the_distinct_error_kinds() {
        let source = dead_source();

        let responder = RecordingResponder::default();
        get_manga_data(&source, &responder, "https://x/web/profile/none").await;
        assert_eq!(responder.exceptions(), ["NO_SEASON_ID_GOT"]);

        let responder = RecordingResponder::default();
        get_chapter_image_list(&source, &responder, "https://x/web/comic/none").await;
        assert_eq!(responder.exceptions(), ["NO_EPISODE_ID_GOT"]);
    }

    #[tokio::test]
    async fn image_url_always_delivers_the_address_back() {
        let source = dead_source();
        let responder = RecordingResponder::default();
        get_image_url(&source, &responder, "https://img/p1.webp").await;

        assert_eq!(responder.results(), [Value::String("https://img/p1.webp".into())]);
        assert!(responder.exceptions().is_empty());
    }
}
