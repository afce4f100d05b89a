//! The five source operations. Each is a stateless request/transform
//! pipeline: build the request, fetch through the transport, parse the
//! envelope, normalize into the host-facing shape.

use crate::api::{
    ComicDetailPayload, DataEnvelope, Envelope, FilterPayload, TopicDetailPayload, TopicSummary,
    STATUS_OK,
};
use crate::config::SourceConfig;
use crate::endpoints;
use crate::error::{Result, SourceError};
use crate::filters;
use crate::models::{ChapterImage, ChapterRef, FilterGroup, FilterOption, ListItem, MangaDetail, MangaList};
use crate::transport::{HttpClient, Transport};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct KuaiKanSource {
    config: SourceConfig,
    transport: Arc<dyn Transport>,
}

impl KuaiKanSource {
    pub fn new(config: SourceConfig) -> Self {
        let transport = Arc::new(HttpClient::new(config.clone()));
        Self { config, transport }
    }

    /// Run against a host-provided transport instead of the built-in one.
    pub fn with_transport(config: SourceConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Browse-filter metadata: the static groups, with the server's
    /// category taxonomy appended to the first group. Never fails: any
    /// transport or parse problem degrades to an empty list so the browse
    /// UI stays usable.
    pub async fn filter_options(&self) -> Vec<FilterGroup> {
        match self.fetch_filter_options().await {
            Ok(groups) => groups,
            Err(e) => {
                warn!("[KUAIKAN] filter options degraded to empty: {}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_filter_options(&self) -> Result<Vec<FilterGroup>> {
        let mut groups = filters::static_filter_groups();

        let query = filters::taxonomy_query();
        let url = endpoints::multi_filter(&self.config.base_url, &query)?;
        let body = self.transport.get(url.as_str()).await?;

        let envelope: Envelope<FilterPayload> = serde_json::from_str(&body)?;
        if envelope.code != STATUS_OK {
            return Err(SourceError::status(envelope.code));
        }

        // Server categories land after the built-in "all" option.
        for category in envelope.hits.topic_categories {
            groups[0].options.push(FilterOption::new(category.title, category.tag_id.to_string()));
        }

        debug!("[KUAIKAN] filter options ready, {} tag options", groups[0].options.len());
        Ok(groups)
    }

    /// Category-mode listing. Unrecognized filter keys are ignored,
    /// missing ones fall back to the documented defaults.
    pub async fn list_by_category(
        &self,
        page: u32,
        page_size: u32,
        filter_options: &HashMap<String, String>,
    ) -> Result<MangaList> {
        let query = filters::category_query(page, page_size, filter_options);
        let url = endpoints::multi_filter(&self.config.base_url, &query)?;
        let body = self.transport.get(url.as_str()).await?;

        let envelope: Envelope<FilterPayload> = serde_json::from_str(&body)?;
        if envelope.code != STATUS_OK {
            // This endpoint's error echoes the request query, not the code.
            return Err(SourceError::status_echo(url.query().unwrap_or_default()));
        }

        let list = envelope
            .hits
            .topic_message_list
            .into_iter()
            .map(|item| self.list_item(item))
            .collect::<Vec<_>>();

        info!("[KUAIKAN] category listing page {}: {} items", page, list.len());
        Ok(MangaList { list })
    }

    /// Keyword search. Filter options play no part here.
    pub async fn list_by_search(&self, page: u32, page_size: u32, keyword: &str) -> Result<MangaList> {
        let url = endpoints::search(&self.config.base_url, keyword, page, page_size)?;
        let body = self.transport.get(url.as_str()).await?;

        let envelope: Envelope<Vec<TopicSummary>> = serde_json::from_str(&body)?;
        if envelope.code != STATUS_OK {
            return Err(SourceError::status(envelope.code));
        }

        let list = envelope
            .hits
            .into_iter()
            .map(|item| self.list_item(item))
            .collect::<Vec<_>>();

        info!("[KUAIKAN] search {:?} page {}: {} items", keyword, page, list.len());
        Ok(MangaList { list })
    }

    fn list_item(&self, item: TopicSummary) -> ListItem {
        ListItem {
            title: item.title,
            url: endpoints::topic_page(&self.config.base_url, item.id),
            cover_url: item.vertical_image_url,
        }
    }

    /// Detail data for one manga, addressed by the detail-page address a
    /// listing produced. Locked chapters are dropped, the rest keep their
    /// order.
    pub async fn manga_detail(&self, detail_url: &str) -> Result<MangaDetail> {
        let id = endpoints::extract_topic_id(detail_url)?;

        let url = endpoints::topic_detail(&self.config.base_url, id);
        let body = self.transport.get(&url).await?;

        let envelope: DataEnvelope<TopicDetailPayload> = serde_json::from_str(&body)?;
        if envelope.code != STATUS_OK {
            return Err(SourceError::status(envelope.code));
        }

        let info = envelope.data.topic_info;
        let chapter_list = info
            .comics
            .into_iter()
            .filter(|comic| !comic.locked)
            .map(|comic| ChapterRef {
                title: comic.title,
                url: endpoints::comic_page(&self.config.base_url, comic.id),
            })
            .collect::<Vec<_>>();

        info!("[KUAIKAN] topic {}: {} readable chapters", id, chapter_list.len());
        Ok(MangaDetail {
            title: info.title,
            description: info.description,
            cover_url: info.vertical_image_url,
            chapter_list,
        })
    }

    /// All page images of one chapter, in reading order.
    pub async fn chapter_images(&self, chapter_url: &str) -> Result<Vec<ChapterImage>> {
        let id = endpoints::extract_comic_id(chapter_url)?;

        let url = endpoints::comic_detail(&self.config.base_url, id);
        let body = self.transport.get(&url).await?;

        let envelope: DataEnvelope<ComicDetailPayload> = serde_json::from_str(&body)?;
        if envelope.code != STATUS_OK {
            return Err(SourceError::status(envelope.code));
        }

        let images = envelope
            .data
            .comic_info
            .comic_images
            .into_iter()
            .map(|image| ChapterImage {
                url: image.url,
                width: image.width,
                height: image.height,
            })
            .collect::<Vec<_>>();

        info!("[KUAIKAN] comic {}: {} pages", id, images.len());
        Ok(images)
    }

    /// Image address resolution. KuaiKan serves images without extra
    /// signing, so this is a passthrough; sources that need anti-hotlink
    /// tokens would build them here.
    pub fn image_url(&self, path: &str) -> String {
        path.to_string()
    }
}
