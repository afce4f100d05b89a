//! Content-source adapter for KuaiKan Manhua.
//!
//! Translates the site's JSON REST responses into the fixed contract a
//! manga reader host consumes: filter options, manga listings, manga
//! detail, chapter image lists, and image-address resolution. The host
//! supplies networking ([`transport::Transport`]) and receives every
//! outcome through a two-channel [`dispatch::Responder`].

pub mod api;
pub mod config;
pub mod dispatch;
pub mod endpoints;
pub mod error;
pub mod filters;
pub mod models;
pub mod source;
pub mod transport;

pub use config::SourceConfig;
pub use dispatch::Responder;
pub use error::{Result, SourceError};
pub use models::{ChapterImage, ChapterRef, FilterGroup, FilterOption, ListItem, MangaDetail, MangaList};
pub use source::KuaiKanSource;
pub use transport::{HttpClient, Transport};
