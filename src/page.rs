use std::io;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::content::ContentLoader;

/// What the host knows about the request being served
#[derive(Debug, Clone, Default)]
pub struct RequestEvent {
    pub route_id: String,
}

impl RequestEvent {
    pub fn new(route_id: impl Into<String>) -> Self {
        Self {
            route_id: route_id.into(),
        }
    }
}

/// Render context handed to the page template
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub md_text: String,
}

/// Load hook the host calls once per page request.
///
/// Errors are returned to the host as-is; producing an error response is
/// the host's job.
#[async_trait]
pub trait PageServerLoad: Send + Sync {
    type Data: Serialize + Send;

    async fn load(&self, event: &RequestEvent) -> io::Result<Self::Data>;
}

/// Serves the post as `{ mdText }`
#[derive(Debug, Clone)]
pub struct PostPage {
    loader: ContentLoader,
}

impl PostPage {
    pub fn new(loader: ContentLoader) -> Self {
        Self { loader }
    }
}

#[async_trait]
impl PageServerLoad for PostPage {
    type Data = PageData;

    async fn load(&self, event: &RequestEvent) -> io::Result<PageData> {
        tracing::debug!(route = %event.route_id, "loading post");
        let md_text = self.loader.load_document_text().await?;
        Ok(PageData { md_text })
    }
}
