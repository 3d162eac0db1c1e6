//! Serve a single markdown post: read it from disk on each request and hand
//! the text to the page as `{ mdText }`.

pub mod content;
pub mod page;

#[cfg(test)]
mod testing;

pub use content::{load_document_text, ContentLoader, POST_PATH};
pub use page::{PageData, PageServerLoad, PostPage, RequestEvent};
