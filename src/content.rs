use std::{
    io,
    path::{Path, PathBuf},
};

/// Location of the post, relative to the project root
pub const POST_PATH: &str = "content/post.md";

/// Read the post relative to the current working directory
pub async fn load_document_text() -> io::Result<String> {
    tokio::fs::read_to_string(POST_PATH).await
}

/// Reads the post out of one project root.
///
/// Every call goes to disk; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct ContentLoader {
    root: PathBuf,
}

impl ContentLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn document_path(&self) -> PathBuf {
        self.root.join(POST_PATH)
    }

    /// The full contents of the post as UTF-8, or the error from the read.
    ///
    /// Invalid UTF-8 fails with [`io::ErrorKind::InvalidData`].
    pub async fn load_document_text(&self) -> io::Result<String> {
        tokio::fs::read_to_string(self.document_path()).await
    }
}
