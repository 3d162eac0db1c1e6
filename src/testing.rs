use std::{
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
};

use crate::content::POST_PATH;

static NEXT_ROOT: AtomicUsize = AtomicUsize::new(0);

/// An empty project root under the system temp dir, removed on drop
pub struct ScratchRoot {
    path: PathBuf,
}

impl ScratchRoot {
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!(
            "mdpage-{}-{}",
            std::process::id(),
            NEXT_ROOT.fetch_add(1, Ordering::Relaxed)
        ));
        fs::create_dir_all(&path).expect("temp dir should be writable");
        Self { path }
    }

    /// A root whose post already holds `content`
    pub fn with_post(content: impl AsRef<[u8]>) -> Self {
        let root = Self::new();
        root.write_post(content);
        root
    }

    pub fn write_post(&self, content: impl AsRef<[u8]>) {
        let post = self.path.join(POST_PATH);
        fs::create_dir_all(post.parent().expect("post path has a parent"))
            .expect("temp dir should be writable");
        fs::write(post, content).expect("temp dir should be writable");
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchRoot {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
