use std::path::{Path, PathBuf};

/// Public prefix under which the upload root is served.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Base directory of every stored image and attachment.
///
/// Paths recorded in the storage are relative to it, so moving the directory only needs a
/// configuration change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRoot(PathBuf);

impl UploadRoot {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self(base.into())
    }

    pub fn base(&self) -> &Path {
        &self.0
    }

    /// Absolute (or base-relative) location of `relative` on disk.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.0.join(relative)
    }

    /// Public reference of `relative`, e.g. `/uploads/images/1/draft/a.png`.
    pub fn public_path(relative: &str) -> String {
        format!("{PUBLIC_PREFIX}/{}", relative.trim_start_matches('/'))
    }

    pub fn images_dir(report_id: i64, folder: &str) -> String {
        format!("images/{report_id}/{folder}")
    }

    pub fn attachments_dir(report_id: i64) -> String {
        format!("attachments/{report_id}")
    }
}

impl Default for UploadRoot {
    fn default() -> Self {
        Self::new("./uploads")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        let root = UploadRoot::new("/srv/uploads");
        let relative = format!("{}/a.png", UploadRoot::images_dir(7, "draft"));
        assert_eq!(root.resolve(&relative), PathBuf::from("/srv/uploads/images/7/draft/a.png"));
        assert_eq!(UploadRoot::public_path(&relative), "/uploads/images/7/draft/a.png");
        assert_eq!(UploadRoot::attachments_dir(7), "attachments/7");
    }
}
