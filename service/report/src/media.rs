use std::path::Path;

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use domain_report::{
    model::vo::{Extraction, FieldFailure, ReportStatus, UploadRoot},
    service::MediaExtractorService,
};
use serde_json::{Map, Value};
use typed_builder::TypedBuilder;

use crate::naming;

/// Whether a payload key holds one image or a list of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldArity {
    Scalar,
    Array,
}

/// A payload key the extractor looks at.
#[derive(Debug, Clone, Copy)]
pub struct ImageField {
    pub key: &'static str,
    pub arity: FieldArity,
    /// Prefix of stored file names, array entries get `-NN` appended.
    pub label: &'static str,
}

pub const IMAGE_FIELDS: &[ImageField] = &[
    ImageField {
        key: "beforeImage",
        arity: FieldArity::Scalar,
        label: "beforeImage",
    },
    ImageField {
        key: "afterImage",
        arity: FieldArity::Scalar,
        label: "afterImage",
    },
    ImageField {
        key: "beforeEvidence",
        arity: FieldArity::Array,
        label: "beforeEvidence",
    },
    ImageField {
        key: "afterEvidence",
        arity: FieldArity::Array,
        label: "afterEvidence",
    },
    ImageField {
        key: "problemPhotos",
        arity: FieldArity::Array,
        label: "problemPhoto",
    },
];

const FINALIZED_DATE_KEY: &str = "finalizedDate";
const FINALIZED_FOLDER: &str = "finalized";

#[derive(TypedBuilder, Clone)]
pub struct MediaExtractorServiceImpl {
    #[builder(default)]
    upload_root: UploadRoot,
}

/// An inline image found in a payload.
struct InlineImage<'a> {
    subtype: &'a str,
    data: &'a str,
}

impl InlineImage<'_> {
    /// `None` for anything that isn't `data:image/<subtype>;base64,<data>`, including values
    /// already pointing at stored or remote files.
    fn parse(value: &str) -> Option<InlineImage<'_>> {
        let value = value.trim();
        if value.is_empty()
            || value.starts_with("http://")
            || value.starts_with("https://")
            || value.starts_with("/uploads/")
        {
            return None;
        }
        let (meta, data) = value.strip_prefix("data:image/")?.split_once(',')?;
        let subtype = meta.strip_suffix(";base64")?;
        Some(InlineImage { subtype, data })
    }

    fn extension(&self) -> &'static str {
        match self.subtype.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => ".jpg",
            "webp" => ".webp",
            _ => ".png",
        }
    }
}

/// `finalizedDate` wins, otherwise `finalized` for done reports and `draft` for the rest.
fn select_folder(status: ReportStatus, payload: &Map<String, Value>) -> String {
    match payload.get(FINALIZED_DATE_KEY) {
        Some(Value::String(date)) if !date.trim().is_empty() => naming::sanitize_folder(date),
        _ if status.is_done() => FINALIZED_FOLDER.to_string(),
        _ => naming::DEFAULT_FOLDER.to_string(),
    }
}

async fn create_parent_and_write(path: &Path, content: &[u8]) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(path.parent().ok_or(anyhow!("path: {path:?} doesn't has parent."))?)
        .await?;
    tokio::fs::write(path, content).await?;
    Ok(())
}

impl MediaExtractorServiceImpl {
    /// Store one value, returning its public path, `Ok(None)` when it isn't an inline image.
    async fn store(
        &self,
        report_id: i64,
        folder: &str,
        label: &str,
        value: &str,
    ) -> anyhow::Result<Option<String>> {
        let Some(image) = InlineImage::parse(value) else {
            return Ok(None);
        };
        let content = BASE64.decode(image.data.trim()).context("invalid base64 content")?;
        let file_name = format!(
            "{}-{}{}",
            naming::sanitize_file_name(label),
            naming::random_suffix(),
            image.extension()
        );
        let relative = format!("{}/{file_name}", UploadRoot::images_dir(report_id, folder));
        let path = self.upload_root.resolve(&relative);
        create_parent_and_write(&path, &content)
            .await
            .with_context(|| format!("write {path:?}"))?;
        tracing::debug!("Stored inline image of report {report_id} at {path:?}");
        Ok(Some(UploadRoot::public_path(&relative)))
    }

    /// Replace `slot` by its public path if it holds an inline image.
    async fn rewrite(
        &self,
        report_id: i64,
        folder: &str,
        label: &str,
        slot: &mut String,
    ) -> Result<(), String> {
        match self.store(report_id, folder, label, slot.as_str()).await {
            Ok(Some(url)) => {
                *slot = url;
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(e) => Err(format!("{e:#}")),
        }
    }
}

#[async_trait]
impl MediaExtractorService for MediaExtractorServiceImpl {
    async fn extract(&self, report_id: i64, status: ReportStatus, payload: Value) -> Extraction {
        let Value::Object(mut root) = payload else {
            return Extraction::untouched(payload);
        };
        let folder = select_folder(status, &root);
        let mut failures = vec![];

        for field in IMAGE_FIELDS {
            match (field.arity, root.get_mut(field.key)) {
                (FieldArity::Scalar, Some(Value::String(slot))) => {
                    if let Err(reason) = self.rewrite(report_id, &folder, field.label, slot).await
                    {
                        failures.push(FieldFailure {
                            field: field.key.to_string(),
                            index: None,
                            reason,
                        });
                    }
                }
                (FieldArity::Array, Some(Value::Array(items))) => {
                    for (i, item) in items.iter_mut().enumerate() {
                        let Value::String(slot) = item else {
                            continue;
                        };
                        let label = format!("{}-{:02}", field.label, i + 1);
                        if let Err(reason) = self.rewrite(report_id, &folder, &label, slot).await {
                            failures.push(FieldFailure {
                                field: field.key.to_string(),
                                index: Some(i + 1),
                                reason,
                            });
                        }
                    }
                }
                // Other shapes aren't ours to judge.
                _ => {}
            }
        }

        for failure in failures.iter() {
            tracing::warn!(
                "Left field {}{} of report {report_id} unprocessed: {}",
                failure.field,
                failure.index.map(|i| format!("[{i}]")).unwrap_or_default(),
                failure.reason
            );
        }

        Extraction {
            payload: Value::Object(root),
            failures,
        }
    }
}
