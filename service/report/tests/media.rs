use domain_report::{
    model::vo::{ReportStatus, UploadRoot},
    service::MediaExtractorService,
};
use indoc::indoc;
use serde_json::{json, Value};
use service_report::MediaExtractorServiceImpl;

const PNG: &str = "data:image/png;base64,iVBORw0KGgo=";
const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG: &str = "data:image/jpeg;base64,/9j/4AAQ";

fn extractor(dir: &tempfile::TempDir) -> MediaExtractorServiceImpl {
    MediaExtractorServiceImpl::builder()
        .upload_root(UploadRoot::new(dir.path()))
        .build()
}

fn on_disk(dir: &tempfile::TempDir, public_path: &str) -> std::path::PathBuf {
    dir.path().join(public_path.strip_prefix("/uploads/").unwrap())
}

#[tokio::test]
async fn test_extract_scalar_field() {
    let dir = tempfile::tempdir().unwrap();
    let extractor = extractor(&dir);

    let extraction = extractor
        .extract(7, ReportStatus::Open, json!({ "beforeImage": PNG, "notes": "ok" }))
        .await;

    assert!(extraction.is_complete());
    let url = extraction.payload["beforeImage"].as_str().unwrap();
    assert!(url.starts_with("/uploads/images/7/draft/beforeImage-"), "{url}");
    assert!(url.ends_with(".png"));
    assert_eq!(extraction.payload["notes"], "ok");
    assert_eq!(std::fs::read(on_disk(&dir, url)).unwrap(), PNG_BYTES);
}

#[tokio::test]
async fn test_extract_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let extractor = extractor(&dir);

    let first = extractor
        .extract(7, ReportStatus::Progress, json!({ "afterImage": JPEG, "beforeEvidence": [PNG] }))
        .await;
    let second = extractor.extract(7, ReportStatus::Progress, first.payload.clone()).await;
    assert_eq!(first.payload, second.payload);

    assert!(second.failures.is_empty());

    let stored = std::fs::read_dir(dir.path().join("images/7/draft")).unwrap().count();
    assert_eq!(stored, 2);
}

#[tokio::test]
async fn test_extract_array_fields() {
    let dir = tempfile::tempdir().unwrap();
    let extractor = extractor(&dir);

    let extraction = extractor
        .extract(
            3,
            ReportStatus::Done,
            json!({ "problemPhotos": [PNG, 42, "https://cdn.example.com/a.png", JPEG] }),
        )
        .await;

    assert!(extraction.is_complete());
    let photos = extraction.payload["problemPhotos"].as_array().unwrap();
    let first = photos[0].as_str().unwrap();
    assert!(first.starts_with("/uploads/images/3/finalized/problemPhoto-01-"), "{first}");
    assert_eq!(photos[1], 42);
    assert_eq!(photos[2], "https://cdn.example.com/a.png");
    let last = photos[3].as_str().unwrap();
    assert!(last.starts_with("/uploads/images/3/finalized/problemPhoto-04-"), "{last}");
    assert!(last.ends_with(".jpg"));
}

#[tokio::test]
async fn test_finalized_date_overrides_folder() {
    let dir = tempfile::tempdir().unwrap();
    let extractor = extractor(&dir);

    let extraction = extractor
        .extract(
            5,
            ReportStatus::Progress,
            json!({ "finalizedDate": "2024-03-01", "afterImage": PNG }),
        )
        .await;

    let url = extraction.payload["afterImage"].as_str().unwrap();
    assert!(url.starts_with("/uploads/images/5/2024-03-01/afterImage-"), "{url}");
    assert!(on_disk(&dir, url).is_file());
}

#[tokio::test]
async fn test_malformed_field_doesnt_stop_siblings() {
    let dir = tempfile::tempdir().unwrap();
    let extractor = extractor(&dir);
    let broken = "data:image/png;base64,@@not base64@@";

    let extraction = extractor
        .extract(
            9,
            ReportStatus::Open,
            json!({ "beforeImage": broken, "afterImage": PNG, "afterEvidence": [PNG, broken] }),
        )
        .await;

    assert_eq!(extraction.payload["beforeImage"], broken);
    assert!(extraction.payload["afterImage"].as_str().unwrap().starts_with("/uploads/"));
    assert_eq!(extraction.payload["afterEvidence"][1], broken);
    assert!(extraction.payload["afterEvidence"][0].as_str().unwrap().starts_with("/uploads/"));

    assert_eq!(extraction.failures.len(), 2);
    assert_eq!(extraction.failures[0].field, "beforeImage");
    assert_eq!(extraction.failures[0].index, None);
    assert_eq!(extraction.failures[1].field, "afterEvidence");
    assert_eq!(extraction.failures[1].index, Some(2));
}

#[tokio::test]
async fn test_extract_leaves_foreign_payloads() {
    let dir = tempfile::tempdir().unwrap();
    let extractor = extractor(&dir);

    for payload in [json!([PNG]), json!("not an object"), Value::Null] {
        let extraction = extractor.extract(1, ReportStatus::Open, payload.clone()).await;
        assert_eq!(extraction.payload, payload);
        assert!(extraction.is_complete());
    }
    assert!(!dir.path().join("images").exists());

    let payload: Value = serde_json::from_str(indoc! {r#"
        {
          "beforeImage": "data:image/png;base64,iVBORw0KGgo=",
          "customer": { "signature": "data:image/png;base64,iVBORw0KGgo=" }
        }
    "#})
    .unwrap();
    let extraction = extractor.extract(1, ReportStatus::Open, payload).await;
    let rewritten = extraction.payload;
    assert!(rewritten["beforeImage"].as_str().unwrap().starts_with("/uploads/images/1/draft/"));
    // Only known top-level fields are extracted.
    assert_eq!(rewritten["customer"]["signature"], PNG);
}
