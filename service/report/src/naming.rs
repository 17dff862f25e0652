//! Names of things written to disk or shown to people: dispatch numbers, stored file names and
//! image folders.

use chrono::{DateTime, Utc};
use rand::Rng;

const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
pub const SUFFIX_LEN: usize = 10;

pub const DEFAULT_FILE_NAME: &str = "attachment";
pub const DEFAULT_FOLDER: &str = "draft";

/// `YYYYMMDD-HHMMSS-NNN`, the last group being random in `100..=999`.
pub fn dispatch_no(now: DateTime<Utc>) -> String {
    let n = rand::thread_rng().gen_range(100..1000);
    format!("{}-{n}", now.format("%Y%m%d-%H%M%S"))
}

/// Random lowercase alphanumeric string of [`SUFFIX_LEN`] characters.
pub fn random_suffix() -> String {
    let mut rng = rand::thread_rng();
    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect()
}

/// Trims, drops every `..` and replaces path separators by `_`.
///
/// The result never contains `..`, `/` or `\`. A name made of dots only collapses to empty.
fn sanitize(raw: &str) -> String {
    let cleaned = raw.trim().replace("..", "").replace(['/', '\\'], "_");
    if cleaned.chars().all(|c| c == '.') {
        String::new()
    } else {
        cleaned
    }
}

/// File name safe to join to a directory, `attachment` when nothing is left.
pub fn sanitize_file_name(raw: &str) -> String {
    non_empty_or(sanitize(raw), DEFAULT_FILE_NAME)
}

/// Image folder name safe to join to a directory, `draft` when nothing is left.
pub fn sanitize_folder(raw: &str) -> String {
    non_empty_or(sanitize(raw), DEFAULT_FOLDER)
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

/// Splits `report.pdf` into `("report", ".pdf")`. Leading dots aren't extensions.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(i) if i > 0 => name.split_at(i),
        _ => (name, ""),
    }
}

/// `<base>-<suffix><ext>`, unique per upload while keeping the original name recognizable.
pub fn stored_file_name(safe_name: &str) -> String {
    let (base, ext) = split_extension(safe_name);
    format!("{base}-{}{ext}", random_suffix())
}
