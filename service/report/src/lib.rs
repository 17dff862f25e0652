pub mod access;
mod attachment;
mod lifecycle;
mod media;
pub mod naming;

#[rustfmt::skip]
pub use {
    attachment::AttachmentServiceImpl,
    lifecycle::ReportServiceImpl,
    media::{MediaExtractorServiceImpl, ImageField, FieldArity, IMAGE_FIELDS},
};
