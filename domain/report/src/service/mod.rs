mod attachment;
mod media;
mod report;

#[rustfmt::skip]
pub use {
    attachment::*,
    media::*,
    report::*,
};
