mod actor;
mod extraction;
mod filter;
mod status;
mod upload_root;

#[rustfmt::skip]
pub use {
    actor::*,
    extraction::*,
    filter::*,
    status::*,
    upload_root::*,
};
