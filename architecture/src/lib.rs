//! Building blocks shared by the domain and service crates: aggregate markers,
//! repository abstractions and the response envelope used by the web host.

/// Helps re-exporting modules.
/// ```ignore
/// // code
/// make_re_export!(xxx);
/// // gen
/// pub mod xxx;
/// pub use xxx::*;
/// ```
#[macro_export]
macro_rules! make_re_export {
    ($($(#[$meta:meta])*  $mod_name:ident ),*) => {
        $($(#[$meta])* pub mod $mod_name;)*
        $($(#[$meta])* pub use self::$mod_name::*;)*
    };
}

make_re_export!(base_dto, model, repository);
