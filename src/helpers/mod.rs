//! Helper functions shared by the content loader and the feed generator

mod date;
mod url;

pub use self::date::*;
pub use self::url::*;
