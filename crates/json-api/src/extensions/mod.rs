//! Extension traits

mod content_type;
mod depot;
mod result;

pub(crate) use content_type::RequestContentTypeExt as _;
pub(crate) use depot::DepotExt as _;
pub(crate) use result::ResultExt as _;
