#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use bt_marshal as marshal;
pub use bt_response as response;
pub use bt_utils as utils;
