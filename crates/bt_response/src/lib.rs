//! Backend response models decoded with [`bt_marshal`].
//!
//! ## Menu
//!
//! - [`coroner`]: column-grouped query responses, read by column name.
//! - [`submission`]: the result of a report submission and its status.

pub mod coroner;
pub mod submission;

use std::sync::OnceLock;

use bt_marshal::{Marshaller, MarshalConfig, naming::NamingPolicy};

/// The marshaller used by the string-level constructors of this crate.
///
/// Backend keys are single words or explicit renames, so the shared
/// default policy reads them unchanged.
pub(crate) fn marshaller() -> &'static Marshaller {
    static MARSHALLER: OnceLock<Marshaller> = OnceLock::new();
    MARSHALLER.get_or_init(|| Marshaller::new(NamingPolicy::shared().clone(), MarshalConfig::new()))
}
