//! Contact form submissions: validation, notification formatting and
//! hand-off to an email delivery provider.

mod delivery;
mod error;
mod request;
mod result;
mod service;
mod template;

pub use delivery::*;
pub use error::*;
pub use request::*;
pub use result::*;
pub use service::*;
pub use template::*;
