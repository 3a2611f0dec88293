//! Client side of the contact form: field state, submission status and
//! the HTTP call to the contact endpoint.

mod form;
mod http;

pub use form::*;
pub use http::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("A submission is already in progress")]
    Busy,

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
