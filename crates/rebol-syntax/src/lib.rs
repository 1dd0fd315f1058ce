mod error;
mod options;
mod token_kind;
mod value;

pub use crate::{
    error::{ScanError, ScanErrorKind},
    options::ScanOptions,
    token_kind::TokenKind,
    value::Value,
};
