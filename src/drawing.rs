//! Drawing module
//!
//! This module contains all the logic to convert a legend design into
//! concrete geometry and rendering commands for a given rendering surface.
//! It is the bridge between the [`crate::des`] module and the
//! [`crate::render`] module.
//!
//! Layout computation is pure: every geometry record is recomputed from its
//! design on each call, holds no reference to a surface, and can be drawn
//! any number of times. Validation errors are raised here, before any
//! drawing command is issued.
use std::fmt;

mod anchor;
mod continuous;
mod legend;
mod ticks;

pub use anchor::position_from_anchor;
pub use continuous::{Colorbar, Tick, Title};
pub use legend::{Dimensions, ItemLayout, Legend};
pub use ticks::LabelFormatter;

/// Errors that can occur during legend layout
#[derive(Debug)]
pub enum Error {
    /// A dimension of the design is not a finite non-negative number
    InvalidDimension {
        /// The name of the offending dimension
        what: &'static str,
        /// The offending value
        value: f32,
    },
    /// The design model is inconsistent
    InconsistentDesign(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDimension { what, value } => {
                write!(f, "Invalid dimension: {} = {}", what, value)
            }
            Error::InconsistentDesign(reason) => write!(f, "Inconsistent design: {}", reason),
        }
    }
}

impl std::error::Error for Error {}

pub(crate) fn check_dim(what: &'static str, value: f32) -> Result<(), Error> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidDimension { what, value })
    }
}

pub(crate) fn check_offset(what: &'static str, value: f32) -> Result<(), Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidDimension { what, value })
    }
}
