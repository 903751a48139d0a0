// SPDX-License-Identifier: MIT

//! Pixname: rename images with a vision language model
//!
//! Asks a vision-capable chat model to describe each image in a directory,
//! turns the description into a filesystem-safe slug, and renames the file
//! (or prints the plan in dry-run mode).

pub mod batch;
pub mod encode;
pub mod error;
pub mod openai;
pub mod resolve;
pub mod slug;

pub use error::{PixnameError, Result};
