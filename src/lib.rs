//! Utilities for splitting sequences into a fixed number of batches.
//!
//! The main entry points are [`batch::batches`] and the [`batch::SliceExt`]
//! trait, which split a slice into a requested number of contiguous
//! sub-slices and yield them lazily. The [`newton`] module contains a small
//! square-root approximation built in the same lazy-iterator style.

pub mod batch;
pub mod newton;
