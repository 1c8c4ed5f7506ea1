//! Core types for unitspan: conversion records and errors
//!
//! Shared by the engine crate and the CLI. Keeps the value types and
//! the error enum free of any graph machinery.

mod conversion;
mod error;

pub use conversion::{Conversion, UnitId};
pub use error::ConvertError;
