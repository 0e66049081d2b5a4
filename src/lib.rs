// src/lib.rs
#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod record;
pub mod parse;

pub mod scan;
pub mod aggregate;
pub mod export;
pub mod pipeline;

pub mod commands;
