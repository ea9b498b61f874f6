//! `faqforge` — batch compiler from plain-text Q&A sources to HTML
//! accordion fragments.
//!
//! This library provides the compiler pipeline (discover, parse,
//! segment, render, persist), the groups configuration model and the
//! CLI surface of the `faqforge` binary.

pub mod cli;
pub mod compiler;
pub mod config;
pub mod error;
pub mod observability;
