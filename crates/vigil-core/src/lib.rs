//! Core configuration and hashing for vigil.
//!
//! This crate provides the foundational pieces shared across all vigil crates:
//! - [`config`] — Rule configuration loading from `.vigil.json`
//! - [`hash`] — Deterministic content hashing (xxhash64)

pub mod config;
pub mod hash;
