//! Casino Finder - Preference quiz and casino recommendations
//!
//! A player answers a short sequence of multiple-choice questions; the
//! answers are scored against a casino catalog to produce a shortlist of up
//! to three best matches.
//!
//! The core (`domain`) is synchronous and performs no I/O. Definition
//! loading, the cosmetic loading sequence and configuration live at the
//! edges.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
