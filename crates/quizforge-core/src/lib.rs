//! Business logic and storage-port trait definitions for quizforge.
//!
//! This crate defines the "ports" (storage, notification, navigation
//! traits) that the infrastructure layer implements. It depends only on
//! `quizforge-types` -- never on `quizforge-infra` or any database/IO
//! crate.

pub mod document;
pub mod drag;
pub mod factory;
pub mod navigate;
pub mod notify;
pub mod player;
pub mod registry;
pub mod render;
pub mod selection;
pub mod service;
pub mod storage;
