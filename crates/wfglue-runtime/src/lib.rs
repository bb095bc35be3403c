//! wfglue runtime library entry.
//!
//! Adapters that sit between workflow code and the libraries it runs on:
//! strict config loading, log subscriber setup, an explicit metrics registry,
//! the work-queue metrics provider, and the raw storage copy helper.

pub mod config;
pub mod obs;
pub mod startup;
pub mod storage;
pub mod workqueue;
