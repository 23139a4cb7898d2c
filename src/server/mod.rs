//! HTTP API exposing the translator operations

pub mod api;
