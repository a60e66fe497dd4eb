//! Subway network management server.
//!
//! A JSON backend for stations, lines, and the sections that join stations
//! into lines. The interesting part is keeping each line a single unbranched
//! path as sections are added and removed; see [`domain::LinePath`].

pub mod config;
pub mod domain;
pub mod service;
pub mod store;
pub mod web;
