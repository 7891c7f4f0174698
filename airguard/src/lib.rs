//! Air-quality station data core.
//!
//! Loads monitoring stations from the public GIOŚ API, enriches a station
//! with its index summary and current PM10/PM2.5 readings, and keeps the
//! result in a shared registry that a presentation layer can watch.

pub mod details;
pub mod domain;
pub mod gios;
pub mod history;
pub mod registry;
