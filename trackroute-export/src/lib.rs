//! Route exporters for GIS tools.
//!
//! [`export_route_to_gpx`] writes a GPX 1.1 track through the `gpx` crate and
//! [`export_route_to_kml`] writes a KML 2.2 line string, both listing the waypoints of an
//! [`OptimizedRoute`](trackroute_core::OptimizedRoute) in visiting order.
//! [`render`] dispatches on an [`ExportFormat`], which also covers the route as
//! pretty-printed JSON.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod format;
mod gpx;
mod kml;
mod xml;

pub use format::{ExportError, ExportFormat, UnknownFormat, render};
pub use self::gpx::{GpxOptions, export_route_to_gpx, export_route_to_gpx_with};
pub use kml::{KmlOptions, export_route_to_kml, export_route_to_kml_with};
