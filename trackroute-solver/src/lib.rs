//! Waypoint ordering strategies for Trackroute.
//!
//! Three [`Optimizer`](trackroute_core::Optimizer) implementations decide the
//! visiting order of a waypoint set while keeping the first waypoint fixed as
//! the start:
//!
//! - [`NearestNeighbourOptimizer`] greedily walks to the closest unvisited
//!   waypoint.
//! - [`GeneticOptimizer`] evolves a population of tours, selecting parents in
//!   proportion to the inverse of their length.
//! - [`PriorityOptimizer`] sorts by descending priority.
//!
//! Each optimizer hands its order to a
//! [`RoutePlanner`](trackroute_core::RoutePlanner), so the resulting
//! [`OptimizedRoute`](trackroute_core::OptimizedRoute) carries segments,
//! totals and fuel cost. [`Strategy`] selects an optimizer by name.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod genetic;
mod matrix;
mod nearest;
mod priority;
mod strategy;

pub use genetic::{Crossover, GeneticConfig, GeneticOptimizer};
pub use nearest::NearestNeighbourOptimizer;
pub use priority::PriorityOptimizer;
pub use strategy::{
    Strategy, UnknownStrategy, optimize_route_genetic, optimize_route_nearest_neighbour,
    optimize_route_priority,
};
