//! Transit network server.
//!
//! Models a transit network as an undirected weighted graph and answers
//! structural and routing queries over it: adjacency and incidence
//! matrices, vertex degree, fewest-stops and least-weight routes, plus
//! station lookup by exact name and by accent-insensitive prefix.

pub mod config;
pub mod domain;
pub mod loader;
pub mod network;
pub mod stations;
pub mod system;
pub mod web;
