// Library for tests to access modules

pub mod aggregation;
pub mod cache;
pub mod command;
pub mod config;
pub mod models;
pub mod routes;
pub mod server;
pub mod telemetry;
pub mod traffic_parser;
