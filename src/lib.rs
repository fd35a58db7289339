//! beer-service - non-blocking HTTP resource service for the beer catalogue
//!
//! Request flow: route table -> handler -> [`service::BeerService`] ->
//! [`store::BeerStore`], with validation and entity/DTO mapping done
//! synchronously inside the service.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod service;
pub mod store;
pub mod validation;
