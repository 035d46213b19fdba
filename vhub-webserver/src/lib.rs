#[macro_use]
extern crate log;

use vhub_core::gateways::notify::NotificationGateway;
use vhub_db_sqlite::Connections;

mod adapters;
mod core;
mod web;

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    notify_gw: Box<dyn NotificationGateway + Send + Sync>,
    version: &'static str,
) {
    web::run(connections.into(), enable_cors, notify_gw, version).await;
}
