// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Simulated Redfish BMC.
//!
//! Serves a service root, a chassis collection, per-chassis documents,
//! and the chassis reset action, all driven by a TOML config. Resets
//! mutate the simulated power state, and every handled request lands in
//! a log tests can inspect. Deliberate misbehavior (missing attributes,
//! out-of-schema values, absent actions) is configured per chassis.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::anyhow;
use anyhow::Result;
use redfish_types::power::PowerState;
use slog::info;
use slog::o;
use slog::Logger;

pub mod config;

mod chassis;
mod context;
mod http_entrypoints;

pub use context::RecordedRequest;

use config::Config;
use context::ServerContext;

/// A running simulated BMC: the shared state plus the dropshot server
/// in front of it.
pub struct Server {
    context: Arc<ServerContext>,
    http_server: dropshot::HttpServer<Arc<ServerContext>>,
}

impl Server {
    /// Start a simulated BMC server. `config.log` is ignored here; the
    /// caller owns logger construction.
    pub async fn start(config: Config, log: &Logger) -> Result<Server> {
        info!(log, "setting up bmc-sim server");
        let Config { service, chassis, dropshot, log: _ } = config;

        let context = Arc::new(ServerContext::new(
            service,
            chassis,
            log.new(o!("component" => "ServerContext")),
        ));

        let dropshot_log = log.new(o!("component" => "dropshot"));
        let http_server = dropshot::HttpServerStarter::new(
            &dropshot,
            http_entrypoints::api(),
            Arc::clone(&context),
            &dropshot_log,
        )
        .map_err(|err| anyhow!("initializing server: {}", err))?
        .start();

        info!(
            log, "bmc-sim server started";
            "local_addr" => %http_server.local_addr(),
        );
        Ok(Server { context, http_server })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.http_server.local_addr()
    }

    /// Every request the server has handled, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.context.requests()
    }

    /// Current power state of a simulated chassis.
    pub fn power_state(&self, identity: &str) -> Option<PowerState> {
        self.context.power_state(identity)
    }

    /// Gracefully shut the server down.
    pub async fn close(self) -> Result<()> {
        self.http_server
            .close()
            .await
            .map_err(|err| anyhow!("closing server: {}", err))
    }

    /// Wait for the server to shut down. This does not initiate a
    /// shutdown, so calling it right after `start()` blocks until
    /// something else does.
    pub async fn wait_for_finish(self) -> Result<()> {
        self.http_server
            .await
            .map_err(|err| anyhow!("server failed: {}", err))
    }
}
