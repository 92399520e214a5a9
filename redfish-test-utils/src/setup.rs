// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::sync::Arc;

use camino::Utf8Path;
use dropshot::test_util::LogContext;
use redfish_client::HttpConnector;
use redfish_client::HttpConnectorConfig;
use redfish_client::ServiceRoot;
use slog::Logger;

pub struct TestContext {
    pub connector: Arc<HttpConnector>,
    pub sim: bmc_sim::Server,
    pub logctx: LogContext,
}

impl TestContext {
    pub fn log(&self) -> &Logger {
        &self.logctx.log
    }

    /// Load the service root of the simulated BMC.
    pub async fn service_root(&self) -> ServiceRoot {
        ServiceRoot::load(self.connector.clone(), self.log())
            .await
            .expect("failed to load service root")
    }

    pub async fn teardown(self) {
        self.sim.close().await.expect("failed to stop bmc-sim");
        self.logctx.cleanup_successful();
    }
}

pub fn load_test_config() -> bmc_sim::config::Config {
    // The test config is located relative to the directory this file is in.
    let manifest_dir = Utf8Path::new(env!("CARGO_MANIFEST_DIR"));
    let config_file_path = manifest_dir.join("configs/config.test.toml");
    bmc_sim::config::Config::from_file(&config_file_path)
        .expect("failed to load config.test.toml")
}

pub async fn test_setup(test_name: &str) -> TestContext {
    test_setup_with_config(test_name, load_test_config()).await
}

pub async fn test_setup_with_config(
    test_name: &str,
    config: bmc_sim::config::Config,
) -> TestContext {
    let logctx = LogContext::new(test_name, &config.log);
    let log = &logctx.log;

    let sim = bmc_sim::Server::start(config, log)
        .await
        .expect("failed to start bmc-sim");

    let connector_config =
        HttpConnectorConfig::new(format!("http://{}", sim.local_addr()));
    let connector = Arc::new(
        HttpConnector::new(connector_config, log)
            .expect("failed to build connector"),
    );

    TestContext { connector, sim, logctx }
}
