// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Run a simulated Redfish BMC from a config file.

use anyhow::Context;
use anyhow::Result;
use bmc_sim::config::Config;
use bmc_sim::Server;
use camino::Utf8PathBuf;
use clap::Parser;
use slog::info;

#[derive(Debug, Parser)]
#[clap(name = "bmc-sim", about = "Simulated Redfish BMC")]
struct Args {
    #[clap(name = "CONFIG_FILE_PATH", action)]
    config_file_path: Utf8PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_file(&args.config_file_path)
        .context("failed to load config")?;
    let log = config
        .log
        .to_logger("bmc-sim")
        .context("initializing logger")?;

    let server = Server::start(config, &log).await?;
    info!(log, "bmc-sim running"; "local_addr" => %server.local_addr());
    server.wait_for_finish().await
}
