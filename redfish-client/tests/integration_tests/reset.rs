// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::BTreeSet;

use bmc_sim::RecordedRequest;
use http::Method;
use http::StatusCode;
use redfish_client::Chassis;
use redfish_client::ConnectorError;
use redfish_client::Error;
use redfish_test_utils::setup::test_setup;
use redfish_test_utils::setup::TestContext;
use redfish_types::power::PowerState;
use redfish_types::power::ResetType;
use serde_json::json;

async fn load_chassis(testctx: &TestContext, identity: &str) -> Chassis {
    let root = testctx.service_root().await;
    let collection = root.chassis_collection().await.unwrap();
    collection
        .get_member(&format!("/redfish/v1/Chassis/{identity}"))
        .await
        .unwrap()
}

fn posts(testctx: &TestContext) -> Vec<RecordedRequest> {
    testctx
        .sim
        .requests()
        .into_iter()
        .filter(|request| request.method == Method::POST)
        .collect()
}

#[tokio::test]
async fn advertised_subset_is_respected() {
    let testctx = test_setup("advertised_subset_is_respected").await;
    let chassis = load_chassis(&testctx, "subset").await;

    let allowed = chassis.allowed_reset_values().unwrap();
    let expected: BTreeSet<ResetType> =
        [ResetType::ForceOff, ResetType::GracefulShutdown]
            .into_iter()
            .collect();
    assert_eq!(allowed, expected);

    // A value outside the advertisement is rejected locally.
    let err = chassis.reset(ResetType::On).await.unwrap_err();
    match err {
        Error::InvalidParameterValue { parameter, value, allowed } => {
            assert_eq!(parameter, "ResetType");
            assert_eq!(value, ResetType::On);
            assert_eq!(allowed, expected);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(posts(&testctx).is_empty());

    testctx.teardown().await;
}

#[tokio::test]
async fn successful_reset_is_observable() {
    let testctx = test_setup("successful_reset_is_observable").await;
    let mut chassis = load_chassis(&testctx, "subset").await;
    assert_eq!(chassis.power_state(), Some(PowerState::On));

    chassis.reset(ResetType::ForceOff).await.unwrap();
    assert_eq!(testctx.sim.power_state("subset"), Some(PowerState::Off));
    assert_eq!(
        posts(&testctx),
        vec![RecordedRequest {
            method: Method::POST,
            path: "/redfish/v1/Chassis/subset/Actions/Chassis.Reset"
                .to_string(),
            body: Some(json!({ "ResetType": "ForceOff" })),
        }]
    );

    // The cached projection is stale until the caller refreshes.
    assert_eq!(chassis.power_state(), Some(PowerState::On));
    chassis.refresh().await.unwrap();
    assert_eq!(chassis.power_state(), Some(PowerState::Off));

    testctx.teardown().await;
}

#[tokio::test]
async fn missing_advertisement_accepts_all() {
    let testctx = test_setup("missing_advertisement_accepts_all").await;
    let chassis = load_chassis(&testctx, "no-allowed").await;

    let expected: BTreeSet<ResetType> =
        ResetType::ALL.iter().copied().collect();
    assert_eq!(chassis.allowed_reset_values().unwrap(), expected);

    assert_eq!(testctx.sim.power_state("no-allowed"), Some(PowerState::Off));
    chassis.reset(ResetType::On).await.unwrap();
    assert_eq!(testctx.sim.power_state("no-allowed"), Some(PowerState::On));

    testctx.teardown().await;
}

#[tokio::test]
async fn empty_advertisement_falls_back_but_the_bmc_decides() {
    let testctx =
        test_setup("empty_advertisement_falls_back_but_the_bmc_decides")
            .await;
    let chassis = load_chassis(&testctx, "empty-allowed").await;

    // An empty advertisement reads as "unknown", so the client assumes
    // everything is allowed and lets the BMC have the final say.
    let expected: BTreeSet<ResetType> =
        ResetType::ALL.iter().copied().collect();
    assert_eq!(chassis.allowed_reset_values().unwrap(), expected);

    let err = chassis.reset(ResetType::ForceOff).await.unwrap_err();
    match err {
        Error::Connector(ConnectorError::Status { status, .. }) => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        testctx.sim.power_state("empty-allowed"),
        Some(PowerState::On)
    );

    testctx.teardown().await;
}

#[tokio::test]
async fn chassis_without_actions_cannot_reset() {
    let testctx = test_setup("chassis_without_actions_cannot_reset").await;
    let chassis = load_chassis(&testctx, "no-actions").await;

    match chassis.allowed_reset_values().unwrap_err() {
        Error::MissingAction { action, resource } => {
            assert_eq!(action, "#Chassis.Reset");
            assert_eq!(resource, "/redfish/v1/Chassis/no-actions");
        }
        other => panic!("unexpected error: {other}"),
    }
    match chassis.reset(ResetType::On).await.unwrap_err() {
        Error::MissingAction { action, .. } => {
            assert_eq!(action, "#Chassis.Reset");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(posts(&testctx).is_empty());

    testctx.teardown().await;
}
