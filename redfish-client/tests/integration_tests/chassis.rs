// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use http::StatusCode;
use redfish_client::Chassis;
use redfish_client::ConnectorError;
use redfish_client::Error;
use redfish_test_utils::setup::test_setup;
use redfish_test_utils::setup::TestContext;
use redfish_types::chassis::ChassisType;
use redfish_types::chassis::IndicatorLed;
use redfish_types::power::PowerState;
use redfish_types::status::Health;
use redfish_types::status::State;

async fn load_chassis(testctx: &TestContext, identity: &str) -> Chassis {
    let root = testctx.service_root().await;
    let collection = root.chassis_collection().await.unwrap();
    collection
        .get_member(&format!("/redfish/v1/Chassis/{identity}"))
        .await
        .unwrap()
}

#[tokio::test]
async fn chassis_attributes_project_from_the_wire() {
    let testctx = test_setup("chassis_attributes_project_from_the_wire").await;
    let chassis = load_chassis(&testctx, "1U").await;

    assert_eq!(chassis.identity(), "1U");
    assert_eq!(chassis.name(), "Computer System Chassis");
    assert_eq!(chassis.chassis_type(), ChassisType::RackMount);
    assert_eq!(chassis.asset_tag(), Some("Chicago-45Z-2381"));
    assert_eq!(chassis.manufacturer(), Some("Contoso"));
    assert_eq!(chassis.model(), Some("3500RX"));
    assert_eq!(chassis.serial_number(), Some("437XR1138R2"));
    assert_eq!(chassis.indicator_led(), Some(IndicatorLed::Off));
    assert_eq!(chassis.power_state(), Some(PowerState::On));
    let status = chassis.status().unwrap();
    assert_eq!(status.state, Some(State::Enabled));
    assert_eq!(status.health, Some(Health::Ok));
    assert_eq!(status.health_rollup, Some(Health::Ok));
    // Attributes the config leaves unset stay absent.
    assert_eq!(chassis.sku(), None);
    assert_eq!(chassis.depth_mm(), None);
    // Reached through the service root, so the protocol version is
    // known.
    assert_eq!(chassis.redfish_version(), Some("1.6.0"));

    testctx.teardown().await;
}

#[tokio::test]
async fn out_of_schema_values_become_unknown() {
    let testctx = test_setup("out_of_schema_values_become_unknown").await;
    let chassis = load_chassis(&testctx, "weird").await;

    // "Humidor", "Disco", and "Degraded" are not schema values; loading
    // still succeeds and each projects to the Unknown sentinel.
    assert_eq!(chassis.chassis_type(), ChassisType::Unknown);
    assert_eq!(chassis.indicator_led(), Some(IndicatorLed::Unknown));
    let status = chassis.status().unwrap();
    assert_eq!(status.state, Some(State::Enabled));
    assert_eq!(status.health, Some(Health::Unknown));
    assert_eq!(status.health_rollup, None);

    testctx.teardown().await;
}

#[tokio::test]
async fn schema_violations_fail_the_load() {
    let testctx = test_setup("schema_violations_fail_the_load").await;
    let root = testctx.service_root().await;
    let collection = root.chassis_collection().await.unwrap();

    let err = collection
        .get_member("/redfish/v1/Chassis/no-id")
        .await
        .unwrap_err();
    match err {
        Error::MissingAttribute { attribute, resource } => {
            assert_eq!(attribute, "Id");
            assert_eq!(resource, "/redfish/v1/Chassis/no-id");
        }
        other => panic!("unexpected error: {other}"),
    }

    testctx.teardown().await;
}

#[tokio::test]
async fn absent_chassis_is_a_connector_error() {
    let testctx = test_setup("absent_chassis_is_a_connector_error").await;
    let root = testctx.service_root().await;
    let collection = root.chassis_collection().await.unwrap();

    let err = collection
        .get_member("/redfish/v1/Chassis/nope")
        .await
        .unwrap_err();
    match err {
        Error::Connector(ConnectorError::Status { status, .. }) => {
            assert_eq!(status, StatusCode::NOT_FOUND);
        }
        other => panic!("unexpected error: {other}"),
    }

    testctx.teardown().await;
}
