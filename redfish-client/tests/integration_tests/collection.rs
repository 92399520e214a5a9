// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use redfish_client::Error;
use redfish_test_utils::setup::test_setup;

#[tokio::test]
async fn collection_lists_every_configured_chassis() {
    let testctx = test_setup("collection_lists_every_configured_chassis")
        .await;
    let root = testctx.service_root().await;
    let collection = root.chassis_collection().await.unwrap();

    assert_eq!(collection.name(), Some("Chassis Collection"));
    assert_eq!(collection.path(), "/redfish/v1/Chassis");
    assert_eq!(collection.redfish_version(), Some("1.6.0"));
    // Config order is document order is member order.
    assert_eq!(
        collection.members_identities(),
        &[
            "/redfish/v1/Chassis/1U",
            "/redfish/v1/Chassis/subset",
            "/redfish/v1/Chassis/no-allowed",
            "/redfish/v1/Chassis/empty-allowed",
            "/redfish/v1/Chassis/no-actions",
            "/redfish/v1/Chassis/weird",
            "/redfish/v1/Chassis/no-id",
        ]
    );

    testctx.teardown().await;
}

#[tokio::test]
async fn every_well_formed_member_loads() {
    let testctx = test_setup("every_well_formed_member_loads").await;
    let root = testctx.service_root().await;
    let collection = root.chassis_collection().await.unwrap();

    for path in collection.members_identities() {
        if path.ends_with("/no-id") {
            continue;
        }
        let chassis = collection.get_member(path).await.unwrap();
        assert_eq!(
            format!("{}/{}", collection.path(), chassis.identity()),
            *path
        );
    }

    testctx.teardown().await;
}

#[tokio::test]
async fn get_members_surfaces_broken_members() {
    let testctx = test_setup("get_members_surfaces_broken_members").await;
    let root = testctx.service_root().await;
    let collection = root.chassis_collection().await.unwrap();

    // The "no-id" chassis violates the schema, so loading all members
    // fails even though the others are fine.
    let err = collection.get_members().await.unwrap_err();
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
async fn collection_refresh() {
    let testctx = test_setup("collection_refresh").await;
    let root = testctx.service_root().await;
    let mut collection = root.chassis_collection().await.unwrap();
    let before = collection.members_identities().to_vec();

    collection.refresh().await.unwrap();
    assert_eq!(collection.members_identities(), &before[..]);

    testctx.teardown().await;
}
