// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use redfish_test_utils::setup::test_setup;
use serde_json::json;

#[tokio::test]
async fn service_root_attributes() {
    let testctx = test_setup("service_root_attributes").await;
    let root = testctx.service_root().await;

    assert_eq!(root.identity(), "RootService");
    assert_eq!(root.name(), "Root Service");
    assert_eq!(root.redfish_version(), Some("1.6.0"));
    assert_eq!(
        root.uuid(),
        Some("92384634-2938-2342-8820-489239905423")
    );
    assert_eq!(root.document()["@odata.id"], json!("/redfish/v1"));

    testctx.teardown().await;
}

#[tokio::test]
async fn service_root_refresh() {
    let testctx = test_setup("service_root_refresh").await;
    let mut root = testctx.service_root().await;
    root.refresh().await.unwrap();
    assert_eq!(root.identity(), "RootService");
    testctx.teardown().await;
}
