// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP entrypoints serving the simulated Redfish tree.
//!
//! Documents go over the wire as plain `serde_json::Value`; the point of
//! the simulator is to serve whatever its config says, including
//! documents a schema-faithful type could not represent.

use std::sync::Arc;

use dropshot::endpoint;
use dropshot::ApiDescription;
use dropshot::ApiDescriptionRegisterError;
use dropshot::HttpError;
use dropshot::HttpResponseOk;
use dropshot::HttpResponseUpdatedNoContent;
use dropshot::Path;
use dropshot::RequestContext;
use dropshot::TypedBody;
use http::Method;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::context::ResetError;
use crate::context::ServerContext;
use crate::context::COLLECTION_PATH;
use crate::context::ROOT_PATH;

type BmcApiDescription = ApiDescription<Arc<ServerContext>>;

pub(crate) fn api() -> BmcApiDescription {
    fn register_endpoints(
        api: &mut BmcApiDescription,
    ) -> Result<(), ApiDescriptionRegisterError> {
        api.register(redfish_service_root)?;
        api.register(redfish_chassis_collection)?;
        api.register(redfish_chassis)?;
        api.register(redfish_chassis_reset)?;
        Ok(())
    }

    let mut api = BmcApiDescription::new();
    if let Err(err) = register_endpoints(&mut api) {
        panic!("failed to register entrypoints: {}", err);
    }
    api
}

#[derive(Deserialize, JsonSchema)]
struct ChassisPathParams {
    identity: String,
}

fn not_found(identity: &str) -> HttpError {
    HttpError::for_not_found(None, format!("no chassis {identity:?}"))
}

#[endpoint {
    method = GET,
    path = "/redfish/v1",
}]
async fn redfish_service_root(
    rqctx: RequestContext<Arc<ServerContext>>,
) -> Result<HttpResponseOk<Value>, HttpError> {
    let ctx = rqctx.context();
    ctx.record(Method::GET, ROOT_PATH.to_string(), None);
    Ok(HttpResponseOk(ctx.root_document()))
}

#[endpoint {
    method = GET,
    path = "/redfish/v1/Chassis",
}]
async fn redfish_chassis_collection(
    rqctx: RequestContext<Arc<ServerContext>>,
) -> Result<HttpResponseOk<Value>, HttpError> {
    let ctx = rqctx.context();
    ctx.record(Method::GET, COLLECTION_PATH.to_string(), None);
    Ok(HttpResponseOk(ctx.collection_document()))
}

#[endpoint {
    method = GET,
    path = "/redfish/v1/Chassis/{identity}",
}]
async fn redfish_chassis(
    rqctx: RequestContext<Arc<ServerContext>>,
    path: Path<ChassisPathParams>,
) -> Result<HttpResponseOk<Value>, HttpError> {
    let ctx = rqctx.context();
    let identity = path.into_inner().identity;
    ctx.record(
        Method::GET,
        format!("{COLLECTION_PATH}/{identity}"),
        None,
    );
    match ctx.chassis_document(&identity) {
        Some(doc) => Ok(HttpResponseOk(doc)),
        None => Err(not_found(&identity)),
    }
}

#[endpoint {
    method = POST,
    path = "/redfish/v1/Chassis/{identity}/Actions/Chassis.Reset",
}]
async fn redfish_chassis_reset(
    rqctx: RequestContext<Arc<ServerContext>>,
    path: Path<ChassisPathParams>,
    body: TypedBody<Value>,
) -> Result<HttpResponseUpdatedNoContent, HttpError> {
    let ctx = rqctx.context();
    let identity = path.into_inner().identity;
    let body = body.into_inner();
    ctx.record(
        Method::POST,
        format!("{COLLECTION_PATH}/{identity}/Actions/Chassis.Reset"),
        Some(body.clone()),
    );
    match ctx.chassis_reset(&identity, &body) {
        Ok(()) => Ok(HttpResponseUpdatedNoContent()),
        Err(ResetError::UnknownChassis) => Err(not_found(&identity)),
        Err(ResetError::Rejected(message)) => {
            Err(HttpError::for_bad_request(None, message))
        }
    }
}
