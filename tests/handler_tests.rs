//! Integration tests for the method dispatcher.
//!
//! Tests build requests directly and check the response envelope each
//! handler produces through `handlers::dispatch`.

use serde_json::json;

use two_sum_mcp::handlers;
use two_sum_mcp::handlers::initialize::PROTOCOL_VERSION;
use two_sum_mcp::protocol::{
    InitializeParams, JsonRpcRequest, RpcId, INVALID_PARAMS, METHOD_NOT_FOUND,
};
use two_sum_mcp::tools::ToolRegistry;

fn registry() -> ToolRegistry {
    ToolRegistry::with_builtin_tools().unwrap()
}

fn request(id: RpcId, method: &str, params: Option<serde_json::Value>) -> JsonRpcRequest {
    JsonRpcRequest::new(Some(id), method, params)
}

// ---------------------------------------------------------------------------
// initialize
// ---------------------------------------------------------------------------

#[test]
fn initialize_returns_server_identity() {
    let req = request(RpcId::number(1), "initialize", Some(json!({
        "protocolVersion": "2024-11-05",
        "capabilities": {},
        "clientInfo": { "name": "test-client", "version": "1.0.0" }
    })));

    let response = handlers::dispatch(&req, &registry());
    assert_eq!(response.id, Some(RpcId::number(1)));
    assert!(response.error.is_none());

    let result = response.result.unwrap();
    assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
    assert_eq!(result["capabilities"]["tools"]["listChanged"], true);
    assert_eq!(result["serverInfo"]["name"], "two-sum-mcp");
    assert_eq!(result["serverInfo"]["version"], env!("CARGO_PKG_VERSION"));
    assert!(!result["instructions"].as_str().unwrap().is_empty());
}

#[test]
fn initialize_tolerates_missing_or_garbled_params() {
    let registry = registry();
    let garbled = [
        None,
        Some(json!("not an object")),
        Some(json!({ "protocolVersion": 42, "clientInfo": [1, 2, 3] })),
    ];

    for params in garbled {
        let req = request(RpcId::from("init"), "initialize", params.clone());
        let response = handlers::dispatch(&req, &registry);
        assert!(response.error.is_none(), "initialize must not fail for params {params:?}");
        assert_eq!(response.result.unwrap()["protocolVersion"], PROTOCOL_VERSION);
    }
}

#[test]
fn initialize_params_keep_client_capabilities() {
    let params: InitializeParams = serde_json::from_value(json!({
        "protocolVersion": "2025-03-26",
        "capabilities": { "roots": { "listChanged": true } },
        "clientInfo": { "name": "test-client" }
    }))
    .unwrap();

    assert_eq!(params.capabilities, Some(json!({ "roots": { "listChanged": true } })));
    assert_eq!(params.client_info.unwrap().name.as_deref(), Some("test-client"));

    let req = request(RpcId::number(9), "initialize", Some(json!({ "capabilities": { "sampling": {} } })));
    let response = handlers::dispatch(&req, &registry());
    assert_eq!(response.result.unwrap()["protocolVersion"], PROTOCOL_VERSION);
}

// ---------------------------------------------------------------------------
// tools/list
// ---------------------------------------------------------------------------

#[test]
fn tools_list_advertises_two_sum() {
    let response = handlers::dispatch(&request(RpcId::number(2), "tools/list", None), &registry());
    let result = response.result.unwrap();
    let tools = result["tools"].as_array().unwrap();

    assert_eq!(tools.len(), 1, "Should advertise exactly 1 tool");
    assert_eq!(tools[0]["name"], "two_sum");
    assert_eq!(tools[0]["title"], "Two Sum");
    assert_eq!(tools[0]["inputSchema"]["type"], "object");
    assert_eq!(tools[0]["inputSchema"]["required"], json!(["nums", "target"]));
    assert_eq!(tools[0]["outputSchema"]["required"], json!(["indices"]));
    assert!(result.get("nextCursor").is_none(), "Catalog is never paginated");
}

#[test]
fn tools_list_served_before_initialize() {
    let response = handlers::dispatch(&request(RpcId::number(1), "tools/list", None), &registry());
    assert!(response.error.is_none());
}

// ---------------------------------------------------------------------------
// tools/call
// ---------------------------------------------------------------------------

#[test]
fn tools_call_two_sum_success() {
    let req = request(RpcId::number(3), "tools/call", Some(json!({
        "name": "two_sum",
        "arguments": { "nums": [2, 7, 11, 15], "target": 9 }
    })));

    let response = handlers::dispatch(&req, &registry());
    assert_eq!(response.id, Some(RpcId::number(3)));

    let result = response.result.unwrap();
    assert_eq!(result["content"][0]["type"], "text");
    assert_eq!(result["content"][0]["text"], "indices: [0,1]");
    assert_eq!(result["structuredContent"], json!({ "indices": [0, 1] }));
    assert!(result.get("isError").is_none(), "isError is omitted on success");
}

#[test]
fn tools_call_no_solution_is_successful_response() {
    let req = request(RpcId::number(4), "tools/call", Some(json!({
        "name": "two_sum",
        "arguments": { "nums": [1, 2, 3], "target": 100 }
    })));

    let response = handlers::dispatch(&req, &registry());
    assert!(response.error.is_none(), "No solution is not a protocol error");

    let result = response.result.unwrap();
    assert_eq!(result["isError"], true);
    assert!(result.get("structuredContent").is_none());
    assert_eq!(result["content"][0]["type"], "text");
}

#[test]
fn tools_call_unknown_tool_is_method_not_found() {
    let req = request(RpcId::number(5), "tools/call", Some(json!({
        "name": "three_sum",
        "arguments": {}
    })));

    let response = handlers::dispatch(&req, &registry());
    assert!(response.result.is_none());
    assert_eq!(response.id, Some(RpcId::number(5)));

    let error = response.error.unwrap();
    assert_eq!(error.code, METHOD_NOT_FOUND);
    assert!(error.message.contains("three_sum"));
}

#[test]
fn tools_call_bad_arguments_are_invalid_params() {
    let registry = registry();
    let bad_arguments = [
        json!({ "name": "two_sum", "arguments": { "nums": [1, 2] } }),
        json!({ "name": "two_sum", "arguments": { "target": 3 } }),
        json!({ "name": "two_sum", "arguments": { "nums": [1, "two"], "target": 3 } }),
        json!({ "name": "two_sum", "arguments": { "nums": [1, 2], "target": 3, "extra": 1 } }),
        json!({ "name": "two_sum", "arguments": { "nums": [1, 2], "target": 1.5 } }),
        json!({ "name": "two_sum" }),
    ];

    for params in bad_arguments {
        let req = request(RpcId::number(6), "tools/call", Some(params.clone()));
        let response = handlers::dispatch(&req, &registry);
        let error = response.error.unwrap_or_else(|| panic!("expected error for {params}"));
        assert_eq!(error.code, INVALID_PARAMS, "params {params}");
    }
}

#[test]
fn tools_call_malformed_params_are_invalid_params() {
    let registry = registry();
    let malformed = [
        None,
        Some(json!([1, 2])),
        Some(json!(["two_sum", { "nums": [3, 3], "target": 6 }])),
        Some(json!("two_sum")),
        Some(json!({ "arguments": {} })),
    ];
    for params in malformed {
        let response = handlers::dispatch(&request(RpcId::number(7), "tools/call", params), &registry);
        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }
}

// ---------------------------------------------------------------------------
// unknown methods and id echo
// ---------------------------------------------------------------------------

#[test]
fn unknown_method_is_method_not_found() {
    let response = handlers::dispatch(&request(RpcId::from("abc"), "resources/list", None), &registry());
    assert_eq!(response.id, Some(RpcId::from("abc")));

    let error = response.error.unwrap();
    assert_eq!(error.code, METHOD_NOT_FOUND);
    assert!(error.message.contains("resources/list"));
}

#[test]
fn response_id_echoes_request_id_for_every_method() {
    let registry = registry();
    let ids = [RpcId::number(0), RpcId::number(-17), RpcId::from("req-1"), RpcId::from("")];
    let methods = [
        ("initialize", None),
        ("tools/list", None),
        ("tools/call", Some(json!({ "name": "two_sum", "arguments": { "nums": [3, 3], "target": 6 } }))),
        ("tools/call", Some(json!({ "name": "missing" }))),
        ("no/such/method", None),
    ];

    for id in &ids {
        for (method, params) in &methods {
            let req = JsonRpcRequest::new(Some(id.clone()), *method, params.clone());
            let response = handlers::dispatch(&req, &registry);
            assert_eq!(response.id.as_ref(), Some(id), "method {method}");
            assert!(
                response.result.is_some() ^ response.error.is_some(),
                "exactly one of result/error for {method}"
            );
        }
    }
}

#[test]
fn absent_id_is_omitted_from_response() {
    let req = JsonRpcRequest::new(None, "tools/list", None);
    let response = handlers::dispatch(&req, &registry());
    assert!(response.id.is_none());

    let wire = serde_json::to_value(&response).unwrap();
    assert!(wire.get("id").is_none(), "absent id must not be serialized as null");
}
