//! JSON-RPC round trips through `McpService` and the line transport.

mod common;

use std::sync::Arc;

use common::{buttons_table, provider_with, MockDocsFetcher, DOCS_BODY};
use serde_json::{json, Value};
use tailgrids_mcp_server::mcp::rpc::{RpcRequest, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR};
use tailgrids_mcp_server::mcp::{transport, McpService};
use tailgrids_mcp_server::config::CategoryTable;
use tailgrids_mcp_server::start_service;
use tokio::io::BufReader;

fn service() -> McpService {
    start_service(provider_with(
        buttons_table(),
        Arc::new(MockDocsFetcher::ok(DOCS_BODY)),
    ))
}

/// Feed raw bytes through the line transport and decode every output line.
async fn serve_bytes(service: &McpService, input: &[u8]) -> Vec<Value> {
    let mut output: Vec<u8> = Vec::new();
    transport::serve(service, BufReader::new(input), &mut output)
        .await
        .unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

async fn call(service: &McpService, request: RpcRequest) -> Value {
    let response = service.handle_request(request).await.unwrap();
    serde_json::to_value(response).unwrap()
}

#[tokio::test]
async fn test_initialize() {
    let response = call(
        &service(),
        RpcRequest::new(
            1,
            "initialize",
            Some(json!({
                "protocolVersion": "2024-11-05",
                "clientInfo": {"name": "test-client", "version": "0.1.0"},
                "capabilities": {}
            })),
        ),
    )
    .await;

    assert_eq!(response["id"], 1);
    assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(response["result"]["serverInfo"]["name"], "tailgrids-mcp-server");
    assert_eq!(response["result"]["capabilities"]["tools"]["listChanged"], false);
}

#[tokio::test]
async fn test_initialize_without_client_info_is_invalid_params() {
    let response = call(&service(), RpcRequest::new(2, "initialize", None)).await;
    assert_eq!(response["error"]["code"], INVALID_PARAMS);
}

#[tokio::test]
async fn test_tools_list() {
    let response = call(&service(), RpcRequest::new("a", "tools/list", None)).await;

    let tools = response["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 5);
    assert_eq!(tools[4]["name"], "getButtons");
    assert!(tools[4]["inputSchema"].is_object());
    assert!(response["result"].get("nextCursor").is_none());
}

#[tokio::test]
async fn test_tools_call_wraps_tool_result() {
    let response = call(
        &service(),
        RpcRequest::new(
            3,
            "tools/call",
            Some(json!({"name": "searchDocs", "arguments": {"query": "button"}})),
        ),
    )
    .await;

    let result = &response["result"];
    assert_eq!(result["isError"], false);
    assert_eq!(result["content"][0]["type"], "text");
    let search: Value =
        serde_json::from_str(result["content"][0]["text"].as_str().unwrap()).unwrap();
    assert_eq!(search["found"], true);
}

#[tokio::test]
async fn test_tools_call_unknown_tool_is_error_result_not_rpc_error() {
    let response = call(
        &service(),
        RpcRequest::new(4, "tools/call", Some(json!({"name": "getNothing"}))),
    )
    .await;

    assert!(response.get("error").is_none());
    assert_eq!(response["result"]["isError"], true);
}

#[tokio::test]
async fn test_protocol_errors() {
    let service = service();

    let response = call(&service, RpcRequest::new(5, "sampling/createMessage", None)).await;
    assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);

    let mut old = RpcRequest::new(6, "ping", None);
    old.jsonrpc = "1.0".to_string();
    let response = call(&service, old).await;
    assert_eq!(response["error"]["code"], INVALID_REQUEST);

    let response = call(&service, RpcRequest::new(7, "tools/call", None)).await;
    assert_eq!(response["error"]["code"], INVALID_PARAMS);
}

#[tokio::test]
async fn test_empty_listings_and_ping() {
    let service = service();

    let response = call(&service, RpcRequest::new(8, "resources/list", None)).await;
    assert_eq!(response["result"], json!({"resources": []}));

    let response = call(&service, RpcRequest::new(9, "prompts/list", None)).await;
    assert_eq!(response["result"], json!({"prompts": []}));

    let response = call(&service, RpcRequest::new(10, "ping", None)).await;
    assert_eq!(response["result"], json!({}));
}

#[tokio::test]
async fn test_notifications_get_no_response() {
    let request: RpcRequest = serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "method": "notifications/initialized"
    }))
    .unwrap();

    assert!(service().handle_request(request).await.is_none());
}

#[tokio::test]
async fn test_transport_answers_one_line_per_request() {
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "\n",
        "\n",
        "this is not json\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"getButtons"}}"#,
        "\n",
    );

    let mut output: Vec<u8> = Vec::new();
    transport::serve(&service(), BufReader::new(input.as_bytes()), &mut output)
        .await
        .unwrap();

    let lines: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["id"], 1);
    assert_eq!(lines[1]["id"], Value::Null);
    assert_eq!(lines[1]["error"]["code"], PARSE_ERROR);
    assert_eq!(lines[2]["id"], 2);
    assert_eq!(lines[2]["result"]["isError"], false);
}

#[tokio::test]
async fn test_transport_survives_invalid_utf8() {
    let mut input = Vec::new();
    input.extend_from_slice(br#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#);
    input.push(b'\n');
    input.extend_from_slice(b"\xff\xfe garbage\n");
    input.extend_from_slice(br#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#);
    input.push(b'\n');

    let lines = serve_bytes(&service(), &input).await;

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["id"], 1);
    assert_eq!(lines[0]["result"], json!({}));
    assert_eq!(lines[1]["error"]["code"], PARSE_ERROR);
    assert_eq!(lines[2]["id"], 2);
    assert_eq!(lines[2]["result"], json!({}));
}

#[tokio::test]
async fn test_transport_rejects_json_that_is_not_a_request() {
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":3}"#,
        "\n",
        r#"[1,2,3]"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":4,"method":"ping"}"#,
        "\n",
    );

    let lines = serve_bytes(&service(), input.as_bytes()).await;

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["id"], 3);
    assert_eq!(lines[0]["error"]["code"], INVALID_REQUEST);
    assert_eq!(lines[1]["id"], Value::Null);
    assert_eq!(lines[1]["error"]["code"], INVALID_REQUEST);
    assert_eq!(lines[2]["id"], 4);
    assert_eq!(lines[2]["result"], json!({}));
}

#[tokio::test]
async fn test_colliding_category_leaves_earlier_tools_usable() {
    // "Docs" becomes getDocs, which is already taken by the documentation tool.
    let table = CategoryTable::new([
        ("Buttons", vec!["DefaultButton"]),
        ("Docs", vec!["DocsPage"]),
        ("Cards", vec!["ProfileCard"]),
    ]);
    let service = start_service(provider_with(table, Arc::new(MockDocsFetcher::ok(DOCS_BODY))));

    let response = call(&service, RpcRequest::new(1, "tools/list", None)).await;
    let names: Vec<&str> = response["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tool| tool["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["getComponents", "getDocs", "getCategories", "searchDocs", "getButtons"]
    );

    let response = call(
        &service,
        RpcRequest::new(2, "tools/call", Some(json!({"name": "getButtons"}))),
    )
    .await;
    assert_eq!(response["result"]["isError"], false);
    let details: Value =
        serde_json::from_str(response["result"]["content"][0]["text"].as_str().unwrap()).unwrap();
    assert_eq!(details[0]["name"], "DefaultButton");

    let response = call(
        &service,
        RpcRequest::new(3, "tools/call", Some(json!({"name": "getDocs"}))),
    )
    .await;
    assert_eq!(response["result"]["isError"], false);
    let docs: Value =
        serde_json::from_str(response["result"]["content"][0]["text"].as_str().unwrap()).unwrap();
    assert_eq!(docs["type"], "documentation");

    let response = call(
        &service,
        RpcRequest::new(4, "tools/call", Some(json!({"name": "getCards"}))),
    )
    .await;
    assert_eq!(response["result"]["isError"], true);
}
