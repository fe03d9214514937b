use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Debug)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<JsonRpcErrorObject>,
}

#[derive(Deserialize, Debug)]
pub struct JsonRpcErrorObject {
    pub code: i64,
    pub message: String,
}
