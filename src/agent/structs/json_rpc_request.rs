use serde::Serialize;
use serde_json::Value;

#[derive(Serialize, Debug)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: Vec<Value>,
    pub id: u64,
}
