#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRpcChannelFactory;
