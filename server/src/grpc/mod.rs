//! gRPC
//! provides the server implementation for gRPC

log_macros!("app::grpc", grpc_debug, grpc_info, grpc_warn, grpc_error);

pub mod api;
pub mod server;
