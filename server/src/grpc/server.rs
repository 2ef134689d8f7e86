//! gRPC server implementation

/// Module generated from proto/grpc.proto
pub mod grpc_server {
    #![allow(unused_qualifications, missing_docs)]
    include!("grpc.rs");
}

use std::sync::Arc;

use grpc_server::rpc_service_server::{RpcService, RpcServiceServer};
use grpc_server::{
    BestRouteRequest, BestRouteResponse, DeleteRouteResponse, Id, ReadyRequest, ReadyResponse,
    Route, RouteData, RouteList, RouteListRequest,
};
use tonic::transport::Server;
use tonic::{Request, Response, Status};

use super::api;
use crate::config::Config;
use crate::router::{ResultFormatter, SearchLimits};
use crate::shutdown_signal;
use crate::store::RouteStore;

///Implementation of gRPC endpoints
#[derive(Debug, Clone)]
pub struct GrpcServerImpl {
    store: Arc<dyn RouteStore>,
    formatter: ResultFormatter,
    limits: SearchLimits,
}

impl GrpcServerImpl {
    /// Creates the service over `store`, rendering and bounding searches as
    /// `config` says.
    pub fn new(store: Arc<dyn RouteStore>, config: &Config) -> Self {
        GrpcServerImpl {
            store,
            formatter: ResultFormatter::new(config.cost_format),
            limits: config.search_limits(),
        }
    }
}

/// Logs a failed request before handing the status back to tonic.
fn log_status<T>(method: &str, res: Result<T, Status>) -> Result<T, Status> {
    if let Err(e) = &res {
        grpc_error!("({}) {}", method, e);
    }
    res
}

#[tonic::async_trait]
impl RpcService for GrpcServerImpl {
    /// Returns ready:true when service is available
    async fn is_ready(
        &self,
        _request: Request<ReadyRequest>,
    ) -> Result<Response<ReadyResponse>, Status> {
        grpc_debug!("(grpc is_ready) entry.");
        let response = ReadyResponse { ready: true };
        Ok(Response::new(response))
    }

    /// Returns every stored route.
    async fn get_routes(
        &self,
        request: Request<RouteListRequest>,
    ) -> Result<Response<RouteList>, Status> {
        grpc_debug!("(grpc get_routes) entry.");
        log_status(
            "get_routes",
            api::routes::get_routes(self.store.as_ref(), request).await,
        )
    }

    /// Stores a new route.
    async fn insert_route(&self, request: Request<RouteData>) -> Result<Response<Route>, Status> {
        grpc_debug!("(grpc insert_route) entry.");
        log_status(
            "insert_route",
            api::routes::insert_route(self.store.as_ref(), request).await,
        )
    }

    /// Replaces an existing route.
    async fn update_route(&self, request: Request<Route>) -> Result<Response<Route>, Status> {
        grpc_debug!("(grpc update_route) entry.");
        log_status(
            "update_route",
            api::routes::update_route(self.store.as_ref(), request).await,
        )
    }

    /// Removes a route by id.
    async fn delete_route(
        &self,
        request: Request<Id>,
    ) -> Result<Response<DeleteRouteResponse>, Status> {
        grpc_debug!("(grpc delete_route) entry.");
        log_status(
            "delete_route",
            api::routes::delete_route(self.store.as_ref(), request).await,
        )
    }

    /// Finds the cheapest path between two labels.
    async fn best_route(
        &self,
        request: Request<BestRouteRequest>,
    ) -> Result<Response<BestRouteResponse>, Status> {
        grpc_debug!("(grpc best_route) entry.");
        log_status(
            "best_route",
            api::best_route::best_route(
                self.store.as_ref(),
                &self.formatter,
                self.limits,
                request,
            )
            .await,
        )
    }
}

/// Starts the grpc server for this microservice using the provided
/// configuration and route store.
///
/// Runs until ctrl-c is pressed, or until `shutdown_rx` fires when given.
pub async fn grpc_server(
    config: Config,
    store: Arc<dyn RouteStore>,
    shutdown_rx: Option<tokio::sync::oneshot::Receiver<()>>,
) {
    grpc_debug!("(grpc_server) entry.");

    // GRPC Server
    let grpc_port = config.docker_port_grpc;
    let full_grpc_addr: std::net::SocketAddr = match format!("[::]:{}", grpc_port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            grpc_error!("(grpc_server) Failed to parse gRPC address: {}", e);
            return;
        }
    };

    let imp = GrpcServerImpl::new(store, &config);
    let (mut health_reporter, health_service) = tonic_health::server::health_reporter();
    health_reporter
        .set_serving::<RpcServiceServer<GrpcServerImpl>>()
        .await;

    //start server
    grpc_info!("(grpc_server) Starting gRPC services on {}.", full_grpc_addr);
    match Server::builder()
        .add_service(health_service)
        .add_service(RpcServiceServer::new(imp))
        .serve_with_shutdown(full_grpc_addr, shutdown_signal("grpc", shutdown_rx))
        .await
    {
        Ok(_) => grpc_info!("(grpc_server) gRPC server at {} stopped.", full_grpc_addr),
        Err(e) => {
            grpc_error!("(grpc_server) could not start gRPC server: {}", e);
        }
    };
}
