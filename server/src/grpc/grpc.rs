/// Ready Request
///
/// No arguments
#[derive(Eq, Copy)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReadyRequest {}
/// Ready Response
#[derive(Eq, Copy)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReadyResponse {
    /// ready
    #[prost(bool, tag = "1")]
    pub ready: bool,
}
/// Id type for passing id only requests
#[derive(Eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Id {
    /// id
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
}
/// Route list request
///
/// No arguments
#[derive(Eq, Copy)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteListRequest {}
/// Route segment payload used for inserts
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteData {
    /// origin label
    #[prost(string, tag = "1")]
    pub origin: ::prost::alloc::string::String,
    /// destination label
    #[prost(string, tag = "2")]
    pub destination: ::prost::alloc::string::String,
    /// cost of the segment as a decimal string, e.g. "12.50", at least 0.01
    #[prost(string, tag = "3")]
    pub cost: ::prost::alloc::string::String,
}
/// Stored route segment
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Route {
    /// id
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    /// origin label
    #[prost(string, tag = "2")]
    pub origin: ::prost::alloc::string::String,
    /// destination label
    #[prost(string, tag = "3")]
    pub destination: ::prost::alloc::string::String,
    /// cost of the segment as a decimal string, e.g. "12.50", at least 0.01
    #[prost(string, tag = "4")]
    pub cost: ::prost::alloc::string::String,
}
/// All stored route segments, in insertion order
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteList {
    /// routes
    #[prost(message, repeated, tag = "1")]
    pub routes: ::prost::alloc::vec::Vec<Route>,
}
/// DeleteRouteResponse
#[derive(Eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteRouteResponse {
    /// id
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    /// indicates if the route was removed
    #[prost(bool, tag = "2")]
    pub deleted: bool,
}
/// BestRouteRequest
#[derive(Eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BestRouteRequest {
    /// origin label
    #[prost(string, tag = "1")]
    pub origin: ::prost::alloc::string::String,
    /// destination label
    #[prost(string, tag = "2")]
    pub destination: ::prost::alloc::string::String,
}
/// BestRouteResponse
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BestRouteResponse {
    /// outcome of the search
    #[prost(enumeration = "BestRouteOutcome", tag = "1")]
    pub outcome: i32,
    /// user facing message
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
    /// labels of the cheapest path, empty unless FOUND
    #[prost(string, repeated, tag = "3")]
    pub path: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// total cost of the cheapest path as a decimal string, "0" unless FOUND
    #[prost(string, tag = "4")]
    pub total_cost: ::prost::alloc::string::String,
}
/// Best Route Outcome Enum
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BestRouteOutcome {
    /// FOUND
    Found = 0,
    /// NO_ROUTE
    NoRoute = 1,
    /// IDENTICAL_ENDPOINTS
    IdenticalEndpoints = 2,
    /// SEARCH_ABORTED
    SearchAborted = 3,
}
impl BestRouteOutcome {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            BestRouteOutcome::Found => "FOUND",
            BestRouteOutcome::NoRoute => "NO_ROUTE",
            BestRouteOutcome::IdenticalEndpoints => "IDENTICAL_ENDPOINTS",
            BestRouteOutcome::SearchAborted => "SEARCH_ABORTED",
        }
    }
}
/// Generated server implementations.
pub mod rpc_service_server {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::*;
    ///Generated trait containing gRPC methods that should be implemented for use with RpcServiceServer.
    #[async_trait]
    pub trait RpcService: Send + Sync + 'static {
        async fn is_ready(
            &self,
            request: tonic::Request<super::ReadyRequest>,
        ) -> Result<tonic::Response<super::ReadyResponse>, tonic::Status>;
        async fn get_routes(
            &self,
            request: tonic::Request<super::RouteListRequest>,
        ) -> Result<tonic::Response<super::RouteList>, tonic::Status>;
        async fn insert_route(
            &self,
            request: tonic::Request<super::RouteData>,
        ) -> Result<tonic::Response<super::Route>, tonic::Status>;
        async fn update_route(
            &self,
            request: tonic::Request<super::Route>,
        ) -> Result<tonic::Response<super::Route>, tonic::Status>;
        async fn delete_route(
            &self,
            request: tonic::Request<super::Id>,
        ) -> Result<tonic::Response<super::DeleteRouteResponse>, tonic::Status>;
        async fn best_route(
            &self,
            request: tonic::Request<super::BestRouteRequest>,
        ) -> Result<tonic::Response<super::BestRouteResponse>, tonic::Status>;
    }
    /// Route search service
    #[derive(Debug)]
    pub struct RpcServiceServer<T: RpcService> {
        inner: _Inner<T>,
        accept_compression_encodings: EnabledCompressionEncodings,
        send_compression_encodings: EnabledCompressionEncodings,
    }
    struct _Inner<T>(Arc<T>);
    impl<T: RpcService> RpcServiceServer<T> {
        pub fn new(inner: T) -> Self {
            Self::from_arc(Arc::new(inner))
        }
        pub fn from_arc(inner: Arc<T>) -> Self {
            let inner = _Inner(inner);
            Self {
                inner,
                accept_compression_encodings: Default::default(),
                send_compression_encodings: Default::default(),
            }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> InterceptedService<Self, F>
        where
            F: tonic::service::Interceptor,
        {
            InterceptedService::new(Self::new(inner), interceptor)
        }
        /// Enable decompressing requests with the given encoding.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.accept_compression_encodings.enable(encoding);
            self
        }
        /// Compress responses with the given encoding, if the client supports it.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.send_compression_encodings.enable(encoding);
            self
        }
    }
    impl<T, B> tonic::codegen::Service<http::Request<B>> for RpcServiceServer<T>
    where
        T: RpcService,
        B: Body + Send + 'static,
        B::Error: Into<StdError> + Send + 'static,
    {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(
            &mut self,
            _cx: &mut Context<'_>,
        ) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/grpc.RpcService/isReady" => {
                    #[allow(non_camel_case_types)]
                    struct isReadySvc<T: RpcService>(pub Arc<T>);
                    impl<
                        T: RpcService,
                    > tonic::server::UnaryService<super::ReadyRequest>
                    for isReadySvc<T> {
                        type Response = super::ReadyResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ReadyRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).is_ready(request).await };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = isReadySvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/grpc.RpcService/getRoutes" => {
                    #[allow(non_camel_case_types)]
                    struct getRoutesSvc<T: RpcService>(pub Arc<T>);
                    impl<
                        T: RpcService,
                    > tonic::server::UnaryService<super::RouteListRequest>
                    for getRoutesSvc<T> {
                        type Response = super::RouteList;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::RouteListRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).get_routes(request).await };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = getRoutesSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/grpc.RpcService/insertRoute" => {
                    #[allow(non_camel_case_types)]
                    struct insertRouteSvc<T: RpcService>(pub Arc<T>);
                    impl<T: RpcService> tonic::server::UnaryService<super::RouteData>
                    for insertRouteSvc<T> {
                        type Response = super::Route;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::RouteData>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move {
                                (*inner).insert_route(request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = insertRouteSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/grpc.RpcService/updateRoute" => {
                    #[allow(non_camel_case_types)]
                    struct updateRouteSvc<T: RpcService>(pub Arc<T>);
                    impl<T: RpcService> tonic::server::UnaryService<super::Route>
                    for updateRouteSvc<T> {
                        type Response = super::Route;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::Route>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move {
                                (*inner).update_route(request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = updateRouteSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/grpc.RpcService/deleteRoute" => {
                    #[allow(non_camel_case_types)]
                    struct deleteRouteSvc<T: RpcService>(pub Arc<T>);
                    impl<T: RpcService> tonic::server::UnaryService<super::Id>
                    for deleteRouteSvc<T> {
                        type Response = super::DeleteRouteResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::Id>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move {
                                (*inner).delete_route(request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = deleteRouteSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/grpc.RpcService/bestRoute" => {
                    #[allow(non_camel_case_types)]
                    struct bestRouteSvc<T: RpcService>(pub Arc<T>);
                    impl<
                        T: RpcService,
                    > tonic::server::UnaryService<super::BestRouteRequest>
                    for bestRouteSvc<T> {
                        type Response = super::BestRouteResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::BestRouteRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).best_route(request).await };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = bestRouteSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => {
                    Box::pin(async move {
                        Ok(
                            http::Response::builder()
                                .status(200)
                                .header("grpc-status", "12")
                                .header("content-type", "application/grpc")
                                .body(empty_body())
                                .unwrap(),
                        )
                    })
                }
            }
        }
    }
    impl<T: RpcService> Clone for RpcServiceServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self {
                inner,
                accept_compression_encodings: self.accept_compression_encodings,
                send_compression_encodings: self.send_compression_encodings,
            }
        }
    }
    impl<T: RpcService> Clone for _Inner<T> {
        fn clone(&self) -> Self {
            Self(self.0.clone())
        }
    }
    impl<T: std::fmt::Debug> std::fmt::Debug for _Inner<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }
    impl<T: RpcService> tonic::server::NamedService for RpcServiceServer<T> {
        const NAME: &'static str = "grpc.RpcService";
    }
}
