//! build script to generate .rs from .proto
//!
//! The generated module is checked in as `src/grpc/grpc.rs`, so protoc is
//! only needed when the `regenerate_proto` feature is enabled.

///generates .rs files in src directory
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let proto_dir = "../proto";
    let proto_file = &format!("{}/grpc.proto", proto_dir);

    #[cfg(feature = "regenerate_proto")]
    {
        tonic_build::configure()
            .type_attribute("Id", "#[derive(Eq)]")
            .type_attribute("ReadyRequest", "#[derive(Eq, Copy)]")
            .type_attribute("ReadyResponse", "#[derive(Eq, Copy)]")
            .type_attribute("RouteListRequest", "#[derive(Eq, Copy)]")
            .type_attribute("BestRouteRequest", "#[derive(Eq)]")
            .type_attribute("DeleteRouteResponse", "#[derive(Eq)]")
            .build_client(false)
            .out_dir("src/grpc/")
            .compile(&[proto_file], &[proto_dir])?;
    }

    println!("cargo:rerun-if-changed={}", proto_file);

    Ok(())
}
