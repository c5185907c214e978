/// Network adapters for registry lookups
mod registry_client;

pub use registry_client::RegistryDependencySource;
