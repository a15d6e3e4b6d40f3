//! Chain configuration for the DaVinci Bridge
//!
//! Metadata for every chain the bridge routes between, plus rent estimates for
//! SVM destinations.

mod metadata;
mod registry;
mod rent;

pub use metadata::{
    BlockConfig, BlockExplorer, ChainMetadata, Deployer, ExplorerFamily, NativeToken,
    ProtocolType, RpcUrl,
};
pub use registry::{chains, BridgeChain};
pub use rent::{rent_estimate, rent_estimates, RENT_ESTIMATES};
