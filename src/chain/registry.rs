//! Chains supported by the DaVinci Bridge.

use alloy_chains::Chain;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::metadata::{
    BlockConfig, BlockExplorer, ChainMetadata, Deployer, ExplorerFamily, NativeToken,
    ProtocolType, RpcUrl,
};
use crate::error::{BridgeError, Result};

const OPTIMISM_RPC_URLS: [&str; 5] = [
    "https://mainnet.optimism.io",
    "https://optimism.drpc.org",
    "https://optimism-rpc.publicnode.com",
    "https://op-pokt.nodies.app",
    "https://1rpc.io/op",
];

const DAVINCI_LOGO_URI: &str = "https://raw.githubusercontent.com/davinchi-protocol/branding-kit/refs/heads/main/logo-network/davinci-logo.svg";

/// A chain the bridge routes between.
///
/// # Example
///
/// ```rust
/// use davinci_bridge::BridgeChain;
///
/// let chain: BridgeChain = "davinci".parse().unwrap();
/// assert_eq!(chain.chain_id(), 293);
/// assert_eq!(chain.native_token_symbol(), "DCOIN");
/// assert_eq!(BridgeChain::try_from(10).unwrap(), BridgeChain::Optimism);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum BridgeChain {
    /// DaVinci Chain (chain ID 293)
    Davinci,
    /// OP Mainnet (chain ID 10)
    Optimism,
}

impl BridgeChain {
    pub const ALL: [BridgeChain; 2] = [BridgeChain::Davinci, BridgeChain::Optimism];

    /// Registry key, also the chain string used in analytics payloads.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Davinci => "davinci",
            Self::Optimism => "optimism",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Davinci => "DaVinci Chain",
            Self::Optimism => "Optimism",
        }
    }

    pub const fn chain_id(&self) -> u32 {
        match self {
            Self::Davinci => 293,
            Self::Optimism => 10,
        }
    }

    /// Messaging domain ID. Equal to the EVM chain ID for both chains.
    pub const fn domain_id(&self) -> u32 {
        self.chain_id()
    }

    pub const fn native_token_symbol(&self) -> &'static str {
        match self {
            Self::Davinci => "DCOIN",
            Self::Optimism => "ETH",
        }
    }

    /// The matching `alloy_chains` chain, for handing to EVM tooling.
    pub fn alloy_chain(&self) -> Chain {
        Chain::from_id(u64::from(self.chain_id()))
    }

    pub fn metadata(&self) -> ChainMetadata {
        match self {
            Self::Davinci => davinci(),
            Self::Optimism => optimism(),
        }
    }
}

impl fmt::Display for BridgeChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.chain_id())
    }
}

impl FromStr for BridgeChain {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|chain| chain.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BridgeError::ChainNotSupported {
                chain: s.to_string(),
            })
    }
}

impl TryFrom<u32> for BridgeChain {
    type Error = BridgeError;

    fn try_from(chain_id: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|chain| chain.chain_id() == chain_id)
            .ok_or(BridgeError::UnknownChainId(chain_id))
    }
}

/// Every supported chain's metadata, keyed by chain name.
pub fn chains() -> BTreeMap<&'static str, ChainMetadata> {
    BridgeChain::ALL
        .into_iter()
        .map(|chain| (chain.name(), chain.metadata()))
        .collect()
}

fn davinci() -> ChainMetadata {
    let chain = BridgeChain::Davinci;
    ChainMetadata {
        protocol: ProtocolType::Ethereum,
        chain_id: chain.chain_id(),
        domain_id: chain.domain_id(),
        name: chain.name().to_string(),
        display_name: chain.display_name().to_string(),
        native_token: NativeToken {
            name: "DaVinci".to_string(),
            symbol: chain.native_token_symbol().to_string(),
            decimals: 18,
        },
        rpc_urls: vec![RpcUrl {
            http: "https://rpc.davinci.bz".to_string(),
        }],
        block_explorers: vec![BlockExplorer {
            name: "DaVinci Explorer".to_string(),
            url: "https://mainnet-explorer.davinci.bz".to_string(),
            api_url: "https://mainnet-explorer.davinci.bz/api".to_string(),
            family: ExplorerFamily::Blockscout,
            api_key: None,
        }],
        logo_uri: Some(DAVINCI_LOGO_URI.to_string()),
        gas_currency_coin_gecko_id: None,
        gnosis_safe_transaction_service_url: None,
        deployer: None,
        blocks: None,
        mailbox: None,
    }
}

fn optimism() -> ChainMetadata {
    let chain = BridgeChain::Optimism;
    ChainMetadata {
        protocol: ProtocolType::Ethereum,
        chain_id: chain.chain_id(),
        domain_id: chain.domain_id(),
        name: chain.name().to_string(),
        display_name: chain.display_name().to_string(),
        native_token: NativeToken {
            name: "Ether".to_string(),
            symbol: chain.native_token_symbol().to_string(),
            decimals: 18,
        },
        rpc_urls: OPTIMISM_RPC_URLS
            .iter()
            .map(|http| RpcUrl {
                http: http.to_string(),
            })
            .collect(),
        block_explorers: vec![BlockExplorer {
            name: "Etherscan".to_string(),
            url: "https://optimistic.etherscan.io".to_string(),
            api_url: "https://api-optimistic.etherscan.io/api".to_string(),
            family: ExplorerFamily::Etherscan,
            api_key: None,
        }],
        logo_uri: None,
        gas_currency_coin_gecko_id: Some("ethereum".to_string()),
        gnosis_safe_transaction_service_url: Some(
            "https://safe-transaction-optimism.safe.global/".to_string(),
        ),
        deployer: Some(Deployer {
            name: "Abacus Works".to_string(),
            url: "https://www.hyperlane.xyz".to_string(),
        }),
        blocks: Some(BlockConfig {
            confirmations: 1,
            estimate_block_time: 3,
            reorg_period: 10,
        }),
        mailbox: None,
    }
}
