//! Chain metadata types.
//!
//! The serialized form uses the camelCase field names of the Hyperlane chain
//! metadata schema, so entries can be loaded from or written to the same JSON
//! the bridge UI consumes.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{BridgeError, Result};

/// Execution environment family of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolType {
    Ethereum,
    Sealevel,
    Cosmos,
    Starknet,
}

/// Block explorer software family, which determines its API shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplorerFamily {
    Etherscan,
    Blockscout,
    Routescan,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeToken {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcUrl {
    pub http: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockExplorer {
    pub name: String,
    pub url: String,
    pub api_url: String,
    pub family: ExplorerFamily,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl BlockExplorer {
    /// Link to a transaction page on this explorer.
    ///
    /// Etherscan and Blockscout style explorers both serve `/tx/<hash>`
    /// under the explorer's base path. The hash is always a single path
    /// segment; `/` and `..` inside it are escaped, not resolved.
    ///
    /// # Example
    ///
    /// ```rust
    /// use davinci_bridge::BridgeChain;
    ///
    /// let metadata = BridgeChain::Davinci.metadata();
    /// let explorer = metadata.primary_explorer().unwrap();
    /// let url = explorer.tx_url("0xabc").unwrap();
    /// assert_eq!(url.as_str(), "https://mainnet-explorer.davinci.bz/tx/0xabc");
    /// ```
    pub fn tx_url(&self, tx_hash: &str) -> Result<Url> {
        let mut url = Url::parse(&self.url)?;
        url.path_segments_mut()
            .map_err(|()| BridgeError::InvalidExplorerUrl(self.url.clone()))?
            .pop_if_empty()
            .push("tx")
            .push(tx_hash);
        Ok(url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployer {
    pub name: String,
    pub url: String,
}

/// Block timing parameters used for confirmation estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockConfig {
    pub confirmations: u32,
    /// Seconds
    pub estimate_block_time: u32,
    pub reorg_period: u32,
}

/// Static description of one chain the bridge routes to or from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainMetadata {
    pub protocol: ProtocolType,
    pub chain_id: u32,
    pub domain_id: u32,
    pub name: String,
    pub display_name: String,
    pub native_token: NativeToken,
    pub rpc_urls: Vec<RpcUrl>,
    #[serde(default)]
    pub block_explorers: Vec<BlockExplorer>,
    #[serde(default, rename = "logoURI", skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_currency_coin_gecko_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gnosis_safe_transaction_service_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployer: Option<Deployer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<BlockConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mailbox: Option<String>,
}

impl ChainMetadata {
    /// Parses the first configured RPC endpoint.
    pub fn primary_rpc_url(&self) -> Result<Url> {
        let rpc = self
            .rpc_urls
            .first()
            .ok_or_else(|| BridgeError::MissingEndpoint {
                chain: self.name.clone(),
                what: "RPC URL",
            })?;
        Ok(Url::parse(&rpc.http)?)
    }

    pub fn primary_explorer(&self) -> Option<&BlockExplorer> {
        self.block_explorers.first()
    }

    /// Reads a single chain entry from Hyperlane-style JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
