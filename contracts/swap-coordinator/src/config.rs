use soroban_sdk::Address;

/// Network a client talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkConfig {
    pub rpc_url: String,
    pub passphrase: String,
}

impl NetworkConfig {
    pub fn new(rpc_url: impl Into<String>, passphrase: impl Into<String>) -> Self {
        NetworkConfig {
            rpc_url: rpc_url.into(),
            passphrase: passphrase.into(),
        }
    }

    /// Local quickstart node.
    pub fn standalone() -> Self {
        Self::new(
            "http://localhost:8000/soroban/rpc",
            "Standalone Network ; February 2017",
        )
    }

    pub fn testnet() -> Self {
        Self::new(
            "https://soroban-testnet.stellar.org",
            "Test SDF Network ; September 2015",
        )
    }

    pub fn futurenet() -> Self {
        Self::new(
            "https://rpc-futurenet.stellar.org",
            "Test SDF Future Network ; October 2022",
        )
    }
}

/// Everything a client needs to act on one escrow deployment: where it runs,
/// who signs, and which contract to call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub network: NetworkConfig,
    pub signer: Address,
    pub contract: Address,
}

impl ClientConfig {
    pub fn new(network: NetworkConfig, signer: Address, contract: Address) -> Self {
        ClientConfig {
            network,
            signer,
            contract,
        }
    }

    /// Same deployment and network, different signer.
    pub fn with_signer(&self, signer: Address) -> Self {
        ClientConfig {
            network: self.network.clone(),
            signer,
            contract: self.contract.clone(),
        }
    }
}
