//! Role-named impersonated signers.

use {
    crate::error::HarnessError,
    govfork_chain::ForkChain,
    govfork_primitives::Address,
    log::info,
    std::collections::HashMap,
};

/// A mainnet address the test process may sign for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpersonatedSigner {
    pub role: String,
    pub address: Address,
}

/// Role-name → signer map for one lifecycle run.
///
/// Built per test and passed explicitly into every driver call, so
/// runs stay independently testable and re-entrant; nothing here is
/// process-wide.  Dropped with the test — signers are never persisted.
#[derive(Debug, Clone, Default)]
pub struct SignerContext {
    signers: HashMap<String, ImpersonatedSigner>,
}

impl SignerContext {
    /// Unlock each address on the chain and record it under its role
    /// name.
    pub fn impersonate(chain: &mut ForkChain, roles: &[(&str, Address)]) -> Self {
        let mut signers = HashMap::new();
        for (role, address) in roles {
            chain.impersonate_account(*address);
            signers.insert(
                role.to_string(),
                ImpersonatedSigner {
                    role: role.to_string(),
                    address: *address,
                },
            );
        }
        info!("impersonating {} signer(s)", signers.len());
        Self { signers }
    }

    pub fn signer(&self, role: &str) -> Result<&ImpersonatedSigner, HarnessError> {
        self.signers
            .get(role)
            .ok_or_else(|| HarnessError::UnknownRole(role.to_string()))
    }

    pub fn address(&self, role: &str) -> Result<Address, HarnessError> {
        Ok(self.signer(role)?.address)
    }

    pub fn len(&self) -> usize {
        self.signers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signers.is_empty()
    }
}
