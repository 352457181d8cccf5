use soroban_sdk::contracttype;

use crate::error::Error;

/// Phase lengths of an offering, in seconds
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DurationTerms {
    pub whitelist_duration: u64,
    pub public_duration: u64,
    /// Time for the nominee and the company to sign the investment agreement
    pub signing_duration: u64,
    /// Time investors have to claim their tokens after signing
    pub claim_duration: u64,
}

impl DurationTerms {
    /// Whitelist and public phases together
    pub fn offer_duration(&self) -> Result<u64, Error> {
        self.whitelist_duration
            .checked_add(self.public_duration)
            .ok_or(Error::DurationOverflow)
    }

    /// From whitelist start until the claim period ends
    pub fn total_duration(&self) -> Result<u64, Error> {
        self.offer_duration()?
            .checked_add(self.signing_duration)
            .and_then(|v| v.checked_add(self.claim_duration))
            .ok_or(Error::DurationOverflow)
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.total_duration().map(|_| ())
    }
}
