use soroban_sdk::{contracttype, log, Env, String, U256};

use crate::error::Error;
use crate::math::{pow10, two_pow, zero};
use crate::storage::{FUNDS_BITS, MAX_TOKEN_DECIMALS, TOKENS_BITS};

/// Equity token economics of a single offering
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenTerms {
    pub equity_token_name: String,
    pub equity_token_symbol: String,
    pub isin: String,
    /// Nominal value of a single share in share capital currency ulps
    pub share_nominal_value_ulps: U256,
    pub equity_token_decimals: u32,
    /// Token units representing one share
    pub equity_tokens_per_share: U256,
    /// Price of 10^decimals token units
    pub token_price_eur_ulps: U256,
    pub min_number_of_tokens: U256,
    pub max_number_of_tokens: U256,
    pub max_tokens_in_whitelist: U256,
}

impl TokenTerms {
    /// Token units in one whole token
    pub fn token_power(&self, env: &Env) -> U256 {
        pow10(env, self.equity_token_decimals)
    }

    /// Check the terms in isolation.
    ///
    /// # Errors
    /// - `InvalidTokenDecimals`: More than 18 decimals
    /// - `SharesNotWholeTokens`: Tokens per share not a multiple of token power
    /// - `InvalidTokenPrice`: Zero price
    /// - `MaxTokensNotWholeShares`: Max tokens not a multiple of tokens per share
    /// - `TooManyTokens`: Max tokens >= 2^128
    /// - `TooMuchFundsCollected`: Price times max tokens >= 2^112
    /// - `WhitelistTokensExceedMax`: Whitelist tokens above max tokens
    /// - `MinTokensBelowOneShare`: Min tokens below one share
    pub fn validate(&self, env: &Env) -> Result<(), Error> {
        let result = self.check(env);
        if let Err(error) = result {
            log!(env, "token terms rejected: {}", error as u32);
        }
        result
    }

    fn check(&self, env: &Env) -> Result<(), Error> {
        if self.equity_token_decimals > MAX_TOKEN_DECIMALS {
            return Err(Error::InvalidTokenDecimals);
        }

        let zero = zero(env);
        let token_power = self.token_power(env);
        if self.equity_tokens_per_share == zero
            || self.equity_tokens_per_share.rem_euclid(&token_power) != zero
        {
            return Err(Error::SharesNotWholeTokens);
        }

        if self.token_price_eur_ulps == zero {
            return Err(Error::InvalidTokenPrice);
        }

        if self
            .max_number_of_tokens
            .rem_euclid(&self.equity_tokens_per_share)
            != zero
        {
            return Err(Error::MaxTokensNotWholeShares);
        }

        let tokens_bound = two_pow(env, TOKENS_BITS);
        if self.max_number_of_tokens >= tokens_bound {
            return Err(Error::TooManyTokens);
        }

        // both factors below 2^128 so the product cannot overflow 256 bits
        let funds_bound = two_pow(env, FUNDS_BITS);
        if self.token_price_eur_ulps >= tokens_bound
            || self.token_price_eur_ulps.mul(&self.max_number_of_tokens) >= funds_bound
        {
            return Err(Error::TooMuchFundsCollected);
        }

        if self.max_tokens_in_whitelist > self.max_number_of_tokens {
            return Err(Error::WhitelistTokensExceedMax);
        }

        if self.min_number_of_tokens < self.equity_tokens_per_share {
            return Err(Error::MinTokensBelowOneShare);
        }

        Ok(())
    }
}
