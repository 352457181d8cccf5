//! Fixed point helpers over host 256-bit integers.
//!
//! Two rounding modes are used across the crate:
//! - `floor_div` when converting EUR into tokens, so a payment never buys
//!   more tokens than it covers
//! - `div_round` (half up) when converting tokens or fractions into EUR

use soroban_sdk::{Env, U256};

use crate::storage::SCALE;

pub fn u256(env: &Env, value: u128) -> U256 {
    U256::from_u128(env, value)
}

pub fn zero(env: &Env) -> U256 {
    U256::from_u32(env, 0)
}

pub fn scale(env: &Env) -> U256 {
    U256::from_u128(env, SCALE)
}

/// 10^exp
pub fn pow10(env: &Env, exp: u32) -> U256 {
    U256::from_u32(env, 10).pow(exp)
}

/// 2^bits
pub fn two_pow(env: &Env, bits: u32) -> U256 {
    U256::from_u32(env, 2).pow(bits)
}

pub fn min(a: &U256, b: &U256) -> U256 {
    if a < b {
        a.clone()
    } else {
        b.clone()
    }
}

pub fn max(a: &U256, b: &U256) -> U256 {
    if a > b {
        a.clone()
    } else {
        b.clone()
    }
}

/// Largest value a host 256-bit integer holds
pub fn max_u256(env: &Env) -> U256 {
    U256::from_parts(env, u64::MAX, u64::MAX, u64::MAX, u64::MAX)
}

/// a * b, `None` when the product does not fit in 256 bits
pub fn checked_mul(env: &Env, a: &U256, b: &U256) -> Option<U256> {
    if *b != zero(env) && *a > max_u256(env).div(b) {
        return None;
    }
    Some(a.mul(b))
}

/// Truncating division
pub fn floor_div(value: &U256, divisor: &U256) -> U256 {
    value.div(divisor)
}

/// Division rounding half up: (value + divisor / 2) / divisor
pub fn div_round(env: &Env, value: &U256, divisor: &U256) -> U256 {
    let half = divisor.div(&U256::from_u32(env, 2));
    value.add(&half).div(divisor)
}

/// amount * part / total, rounded half up
pub fn proportion(env: &Env, amount: &U256, part: &U256, total: &U256) -> U256 {
    div_round(env, &amount.mul(part), total)
}

/// amount * frac where frac is scaled by SCALE, rounded half up
pub fn decimal_fraction(env: &Env, amount: &U256, frac: &U256) -> U256 {
    proportion(env, amount, frac, &scale(env))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_round_half_up() {
        let env = Env::default();

        assert_eq!(div_round(&env, &u256(&env, 5), &u256(&env, 2)), u256(&env, 3));
        assert_eq!(div_round(&env, &u256(&env, 4), &u256(&env, 3)), u256(&env, 1));
        assert_eq!(div_round(&env, &u256(&env, 5), &u256(&env, 3)), u256(&env, 2));
        assert_eq!(div_round(&env, &u256(&env, 0), &u256(&env, 7)), zero(&env));
    }

    #[test]
    fn test_floor_div_truncates() {
        let env = Env::default();

        assert_eq!(floor_div(&u256(&env, 5), &u256(&env, 2)), u256(&env, 2));
        assert_eq!(floor_div(&u256(&env, 999), &u256(&env, 1000)), zero(&env));
    }

    #[test]
    fn test_decimal_fraction() {
        let env = Env::default();

        // 60% of 0.12345
        let price = u256(&env, 123_450_000_000_000_000);
        let frac = u256(&env, 6 * SCALE / 10);
        assert_eq!(
            decimal_fraction(&env, &price, &frac),
            u256(&env, 74_070_000_000_000_000)
        );

        // 1 * 0.5 ulps rounds up
        assert_eq!(
            decimal_fraction(&env, &u256(&env, 1), &u256(&env, SCALE / 2)),
            u256(&env, 1)
        );
        // 1 * 0.4999.. ulps rounds down
        assert_eq!(
            decimal_fraction(&env, &u256(&env, 1), &u256(&env, SCALE / 2 - 1)),
            zero(&env)
        );
    }

    #[test]
    fn test_powers() {
        let env = Env::default();

        assert_eq!(pow10(&env, 0), u256(&env, 1));
        assert_eq!(pow10(&env, 18), scale(&env));
        assert_eq!(two_pow(&env, 112), u256(&env, 1u128 << 112));
        // 2^128 does not fit in u128
        assert_eq!(two_pow(&env, 128).to_u128(), None);
        assert_eq!(two_pow(&env, 128).sub(&u256(&env, 1)), u256(&env, u128::MAX));
    }

    #[test]
    fn test_checked_mul() {
        let env = Env::default();
        let max = max_u256(&env);
        let ten = u256(&env, 10);

        assert_eq!(checked_mul(&env, &u256(&env, 3), &ten), Some(u256(&env, 30)));
        assert_eq!(checked_mul(&env, &max, &u256(&env, 1)), Some(max.clone()));
        assert_eq!(checked_mul(&env, &max, &zero(&env)), Some(zero(&env)));

        let limit = max.div(&ten);
        assert_eq!(checked_mul(&env, &limit, &ten), Some(limit.mul(&ten)));
        assert_eq!(checked_mul(&env, &limit.add(&u256(&env, 1)), &ten), None);
    }

    #[test]
    fn test_min_max() {
        let env = Env::default();
        let a = u256(&env, 1);
        let b = u256(&env, 2);

        assert_eq!(min(&a, &b), a);
        assert_eq!(max(&a, &b), b);
        assert_eq!(min(&b, &b), b);
    }
}
