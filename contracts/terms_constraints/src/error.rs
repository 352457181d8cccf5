use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // BOUNDS ERRORS (20-29)
    // ============================================
    /// A minimum duration is larger than its maximum
    InvalidDurationBounds = 20,
    /// Min ticket size larger than a non-zero max ticket size
    InvalidTicketBounds = 21,
    /// Min investment larger than a non-zero max investment
    InvalidInvestmentBounds = 22,
}
