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
    // AUTHORIZATION ERRORS (10-15)
    // ============================================
    /// Caller does not hold the whitelist admin role for this instance
    Unauthorized = 10,

    // ============================================
    // TOKEN TERMS ERRORS (20-29)
    // ============================================
    /// Token decimals above 18
    InvalidTokenDecimals = 20,
    /// Tokens per share is zero or not a multiple of token power
    SharesNotWholeTokens = 21,
    /// Token price must be positive
    InvalidTokenPrice = 22,
    /// Max number of tokens is not made of whole shares
    MaxTokensNotWholeShares = 23,
    /// Max number of tokens does not fit in 128 bits
    TooManyTokens = 24,
    /// Price times max number of tokens does not fit in 112 bits
    TooMuchFundsCollected = 25,
    /// Whitelist tokens exceed max number of tokens
    WhitelistTokensExceedMax = 26,
    /// Min number of tokens is less than one share
    MinTokensBelowOneShare = 27,

    // ============================================
    // DURATION TERMS ERRORS (30-39)
    // ============================================
    /// Sum of durations overflows
    DurationOverflow = 30,

    // ============================================
    // ETO TERMS ERRORS (40-59)
    // ============================================
    /// Terms constraints are not registered in the universe
    TermsNotInUniverse = 40,
    /// Min ticket below constraints min ticket size
    MinTicketBelowConstraints = 41,
    /// Max ticket above constraints max ticket size
    MaxTicketAboveConstraints = 42,
    /// Non-zero max ticket below min ticket
    MaxTicketBelowMinTicket = 43,
    /// Transfers on success enabled but constraints forbid it
    TransferabilityNotAllowed = 44,
    /// Min ticket does not buy a single full priced token
    MinTicketBelowTokenPrice = 45,
    /// Discount or price fraction out of range
    DiscountRange = 46,
    /// Max funds that can be collected are below min ticket
    MaxFundsBelowMinTicket = 47,
    /// Min cap in EUR exceeds product max investment amount
    MinCapAboveMaxInvestment = 48,
    /// Tokens available after fee are below min number of tokens
    AvailableTokensBelowMinTokens = 49,
    /// EUR amount too large to convert into tokens
    AmountTooLarge = 50,

    // ============================================
    // DURATION BOUNDS ERRORS (60-69)
    // ============================================
    WhitelistDurationTooShort = 60,
    WhitelistDurationTooLong = 61,
    PublicDurationTooShort = 62,
    PublicDurationTooLong = 63,
    OfferDurationTooShort = 64,
    OfferDurationTooLong = 65,
    SigningDurationTooShort = 66,
    SigningDurationTooLong = 67,
    ClaimDurationTooShort = 68,
    ClaimDurationTooLong = 69,

    // ============================================
    // WHITELIST ERRORS (70-79)
    // ============================================
    /// Investors, amounts and fractions have different lengths
    LengthMismatch = 70,
}
