/// How an unsigned divisor plan executes a division.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnsignedStrategy {
    /// Dividing by 1.
    None,
    /// The divisor is a power of two: shift only.
    Shift,
    /// Multiply-high, then shift.
    MultiplyShift,
    /// Multiply-high, average the product back with the dividend, then
    /// shift.  Used when the magic number needs `W + 1` bits.
    MultiplyAddShift,
    /// The divisor has its top bit set, so the quotient is 0 or 1.
    Branch,
}

/// How a signed divisor plan executes a division.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SignedStrategy {
    /// Dividing by 1.
    None,
    /// The divisor is `2^shift`.
    PowerOfTwoPositive,
    /// The divisor is `-2^shift`, including -1.
    PowerOfTwoNegative,
    /// Multiply-high, then shift.
    MultiplyShift,
    /// Multiply-high, add the dividend, then shift.  The magic number
    /// came out negative for a positive divisor.
    MultiplyAddShift,
    /// Multiply-high, subtract the dividend, then shift.  The magic
    /// number came out positive for a negative divisor.
    MultiplySubtractShift,
    /// The divisor is `MIN`: only `MIN` itself divides to 1.
    Branch,
}

impl UnsignedStrategy {
    /// Whether the plan multiplies by its magic number.
    #[inline]
    pub fn is_multiply(self) -> bool {
        matches!(
            self,
            UnsignedStrategy::MultiplyShift | UnsignedStrategy::MultiplyAddShift
        )
    }

    /// Whether the plan only shifts (dividing by 1 shifts by 0).
    #[inline]
    pub fn is_shift(self) -> bool {
        matches!(self, UnsignedStrategy::None | UnsignedStrategy::Shift)
    }
}

impl SignedStrategy {
    /// Whether the plan multiplies by its magic number.
    #[inline]
    pub fn is_multiply(self) -> bool {
        matches!(
            self,
            SignedStrategy::MultiplyShift
                | SignedStrategy::MultiplyAddShift
                | SignedStrategy::MultiplySubtractShift
        )
    }

    /// Whether the plan only shifts (dividing by 1 shifts by 0).
    #[inline]
    pub fn is_shift(self) -> bool {
        matches!(
            self,
            SignedStrategy::None
                | SignedStrategy::PowerOfTwoPositive
                | SignedStrategy::PowerOfTwoNegative
        )
    }
}
