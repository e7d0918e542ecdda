/// Errors reported while building a divisor plan.
///
/// Only construction can fail; once a plan exists, every kernel is total.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DivisorError {
    #[error("attempt to divide by zero")]
    DivideByZero,
}
