use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
}

impl ArithmeticOp {
    fn symbol(self) -> &'static str {
        match self {
            ArithmeticOp::Add => "+",
            ArithmeticOp::Sub => "-",
            ArithmeticOp::Mul => "*",
        }
    }
}

/// Returned by the checked (`try_*`) operations of `FixedPoint64`.
/// The default operators wrap and never produce one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArithmeticFaultKind {
    /// Exact result is outside `MINIMUM..=MAXIMUM`.
    Overflow { op: ArithmeticOp },
}

impl fmt::Display for ArithmeticFaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticFaultKind::Overflow { op } => {
                write!(f, "Q32.32 overflow in `{}`", op.symbol())
            }
        }
    }
}

impl std::error::Error for ArithmeticFaultKind {}
