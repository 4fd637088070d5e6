use phf::phf_map;

/// Associativity of a binary operator.
///
/// The associativity decides the tie-break when two operators of equal
/// precedence are adjacent; `Left` means the leftmost is evaluated first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    /// Evaluate the leftmost occurrence first.
    Left,
    /// Evaluate the rightmost occurrence first.
    Right,
}

impl Assoc {
    /// Returns `true` for `Assoc::Left`.
    #[must_use]
    pub const fn is_left(self) -> bool {
        matches!(self, Self::Left)
    }
}

/// Describes one binary operator: its symbol, precedence and associativity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperatorSpec {
    /// The operator symbol.
    pub symbol:     char,
    /// The binding strength; higher binds tighter.
    pub precedence: u8,
    /// The equal-precedence tie-break rule.
    pub assoc:      Assoc,
}

impl OperatorSpec {
    /// Looks up the spec for an operator symbol in the fixed table.
    #[must_use]
    pub fn lookup(symbol: char) -> Option<Self> {
        OPERATOR_TABLE.get(&symbol).copied()
    }

    /// Decides whether `self`, sitting on the operator stack, is popped to
    /// the output before `incoming` is pushed.
    ///
    /// A stacked operator pops when it binds tighter than the incoming one,
    /// or equally tight while the incoming operator is left-associative.
    ///
    /// # Example
    /// ```
    /// use shuntyard::pipeline::operator::OperatorSpec;
    ///
    /// let mul = OperatorSpec::lookup('*').unwrap();
    /// let add = OperatorSpec::lookup('+').unwrap();
    ///
    /// assert!(mul.pops_before(&add));
    /// assert!(!add.pops_before(&mul));
    /// assert!(add.pops_before(&add));
    /// ```
    #[must_use]
    pub const fn pops_before(&self, incoming: &Self) -> bool {
        self.precedence > incoming.precedence
        || (self.precedence == incoming.precedence && incoming.assoc.is_left())
    }
}

/// The fixed operator table.
///
/// `^` is deliberately left-associative here: `2^3^2` evaluates as
/// `(2^3)^2` = 64. Restoring the mathematical right-associative reading is
/// a one-row change.
pub static OPERATOR_TABLE: phf::Map<char, OperatorSpec> = phf_map! {
    '+' => OperatorSpec { symbol:     '+',
                          precedence: 1,
                          assoc:      Assoc::Left, },
    '-' => OperatorSpec { symbol:     '-',
                          precedence: 1,
                          assoc:      Assoc::Left, },
    '*' => OperatorSpec { symbol:     '*',
                          precedence: 2,
                          assoc:      Assoc::Left, },
    '/' => OperatorSpec { symbol:     '/',
                          precedence: 2,
                          assoc:      Assoc::Left, },
    '^' => OperatorSpec { symbol:     '^',
                          precedence: 3,
                          assoc:      Assoc::Left, },
};
