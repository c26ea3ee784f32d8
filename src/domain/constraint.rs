//! Linear constraint primitives shared by the model builder and solver port.

use rust_decimal::Decimal;

/// A named sparse linear constraint: `sum(coef * x[var]) {>=, <=} rhs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    /// Stable name, e.g. `coverage[Fri]`.
    pub name: String,
    /// `(variable index, coefficient)` pairs.
    pub terms: Vec<(usize, Decimal)>,
    pub sense: ConstraintSense,
    pub rhs: Decimal,
}

impl Constraint {
    /// Create a >= constraint.
    pub fn geq(name: impl Into<String>, terms: Vec<(usize, Decimal)>, rhs: Decimal) -> Self {
        Self::new(name, terms, ConstraintSense::GreaterEqual, rhs)
    }

    /// Create a <= constraint.
    pub fn leq(name: impl Into<String>, terms: Vec<(usize, Decimal)>, rhs: Decimal) -> Self {
        Self::new(name, terms, ConstraintSense::LessEqual, rhs)
    }

    /// Unit-coefficient sum over `vars`.
    pub fn unit_terms(vars: impl IntoIterator<Item = usize>) -> Vec<(usize, Decimal)> {
        vars.into_iter().map(|v| (v, Decimal::ONE)).collect()
    }

    fn new(
        name: impl Into<String>,
        terms: Vec<(usize, Decimal)>,
        sense: ConstraintSense,
        rhs: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            terms,
            sense,
            rhs,
        }
    }

    /// Whether `values` satisfy this constraint within `tolerance`.
    #[must_use]
    pub fn is_satisfied_by(&self, values: &[f64], tolerance: f64) -> bool {
        use rust_decimal::prelude::ToPrimitive;

        let lhs: f64 = self
            .terms
            .iter()
            .map(|(var, coef)| coef.to_f64().unwrap_or(0.0) * values.get(*var).copied().unwrap_or(0.0))
            .sum();
        let rhs = self.rhs.to_f64().unwrap_or(0.0);
        match self.sense {
            ConstraintSense::GreaterEqual => lhs + tolerance >= rhs,
            ConstraintSense::LessEqual => lhs - tolerance <= rhs,
        }
    }
}

/// Constraint sense (comparison operator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintSense {
    /// Greater than or equal (>=).
    GreaterEqual,
    /// Less than or equal (<=).
    LessEqual,
}

/// Bounds and integrality of a decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableBounds {
    /// Lower bound (None = -infinity).
    pub lower: Option<Decimal>,
    /// Upper bound (None = +infinity).
    pub upper: Option<Decimal>,
    pub integer: bool,
}

impl VariableBounds {
    /// Binary variable: integer in [0, 1].
    #[must_use]
    pub const fn binary() -> Self {
        Self {
            lower: Some(Decimal::ZERO),
            upper: Some(Decimal::ONE),
            integer: true,
        }
    }
}
