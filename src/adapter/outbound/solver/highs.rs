//! HiGHS solver implementation via good_lp.
//!
//! HiGHS is a high-performance open-source linear/mixed-integer programming solver.
//! This implementation wraps it using the good_lp crate for ergonomic Rust usage.

use good_lp::solvers::highs::highs;
use good_lp::{
    constraint, variable, variables, Expression, ResolutionError, Solution, SolverModel, Variable,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::domain::constraint::ConstraintSense;
use crate::port::outbound::solver::{IlpProblem, LpSolution, Solver, SolverFailure};

/// HiGHS-based ILP solver.
#[derive(Debug, Default, Clone)]
pub struct HiGHSSolver;

impl HiGHSSolver {
    /// Create a new HiGHS solver instance.
    pub fn new() -> Self {
        Self
    }
}

impl Solver for HiGHSSolver {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution, SolverFailure> {
        solve_with_good_lp(problem)
    }
}

fn to_f64(value: Decimal, what: &str) -> Result<f64, SolverFailure> {
    value
        .to_f64()
        .ok_or_else(|| SolverFailure::Backend(format!("{what} {value} is not representable")))
}

fn linear_expression(
    vars: &[Variable],
    terms: impl Iterator<Item = (usize, Decimal)>,
) -> Result<Expression, SolverFailure> {
    let weighted = terms
        .map(|(index, coef)| {
            let var = vars.get(index).copied().ok_or_else(|| {
                SolverFailure::Backend(format!("variable index {index} out of range"))
            })?;
            Ok((var, to_f64(coef, "coefficient")?))
        })
        .collect::<Result<Vec<_>, SolverFailure>>()?;

    Ok(weighted.into_iter().map(|(var, coef)| coef * var).sum())
}

/// Internal solver implementation using good_lp.
fn solve_with_good_lp(problem: &IlpProblem) -> Result<LpSolution, SolverFailure> {
    let n = problem.num_vars();
    if problem.bounds.len() != n {
        return Err(SolverFailure::Backend(format!(
            "{} bounds for {n} variables",
            problem.bounds.len()
        )));
    }

    // Handle empty problem
    if n == 0 {
        return Ok(LpSolution {
            values: vec![],
            objective: 0.0,
        });
    }

    let mut vars = variables!();
    let mut var_list = Vec::with_capacity(n);

    for bounds in &problem.bounds {
        let mut v = variable();
        if let Some(lb) = bounds.lower {
            v = v.min(to_f64(lb, "lower bound")?);
        }
        if let Some(ub) = bounds.upper {
            v = v.max(to_f64(ub, "upper bound")?);
        }
        if bounds.integer {
            v = v.integer();
        }
        var_list.push(vars.add(v));
    }

    let objective = linear_expression(&var_list, problem.objective.iter().copied().enumerate())?;

    let mut model = vars.minimise(&objective).using(highs);

    for constr in &problem.constraints {
        let lhs = linear_expression(&var_list, constr.terms.iter().copied())?;
        let rhs = to_f64(constr.rhs, "right-hand side")?;

        model = match constr.sense {
            ConstraintSense::GreaterEqual => model.with(constraint!(lhs >= rhs)),
            ConstraintSense::LessEqual => model.with(constraint!(lhs <= rhs)),
        };
    }

    let solution = model.solve().map_err(|err| match err {
        ResolutionError::Infeasible => SolverFailure::Infeasible,
        ResolutionError::Unbounded => SolverFailure::Unbounded,
        other => SolverFailure::Backend(other.to_string()),
    })?;

    let values: Vec<f64> = var_list.iter().map(|v| solution.value(*v)).collect();

    // Re-evaluate objective with the solved values
    let objective: f64 = values
        .iter()
        .zip(problem.objective.iter())
        .map(|(v, c)| v * c.to_f64().unwrap_or(0.0))
        .sum();

    Ok(LpSolution { values, objective })
}
