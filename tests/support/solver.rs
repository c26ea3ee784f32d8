//! Test doubles for the `Solver` port.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::{Condvar, Mutex};
use rust_decimal::prelude::ToPrimitive;

use rota::port::outbound::solver::{IlpProblem, LpSolution, Solver, SolverFailure};

/// Covers each `coverage[..]` row with its cheapest variables, then checks
/// every constraint. Exact for models without working-day limits that bind.
pub struct GreedySolver;

impl Solver for GreedySolver {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution, SolverFailure> {
        let mut values = vec![0.0; problem.num_vars()];
        for row in problem
            .constraints
            .iter()
            .filter(|c| c.name.starts_with("coverage["))
        {
            let need = row.rhs.to_usize().unwrap_or(0);
            let mut vars: Vec<usize> = row.terms.iter().map(|(v, _)| *v).collect();
            vars.sort_by_key(|v| problem.objective[*v]);
            for v in vars.into_iter().take(need) {
                values[v] = 1.0;
            }
        }

        if !problem
            .constraints
            .iter()
            .all(|c| c.is_satisfied_by(&values, 1e-9))
        {
            return Err(SolverFailure::Infeasible);
        }

        let objective = values
            .iter()
            .zip(&problem.objective)
            .map(|(x, c)| x * c.to_f64().unwrap_or(0.0))
            .sum();
        Ok(LpSolution { values, objective })
    }
}

#[derive(Default)]
struct Gates {
    held: HashSet<String>,
    failing: HashSet<String>,
    started: HashMap<String, usize>,
}

/// Wraps a solver and blocks solves whose problem label is held until the
/// test releases it. Labels are `schedule-v{version}`.
pub struct GatedSolver {
    inner: Arc<dyn Solver>,
    gates: Mutex<Gates>,
    changed: Condvar,
}

impl GatedSolver {
    pub fn new(inner: Arc<dyn Solver>) -> Arc<Self> {
        Arc::new(Self {
            inner,
            gates: Mutex::new(Gates::default()),
            changed: Condvar::new(),
        })
    }

    pub fn greedy() -> Arc<Self> {
        Self::new(Arc::new(GreedySolver))
    }

    /// Block the solve for `version` until [`GatedSolver::release`].
    pub fn hold(&self, version: u64) {
        self.gates.lock().held.insert(label(version));
    }

    pub fn release(&self, version: u64) {
        self.gates.lock().held.remove(&label(version));
        self.changed.notify_all();
    }

    /// Make the solve for `version` fail with a backend error.
    pub fn fail(&self, version: u64) {
        self.gates.lock().failing.insert(label(version));
    }

    /// How many times the solve for `version` reached the backend.
    pub fn started(&self, version: u64) -> usize {
        self.gates
            .lock()
            .started
            .get(&label(version))
            .copied()
            .unwrap_or(0)
    }
}

impl Solver for GatedSolver {
    fn name(&self) -> &'static str {
        "gated"
    }

    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution, SolverFailure> {
        let mut gates = self.gates.lock();
        *gates.started.entry(problem.label.clone()).or_default() += 1;
        while gates.held.contains(&problem.label) {
            self.changed.wait(&mut gates);
        }
        let failing = gates.failing.contains(&problem.label);
        drop(gates);

        if failing {
            return Err(SolverFailure::Backend("scripted failure".into()));
        }
        self.inner.solve_ilp(problem)
    }
}

fn label(version: u64) -> String {
    format!("schedule-v{version}")
}
