//! Re-optimisation coordinator.
//!
//! Orchestrates "commit edit → build model → solve → publish" for each
//! configuration version and decides which results readers may see.
//!
//! # Ordering
//!
//! Solves for different versions may overlap; nothing serializes them.
//! Instead every commit records the highest version that has entered
//! `Solving`. A result for version `v` is published only if no newer version
//! has started solving since; otherwise it is discarded on arrival. The check
//! and the publication happen under the same lock as the commit, so a
//! reader can never observe an older version's result after a newer one.
//!
//! # Failure containment
//!
//! A solver error for `v` becomes `Failed(v)`. The last optimal result stays
//! available as `last_good`, and later edits proceed normally.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use super::model::{ModelBuilder, ModelOptions};
use super::solve::SolverAdapter;
use super::store::ConfigurationStore;
use crate::domain::{
    Configuration, Day, EditOperation, Phase, SolveResult, SolverErrorReason, StaffId,
    VersionedResult,
};
use crate::error::{QueryError, Result};
use crate::port::inbound::edit::EditCommand;
use crate::port::outbound::solver::Solver;

/// Default wall-clock limit for one solve.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(30);

/// Tunables for a [`Coordinator`].
#[derive(Debug, Clone, Copy)]
pub struct CoordinatorOptions {
    pub model: ModelOptions,
    /// Solves taking longer than this fail with a timeout.
    pub time_limit: Duration,
}

impl Default for CoordinatorOptions {
    fn default() -> Self {
        Self {
            model: ModelOptions::default(),
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }
}

/// What happened to the solve started for a version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "disposition", content = "version", rename_all = "snake_case")]
pub enum Disposition {
    /// The result (optimal or infeasible) is now the latest published one.
    Published(u64),
    /// The solver failed; the failure is the latest terminal state.
    Failed(u64),
    /// A newer version started solving first; the result was dropped.
    Discarded(u64),
}

impl Disposition {
    #[must_use]
    pub const fn version(self) -> u64 {
        match self {
            Self::Published(v) | Self::Failed(v) | Self::Discarded(v) => v,
        }
    }
}

/// Handle to the solve triggered by a commit.
pub struct CommitReceipt {
    configuration: Arc<Configuration>,
    task: JoinHandle<Disposition>,
    inner: Arc<Inner>,
}

impl fmt::Debug for CommitReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommitReceipt")
            .field("version", &self.version())
            .field("finished", &self.task.is_finished())
            .finish()
    }
}

impl CommitReceipt {
    /// Version produced by the commit.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.configuration.version()
    }

    /// The committed configuration.
    #[must_use]
    pub fn configuration(&self) -> &Arc<Configuration> {
        &self.configuration
    }

    /// Wait for the solve's disposition.
    ///
    /// A solve task that panicked or was cancelled is published as an
    /// aborted solver error, so the version never stays in `Solving`.
    pub async fn wait(self) -> Disposition {
        let version = self.version();
        match self.task.await {
            Ok(disposition) => disposition,
            Err(err) => {
                error!(version, error = %err, "solve task did not complete");
                let result = SolveResult::SolverError {
                    reason: SolverErrorReason::Aborted {
                        message: err.to_string(),
                    },
                };
                self.inner
                    .publish(VersionedResult::new(version, result, Duration::ZERO))
            }
        }
    }
}

/// Result of executing an edit operation.
#[derive(Debug)]
pub enum EditOutcome {
    /// A mutation was committed and its solve has started.
    Committed(CommitReceipt),
    /// Answer to a read-only assignment query.
    Assignment {
        /// Version of the result the answer was read from.
        version: u64,
        day: Day,
        staff: Vec<StaffId>,
    },
}

/// Consistent view for display: a configuration paired with the phase of
/// that same version.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub configuration: Configuration,
    /// Phase of `configuration.version()`.
    pub phase: Phase,
    /// Most recent terminal result, of any version.
    pub latest: Option<VersionedResult>,
    /// Most recent optimal result.
    pub last_good: Option<VersionedResult>,
}

impl Snapshot {
    /// The terminal result belonging to `configuration`, if it has one.
    #[must_use]
    pub fn current_result(&self) -> Option<&VersionedResult> {
        self.latest
            .as_ref()
            .filter(|r| r.version == self.configuration.version())
    }
}

struct PublicationState {
    /// Highest version that has entered `Solving`.
    latest_started: u64,
    /// Phase of the currently committed version.
    phase: Phase,
    latest: Option<Arc<VersionedResult>>,
    last_good: Option<Arc<VersionedResult>>,
}

struct Inner {
    store: ConfigurationStore,
    builder: ModelBuilder,
    adapter: SolverAdapter,
    time_limit: Duration,
    state: Mutex<PublicationState>,
    published: watch::Sender<Option<Arc<VersionedResult>>>,
}

/// Applies edits and keeps published results consistent with versions.
///
/// Cheap to clone; clones share the same session.
#[derive(Clone)]
pub struct Coordinator {
    inner: Arc<Inner>,
}

impl Coordinator {
    /// Create a coordinator for `initial`, in phase `Pending`.
    ///
    /// No solve is started; call [`Coordinator::solve_current`] for the
    /// initial run.
    pub fn new(initial: Configuration, solver: Arc<dyn Solver>, options: CoordinatorOptions) -> Self {
        let phase = Phase::Pending(initial.version());
        let (published, _) = watch::channel(None);
        Self {
            inner: Arc::new(Inner {
                store: ConfigurationStore::new(initial),
                builder: ModelBuilder::new(options.model),
                adapter: SolverAdapter::new(solver),
                time_limit: options.time_limit,
                state: Mutex::new(PublicationState {
                    latest_started: 0,
                    phase,
                    latest: None,
                    last_good: None,
                }),
                published,
            }),
        }
    }

    /// Latest committed configuration.
    #[must_use]
    pub fn configuration(&self) -> Arc<Configuration> {
        self.inner.store.current()
    }

    /// Name of the solver backend in use.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.inner.adapter.backend_name()
    }

    /// Receive every published terminal result as it happens.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<VersionedResult>>> {
        self.inner.published.subscribe()
    }

    /// Consistent read of the configuration and its results.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let state = self.inner.state.lock();
        let configuration = self.inner.store.current();
        Snapshot {
            configuration: Configuration::clone(&configuration),
            phase: state.phase,
            latest: state.latest.as_deref().cloned(),
            last_good: state.last_good.as_deref().cloned(),
        }
    }

    /// Parse and execute an inbound command.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Validation`] if the command is rejected
    /// and [`crate::error::Error::Query`] for queries with nothing to read.
    pub async fn submit(&self, command: EditCommand) -> Result<EditOutcome> {
        let op = match command.into_operation() {
            Ok(op) => op,
            Err(err) => {
                warn!(field = err.field(), error = %err, "edit rejected");
                return Err(err.into());
            }
        };
        self.execute(op).await
    }

    /// Execute a typed operation.
    ///
    /// Mutations are committed and trigger exactly one solve; queries read
    /// the last optimal result.
    ///
    /// # Errors
    ///
    /// See [`Coordinator::submit`].
    pub async fn execute(&self, op: EditOperation) -> Result<EditOutcome> {
        if let EditOperation::QueryAssignment { day } = op {
            return self.query(day).map_err(Into::into);
        }

        let committed = {
            let mut state = self.inner.state.lock();
            let committed = match self.inner.store.apply(&op) {
                Ok(config) => config,
                Err(err) => {
                    warn!(kind = op.kind(), field = err.field(), error = %err, "edit rejected");
                    return Err(err.into());
                }
            };
            state.begin(committed.version());
            committed
        };

        info!(kind = op.kind(), version = committed.version(), "edit committed");
        Ok(EditOutcome::Committed(self.spawn_solve(committed)))
    }

    /// Solve (or re-solve) the current version.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn solve_current(&self) -> CommitReceipt {
        let current = {
            let mut state = self.inner.state.lock();
            let current = self.inner.store.current();
            state.begin(current.version());
            current
        };
        self.spawn_solve(current)
    }

    fn query(&self, day: Day) -> std::result::Result<EditOutcome, QueryError> {
        let state = self.inner.state.lock();
        let Some(good) = state.last_good.as_ref() else {
            return Err(QueryError::NoSolveYet {
                version: self.inner.store.version(),
            });
        };
        let staff = good
            .result
            .assignment()
            .map(|a| a.staff_on(day))
            .unwrap_or_default();
        debug!(day = %day, version = good.version, count = staff.len(), "assignment query");
        Ok(EditOutcome::Assignment {
            version: good.version,
            day,
            staff,
        })
    }

    fn spawn_solve(&self, config: Arc<Configuration>) -> CommitReceipt {
        let inner = Arc::clone(&self.inner);
        let task_config = Arc::clone(&config);
        let task = tokio::spawn(async move { inner.run_solve(task_config).await });
        CommitReceipt {
            configuration: config,
            task,
            inner: Arc::clone(&self.inner),
        }
    }
}

impl PublicationState {
    fn begin(&mut self, version: u64) {
        self.latest_started = self.latest_started.max(version);
        self.phase = Phase::Solving(version);
    }
}

impl Inner {
    async fn run_solve(self: Arc<Self>, config: Arc<Configuration>) -> Disposition {
        let version = config.version();
        let model = self.builder.build(&config);
        let adapter = self.adapter.clone();
        let started = Instant::now();

        debug!(version, label = %model.problem().label, "solve started");
        let handle = tokio::task::spawn_blocking(move || adapter.solve(&model));

        let result = match tokio::time::timeout(self.time_limit, handle).await {
            Ok(Ok(result)) => result,
            Ok(Err(err)) => SolveResult::SolverError {
                reason: SolverErrorReason::Aborted {
                    message: err.to_string(),
                },
            },
            Err(_) => {
                warn!(version, limit_ms = self.time_limit.as_millis() as u64, "solve timed out");
                SolveResult::SolverError {
                    reason: SolverErrorReason::timeout(self.time_limit),
                }
            }
        };

        self.publish(VersionedResult::new(version, result, started.elapsed()))
    }

    fn publish(&self, outcome: VersionedResult) -> Disposition {
        let version = outcome.version;
        let mut state = self.state.lock();

        if version < state.latest_started {
            info!(
                version,
                newer = state.latest_started,
                outcome = outcome.result.label(),
                "discarding superseded solve result"
            );
            return Disposition::Discarded(version);
        }

        let phase = Phase::terminal_for(version, &outcome.result);
        let outcome = Arc::new(outcome);
        if outcome.result.is_optimal() {
            state.last_good = Some(Arc::clone(&outcome));
        }
        state.latest = Some(Arc::clone(&outcome));
        state.phase = phase;
        self.published.send_replace(Some(outcome));

        match phase {
            Phase::Failed(v) => Disposition::Failed(v),
            _ => Disposition::Published(version),
        }
    }
}
