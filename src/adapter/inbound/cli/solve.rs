//! `rota solve`: run a solve session and print the final schedule.

use tabled::{Table, Tabled};
use tracing::info;

use crate::adapter::inbound::cli::command::SolveArgs;
use crate::adapter::inbound::cli::output;
use crate::application::coordinator::{Coordinator, Disposition, EditOutcome, Snapshot};
use crate::domain::{Assignment, Configuration, Day, SolveResult};
use crate::error::Result;
use crate::infrastructure::config::settings::Settings;
use crate::infrastructure::factory::build_coordinator;
use crate::port::inbound::edit::EditCommand;

#[derive(Tabled)]
struct ScheduleRow {
    #[tabled(rename = "Staff")]
    staff: String,
    #[tabled(rename = "Mon")]
    mon: String,
    #[tabled(rename = "Tue")]
    tue: String,
    #[tabled(rename = "Wed")]
    wed: String,
    #[tabled(rename = "Thu")]
    thu: String,
    #[tabled(rename = "Fri")]
    fri: String,
    #[tabled(rename = "Sat")]
    sat: String,
    #[tabled(rename = "Sun")]
    sun: String,
    #[tabled(rename = "Days")]
    days: String,
}

impl ScheduleRow {
    fn new(staff: String, cells: [String; 7], days: String) -> Self {
        let [mon, tue, wed, thu, fri, sat, sun] = cells;
        Self {
            staff,
            mon,
            tue,
            wed,
            thu,
            fri,
            sat,
            sun,
            days,
        }
    }
}

/// Solve the configured week, apply each `--edit` in order, then print the
/// final schedule.
pub async fn execute(args: &SolveArgs) -> Result<()> {
    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    settings.init_logging();

    let commands = args
        .edits
        .iter()
        .map(|raw| serde_json::from_str::<EditCommand>(raw))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let coordinator = build_coordinator(&settings)?;
    info!(
        backend = coordinator.backend_name(),
        staff = coordinator.configuration().roster().len(),
        edits = commands.len(),
        "session started"
    );

    report(coordinator.solve_current().await.wait().await);
    for command in commands {
        run_edit(&coordinator, command).await?;
    }

    let snapshot = coordinator.snapshot();
    if output::is_json() {
        output::json_output(&serde_json::to_value(&snapshot)?);
    } else {
        print_snapshot(&snapshot);
    }
    Ok(())
}

async fn run_edit(coordinator: &Coordinator, command: EditCommand) -> Result<()> {
    match coordinator.submit(command).await? {
        EditOutcome::Committed(receipt) => report(receipt.wait().await),
        EditOutcome::Assignment {
            version,
            day,
            staff,
        } => {
            let names = staff.iter().map(ToString::to_string).collect::<Vec<_>>();
            output::field(
                &format!("{} (v{version})", day.full_name()),
                if names.is_empty() {
                    "nobody".to_string()
                } else {
                    names.join(", ")
                },
            );
        }
    }
    Ok(())
}

fn report(disposition: Disposition) {
    match disposition {
        Disposition::Published(v) => output::success(&format!("version {v} solved")),
        Disposition::Failed(v) => output::warning(&format!("version {v} failed to solve")),
        Disposition::Discarded(v) => {
            output::warning(&format!("version {v} superseded before it finished"));
        }
    }
}

fn print_snapshot(snapshot: &Snapshot) {
    let config = &snapshot.configuration;
    output::section(&format!("Schedule (version {})", config.version()));

    match snapshot.current_result().map(|r| &r.result) {
        Some(SolveResult::Optimal {
            assignment,
            total_cost,
        }) => {
            output::lines(&schedule_table(config, assignment));
            output::field("Total cost", total_cost);
        }
        Some(SolveResult::Infeasible) => {
            output::warning("No schedule satisfies the demand and working-day limits");
        }
        Some(SolveResult::SolverError { reason }) => {
            output::warning(&format!("Solver error: {reason}"));
            if let Some(good) = &snapshot.last_good {
                output::field("Last good", format!("version {}", good.version));
            }
        }
        None => output::warning(&format!("No result yet ({:?})", snapshot.phase)),
    }
}

fn schedule_table(config: &Configuration, assignment: &Assignment) -> String {
    let mut rows: Vec<ScheduleRow> = assignment
        .rows()
        .iter()
        .map(|row| {
            ScheduleRow::new(
                row.staff_id.to_string(),
                Day::ALL.map(|day| if row.works(day) { "x" } else { "" }.to_string()),
                row.days_worked().to_string(),
            )
        })
        .collect();

    rows.push(ScheduleRow::new(
        "Total".to_string(),
        Day::ALL.map(|day| {
            format!(
                "{}/{}",
                assignment.coverage(day),
                config.demand().get(day)
            )
        }),
        assignment.total_shifts().to_string(),
    ));

    Table::new(rows).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssignmentRow, DemandVector, StaffMember};
    use rust_decimal_macros::dec;

    #[test]
    fn table_marks_days_and_totals() {
        let config = Configuration::try_new(
            vec![
                StaffMember::try_new("Ann", dec!(10)).unwrap(),
                StaffMember::try_new("Bo", dec!(20)).unwrap(),
            ],
            DemandVector::new([1, 0, 0, 0, 0, 0, 2]),
        )
        .unwrap();
        let mut ann = [false; 7];
        ann[Day::Mon.index()] = true;
        ann[Day::Sun.index()] = true;
        let mut bo = [false; 7];
        bo[Day::Sun.index()] = true;
        let assignment = Assignment::from_rows(vec![
            AssignmentRow {
                staff_id: "Ann".into(),
                days: ann,
            },
            AssignmentRow {
                staff_id: "Bo".into(),
                days: bo,
            },
        ]);

        let table = schedule_table(&config, &assignment);
        assert!(table.contains("Ann"));
        assert!(table.contains("Total"));
        assert!(table.contains("2/2"));
        assert!(table.contains("0/0"));
    }
}
