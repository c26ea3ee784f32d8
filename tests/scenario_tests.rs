//! End-to-end sessions against the HiGHS backend.

mod support;

use std::sync::Arc;

use rust_decimal_macros::dec;

use rota::adapter::outbound::solver::HiGHSSolver;
use rota::application::coordinator::{Coordinator, CoordinatorOptions, Disposition, EditOutcome};
use rota::application::model::ModelOptions;
use rota::domain::{
    Configuration, Day, DemandVector, EditOperation, Phase, SolveResult, StaffId, WorkingDays,
};
use rota::error::{Error, QueryError, ValidationError};
use rota::infrastructure::config::Settings;
use rota::port::inbound::edit::EditCommand;

use support::config::{staff, three_staff};

fn highs_coordinator() -> Coordinator {
    Coordinator::new(
        three_staff(),
        Arc::new(HiGHSSolver::new()),
        CoordinatorOptions::default(),
    )
}

fn command(json: &str) -> EditCommand {
    serde_json::from_str(json).unwrap()
}

async fn commit(coordinator: &Coordinator, json: &str) -> Disposition {
    match coordinator.submit(command(json)).await.unwrap() {
        EditOutcome::Committed(receipt) => receipt.wait().await,
        other => panic!("expected a commit, got {other:?}"),
    }
}

fn optimal_cost(coordinator: &Coordinator) -> rust_decimal::Decimal {
    let snapshot = coordinator.snapshot();
    let result = snapshot.current_result().expect("current result");
    result.result.total_cost().expect("optimal result")
}

#[tokio::test]
async fn initial_solve_prefers_cheaper_staff() {
    let coordinator = highs_coordinator();
    assert_eq!(coordinator.solve_current().await.wait().await, Disposition::Published(1));

    let snapshot = coordinator.snapshot();
    assert_eq!(snapshot.phase, Phase::Published(1));
    let result = &snapshot.current_result().unwrap().result;
    let SolveResult::Optimal {
        assignment,
        total_cost,
    } = result
    else {
        panic!("expected optimal, got {result:?}");
    };

    assert_eq!(*total_cost, dec!(320));
    assert!(assignment.covers(&snapshot.configuration));
    assert_eq!(assignment.cost_under(&snapshot.configuration), *total_cost);
    assert_eq!(assignment.days_worked(&StaffId::new("Staff3")), 0);

    let friday = assignment.staff_on(Day::Fri);
    assert_eq!(friday, vec![StaffId::new("Staff1"), StaffId::new("Staff2")]);
}

#[tokio::test]
async fn friday_reduction_resolves_with_cheapest_staff() {
    let coordinator = highs_coordinator();
    coordinator.solve_current().await.wait().await;

    assert_eq!(
        commit(&coordinator, r#"{"kind":"set_staff_cost","staff_id":"Staff3","cost":90}"#).await,
        Disposition::Published(2)
    );
    assert_eq!(optimal_cost(&coordinator), dec!(320));

    assert_eq!(
        commit(&coordinator, r#"{"kind":"adjust_day_demand","day":"Friday","delta":-1}"#).await,
        Disposition::Published(3)
    );
    let snapshot = coordinator.snapshot();
    assert_eq!(snapshot.configuration.demand().get(Day::Fri), 1);
    assert_eq!(optimal_cost(&coordinator), dec!(250));

    let outcome = coordinator
        .submit(command(r#"{"kind":"query_assignment","day":"Fri"}"#))
        .await
        .unwrap();
    let EditOutcome::Assignment { version, staff, .. } = outcome else {
        panic!("expected an assignment answer");
    };
    assert_eq!(version, 3);
    assert_eq!(staff, vec![StaffId::new("Staff1")]);
}

#[tokio::test]
async fn saturday_reduction_clamps_and_still_advances_version() {
    let coordinator = highs_coordinator();
    coordinator.solve_current().await.wait().await;

    let disposition =
        commit(&coordinator, r#"{"kind":"adjust_day_demand","day":"Sat","delta":-5}"#).await;
    assert_eq!(disposition, Disposition::Published(2));

    let snapshot = coordinator.snapshot();
    assert_eq!(snapshot.configuration.version(), 2);
    assert_eq!(snapshot.configuration.demand().get(Day::Sat), 0);
    assert_eq!(optimal_cost(&coordinator), dec!(320));
}

#[tokio::test]
async fn query_before_first_solve_reports_no_solve_yet() {
    let coordinator = highs_coordinator();
    let err = coordinator
        .submit(command(r#"{"kind":"query_assignment","day":"Wednesday"}"#))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Query(QueryError::NoSolveYet { version: 1 })));
    assert_eq!(coordinator.configuration().version(), 1);
}

#[tokio::test]
async fn resolving_unchanged_configuration_is_stable() {
    let coordinator = highs_coordinator();
    coordinator.solve_current().await.wait().await;
    let first = coordinator.snapshot().latest.unwrap();

    assert_eq!(coordinator.solve_current().await.wait().await, Disposition::Published(1));
    let second = coordinator.snapshot().latest.unwrap();

    assert_eq!(first.version, second.version);
    assert_eq!(first.result.total_cost(), second.result.total_cost());
}

#[tokio::test]
async fn rejected_edits_leave_configuration_untouched() {
    let coordinator = highs_coordinator();
    coordinator.solve_current().await.wait().await;

    let err = coordinator
        .submit(command(r#"{"kind":"set_staff_cost","staff_id":"Staff1","cost":-5}"#))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::InvalidValue { field: "cost", .. })
    ));

    let err = coordinator
        .execute(EditOperation::SetStaffCost {
            staff_id: StaffId::new("Nobody"),
            cost: dec!(10),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationError::UnknownStaff { .. })));

    let err = coordinator
        .submit(command(r#"{"kind":"set_day_demand","day":"Someday","value":1}"#))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationError::InvalidDay { .. })));

    let snapshot = coordinator.snapshot();
    assert_eq!(snapshot.configuration.version(), 1);
    assert_eq!(snapshot.phase, Phase::Published(1));
}

#[tokio::test]
async fn working_day_limits_can_make_the_week_infeasible() {
    let coordinator = highs_coordinator();
    coordinator.solve_current().await.wait().await;

    for id in ["Staff1", "Staff2", "Staff3"] {
        commit(
            &coordinator,
            &format!(
                r#"{{"kind":"set_staff_working_days","staff_id":"{id}","min_days":0,"max_days":1}}"#
            ),
        )
        .await;
    }

    let snapshot = coordinator.snapshot();
    assert_eq!(snapshot.configuration.version(), 4);
    assert_eq!(snapshot.phase, Phase::Published(4));
    assert_eq!(snapshot.current_result().unwrap().result, SolveResult::Infeasible);
    assert_eq!(snapshot.last_good.as_ref().map(|r| r.version), Some(3));
}

#[tokio::test]
async fn weekly_cap_shifts_work_to_other_staff() {
    let options = CoordinatorOptions {
        model: ModelOptions {
            max_days_per_week: Some(3),
        },
        ..CoordinatorOptions::default()
    };
    let coordinator = Coordinator::new(three_staff(), Arc::new(HiGHSSolver::new()), options);
    coordinator.solve_current().await.wait().await;

    // Six shifts, at most three each: Staff1 and Staff2 take three apiece.
    assert_eq!(optimal_cost(&coordinator), dec!(360));
}

/// Solve the coordinator's current configuration and check that the
/// published schedule covers demand, respects working-day limits and costs
/// exactly what it reports.
fn assert_schedule_consistent(coordinator: &Coordinator, cap: Option<u8>) {
    let snapshot = coordinator.snapshot();
    let config = &snapshot.configuration;
    let result = &snapshot.current_result().expect("current result").result;
    let SolveResult::Optimal {
        assignment,
        total_cost,
    } = result
    else {
        panic!("version {} not optimal: {result:?}", config.version());
    };

    assert!(assignment.covers(config), "version {} under-covered", config.version());
    assert_eq!(assignment.cost_under(config), *total_cost);
    for member in config.roster() {
        let worked = assignment.days_worked(member.id());
        let limits = member.working_days();
        assert!(
            (u32::from(limits.min())..=u32::from(limits.max())).contains(&worked),
            "{} works {worked} days outside {limits:?}",
            member.id()
        );
        if let Some(cap) = cap {
            assert!(worked <= u32::from(cap), "{} exceeds the weekly cap", member.id());
        }
    }
}

fn limited(id: &str, cost: rust_decimal::Decimal, min: i64, max: i64) -> rota::domain::StaffMember {
    staff(id, cost).with_working_days(WorkingDays::try_new(min, max).unwrap())
}

#[tokio::test]
async fn schedules_cover_demand_and_match_cost_across_configurations() {
    let fractional = Configuration::try_new(
        vec![
            staff("Staff1", dec!(50)),
            staff("Staff2", dec!(70.5)),
            staff("Staff3", dec!(90)),
        ],
        DemandVector::new([2, 0, 3, 1, 0, 2, 1]),
    )
    .unwrap();
    let binding = Configuration::try_new(
        vec![
            limited("A", dec!(10), 0, 2),
            limited("B", dec!(20), 4, 7),
            limited("C", dec!(35.5), 1, 7),
        ],
        DemandVector::new([2, 2, 1, 1, 1, 2, 2]),
    )
    .unwrap();
    let mixed = Configuration::try_new(
        vec![
            staff("W", dec!(12.25)),
            staff("X", dec!(30)),
            limited("Y", dec!(45.75), 2, 3),
            staff("Z", dec!(8)),
        ],
        DemandVector::new([3, 1, 2, 2, 3, 0, 1]),
    )
    .unwrap();
    let seed = Settings::default().configuration().unwrap();

    let cases = [
        (seed, None),
        (three_staff(), None),
        (fractional, None),
        (binding, None),
        (mixed.clone(), None),
        (three_staff(), Some(3)),
        (mixed, Some(4)),
    ];

    for (config, cap) in cases {
        let options = CoordinatorOptions {
            model: ModelOptions {
                max_days_per_week: cap,
            },
            ..CoordinatorOptions::default()
        };
        let coordinator = Coordinator::new(config, Arc::new(HiGHSSolver::new()), options);
        assert_eq!(coordinator.solve_current().await.wait().await, Disposition::Published(1));
        assert_schedule_consistent(&coordinator, cap);
    }
}

#[tokio::test]
async fn edited_versions_stay_consistent() {
    let coordinator = highs_coordinator();
    coordinator.solve_current().await.wait().await;
    assert_schedule_consistent(&coordinator, None);

    let edits = [
        r#"{"kind":"set_staff_cost","staff_id":"Staff1","cost":95.5}"#,
        r#"{"kind":"set_day_demand","day":"Sun","value":3}"#,
        r#"{"kind":"set_staff_working_days","staff_id":"Staff2","min_days":5,"max_days":6}"#,
        r#"{"kind":"adjust_day_demand","day":"Mon","delta":2}"#,
    ];
    for (i, edit) in edits.into_iter().enumerate() {
        let expected = i as u64 + 2;
        assert_eq!(commit(&coordinator, edit).await, Disposition::Published(expected));
        assert_schedule_consistent(&coordinator, None);
    }

    let snapshot = coordinator.snapshot();
    assert_eq!(snapshot.configuration.staff(&StaffId::new("Staff1")).unwrap().cost(), dec!(95.5));
}
