//! Code tables and positions the binary starts with.

use chrono::NaiveDate;
use hr_core::model::{
    CompensationType, EarningTypes, EarningsClassification, ExemptionType, GuidObject,
    InstitutionPosition2, LeaveTypes, PayClassClassification, PayClassStatus, PayClasses2,
    PositionStatus, ReportsTo, ReportsToType,
};

const MAIN_CAMPUS: &str = "0190a1c2-3b4d-7e5f-8a6b-000000000001";
const BIWEEKLY: &str = "0190a1c2-3b4d-7e5f-8a6b-000000000002";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub(super) fn positions() -> Vec<InstitutionPosition2> {
    let position = |id: &str, code: &str, title: &str, status: PositionStatus| InstitutionPosition2 {
        id: id.to_owned(),
        campus: GuidObject::new(MAIN_CAMPUS),
        title: title.to_owned(),
        code: Some(code.to_owned()),
        status,
        bargaining_unit: None,
        reports_to: Vec::new(),
        exemption_type: Some(ExemptionType::Exempt),
        compensation_type: Some(CompensationType::Salary),
        start_on: date(2015, 7, 1),
        end_on: None,
        departments: Vec::new(),
    };

    let registrar = position(
        "0190a1c2-3b4d-7e5f-8a6b-000000000101",
        "REGISTRAR",
        "University Registrar",
        PositionStatus::Active,
    );
    let clerk = InstitutionPosition2 {
        exemption_type: Some(ExemptionType::NonExempt),
        compensation_type: Some(CompensationType::Wages),
        reports_to: vec![ReportsTo {
            position: GuidObject::new(&registrar.id),
            reports_to_type: ReportsToType::Primary,
        }],
        ..position(
            "0190a1c2-3b4d-7e5f-8a6b-000000000102",
            "RECCLERK",
            "Records Clerk",
            PositionStatus::Active,
        )
    };
    let archivist = InstitutionPosition2 {
        end_on: Some(date(2023, 6, 30)),
        ..position(
            "0190a1c2-3b4d-7e5f-8a6b-000000000103",
            "ARCHIVIST",
            "Records Archivist",
            PositionStatus::Frozen,
        )
    };

    vec![registrar, clerk, archivist]
}

pub(super) fn earning_types() -> Vec<EarningTypes> {
    let earning_type = |id: &str, code: &str, title: &str, classification| EarningTypes {
        id: id.to_owned(),
        code: code.to_owned(),
        title: title.to_owned(),
        description: None,
        classification: Some(classification),
    };

    vec![
        earning_type(
            "0190a1c2-3b4d-7e5f-8a6b-000000000201",
            "REG",
            "Regular Salary",
            EarningsClassification::Salary,
        ),
        earning_type(
            "0190a1c2-3b4d-7e5f-8a6b-000000000202",
            "HRLY",
            "Hourly Wages",
            EarningsClassification::Wages,
        ),
        earning_type(
            "0190a1c2-3b4d-7e5f-8a6b-000000000203",
            "OVT",
            "Overtime",
            EarningsClassification::Overtime,
        ),
        earning_type(
            "0190a1c2-3b4d-7e5f-8a6b-000000000204",
            "VAC",
            "Vacation Pay",
            EarningsClassification::Leave,
        ),
    ]
}

pub(super) fn leave_types() -> Vec<LeaveTypes> {
    let leave_type = |id: &str, code: &str, title: &str| LeaveTypes {
        id: id.to_owned(),
        code: code.to_owned(),
        title: title.to_owned(),
        description: None,
    };

    vec![
        leave_type("0190a1c2-3b4d-7e5f-8a6b-000000000301", "VAC", "Vacation"),
        leave_type("0190a1c2-3b4d-7e5f-8a6b-000000000302", "SICK", "Sick Leave"),
        leave_type("0190a1c2-3b4d-7e5f-8a6b-000000000303", "PERS", "Personal Leave"),
    ]
}

pub(super) fn pay_classes() -> Vec<PayClasses2> {
    let pay_class = |id: &str, code: &str, title: &str, classification| PayClasses2 {
        id: id.to_owned(),
        code: code.to_owned(),
        title: title.to_owned(),
        description: None,
        status: Some(PayClassStatus::Active),
        pay_frequency: Some(GuidObject::new(BIWEEKLY)),
        classification: Some(classification),
    };

    vec![
        pay_class(
            "0190a1c2-3b4d-7e5f-8a6b-000000000401",
            "EXEMPT",
            "Exempt Staff",
            PayClassClassification::Salary,
        ),
        pay_class(
            "0190a1c2-3b4d-7e5f-8a6b-000000000402",
            "HOURLY",
            "Hourly Staff",
            PayClassClassification::Wages,
        ),
    ]
}
