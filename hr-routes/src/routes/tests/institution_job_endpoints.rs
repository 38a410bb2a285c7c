use super::{MockEthos, MockJobs, TestEngine, V8, V11, permissive_ethos, return_scenario};
use axum::http::header::ACCEPT;
use axum::http::{HeaderValue, StatusCode};
use chrono::NaiveDate;
use eedm::guid::NIL_GUID;
use eedm::paging::{Page, Paging};
use hr_core::filter::InstitutionJobFilter;
use hr_core::model::{
    GuidObject, InstitutionJobs, InstitutionJobs2, InstitutionJobs3, JobPreference, JobStatus,
};
use mockall::predicate;
use serde_json::{Value, json};

const GUID: &str = "0b9e7a3c-52f4-4d8e-a1b6-c7d8e9f0a1b2";

fn job(id: &str) -> InstitutionJobs3 {
    InstitutionJobs3 {
        id: id.to_owned(),
        person: GuidObject::new("p1"),
        employer: Some(GuidObject::new("org1")),
        position: GuidObject::new("pos1"),
        department: Some("MATH".to_owned()),
        start_on: NaiveDate::from_ymd_opt(2021, 1, 4).unwrap_or_default(),
        end_on: None,
        status: JobStatus::Active,
        classification: None,
        preference: Some(JobPreference::Primary),
        supervisors: Vec::new(),
        pay_class: Some(GuidObject::new("pc1")),
        grade: None,
        job_change_reason: None,
    }
}

fn error_message(body: Value) -> String {
    body["errors"][0]["message"].as_str().unwrap_or_default().to_owned()
}

#[tokio::test]
#[cfg_attr(miri, ignore)]
async fn update_fills_a_blank_body_guid_from_the_url_before_merging() {
    let mut merged = job(GUID);
    merged.status = JobStatus::Ended;
    merged.end_on = NaiveDate::from_ymd_opt(2024, 6, 30);

    let mut jobs = MockJobs::new();
    jobs.expect_get_institution_job3_by_guid()
        .with(predicate::eq(GUID.to_owned()), predicate::eq(true))
        .once()
        .returning(|_, _| return_scenario::ok(job(GUID)));
    jobs.expect_update_institution_job()
        .with(predicate::eq(merged.clone()))
        .once()
        .returning(|job| return_scenario::ok(job));

    let server = TestEngine::new(permissive_ethos())
        .with_institution_jobs(jobs)
        .into_server();

    let response = server
        .put(&format!("/institution-jobs/{GUID}"))
        .json(&json!({ "id": "", "status": "ended", "endOn": "2024-06-30" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&merged);
}

#[tokio::test]
#[cfg_attr(miri, ignore)]
async fn update_with_nil_guids_everywhere_is_rejected() {
    let server = TestEngine::new(MockEthos::new()).into_server();

    let response = server
        .put(&format!("/institution-jobs/{NIL_GUID}"))
        .json(&json!({ "id": NIL_GUID }))
        .await;

    response.assert_status_bad_request();
    assert_eq!("GUID must be specified.", error_message(response.json()));
}

#[tokio::test]
#[cfg_attr(miri, ignore)]
async fn update_of_an_unknown_job_creates_it() {
    let mut jobs = MockJobs::new();
    jobs.expect_get_institution_job3_by_guid()
        .once()
        .returning(|_, _| return_scenario::not_found());
    jobs.expect_create_institution_job()
        .with(predicate::eq(job(GUID)))
        .once()
        .returning(|job| return_scenario::ok(job));
    jobs.expect_update_institution_job().never();

    let server = TestEngine::new(permissive_ethos())
        .with_institution_jobs(jobs)
        .into_server();

    let response = server
        .put(&format!("/institution-jobs/{GUID}"))
        .json(&job(GUID))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
#[cfg_attr(miri, ignore)]
async fn create_job_returns_the_created_job() {
    let mut jobs = MockJobs::new();
    jobs.expect_create_institution_job()
        .with(predicate::eq(job(NIL_GUID)))
        .once()
        .returning(|_| return_scenario::ok(job(GUID)));

    let server = TestEngine::new(permissive_ethos())
        .with_institution_jobs(jobs)
        .into_server();

    let response = server.post("/institution-jobs").json(&job(NIL_GUID)).await;

    response.assert_status_ok();
    response.assert_json(&job(GUID));
}

#[tokio::test]
#[cfg_attr(miri, ignore)]
async fn create_job_with_a_body_missing_required_fields_is_a_bad_request() {
    let server = TestEngine::new(permissive_ethos()).into_server();

    let response = server
        .post("/institution-jobs")
        .json(&json!({ "id": NIL_GUID }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
#[cfg_attr(miri, ignore)]
async fn writes_with_older_versions_are_not_supported() {
    let server = TestEngine::new(MockEthos::new()).into_server();

    let post = server
        .post("/institution-jobs")
        .add_header(ACCEPT, HeaderValue::from_static(V8))
        .json(&job(NIL_GUID))
        .await;
    let put = server
        .put(&format!("/institution-jobs/{GUID}"))
        .add_header(ACCEPT, HeaderValue::from_static(V11))
        .json(&job(GUID))
        .await;

    post.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    put.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
#[cfg_attr(miri, ignore)]
async fn v8_list_filters_with_criteria() {
    let filter = InstitutionJobFilter {
        position: Some(GuidObject::new("pos1")),
        ..Default::default()
    };

    let mut jobs = MockJobs::new();
    jobs.expect_get_institution_jobs()
        .with(
            predicate::eq(Paging::new(0, 100)),
            predicate::eq(filter),
            predicate::eq(false),
        )
        .once()
        .returning(|_, _, _| {
            return_scenario::ok(Page::new(vec![InstitutionJobs::from(job(GUID))], 1))
        });

    let server = TestEngine::new(permissive_ethos())
        .with_institution_jobs(jobs)
        .into_server();

    let response = server
        .get("/institution-jobs")
        .add_header(ACCEPT, HeaderValue::from_static(V8))
        .add_query_param("criteria", r#"{"position":{"id":"pos1"}}"#)
        .await;

    response.assert_status_ok();
    assert_eq!(1, response.json::<Vec<Value>>().len());
    assert_eq!(V8, response.header("x-media-type"));
}

#[tokio::test]
#[cfg_attr(miri, ignore)]
async fn list_with_an_empty_criteria_value_is_empty() {
    let server = TestEngine::new(MockEthos::new()).into_server();

    let response = server
        .get("/institution-jobs")
        .add_query_param("criteria", r#"{"status":""}"#)
        .await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
#[cfg_attr(miri, ignore)]
async fn get_job_v11_uses_the_v11_representation() {
    let mut jobs = MockJobs::new();
    jobs.expect_get_institution_job2_by_guid()
        .with(predicate::eq(GUID.to_owned()))
        .once()
        .returning(|_| return_scenario::ok(InstitutionJobs2::from(job(GUID))));

    let server = TestEngine::new(permissive_ethos())
        .with_institution_jobs(jobs)
        .into_server();

    let response = server
        .get(&format!("/institution-jobs/{GUID}"))
        .add_header(ACCEPT, HeaderValue::from_static(V11))
        .await;

    response.assert_status_ok();
    assert_eq!(json!("pc1"), response.json::<Value>()["payClass"]["id"]);
}

#[tokio::test]
#[cfg_attr(miri, ignore)]
async fn delete_job_is_not_supported() {
    let server = TestEngine::new(MockEthos::new()).into_server();

    let response = server.delete(&format!("/institution-jobs/{GUID}")).await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
