use super::{Store, convert_page, matches, matches_opt, wire_name};
use chrono::NaiveDate;
use eedm::EedmResult;
use eedm::paging::{Page, Paging};
use hr_core::filter::{PositionFilter, PositionQuery};
use hr_core::model::{InstitutionPosition, InstitutionPosition2};
use hr_core::service::InstitutionPositionService;

pub struct MemoryInstitutionPositions {
    store: Store<InstitutionPosition2>,
}

impl MemoryInstitutionPositions {
    pub fn new(positions: impl IntoIterator<Item = InstitutionPosition2>) -> Self {
        Self {
            store: Store::new("institution-positions", positions),
        }
    }

    async fn filtered(&self, paging: Paging, filter: &PositionFilter) -> Page<InstitutionPosition2> {
        self.store
            .page(paging, |position| matches_filter(position, filter))
            .await
    }
}

impl Default for MemoryInstitutionPositions {
    fn default() -> Self {
        Self::new([])
    }
}

fn matches_query(position: &InstitutionPosition2, query: &PositionQuery) -> bool {
    let equals = |filter: &Option<String>, value: Option<&str>| {
        filter
            .as_deref()
            .filter(|filter| !filter.is_empty())
            .is_none_or(|filter| value == Some(filter))
    };
    let date = |filter: &Option<String>, value: Option<NaiveDate>| {
        filter
            .as_deref()
            .filter(|filter| !filter.is_empty())
            .is_none_or(|filter| filter.parse::<NaiveDate>().ok() == value)
    };

    equals(&query.campus, Some(position.campus.id.as_str()))
        && equals(&query.status, wire_name(&position.status).as_deref())
        && equals(
            &query.bargaining_unit,
            position.bargaining_unit.as_ref().map(|unit| unit.id.as_str()),
        )
        && query
            .reports_to_position
            .as_deref()
            .filter(|filter| !filter.is_empty())
            .is_none_or(|filter| {
                position
                    .reports_to
                    .iter()
                    .any(|reports_to| reports_to.position.id == filter)
            })
        && equals(
            &query.exemption_type,
            position.exemption_type.and_then(|kind| wire_name(&kind)).as_deref(),
        )
        && equals(
            &query.compensation_type,
            position.compensation_type.and_then(|kind| wire_name(&kind)).as_deref(),
        )
        && date(&query.start_on, Some(position.start_on))
        && date(&query.end_on, position.end_on)
}

fn matches_filter(position: &InstitutionPosition2, filter: &PositionFilter) -> bool {
    // every listed supervisor position has to be present
    let reports_to = filter.reports_to.as_deref().unwrap_or_default().iter().all(|wanted| {
        position
            .reports_to
            .iter()
            .any(|reports_to| reports_to.position == wanted.position)
    });

    reports_to
        && matches(filter.campus.as_ref(), &position.campus)
        && matches(filter.status.as_ref(), &position.status)
        && matches_opt(filter.bargaining_unit.as_ref(), position.bargaining_unit.as_ref())
        && matches_opt(filter.exemption_type.as_ref(), position.exemption_type.as_ref())
        && filter.compensation.as_ref().is_none_or(|compensation| {
            matches_opt(
                compensation.compensation_type.as_ref(),
                position.compensation_type.as_ref(),
            )
        })
        && matches(filter.start_on.as_ref(), &position.start_on)
        && matches_opt(filter.end_on.as_ref(), position.end_on.as_ref())
}

impl InstitutionPositionService for MemoryInstitutionPositions {
    async fn get_institution_positions(
        &self,
        paging: Paging,
        query: PositionQuery,
        _bypass_cache: bool,
    ) -> EedmResult<Page<InstitutionPosition>> {
        let page = self
            .store
            .page(paging, |position| matches_query(position, &query))
            .await;
        Ok(convert_page(page))
    }

    async fn get_institution_positions2(
        &self,
        paging: Paging,
        filter: PositionFilter,
        _bypass_cache: bool,
    ) -> EedmResult<Page<InstitutionPosition>> {
        Ok(convert_page(self.filtered(paging, &filter).await))
    }

    async fn get_institution_positions3(
        &self,
        paging: Paging,
        filter: PositionFilter,
        _bypass_cache: bool,
    ) -> EedmResult<Page<InstitutionPosition2>> {
        Ok(self.filtered(paging, &filter).await)
    }

    async fn get_institution_position_by_guid(
        &self,
        guid: String,
        _bypass_cache: bool,
    ) -> EedmResult<InstitutionPosition> {
        self.store.get(&guid).await.map(InstitutionPosition::from)
    }

    async fn get_institution_position2_by_guid(
        &self,
        guid: String,
        bypass_cache: bool,
    ) -> EedmResult<InstitutionPosition> {
        self.get_institution_position_by_guid(guid, bypass_cache).await
    }

    async fn get_institution_position3_by_guid(
        &self,
        guid: String,
        _bypass_cache: bool,
    ) -> EedmResult<InstitutionPosition2> {
        self.store.get(&guid).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::seed;
    use hr_core::filter::{CompensationFilter, ReportsToFilter};
    use hr_core::model::{CompensationType, GuidObject};
    use rstest::rstest;

    const REGISTRAR: &str = "0190a1c2-3b4d-7e5f-8a6b-000000000101";
    const CLERK: &str = "0190a1c2-3b4d-7e5f-8a6b-000000000102";

    fn positions() -> MemoryInstitutionPositions {
        MemoryInstitutionPositions::new(seed::positions())
    }

    fn ids<T: eedm::ethos::EedmResource>(page: &Page<T>) -> Vec<&str> {
        page.items.iter().map(|item| item.guid()).collect()
    }

    #[rstest]
    #[case(PositionQuery { status: Some("active".into()), ..Default::default() }, vec![REGISTRAR, CLERK])]
    #[case(PositionQuery { reports_to_position: Some(REGISTRAR.into()), ..Default::default() }, vec![CLERK])]
    #[case(PositionQuery { exemption_type: Some("nonExempt".into()), ..Default::default() }, vec![CLERK])]
    #[case(PositionQuery { start_on: Some("2015-07-01".into()), compensation_type: Some("salary".into()), ..Default::default() }, vec![REGISTRAR, "0190a1c2-3b4d-7e5f-8a6b-000000000103"])]
    #[tokio::test]
    async fn v7_query_parameters_filter(#[case] query: PositionQuery, #[case] expected: Vec<&str>) {
        let page = positions()
            .get_institution_positions(Paging::new(0, 10), query, false)
            .await
            .unwrap();

        assert_eq!(expected, ids(&page));
    }

    #[tokio::test]
    async fn criteria_match_nested_values() {
        let filter = PositionFilter {
            reports_to: Some(vec![ReportsToFilter {
                position: GuidObject::new(REGISTRAR),
            }]),
            compensation: Some(CompensationFilter {
                compensation_type: Some(CompensationType::Wages),
            }),
            ..Default::default()
        };

        let page = positions()
            .get_institution_positions3(Paging::new(0, 10), filter, false)
            .await
            .unwrap();

        assert_eq!(vec![CLERK], ids(&page));
    }

    #[tokio::test]
    async fn v11_get_drops_departments() {
        let position = positions()
            .get_institution_position2_by_guid(CLERK.into(), false)
            .await
            .unwrap();

        let body = serde_json::to_value(&position).unwrap();
        assert!(body.get("departments").is_none());
        assert_eq!("Records Clerk", position.title);
    }
}
