use crate::filter::{PositionFilter, PositionQuery};
use crate::model::{InstitutionPosition, InstitutionPosition2};
use eedm::EedmResult;
use eedm::paging::{Page, Paging};

/// Positions are read only.
pub trait InstitutionPositionService: Send + Sync + 'static {
    fn get_institution_positions(
        &self,
        paging: Paging,
        query: PositionQuery,
        bypass_cache: bool,
    ) -> impl Future<Output = EedmResult<Page<InstitutionPosition>>> + Send;

    fn get_institution_positions2(
        &self,
        paging: Paging,
        filter: PositionFilter,
        bypass_cache: bool,
    ) -> impl Future<Output = EedmResult<Page<InstitutionPosition>>> + Send;

    fn get_institution_positions3(
        &self,
        paging: Paging,
        filter: PositionFilter,
        bypass_cache: bool,
    ) -> impl Future<Output = EedmResult<Page<InstitutionPosition2>>> + Send;

    fn get_institution_position_by_guid(
        &self,
        guid: String,
        bypass_cache: bool,
    ) -> impl Future<Output = EedmResult<InstitutionPosition>> + Send;
    /// v11 shares the v7 representation.
    fn get_institution_position2_by_guid(
        &self,
        guid: String,
        bypass_cache: bool,
    ) -> impl Future<Output = EedmResult<InstitutionPosition>> + Send;

    fn get_institution_position3_by_guid(
        &self,
        guid: String,
        bypass_cache: bool,
    ) -> impl Future<Output = EedmResult<InstitutionPosition2>> + Send;
}
