pub use self::{
    paginated::Paginated,
    query_response::{AbciQueryBody, AbciQueryResponse, AbciQueryResult},
    stake::{StakePositionEntry, StakeSummary, StakeTotal},
};

mod paginated;
mod query_response;
mod stake;
