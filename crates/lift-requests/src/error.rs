use thiserror::Error;

use lift_core::{Floor, FloorRange, PersonId};

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("request parse error: {0}")]
    Parse(String),

    #[error("request {person}: floor {floor} outside serviced range {range}")]
    FloorOutOfRange {
        person: PersonId,
        floor:  Floor,
        range:  FloorRange,
    },

    #[error("request {person}: calling and destination floor are both {floor}")]
    SameFloor { person: PersonId, floor: Floor },

    #[error("duplicate person id {0} in request batch")]
    DuplicatePerson(PersonId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RequestResult<T> = Result<T, RequestError>;
