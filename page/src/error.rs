use heartbeat_types::FormatError;
use thiserror::Error;

use crate::Slot;

#[derive(Debug, Error, PartialEq)]
pub enum PageError {
    #[error("unknown display slot `{0}`")]
    UnknownSlot(String),

    #[error("cannot format value for `{slot}`: {source}")]
    Format {
        slot: Slot,
        #[source]
        source: FormatError,
    },
}
