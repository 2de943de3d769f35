use thiserror::Error;

use crate::nav::SlideId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayListError {
    #[error("unknown slide variant: {0:?}")]
    UnknownVariant(String),

    #[error("slide {0} is not part of this play-list")]
    SlideNotFound(SlideId),
}

pub type Result<T> = std::result::Result<T, PlayListError>;
