use crate::error::MojipadError;

pub type MojipadResult<T> = Result<T, MojipadError>;
