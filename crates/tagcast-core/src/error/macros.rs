//! Error macros for tagcast

/// Return early with an `InvalidArgument` error
#[macro_export]
macro_rules! bail_invalid {
    ($msg:expr) => {
        return Err($crate::error::TagcastError::InvalidArgument(
            $msg.to_string(),
        ))
    };
    ($fmt:expr, $($arg:tt)+) => {
        return Err($crate::error::TagcastError::InvalidArgument(format!(
            $fmt, $($arg)+
        )))
    };
}
