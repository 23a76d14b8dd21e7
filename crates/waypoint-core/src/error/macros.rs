//! Error macros for waypoint

/// Macro for returning an unknown node error
#[macro_export]
macro_rules! bail_unknown_node {
    ($id:expr) => {
        return Err($crate::error::GraphError::UnknownNode { id: $id })
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}
