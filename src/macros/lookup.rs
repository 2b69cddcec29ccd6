/// unwrap a store lookup inside a route.
/// a miss returns `Status::NotFound` from the route, any other error is
/// logged and returns `Status::InternalServerError`.
macro_rules! lookup_or_status {
    ( $data:expr, $target:expr, $type_str:expr) => {
        match $data {
            Ok(e) => e,
            Err(error) if error.is_not_found() => {
                debug!(target:$target, "{} not found. ({})", $type_str, error);
                return Err(Status::NotFound);
            }
            Err(error) => {
                error!(target:$target, "Error getting {}. (error: {})", $type_str, error);
                return Err(Status::InternalServerError);
            }
        }
    }
}

pub(crate) use lookup_or_status;
