mod service_area_handler;

pub use service_area_handler::*;
