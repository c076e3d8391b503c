mod service_area;

pub use service_area::ServiceArea;
