mod service_area_service;

pub use service_area_service::ServiceAreaService;
