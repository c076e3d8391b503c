mod service_area_dto;

pub use service_area_dto::{
    CreateServiceAreaDto, PatchServiceAreaDto, ServiceAreaResponseDto, UpdateServiceAreaDto,
};
