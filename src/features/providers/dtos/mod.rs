mod provider_dto;

pub use provider_dto::{
    CreateProviderDto, GetTokenDto, PatchProviderDto, ProviderResponseDto, TokenResponseDto,
    UpdateProviderDto,
};
