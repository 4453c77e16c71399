mod suggestion_dto;

pub use suggestion_dto::{
    CreateSuggestionDto, ImplementSuggestionDto, ImplementationResultDto, SuggestionListItemDto,
    SuggestionResponseDto, UpdateSuggestionStatusDto,
};
