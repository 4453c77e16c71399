mod member_dto;

pub use member_dto::{
    CreateMemberDto, MemberResponseDto, MemberWithCooperativeDto, UpdateMemberDto,
    UpdateMemberStatusDto,
};
