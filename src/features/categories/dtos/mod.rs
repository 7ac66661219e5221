mod category_dto;

pub use category_dto::{
    AdminCategoryDto, CategoryResponseDto, CategoryWithEventCount, CreateCategoryDto,
    DeleteCategoryResponseDto, PublicCategoryDto, UpdateCategoryDto,
};
