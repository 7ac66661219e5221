mod media_dto;

pub use media_dto::{
    extension_from_mime_type, is_accepted_mime_type, AdminMediaDto, DeleteMediaResponseDto,
    MediaResponseDto, MediaWithContext, PublicMediaDto, UpdateMediaDto, UploadMediaDto,
    ACCEPTED_MIME_TYPES,
};
