mod event_dto;

pub use event_dto::{
    AdminEventDto, CreateEventDto, DeleteEventResponseDto, EventDetailDto, EventResponseDto,
    EventWithContext, PublicEventDto, UpdateEventDto,
};
