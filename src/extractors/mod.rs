//! Request extractors that report rejections as `AppError` (422, or 415/413 for body transport errors).

mod payload;
pub use payload::{EntityId, Payload};
