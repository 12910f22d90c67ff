//! Entity <-> model mappers
//!
//! `From<Model> for Entity` conversions used after every query.

mod category;
mod comment;
mod message;
mod notification;
mod tag;
mod user;

pub use message::tag_ids_to_i64;
