//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CategoryRepository, CommentRepository, EngagementRepository, MessageFilter, MessageRepository,
    NotificationRepository, MAX_PER_PAGE, Page, PageRequest, RepoResult, TagRepository, UserRepository,
};
