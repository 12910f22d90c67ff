//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every write that touches more than one row
//! (an engagement record, its counter and its notification) is a single
//! repository call so the implementation can run it in one transaction.

use async_trait::async_trait;

use crate::entities::{Category, Comment, Favorite, Like, Message, Notification, Tag, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Pagination
// ============================================================================

/// Upper bound on page size
pub const MAX_PER_PAGE: u32 = 100;

/// Page-number pagination request (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    /// Clamp into range: page >= 1, per_page in 1..=100
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    #[inline]
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }

    #[inline]
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

/// One page of results plus the total row count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64) -> Self {
        Self { items, total }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by username (login)
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update profile fields
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Category / Tag Repositories
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Category>>;

    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Category>>;

    /// All categories, newest first
    async fn list_all(&self) -> RepoResult<Vec<Category>>;

    async fn create(&self, category: &Category) -> RepoResult<()>;
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Tag>>;

    /// Look up several tags at once; unknown ids are skipped
    async fn find_many(&self, ids: &[Snowflake]) -> RepoResult<Vec<Tag>>;

    /// All tags ordered by name
    async fn list_all(&self) -> RepoResult<Vec<Tag>>;

    async fn create(&self, tag: &Tag) -> RepoResult<()>;
}

// ============================================================================
// Message Repository
// ============================================================================

/// Narrowing for published-message listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageFilter {
    pub category_id: Option<Snowflake>,
    pub tag_id: Option<Snowflake>,
    pub author_id: Option<Snowflake>,
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find message by ID regardless of status
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Message>>;

    /// Published messages matching `filter`, newest `published_at` first
    async fn list_published(
        &self,
        filter: MessageFilter,
        page: PageRequest,
    ) -> RepoResult<Page<Message>>;

    /// Other published messages in the same category, newest first
    async fn list_related(&self, message: &Message, limit: i64) -> RepoResult<Vec<Message>>;

    /// Insert the message and its tag links
    async fn create(&self, message: &Message) -> RepoResult<()>;

    /// Update editable fields and replace the tag links
    async fn update(&self, message: &Message) -> RepoResult<()>;

    /// Delete the message; comments, likes, favorites, notifications and tag links go with it
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Atomically bump `views` and return the new value
    async fn increment_views(&self, id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// Comments on a message, newest first
    async fn list_by_message(
        &self,
        message_id: Snowflake,
        page: PageRequest,
    ) -> RepoResult<Page<Comment>>;

    /// Insert the comment, bump `comments_count` and store the notification, all or nothing
    async fn create(&self, comment: &Comment, notification: Option<&Notification>)
        -> RepoResult<()>;

    async fn update(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete the comment and decrement `comments_count` (never below zero)
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Engagement Repository
// ============================================================================

#[async_trait]
pub trait EngagementRepository: Send + Sync {
    /// Record a like, bump `likes` and store the notification in one transaction.
    ///
    /// Returns the new like count, or `DomainError::AlreadyLiked` without
    /// touching the counter when the pair already exists.
    async fn like(&self, like: &Like, notification: Option<&Notification>) -> RepoResult<i64>;

    /// Record a favorite. Returns `false` (and stores nothing) when it already exists.
    async fn favorite(
        &self,
        favorite: &Favorite,
        notification: Option<&Notification>,
    ) -> RepoResult<bool>;

    /// Remove a favorite. Returns whether a row was removed.
    async fn unfavorite(&self, user_id: Snowflake, message_id: Snowflake) -> RepoResult<bool>;

    async fn has_liked(&self, user_id: Snowflake, message_id: Snowflake) -> RepoResult<bool>;

    async fn has_favorited(&self, user_id: Snowflake, message_id: Snowflake) -> RepoResult<bool>;

    /// Published messages the user favorited, most recent favorite first
    async fn list_favorites(
        &self,
        user_id: Snowflake,
        page: PageRequest,
    ) -> RepoResult<Page<Message>>;

    /// Messages the user liked, most recent like first
    async fn list_likes(&self, user_id: Snowflake, page: PageRequest)
        -> RepoResult<Page<Message>>;
}

// ============================================================================
// Notification Repository
// ============================================================================

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// The recipient's notifications, newest first. Never changes read state.
    async fn list(
        &self,
        recipient_id: Snowflake,
        unread_only: bool,
        page: PageRequest,
    ) -> RepoResult<Page<Notification>>;

    /// Find a notification owned by `recipient_id`
    async fn find(&self, id: Snowflake, recipient_id: Snowflake)
        -> RepoResult<Option<Notification>>;

    async fn unread_count(&self, recipient_id: Snowflake) -> RepoResult<i64>;

    /// Flag one notification read; `NotificationNotFound` if it isn't the recipient's
    async fn mark_read(&self, id: Snowflake, recipient_id: Snowflake) -> RepoResult<()>;

    /// Flag every unread notification read; returns how many changed
    async fn mark_all_read(&self, recipient_id: Snowflake) -> RepoResult<u64>;

    async fn delete(&self, id: Snowflake, recipient_id: Snowflake) -> RepoResult<()>;

    /// Returns how many were removed
    async fn delete_all(&self, recipient_id: Snowflake) -> RepoResult<u64>;
}
