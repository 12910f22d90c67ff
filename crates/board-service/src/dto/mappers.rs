//! Entity to DTO mappers

use board_core::entities::{Category, Comment, Message, Notification, Tag, User};

use super::responses::{
    AuthorResponse, CategoryResponse, CommentResponse, CurrentUserResponse, MessageResponse,
    NotificationResponse, TagResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            bio: user.bio.clone(),
            website: user.website.clone(),
            avatar: user.avatar.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            bio: user.bio.clone(),
            website: user.website.clone(),
            avatar: user.avatar.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<&User> for AuthorResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

// ============================================================================
// Category / Tag Mappers
// ============================================================================

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name,
            slug: category.slug,
            created_at: category.created_at,
        }
    }
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.to_string(),
            name: tag.name,
            slug: tag.slug,
        }
    }
}

// ============================================================================
// Message Mappers
// ============================================================================

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.to_string(),
            author_id: message.author_id.to_string(),
            category_id: message.category_id.to_string(),
            title: message.title,
            slug: message.slug,
            body: message.body,
            image: message.image,
            status: message.status,
            tag_ids: message.tag_ids.iter().map(ToString::to_string).collect(),
            views: message.views,
            likes: message.likes,
            comments_count: message.comments_count,
            created_at: message.created_at,
            updated_at: message.updated_at,
            published_at: message.published_at,
        }
    }
}

// ============================================================================
// Comment / Notification Mappers
// ============================================================================

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            message_id: comment.message_id.to_string(),
            author_id: comment.author_id.to_string(),
            content: comment.content,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            actor_id: notification.actor_id.to_string(),
            verb: notification.verb,
            message_id: notification.message_id.map(|id| id.to_string()),
            content: notification.content,
            is_read: notification.is_read,
            created_at: notification.created_at,
        }
    }
}
