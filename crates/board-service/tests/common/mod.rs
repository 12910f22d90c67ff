//! In-memory repositories for exercising services without PostgreSQL
//!
//! One store implements every repository trait so that engagement writes can
//! move message counters the way the SQL implementation does.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use board_common::auth::JwtService;
use board_core::{
    Category, CategoryRepository, Comment, CommentRepository, DomainError, EngagementRepository,
    Favorite, Like, Message, MessageFilter, MessageRepository, Notification,
    NotificationRepository, Page, PageRequest, RepoResult, Snowflake, SnowflakeGenerator, Tag,
    TagRepository, User, UserRepository,
};
use board_service::ServiceContext;

#[derive(Default)]
struct State {
    users: HashMap<Snowflake, (User, String)>,
    categories: Vec<Category>,
    tags: Vec<Tag>,
    messages: HashMap<Snowflake, Message>,
    comments: Vec<Comment>,
    likes: Vec<Like>,
    favorites: Vec<Favorite>,
    notifications: Vec<Notification>,
}

#[derive(Default)]
pub struct InMemoryBoard {
    state: Mutex<State>,
}

impl InMemoryBoard {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn message(&self, id: Snowflake) -> Option<Message> {
        self.state().messages.get(&id).cloned()
    }

    pub fn live_comment_count(&self, message_id: Snowflake) -> i64 {
        self.state()
            .comments
            .iter()
            .filter(|c| c.message_id == message_id)
            .count() as i64
    }

    pub fn favorite_count(&self, message_id: Snowflake) -> usize {
        self.state()
            .favorites
            .iter()
            .filter(|f| f.message_id == message_id)
            .count()
    }

    pub fn like_count(&self, message_id: Snowflake) -> usize {
        self.state()
            .likes
            .iter()
            .filter(|l| l.message_id == message_id)
            .count()
    }

    pub fn notifications_for(&self, recipient_id: Snowflake) -> Vec<Notification> {
        self.state()
            .notifications
            .iter()
            .filter(|n| n.recipient_id == recipient_id)
            .cloned()
            .collect()
    }

    pub fn notifications_about(&self, message_id: Snowflake) -> usize {
        self.state()
            .notifications
            .iter()
            .filter(|n| n.message_id == Some(message_id))
            .count()
    }
}

fn paginate<T>(items: Vec<T>, page: PageRequest) -> Page<T> {
    let total = items.len() as i64;
    let items = items
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .collect();
    Page::new(items, total)
}

fn newest_published_first(messages: &mut [Message]) {
    messages.sort_by(|a, b| b.published_at.cmp(&a.published_at).then(b.id.cmp(&a.id)));
}

#[async_trait]
impl UserRepository for InMemoryBoard {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.state().users.get(&id).map(|(u, _)| u.clone()))
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .state()
            .users
            .values()
            .find(|(u, _)| u.username == username)
            .map(|(u, _)| u.clone()))
    }

    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        Ok(self.state().users.values().any(|(u, _)| u.username == username))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self
            .state()
            .users
            .values()
            .any(|(u, _)| u.email.eq_ignore_ascii_case(email)))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut state = self.state();
        if state.users.values().any(|(u, _)| u.username == user.username) {
            return Err(DomainError::UsernameAlreadyExists);
        }
        state
            .users
            .insert(user.id, (user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn update(&self, user: &User) -> RepoResult<()> {
        match self.state().users.get_mut(&user.id) {
            Some((stored, _)) => {
                *stored = user.clone();
                Ok(())
            }
            None => Err(DomainError::UserNotFound(user.id)),
        }
    }

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        Ok(self.state().users.get(&id).map(|(_, h)| h.clone()))
    }
}

#[async_trait]
impl CategoryRepository for InMemoryBoard {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Category>> {
        Ok(self.state().categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Category>> {
        Ok(self.state().categories.iter().find(|c| c.slug == slug).cloned())
    }

    async fn list_all(&self) -> RepoResult<Vec<Category>> {
        Ok(self.state().categories.iter().rev().cloned().collect())
    }

    async fn create(&self, category: &Category) -> RepoResult<()> {
        let mut state = self.state();
        if state
            .categories
            .iter()
            .any(|c| c.slug == category.slug || c.name == category.name)
        {
            return Err(DomainError::CategoryAlreadyExists);
        }
        state.categories.push(category.clone());
        Ok(())
    }
}

#[async_trait]
impl TagRepository for InMemoryBoard {
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Tag>> {
        Ok(self.state().tags.iter().find(|t| t.slug == slug).cloned())
    }

    async fn find_many(&self, ids: &[Snowflake]) -> RepoResult<Vec<Tag>> {
        Ok(self
            .state()
            .tags
            .iter()
            .filter(|t| ids.contains(&t.id))
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> RepoResult<Vec<Tag>> {
        let mut tags = self.state().tags.clone();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }

    async fn create(&self, tag: &Tag) -> RepoResult<()> {
        let mut state = self.state();
        if state.tags.iter().any(|t| t.slug == tag.slug || t.name == tag.name) {
            return Err(DomainError::TagAlreadyExists);
        }
        state.tags.push(tag.clone());
        Ok(())
    }
}

#[async_trait]
impl MessageRepository for InMemoryBoard {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Message>> {
        Ok(self.state().messages.get(&id).cloned())
    }

    async fn list_published(
        &self,
        filter: MessageFilter,
        page: PageRequest,
    ) -> RepoResult<Page<Message>> {
        let mut messages: Vec<Message> = self
            .state()
            .messages
            .values()
            .filter(|m| m.is_published())
            .filter(|m| filter.category_id.map_or(true, |id| m.category_id == id))
            .filter(|m| filter.author_id.map_or(true, |id| m.author_id == id))
            .filter(|m| filter.tag_id.map_or(true, |id| m.tag_ids.contains(&id)))
            .cloned()
            .collect();
        newest_published_first(&mut messages);
        Ok(paginate(messages, page))
    }

    async fn list_related(&self, message: &Message, limit: i64) -> RepoResult<Vec<Message>> {
        let mut related: Vec<Message> = self
            .state()
            .messages
            .values()
            .filter(|m| m.is_published() && m.category_id == message.category_id && m.id != message.id)
            .cloned()
            .collect();
        newest_published_first(&mut related);
        related.truncate(limit as usize);
        Ok(related)
    }

    async fn create(&self, message: &Message) -> RepoResult<()> {
        let mut state = self.state();
        if !state.categories.iter().any(|c| c.id == message.category_id) {
            return Err(DomainError::CategoryNotFound(message.category_id.to_string()));
        }
        state.messages.insert(message.id, message.clone());
        Ok(())
    }

    async fn update(&self, message: &Message) -> RepoResult<()> {
        match self.state().messages.get_mut(&message.id) {
            Some(stored) => {
                // counters belong to the engagement writes
                let (views, likes, comments_count) =
                    (stored.views, stored.likes, stored.comments_count);
                *stored = Message {
                    views,
                    likes,
                    comments_count,
                    ..message.clone()
                };
                Ok(())
            }
            None => Err(DomainError::MessageNotFound(message.id)),
        }
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut state = self.state();
        if state.messages.remove(&id).is_none() {
            return Err(DomainError::MessageNotFound(id));
        }
        state.comments.retain(|c| c.message_id != id);
        state.likes.retain(|l| l.message_id != id);
        state.favorites.retain(|f| f.message_id != id);
        state.notifications.retain(|n| n.message_id != Some(id));
        Ok(())
    }

    async fn increment_views(&self, id: Snowflake) -> RepoResult<i64> {
        match self.state().messages.get_mut(&id) {
            Some(m) if m.is_published() => {
                m.views += 1;
                Ok(m.views)
            }
            _ => Err(DomainError::MessageNotFound(id)),
        }
    }
}

#[async_trait]
impl CommentRepository for InMemoryBoard {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        Ok(self.state().comments.iter().find(|c| c.id == id).cloned())
    }

    async fn list_by_message(
        &self,
        message_id: Snowflake,
        page: PageRequest,
    ) -> RepoResult<Page<Comment>> {
        let comments: Vec<Comment> = self
            .state()
            .comments
            .iter()
            .rev()
            .filter(|c| c.message_id == message_id)
            .cloned()
            .collect();
        Ok(paginate(comments, page))
    }

    async fn create(&self, comment: &Comment, notification: Option<&Notification>) -> RepoResult<()> {
        let mut state = self.state();
        let Some(message) = state.messages.get_mut(&comment.message_id) else {
            return Err(DomainError::MessageNotFound(comment.message_id));
        };
        message.comments_count += 1;
        state.comments.push(comment.clone());
        state.notifications.extend(notification.cloned());
        Ok(())
    }

    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        let mut state = self.state();
        match state.comments.iter_mut().find(|c| c.id == comment.id) {
            Some(stored) => {
                *stored = comment.clone();
                Ok(())
            }
            None => Err(DomainError::CommentNotFound(comment.id)),
        }
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut state = self.state();
        let Some(pos) = state.comments.iter().position(|c| c.id == id) else {
            return Err(DomainError::CommentNotFound(id));
        };
        let comment = state.comments.remove(pos);
        if let Some(message) = state.messages.get_mut(&comment.message_id) {
            message.comments_count = (message.comments_count - 1).max(0);
        }
        Ok(())
    }
}

#[async_trait]
impl EngagementRepository for InMemoryBoard {
    async fn like(&self, like: &Like, notification: Option<&Notification>) -> RepoResult<i64> {
        let mut state = self.state();
        if state
            .likes
            .iter()
            .any(|l| l.user_id == like.user_id && l.message_id == like.message_id)
        {
            return Err(DomainError::AlreadyLiked);
        }
        let Some(message) = state.messages.get_mut(&like.message_id) else {
            return Err(DomainError::MessageNotFound(like.message_id));
        };
        message.likes += 1;
        let likes = message.likes;
        state.likes.push(like.clone());
        state.notifications.extend(notification.cloned());
        Ok(likes)
    }

    async fn favorite(
        &self,
        favorite: &Favorite,
        notification: Option<&Notification>,
    ) -> RepoResult<bool> {
        let mut state = self.state();
        if state
            .favorites
            .iter()
            .any(|f| f.user_id == favorite.user_id && f.message_id == favorite.message_id)
        {
            return Ok(false);
        }
        state.favorites.push(favorite.clone());
        state.notifications.extend(notification.cloned());
        Ok(true)
    }

    async fn unfavorite(&self, user_id: Snowflake, message_id: Snowflake) -> RepoResult<bool> {
        let mut state = self.state();
        let before = state.favorites.len();
        state
            .favorites
            .retain(|f| !(f.user_id == user_id && f.message_id == message_id));
        Ok(state.favorites.len() < before)
    }

    async fn has_liked(&self, user_id: Snowflake, message_id: Snowflake) -> RepoResult<bool> {
        Ok(self
            .state()
            .likes
            .iter()
            .any(|l| l.user_id == user_id && l.message_id == message_id))
    }

    async fn has_favorited(&self, user_id: Snowflake, message_id: Snowflake) -> RepoResult<bool> {
        Ok(self
            .state()
            .favorites
            .iter()
            .any(|f| f.user_id == user_id && f.message_id == message_id))
    }

    async fn list_favorites(
        &self,
        user_id: Snowflake,
        page: PageRequest,
    ) -> RepoResult<Page<Message>> {
        let state = self.state();
        let messages: Vec<Message> = state
            .favorites
            .iter()
            .rev()
            .filter(|f| f.user_id == user_id)
            .filter_map(|f| state.messages.get(&f.message_id))
            .filter(|m| m.is_published())
            .cloned()
            .collect();
        Ok(paginate(messages, page))
    }

    async fn list_likes(&self, user_id: Snowflake, page: PageRequest) -> RepoResult<Page<Message>> {
        let state = self.state();
        let messages: Vec<Message> = state
            .likes
            .iter()
            .rev()
            .filter(|l| l.user_id == user_id)
            .filter_map(|l| state.messages.get(&l.message_id))
            .filter(|m| m.is_published())
            .cloned()
            .collect();
        Ok(paginate(messages, page))
    }
}

#[async_trait]
impl NotificationRepository for InMemoryBoard {
    async fn list(
        &self,
        recipient_id: Snowflake,
        unread_only: bool,
        page: PageRequest,
    ) -> RepoResult<Page<Notification>> {
        let notifications: Vec<Notification> = self
            .state()
            .notifications
            .iter()
            .rev()
            .filter(|n| n.recipient_id == recipient_id && (!unread_only || !n.is_read))
            .cloned()
            .collect();
        Ok(paginate(notifications, page))
    }

    async fn find(&self, id: Snowflake, recipient_id: Snowflake) -> RepoResult<Option<Notification>> {
        Ok(self
            .state()
            .notifications
            .iter()
            .find(|n| n.id == id && n.recipient_id == recipient_id)
            .cloned())
    }

    async fn unread_count(&self, recipient_id: Snowflake) -> RepoResult<i64> {
        Ok(self
            .state()
            .notifications
            .iter()
            .filter(|n| n.recipient_id == recipient_id && !n.is_read)
            .count() as i64)
    }

    async fn mark_read(&self, id: Snowflake, recipient_id: Snowflake) -> RepoResult<()> {
        let mut state = self.state();
        match state
            .notifications
            .iter_mut()
            .find(|n| n.id == id && n.recipient_id == recipient_id)
        {
            Some(n) => {
                n.mark_read();
                Ok(())
            }
            None => Err(DomainError::NotificationNotFound(id)),
        }
    }

    async fn mark_all_read(&self, recipient_id: Snowflake) -> RepoResult<u64> {
        let mut state = self.state();
        let mut updated = 0;
        for n in state
            .notifications
            .iter_mut()
            .filter(|n| n.recipient_id == recipient_id && !n.is_read)
        {
            n.mark_read();
            updated += 1;
        }
        Ok(updated)
    }

    async fn delete(&self, id: Snowflake, recipient_id: Snowflake) -> RepoResult<()> {
        let mut state = self.state();
        let before = state.notifications.len();
        state
            .notifications
            .retain(|n| !(n.id == id && n.recipient_id == recipient_id));
        if state.notifications.len() == before {
            return Err(DomainError::NotificationNotFound(id));
        }
        Ok(())
    }

    async fn delete_all(&self, recipient_id: Snowflake) -> RepoResult<u64> {
        let mut state = self.state();
        let before = state.notifications.len();
        state.notifications.retain(|n| n.recipient_id != recipient_id);
        Ok((before - state.notifications.len()) as u64)
    }
}

pub const TEST_JWT_SECRET: &str = "service-test-secret-that-is-long-enough";

/// A context wired to one in-memory store
pub fn context(store: &Arc<InMemoryBoard>) -> ServiceContext {
    ServiceContext::builder()
        .user_repo(store.clone())
        .category_repo(store.clone())
        .tag_repo(store.clone())
        .message_repo(store.clone())
        .comment_repo(store.clone())
        .engagement_repo(store.clone())
        .notification_repo(store.clone())
        .jwt_service(Arc::new(JwtService::new(TEST_JWT_SECRET, 900, 3600)))
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(1)))
        .build()
        .unwrap()
}

/// Store a user directly, skipping password hashing
pub async fn seed_user(ctx: &ServiceContext, username: &str) -> User {
    let user = User::new(
        ctx.generate_id(),
        username.to_string(),
        format!("{username}@example.com"),
    );
    ctx.user_repo().create(&user, "unused").await.unwrap();
    user
}

pub async fn seed_category(ctx: &ServiceContext, name: &str) -> Category {
    let category = Category::new(ctx.generate_id(), name.to_string(), None);
    ctx.category_repo().create(&category).await.unwrap();
    category
}

pub async fn seed_tag(ctx: &ServiceContext, name: &str) -> Tag {
    let tag = Tag::new(ctx.generate_id(), name.to_string(), None);
    ctx.tag_repo().create(&tag).await.unwrap();
    tag
}
