use async_trait::async_trait;
use mongodb::{
  bson::doc,
  options::{ClientOptions, FindOptions, ReplaceOptions},
  Collection,
};
use crate::{env, error::BotError};

pub mod models;

use models::{Award, ChatUser};

pub type Mongo = mongodb::Client;
pub type MongoError = mongodb::error::Error;

/// Persistence seam of the game. Backed by Mongo in production and by an
/// in-memory fake in tests.
#[async_trait]
pub trait ChatUserStore: Send + Sync {
  async fn find(&self, chat_id: i64, user_id: i64) -> Result<Option<ChatUser>, BotError>;

  /// All participants of the chat that are currently in the game.
  async fn active_participants(&self, chat_id: i64) -> Result<Vec<ChatUser>, BotError>;

  /// The participant who won `award` within the current day, if any.
  async fn active_winner(&self, chat_id: i64, award: Award) -> Result<Option<ChatUser>, BotError>;

  /// Upsert keyed by (chat_id, user_id).
  async fn save(&self, user: &ChatUser) -> Result<(), BotError>;

  /// Persist the score and timestamp of `award` as held by `user`.
  async fn record_win(&self, user: &ChatUser, award: Award) -> Result<(), BotError>;

  async fn update_username(&self, user: &ChatUser) -> Result<(), BotError>;

  /// Zero the award's score for every active participant of the chat.
  async fn reset_scores(&self, chat_id: i64, award: Award) -> Result<(), BotError>;

  /// Active participants ordered by the award's score, best first.
  async fn scores(&self, chat_id: i64, award: Award) -> Result<Vec<ChatUser>, BotError>;
}

/// Start of the current day in Unix seconds. The daily-winner window is
/// pinned to UTC midnight for every chat.
fn day_start() -> i64 {
  let now = chrono::Utc::now().timestamp();
  now - now.rem_euclid(86_400)
}

#[derive(Clone)]
pub struct MongoPool {
  users: Collection<ChatUser>,
}

impl MongoPool {
  pub async fn init() -> Result<Self, MongoError> {
    let url = env::var(env::DB_URL).unwrap();
    info!("Connecting to database");
    let mut opts = ClientOptions::parse(url).await?;
    opts.app_name = Some("cotd-bot".into());
    opts.default_database = Some(env::var(env::DEFAULT_DB).unwrap());
    let mongo = Mongo::with_options(opts)?;
    let users = mongo.default_database().unwrap().collection("users");
    Ok(Self { users })
  }

  fn key(chat_id: i64, user_id: i64) -> mongodb::bson::Document {
    doc! { "chat_id": chat_id, "user_id": user_id }
  }

  async fn collect(&self, mut cursor: mongodb::Cursor<ChatUser>) -> Result<Vec<ChatUser>, BotError> {
    let mut users = vec![];
    while cursor.advance().await? {
      users.push(cursor.deserialize_current()?);
    }
    Ok(users)
  }
}

#[async_trait]
impl ChatUserStore for MongoPool {
  async fn find(&self, chat_id: i64, user_id: i64) -> Result<Option<ChatUser>, BotError> {
    Ok(self.users.find_one(Self::key(chat_id, user_id), None).await?)
  }

  async fn active_participants(&self, chat_id: i64) -> Result<Vec<ChatUser>, BotError> {
    let cursor = self
      .users
      .find(doc! { "chat_id": chat_id, "state": "active" }, None)
      .await?;
    self.collect(cursor).await
  }

  async fn active_winner(&self, chat_id: i64, award: Award) -> Result<Option<ChatUser>, BotError> {
    // Deliberately no state filter: a winner who withdraws mid-day still
    // holds the award until the day window rolls over.
    let filter = doc! {
      "chat_id": chat_id,
      award.timestamp_field(): { "$gte": day_start() },
    };
    Ok(self.users.find_one(filter, None).await?)
  }

  async fn save(&self, user: &ChatUser) -> Result<(), BotError> {
    let opts = ReplaceOptions::builder().upsert(true).build();
    self
      .users
      .replace_one(Self::key(user.chat_id, user.user_id), user, opts)
      .await?;
    Ok(())
  }

  async fn record_win(&self, user: &ChatUser, award: Award) -> Result<(), BotError> {
    let update = doc! { "$set": {
      award.score_field(): user.score(award),
      award.timestamp_field(): user.last_timestamp(award),
    }};
    self
      .users
      .update_one(Self::key(user.chat_id, user.user_id), update, None)
      .await?;
    Ok(())
  }

  async fn update_username(&self, user: &ChatUser) -> Result<(), BotError> {
    let update = doc! { "$set": { "username": user.username.as_deref() } };
    self
      .users
      .update_one(Self::key(user.chat_id, user.user_id), update, None)
      .await?;
    Ok(())
  }

  async fn reset_scores(&self, chat_id: i64, award: Award) -> Result<(), BotError> {
    self
      .users
      .update_many(
        doc! { "chat_id": chat_id, "state": "active" },
        doc! { "$set": { award.score_field(): 0 } },
        None,
      )
      .await?;
    Ok(())
  }

  async fn scores(&self, chat_id: i64, award: Award) -> Result<Vec<ChatUser>, BotError> {
    let opts = FindOptions::builder().sort(doc! { award.score_field(): -1 }).build();
    let cursor = self
      .users
      .find(doc! { "chat_id": chat_id, "state": "active" }, opts)
      .await?;
    self.collect(cursor).await
  }
}
