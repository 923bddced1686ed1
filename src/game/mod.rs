use async_trait::async_trait;
use std::time::Duration;

use crate::{
  db::{
    models::{Award, ChatUser, ParticipantState, UserInfo},
    ChatUserStore,
  },
  error::{BotError, BotResult},
  locale::loc,
  utils,
};


/// Transport seam of the game: everything it needs from Telegram.
#[async_trait]
pub trait Messenger: Send + Sync {
  async fn send(&self, chat_id: i64, text: &str) -> Result<(), BotError>;

  /// Current username of a chat member, as the membership API reports it.
  async fn member_username(&self, chat_id: i64, user_id: i64) -> Result<Option<String>, BotError>;
}

/// Delay between the flavor-text messages of a drawing. Presentation
/// pacing only; tests inject `Pacing::none()`.
#[derive(Clone, Copy)]
pub struct Pacing(Duration);

impl Pacing {
  pub fn new(delay: Duration) -> Self {
    Self(delay)
  }

  pub fn none() -> Self {
    Self(Duration::ZERO)
  }

  pub async fn pause(&self) {
    if !self.0.is_zero() {
      tokio::time::sleep(self.0).await;
    }
  }
}

pub struct Game<S: ChatUserStore, M: Messenger> {
  store: S,
  chat: M,
  pacing: Pacing,
}

impl<S: ChatUserStore, M: Messenger> Game<S, M> {
  pub fn new(store: S, chat: M, pacing: Pacing) -> Self {
    Self { store, chat, pacing }
  }

  /// Pick today's winner of `award`, or repeat the one already picked.
  ///
  /// At most one winner per award per chat per day: a second call the same
  /// day only re-announces. The other award's winner of today is excluded
  /// from the candidates, so both daily awards always go to different people.
  pub async fn draw(&self, chat_id: i64, award: Award) -> Result<Option<ChatUser>, BotError> {
    if let Some(winner) = self.store.active_winner(chat_id, award).await? {
      let key = award.locale_key("active_winner");
      self.chat.send(chat_id, &loc(&key, &[&winner.display_name()])).await?;
      return Ok(Some(winner));
    }

    let mut candidates = self.store.active_participants(chat_id).await?;
    if let Some(other) = self.store.active_winner(chat_id, award.other()).await? {
      candidates.retain(|user| user.user_id != other.user_id);
    }

    if candidates.is_empty() {
      self.chat.send(chat_id, &loc("at_least_one_user", &[])).await?;
      return Ok(None);
    }

    let index = utils::random_int(0, candidates.len() as i64 - 1) as usize;
    let mut winner = candidates.swap_remove(index);
    winner.record_win(award, utils::now_unix());
    self.store.record_win(&winner, award).await?;
    info!("{:?} of chat {} is user {}", award, chat_id, winner.user_id);

    let set_key = format!("{}_set{}", award.locale_prefix(), utils::random_int(1, 3));
    for line in loc(&set_key, &[]).lines() {
      self.chat.send(chat_id, line).await?;
      self.pacing.pause().await;
    }

    let key = award.locale_key("winner");
    let score = winner.score(award).to_string();
    self.chat.send(chat_id, &loc(&key, &[&winner.display_name(), &score])).await?;
    Ok(Some(winner))
  }

  /// All-time score table of one award.
  pub async fn leaderboard(&self, chat_id: i64, award: Award) -> BotResult {
    let users = self.store.scores(chat_id, award).await?;
    if users.is_empty() {
      self.chat.send(chat_id, &loc("at_least_one_user", &[])).await?;
      return Ok(());
    }

    let mut text = loc(&award.locale_key("list_header"), &[]);
    for (place, user) in users.iter().enumerate() {
      text.push_str(&format!("\n{}. {} — {}", place + 1, user.display_name(), user.score(award)));
    }
    self.chat.send(chat_id, &text).await
  }

  pub async fn register(&self, chat_id: i64, user: &UserInfo) -> BotResult {
    let name = utils::format_user_name(user.username.as_deref(), &user.first_name, user.last_name.as_deref());
    let existing = self.store.find(chat_id, user.user_id).await?;

    if existing.as_ref().map(|u| u.is_active()).unwrap_or(false) {
      return self.chat.send(chat_id, &loc("user_already_registered", &[&name])).await;
    }

    // Re-registration keeps the old scores, only identity and state refresh.
    let mut record = existing.unwrap_or_else(|| ChatUser::new(chat_id, user));
    record.username = user.username.clone();
    record.first_name = user.first_name.clone();
    record.last_name = user.last_name.clone();
    record.state = ParticipantState::Active;
    self.store.save(&record).await?;
    self.chat.send(chat_id, &loc("user_registered", &[&name])).await
  }

  pub async fn withdraw(&self, chat_id: i64, user: &UserInfo) -> BotResult {
    let name = utils::format_user_name(user.username.as_deref(), &user.first_name, user.last_name.as_deref());

    let mut record = match self.store.find(chat_id, user.user_id).await? {
      Some(record) if record.is_active() => record,
      _ => return self.chat.send(chat_id, &loc("user_not_participating", &[&name])).await,
    };

    record.state = ParticipantState::Withdrawn;
    self.store.save(&record).await?;
    self.chat.send(chat_id, &loc("user_deleted", &[&name])).await
  }

  /// Reconcile stored usernames with what Telegram currently reports.
  /// A failed member lookup is logged and skipped, the rest still update.
  pub async fn refresh_usernames(&self, chat_id: i64) -> BotResult {
    for mut user in self.store.active_participants(chat_id).await? {
      let username = match self.chat.member_username(chat_id, user.user_id).await {
        Ok(username) => username,
        Err(err) => {
          warn!("user not found userId: {}, chatId: {}, err: {}", user.user_id, chat_id, err);
          continue;
        }
      };
      if user.username != username {
        user.username = username;
        self.store.update_username(&user).await?;
      }
    }
    self.chat.send(chat_id, &loc("update_users", &[])).await
  }

  pub async fn reset(&self, chat_id: i64, award: Award) -> BotResult {
    self.store.reset_scores(chat_id, award).await?;
    let game_name = loc(award.locale_prefix(), &[]);
    self.chat.send(chat_id, &loc("stat_reset", &[&game_name])).await
  }

  /// Both daily drawings in sequence. The hero drawing sees the fresh
  /// clown as today's active winner, so the exclusion needs no plumbing.
  pub async fn run_both(&self, chat_id: i64) -> BotResult {
    self.draw(chat_id, Award::Clown).await?;
    self.pacing.pause().await;
    self.draw(chat_id, Award::Hero).await?;
    Ok(())
  }

  pub async fn both_leaderboards(&self, chat_id: i64) -> BotResult {
    self.leaderboard(chat_id, Award::Clown).await?;
    self.pacing.pause().await;
    self.leaderboard(chat_id, Award::Hero).await
  }
}
