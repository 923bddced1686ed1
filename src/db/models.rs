use serde::{Deserialize, Serialize};
use teloxide::types::User;

use crate::utils;

/// One of the two daily drawings. Each has its own score and
/// last-win timestamp on every participant record.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Award {
  Clown,
  Hero,
}

impl Award {
  pub fn other(self) -> Award {
    match self {
      Award::Clown => Award::Hero,
      Award::Hero => Award::Clown,
    }
  }

  /// Mongo field holding the cumulative win count.
  pub fn score_field(self) -> &'static str {
    match self {
      Award::Clown => "clown_score",
      Award::Hero => "hero_score",
    }
  }

  /// Mongo field holding the last-win Unix timestamp.
  pub fn timestamp_field(self) -> &'static str {
    match self {
      Award::Clown => "clown_last_timestamp",
      Award::Hero => "hero_last_timestamp",
    }
  }

  /// Locale key prefix: `clown_of_day` / `hero_of_day`.
  pub fn locale_prefix(self) -> &'static str {
    match self {
      Award::Clown => "clown_of_day",
      Award::Hero => "hero_of_day",
    }
  }

  pub fn locale_key(self, suffix: &str) -> String {
    match self {
      Award::Clown => format!("clown_{}", suffix),
      Award::Hero => format!("hero_{}", suffix),
    }
  }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantState {
  Active,
  Withdrawn,
}

/// Display identity of a chat member as Telegram currently reports it.
#[derive(Clone, Debug)]
pub struct UserInfo {
  pub user_id: i64,
  pub username: Option<String>,
  pub first_name: String,
  pub last_name: Option<String>,
}

impl From<&User> for UserInfo {
  fn from(user: &User) -> Self {
    Self {
      user_id: user.id.0 as i64,
      username: user.username.clone(),
      first_name: user.first_name.clone(),
      last_name: user.last_name.clone(),
    }
  }
}

/// One document per (chat, user). Never deleted: withdrawal only flips
/// `state`, so scores survive a re-registration.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChatUser {
  pub chat_id: i64,
  pub user_id: i64,
  pub username: Option<String>,
  pub first_name: String,
  pub last_name: Option<String>,
  pub state: ParticipantState,
  pub clown_score: i64,
  pub hero_score: i64,
  /// Unix seconds of the last win, 0 = never won.
  pub clown_last_timestamp: i64,
  pub hero_last_timestamp: i64,
}

impl ChatUser {
  pub fn new(chat_id: i64, user: &UserInfo) -> Self {
    Self {
      chat_id,
      user_id: user.user_id,
      username: user.username.clone(),
      first_name: user.first_name.clone(),
      last_name: user.last_name.clone(),
      state: ParticipantState::Active,
      clown_score: 0,
      hero_score: 0,
      clown_last_timestamp: 0,
      hero_last_timestamp: 0,
    }
  }

  pub fn is_active(&self) -> bool {
    self.state == ParticipantState::Active
  }

  pub fn score(&self, award: Award) -> i64 {
    match award {
      Award::Clown => self.clown_score,
      Award::Hero => self.hero_score,
    }
  }

  pub fn last_timestamp(&self, award: Award) -> i64 {
    match award {
      Award::Clown => self.clown_last_timestamp,
      Award::Hero => self.hero_last_timestamp,
    }
  }

  pub fn record_win(&mut self, award: Award, timestamp: i64) {
    match award {
      Award::Clown => {
        self.clown_score += 1;
        self.clown_last_timestamp = timestamp;
      }
      Award::Hero => {
        self.hero_score += 1;
        self.hero_last_timestamp = timestamp;
      }
    }
  }

  pub fn display_name(&self) -> String {
    utils::format_user_name(self.username.as_deref(), &self.first_name, self.last_name.as_deref())
  }
}
