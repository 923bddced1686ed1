use thiserror::Error;

pub type BotResult = Result<(), BotError>;

#[derive(Error, Debug)]
pub enum BotError {
  #[error("Ошибка: база данных: {0}")]
  Mongo(#[from] mongodb::error::Error),

  #[error("Ошибка: Telegram API: {0}")]
  Request(#[from] teloxide::RequestError),
}
