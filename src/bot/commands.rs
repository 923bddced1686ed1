use async_trait::async_trait;
use std::time::Duration;
use teloxide::{macros::BotCommands, requests::Requester, types::Message, Bot};

use crate::{
  bot::{BotResult, Dispatch},
  db::{
    models::{Award, UserInfo},
    MongoPool,
  },
  game::{Game, Pacing},
};

/// Delay between the flavor-text lines of a drawing.
const MESSAGE_PACING: Duration = Duration::from_secs(1);

#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "snake_case")]
pub enum Command {
  #[command(description = "Участвовать в розыгрышах")]
  Reg,

  #[command(description = "Перестать участвовать")]
  Deleteme,

  #[command(description = "Выбрать клоуна дня")]
  Clown,

  #[command(description = "Выбрать героя дня")]
  Hero,

  #[command(description = "Оба розыгрыша сразу")]
  Run,

  #[command(description = "Статистика клоунов")]
  ClownStats,

  #[command(description = "Статистика героев")]
  HeroStats,

  #[command(description = "Вся статистика")]
  Stats,

  #[command(description = "Обновить юзернеймы участников")]
  UpdateUsernames,
}

#[async_trait]
impl Dispatch for Command {
  async fn dispatch(self, bot: Bot, msg: Message, mongo: MongoPool) -> BotResult {
    let from = msg.from().unwrap();
    info!("Command {:?} from {} [{}] in chat {}", self, from.full_name(), from.id.0, msg.chat.id.0);

    let user = UserInfo::from(from);
    let chat_id = msg.chat.id.0;
    let game = Game::new(mongo, bot.clone(), Pacing::new(MESSAGE_PACING));

    let result = match self {
      Command::Reg => game.register(chat_id, &user).await,
      Command::Deleteme => game.withdraw(chat_id, &user).await,
      Command::Clown => game.draw(chat_id, Award::Clown).await.map(|_| ()),
      Command::Hero => game.draw(chat_id, Award::Hero).await.map(|_| ()),
      Command::Run => game.run_both(chat_id).await,
      Command::ClownStats => game.leaderboard(chat_id, Award::Clown).await,
      Command::HeroStats => game.leaderboard(chat_id, Award::Hero).await,
      Command::Stats => game.both_leaderboards(chat_id).await,
      Command::UpdateUsernames => game.refresh_usernames(chat_id).await,
    };

    match result {
      Ok(_) => Ok(()),
      Err(err) => {
        error!("{}", err);
        bot.send_message(msg.chat.id, err.to_string()).await.map(|_| ())?;
        Ok(())
      }
    }
  }
}

#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "snake_case")]
pub enum DevCommand {
  #[command(description = "Сбросить статистику клоунов")]
  ResetClown,

  #[command(description = "Сбросить статистику героев")]
  ResetHero,
}

#[async_trait]
impl Dispatch for DevCommand {
  async fn dispatch(self, bot: Bot, msg: Message, mongo: MongoPool) -> BotResult {
    info!("Dev command {:?} in chat {}", self, msg.chat.id.0);
    let game = Game::new(mongo, bot, Pacing::none());

    match self {
      DevCommand::ResetClown => game.reset(msg.chat.id.0, Award::Clown).await,
      DevCommand::ResetHero => game.reset(msg.chat.id.0, Award::Hero).await,
    }
  }
}
