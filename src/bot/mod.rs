use async_trait::async_trait;
use teloxide::{
  dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler},
  dptree as dp,
  prelude::Dispatcher,
  requests::Requester,
  types::{ChatId, Message, Update, UserId},
  utils::command::BotCommands as _,
  Bot,
};

use crate::{
  db::MongoPool,
  env,
  error::{BotError, BotResult},
  game::Messenger,
};

pub mod commands;

use commands::{Command, DevCommand};

#[async_trait]
pub trait Dispatch {
  async fn dispatch(self, bot: Bot, msg: Message, mongo: MongoPool) -> BotResult;
}

pub async fn start(bot: Bot, mongo: MongoPool) {
  bot
    .set_my_commands(Command::bot_commands())
    .await
    .expect("Couldn't set bot commands");

  let me = bot.get_me().await.expect("Login error");

  bot.delete_webhook().await.expect("Couldn't delete webhook");
  info!("Logged in as {} [@{}]", me.full_name(), me.username());
  info!("Started");

  Dispatcher::builder(bot, dispatch_scheme())
    .dependencies(dp::deps![mongo])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;
}

fn dispatch_scheme() -> UpdateHandler<BotError> {
  let dev_id = UserId(env::parse_var(env::DEV_ID).unwrap_or(0));
  info!("Dev ID: {}", dev_id);

  Update::filter_message()
    .branch(dp::entry().filter_command::<Command>().endpoint(command_handler))
    .branch(
      dp::entry()
        .filter_command::<DevCommand>()
        .filter(move |msg: Message| msg.from().map(|from| from.id == dev_id).unwrap_or(false))
        .endpoint(dev_command_handler),
    )
}

async fn command_handler(bot: Bot, msg: Message, cmd: Command, mongo: MongoPool) -> BotResult {
  cmd.dispatch(bot, msg, mongo).await
}

async fn dev_command_handler(bot: Bot, msg: Message, cmd: DevCommand, mongo: MongoPool) -> BotResult {
  cmd.dispatch(bot, msg, mongo).await
}

#[async_trait]
impl Messenger for Bot {
  async fn send(&self, chat_id: i64, text: &str) -> Result<(), BotError> {
    self.send_message(ChatId(chat_id), text).await?;
    Ok(())
  }

  async fn member_username(&self, chat_id: i64, user_id: i64) -> Result<Option<String>, BotError> {
    let member = self.get_chat_member(ChatId(chat_id), UserId(user_id as u64)).await?;
    Ok(member.user.username)
  }
}
