//! Telegram transport: long polling via teloxide.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use teloxide::payloads::SendMessageSetters;
use teloxide::requests::Requester;
use teloxide::types::{ChatId, KeyboardButton, KeyboardMarkup, Message};
use teloxide::{Bot, RequestError};
use tokio::task::JoinHandle;

use soulnote_application::JournalService;
use soulnote_core::config::TelegramConfig;
use soulnote_core::entry::UserId;
use soulnote_core::session::SessionManager;
use soulnote_core::{IncomingMessage, Keyboard, Reply};

const PRUNE_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// Runs the bot until Ctrl-C.
pub async fn run(service: Arc<JournalService>, config: &TelegramConfig) -> Result<()> {
    let token = config
        .token
        .clone()
        .context("No bot token configured: set SOULNOTE_BOT_TOKEN or [telegram] token")?;

    let bot = Bot::new(token);
    let pruner = spawn_session_pruner(service.sessions());
    tracing::info!("Telegram transport started");

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let service = service.clone();
        async move {
            if let Some(incoming) = to_incoming(&msg) {
                let reply = service.handle(&incoming).await;
                if let Err(e) = send_reply(&bot, msg.chat.id, reply).await {
                    tracing::error!(user_id = %incoming.user_id, error = %e, "Failed to send reply");
                }
            }
            teloxide::respond(())
        }
    })
    .await;

    pruner.abort();
    tracing::info!("Telegram transport stopped");
    Ok(())
}

/// Messages without a sender or without text are ignored.
fn to_incoming(msg: &Message) -> Option<IncomingMessage> {
    let user = msg.from.as_ref()?;
    let text = msg.text()?;

    let incoming = IncomingMessage::new(UserId(user.id.0), user.first_name.clone(), text);
    Some(match &user.username {
        Some(username) => incoming.with_username(username.clone()),
        None => incoming,
    })
}

async fn send_reply(bot: &Bot, chat_id: ChatId, reply: Reply) -> Result<(), RequestError> {
    let request = bot.send_message(chat_id, reply.text);
    match reply.keyboard {
        Some(keyboard) => request.reply_markup(to_markup(&keyboard)).await?,
        None => request.await?,
    };
    Ok(())
}

fn to_markup(keyboard: &Keyboard) -> KeyboardMarkup {
    let rows = keyboard
        .rows
        .iter()
        .map(|row| row.iter().map(|label| KeyboardButton::new(label.clone())).collect::<Vec<_>>());

    let markup = KeyboardMarkup::new(rows).resize_keyboard();
    match &keyboard.placeholder {
        Some(placeholder) => markup.input_field_placeholder(placeholder.clone()),
        None => markup,
    }
}

fn spawn_session_pruner(sessions: Arc<SessionManager>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(PRUNE_INTERVAL);
        // The first tick completes immediately.
        interval.tick().await;
        loop {
            interval.tick().await;
            sessions.prune_idle().await;
        }
    })
}
