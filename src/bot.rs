//! Bot module tying the Telegram transport to the roster.
//!
//! This module provides the main [`Bot`] implementation that connects a
//! [`TelegramClient`] with the [`RosterStore`] of the event. It decodes every
//! inbound update into a command or a button press, runs it through the
//! [`Commander`] and sends the resulting messages.
//!
//! # Update Processing Flow
//!
//! ```text
//! Telegram Update → Parse → Lock roster → Execute → Broadcast → Unlock → Reply / Answer
//! ```
//!
//! # Serialization
//!
//! The roster lives behind a [`tokio::sync::Mutex`]. The lock is held from the
//! roster operation until its broadcast has been sent, so two concurrent button
//! presses can never publish their rosters in the reverse order of their
//! mutations. Replies and callback answers only concern their requester and are
//! sent after the lock is released.

use log::{debug, info};
use tokio::sync::Mutex;

use crate::{
    commands::{Button, CommandResult, Commander},
    config::Config,
    roster::RosterStore,
    telegram::{
        CallbackQuery, Message, Requester, TelegramClient, TelegramRequester, TransportError,
        Update,
    },
};

/// Main bot structure managing the roster of one event.
///
/// # Thread Safety
///
/// Updates of a poll batch are handled concurrently on the polling task; the
/// roster `Mutex` serializes their operation-plus-broadcast sequences.
pub struct Bot<R: Requester> {
    /// Telegram client for receiving updates and sending messages.
    client: TelegramClient<R>,

    /// Players, spectators and registration state.
    ///
    /// Only kept in memory: a restart starts from an empty open roster.
    roster: Mutex<RosterStore>,

    /// Command parser and executor.
    ///
    /// Stateless apart from the configuration, the roster is passed to it locked.
    commander: Commander,
}

impl Bot<TelegramRequester> {
    /// Creates a new Bot talking to the Bot API configured in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bot token is rejected or the Bot API is unreachable.
    pub async fn new(config: Config) -> Result<Self, anyhow::Error> {
        let requester = TelegramRequester::new(
            &config.telegram.api_url,
            &config.telegram.token,
            config.telegram.polling_timeout,
        )?;
        Self::with_requester(requester, config).await
    }
}

impl<R: Requester> Bot<R> {
    /// Creates a new Bot on top of any [`Requester`].
    ///
    /// Checks the token with `getMe` and starts with an empty roster, registration open.
    ///
    /// # Errors
    ///
    /// Returns an error if the bot token is rejected or the Bot API is unreachable.
    pub async fn with_requester(requester: R, config: Config) -> Result<Self, anyhow::Error> {
        let client = TelegramClient::new(requester, config.telegram.polling_timeout).await?;

        info!(
            "managing the roster of chat {} with {} admin(s)",
            config.telegram.chat_id,
            config.telegram.admin_ids.len()
        );

        let commander = Commander::new(
            client.username(),
            config.telegram.chat_id,
            config.telegram.admin_ids,
            config.event,
        );

        Ok(Bot {
            client,
            roster: Mutex::new(RosterStore::new()),
            commander,
        })
    }

    /// Starts processing updates.
    ///
    /// Runs until the bot token gets rejected. Transient transport failures are
    /// retried by the polling loop.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Unauthorized`] when polling is no longer possible.
    pub async fn start(&self) -> Result<(), TransportError> {
        info!("listening for commands as @{}", self.client.username());
        self.client.sync(|update| self.handle_update(update)).await
    }

    /// Dispatches an update to the message or the callback query handler.
    ///
    /// Other update kinds are ignored.
    async fn handle_update(&self, update: Update) {
        debug!("handling update {}", update.update_id);

        if let Some(message) = update.message {
            self.handle_message(message).await;
        } else if let Some(callback_query) = update.callback_query {
            self.handle_callback_query(callback_query).await;
        }
    }

    /// Handles a message and processes it as a command.
    ///
    /// Messages without text or sender, and messages that are not commands for
    /// this bot, are ignored silently.
    async fn handle_message(&self, message: Message) {
        let (Some(text), Some(sender)) = (message.text.as_deref(), message.from.as_ref()) else {
            return;
        };

        let command = match self.commander.parse(text) {
            Ok(command) => command,
            Err(e) => {
                debug!("ignoring message {}: {:?}", message.message_id, e);
                return;
            }
        };

        let result = {
            let mut roster = self.roster.lock().await;
            let result =
                self.commander
                    .handle_command(&command, message.chat.id, sender.id, &mut roster);
            self.broadcast(&result, &roster).await;
            result
        };

        if let Some(reply) = result.reply {
            self.client
                .send_reply(message.chat.id, message.message_id, &reply.text)
                .await;
        }
    }

    /// Handles an inline button press.
    ///
    /// Every press is answered, unrecognized ones with an empty answer.
    async fn handle_callback_query(&self, callback_query: CallbackQuery) {
        let button = Button::from_callback_data(callback_query.data.as_deref());
        let presser_name = callback_query.from.full_name();
        debug!("button {:?} pressed by {}", button, presser_name);

        let result = {
            let mut roster = self.roster.lock().await;
            let result = self
                .commander
                .handle_button(&button, &presser_name, &mut roster);
            self.broadcast(&result, &roster).await;
            result
        };

        match result.reply {
            Some(reply) => {
                self.client
                    .answer_callback(&callback_query.id, Some(&reply.text), reply.alert)
                    .await
            }
            None => self.client.answer_callback(&callback_query.id, None, false).await,
        }
    }

    /// Sends the broadcast of `result` to the event group, if any.
    ///
    /// Must be called with the roster still locked: the keyboard reflects the
    /// registration state right after the operation.
    async fn broadcast(&self, result: &CommandResult, roster: &RosterStore) {
        if let Some(text) = &result.broadcast {
            let keyboard = Button::keyboard(roster.is_registration_open());
            self.client
                .send_text(self.commander.group_chat_id(), text, Some(keyboard))
                .await;
        }
    }
}
