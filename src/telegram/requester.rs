//! HTTP client for the Telegram Bot API.
//!
//! This module provides the [`TelegramRequester`] struct for calling Bot API
//! methods, and the [`Requester`] trait abstracting those calls for tests.

use std::time::Duration;

use log::{debug, info};
use mockall::automock;
use reqwest::{Client, StatusCode};
use serde::{Serialize, de::DeserializeOwned};

use crate::telegram::{
    TransportError,
    request_structs::{AnswerCallbackQuery, GetUpdates, SendMessage},
    response_structs::{ApiResponse, Message, Update, User},
};

/// Time allowed on top of the long polling timeout before a request is dropped.
const REQUEST_TIMEOUT_MARGIN: Duration = Duration::from_secs(10);

/// HTTP client for the Telegram Bot API.
///
/// Every method is a `POST {url}/bot{token}/{method}` with a JSON body.
///
/// # Examples
///
/// ```ignore
/// let requester = TelegramRequester::new("https://api.telegram.org", "123:ABC", 30)?;
/// let me = requester.get_me().await.unwrap();
/// println!("Logged in as {:?}", me.username);
/// ```
pub struct TelegramRequester {
    /// Bot API base url, without trailing slash
    url: String,
    /// Bot token given by BotFather
    token: String,
    /// HTTP client
    client: Client,
}

/// Trait for calling the Telegram Bot API.
///
/// This trait abstracts the HTTP operations for easier testing with mocks.
#[automock]
pub trait Requester {
    /// Fetches the bot account.
    async fn get_me(&self) -> Result<User, TransportError>;
    /// Long polls for new updates starting at `offset`.
    async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout: u64,
    ) -> Result<Vec<Update>, TransportError>;
    /// Sends a message.
    async fn send_message(&self, message: &SendMessage) -> Result<(), TransportError>;
    /// Answers an inline button press.
    async fn answer_callback_query(
        &self,
        answer: &AnswerCallbackQuery,
    ) -> Result<(), TransportError>;
}

impl TelegramRequester {
    /// Create a new [TelegramRequester].
    ///
    /// # Arguments
    ///
    /// * `url` - The base URL of the Bot API, usually `https://api.telegram.org`.
    /// * `token` - The bot token.
    /// * `polling_timeout` - Long polling timeout in seconds. Requests time out
    ///   a little after it, so a stalled connection cannot block polling.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Http`] if the HTTP client cannot be built.
    pub fn new(url: &str, token: &str, polling_timeout: u64) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(request_timeout(polling_timeout))
            .build()?;
        Ok(TelegramRequester {
            url: url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            client,
        })
    }

    /// Calls a Bot API method and unwraps the response envelope.
    ///
    /// The token is part of the url, so only the method name is logged.
    async fn call<P, T>(&self, method: &str, params: &P) -> Result<T, TransportError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/bot{}/{}", &self.url, &self.token, method);

        let response = self.client.post(&url).json(params).send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(TransportError::Unauthorized);
        }

        let api_response: ApiResponse<T> = response.json().await?;
        api_response.into_result()
    }
}

fn request_timeout(polling_timeout: u64) -> Duration {
    Duration::from_secs(polling_timeout) + REQUEST_TIMEOUT_MARGIN
}

impl Requester for TelegramRequester {
    /// Request `getMe` to get the bot account.
    ///
    /// This api call returns the bot user:
    /// ```json
    /// { "id": 123, "is_bot": true, "first_name": "Rollcall", "username": "rollcall_bot" }
    /// ```
    async fn get_me(&self) -> Result<User, TransportError> {
        info!("request bot account");
        let user: User = self.call("getMe", &serde_json::json!({})).await?;
        debug!("response from getMe -> {:?}", &user);
        Ok(user)
    }

    /// Request `getUpdates` to long poll incoming messages and button presses.
    ///
    /// The request blocks server side for up to `timeout` seconds when there is
    /// nothing to deliver.
    async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout: u64,
    ) -> Result<Vec<Update>, TransportError> {
        debug!("request getUpdates offset={:?} timeout={}", offset, timeout);

        let request = GetUpdates {
            offset,
            timeout,
            allowed_updates: vec!["message".to_owned(), "callback_query".to_owned()],
        };
        let updates: Vec<Update> = self.call("getUpdates", &request).await?;

        debug!("response from getUpdates -> {:?}", &updates);

        Ok(updates)
    }

    /// Request `sendMessage`. The sent message returned by Telegram is discarded.
    async fn send_message(&self, message: &SendMessage) -> Result<(), TransportError> {
        debug!("request sendMessage to chat {}", message.chat_id);
        let _: Message = self.call("sendMessage", message).await?;
        Ok(())
    }

    /// Request `answerCallbackQuery`.
    async fn answer_callback_query(
        &self,
        answer: &AnswerCallbackQuery,
    ) -> Result<(), TransportError> {
        debug!("request answerCallbackQuery {}", answer.callback_query_id);
        let _: bool = self.call("answerCallbackQuery", answer).await?;
        Ok(())
    }
}
