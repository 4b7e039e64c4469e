mod config;
mod dispatch;
mod telegram;
mod types;

use std::time::Duration;

use dispatch::Dispatcher;
use telegram::TelegramClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::BotConfig::from_env();
    let client = TelegramClient::new(config.token).expect("HTTP client build failed");
    let dispatcher = Dispatcher::new();

    tracing::info!("telegram bot polling for updates");

    let mut offset = 0_i64;
    loop {
        let updates = match client.get_updates(offset).await {
            Ok(updates) => updates,
            Err(e) => {
                tracing::warn!(error = %e, "polling error");
                tokio::time::sleep(Duration::from_secs(config.error_backoff_secs)).await;
                continue;
            }
        };

        offset = telegram::next_offset(&updates, offset);

        for update in updates {
            let Some(message) = update.message else {
                continue;
            };
            let Some(text) = message.text.as_deref() else {
                continue;
            };

            for reply in dispatcher.replies_for(text) {
                if let Err(e) = client.send_message(message.chat.id, &reply).await {
                    tracing::warn!(error = %e, chat_id = message.chat.id, "reply send failed");
                }
            }
        }
    }
}
