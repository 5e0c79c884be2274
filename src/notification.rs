//! Notification sink client
//!
//! Best-effort POST to the configured notification endpoint. The only
//! contract is: never blocks the transfer, never raises. Any failure is
//! logged and reported as `false`.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

use crate::transfer::Notifier;

pub struct NotificationSink {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct NotificationBody<'a> {
    email: &'a str,
    message: &'a str,
}

impl NotificationSink {
    pub fn new(url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl Notifier for NotificationSink {
    async fn notify(&self, recipient_email: &str, message: &str) -> bool {
        let body = NotificationBody {
            email: recipient_email,
            message,
        };

        match self.client.post(&self.url).json(&body).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::info!(recipient = recipient_email, "Notification delivered");
                true
            }
            Ok(response) => {
                tracing::warn!(
                    recipient = recipient_email,
                    status = %response.status(),
                    "Notification endpoint rejected the message"
                );
                false
            }
            Err(e) => {
                tracing::warn!(
                    recipient = recipient_email,
                    error = %e,
                    "Failed to deliver notification"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_body_shape() {
        let body = NotificationBody {
            email: "maria@example.com",
            message: "You received a transfer of 100 from Joao Silva",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["email"], "maria@example.com");
        assert!(json["message"].as_str().unwrap().contains("100"));
    }
}
