use async_trait::async_trait;
use tracing::{debug, info};

/// Out-of-band delivery seam. The application only ever talks to this trait;
/// real transport (SES, SMTP, ...) lives behind it and is not part of this
/// service.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()>;
}

/// Default runtime sink: writes the notification to the log instead of the
/// network. The message body is kept at debug level since it carries the
/// reset code.
pub struct LogNotifier {
    pub from: String,
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()> {
        info!(from = %self.from, to = %to, subject = %subject, "notification dispatched");
        debug!(body = %body, "notification body");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn log_notifier_accepts_sends() {
        let notifier = LogNotifier {
            from: "noreply@stagepass.app".into(),
        };
        notifier
            .send("user@example.com", "subject", "body")
            .await
            .expect("log notifier never fails");
    }
}
