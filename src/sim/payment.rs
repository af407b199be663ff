//! Simulated payment step.
//!
//! The original flow slept for two seconds and then confirmed, with no
//! way to abandon the wait. Here the delay races a cancellation signal
//! so a caller navigating away can abort cleanly instead of leaving a
//! dangling timer. No failure path beyond cancellation is modeled.

use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::oneshot;
use tracing::info;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PaymentError {
    #[error("payment cancelled before completion")]
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    /// Amount charged, in whole rupees
    pub amount: u64,
    pub processed_at: DateTime<Utc>,
}

pub struct PaymentProcessor {
    delay: Duration,
}

impl PaymentProcessor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Charge `amount` after the configured delay, unless `cancel`
    /// fires first. Dropping the cancel sender also cancels, so the
    /// caller must hold it for the duration of the wait.
    pub async fn process(
        &self,
        amount: u64,
        mut cancel: oneshot::Receiver<()>,
    ) -> Result<PaymentReceipt, PaymentError> {
        tokio::select! {
            _ = tokio::time::sleep(self.delay) => {
                info!(amount, "payment processed");
                Ok(PaymentReceipt {
                    amount,
                    processed_at: Utc::now(),
                })
            }
            _ = &mut cancel => {
                info!(amount, "payment cancelled");
                Err(PaymentError::Cancelled)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_payment_completes_after_delay() {
        let processor = PaymentProcessor::new(Duration::from_millis(10));
        let (_cancel_tx, cancel_rx) = oneshot::channel();

        let receipt = processor.process(31_000, cancel_rx).await.unwrap();
        assert_eq!(receipt.amount, 31_000);
    }

    #[tokio::test]
    async fn test_cancellation_aborts_the_wait() {
        let processor = PaymentProcessor::new(Duration::from_secs(30));
        let (cancel_tx, cancel_rx) = oneshot::channel();

        cancel_tx.send(()).unwrap();
        let result = processor.process(500, cancel_rx).await;
        assert_eq!(result, Err(PaymentError::Cancelled));
    }

    #[tokio::test]
    async fn test_dropping_the_cancel_sender_cancels() {
        let processor = PaymentProcessor::new(Duration::from_secs(30));
        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();
        drop(cancel_tx);

        let result = processor.process(500, cancel_rx).await;
        assert_eq!(result, Err(PaymentError::Cancelled));
    }
}
