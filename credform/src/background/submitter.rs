use std::sync::Arc;
use tokio::sync::mpsc;

use super::dispatch::{dispatch, Stores, Submission};
use super::gateway::AuthGateway;
use crate::events::DataEvent;

/// Runs submissions off the UI loop and reports back over the data channel
pub struct Submitter<G> {
    gateway: Arc<G>,
    stores: Stores,
    data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl<G> Clone for Submitter<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            stores: self.stores.clone(),
            data_tx: self.data_tx.clone(),
        }
    }
}

impl<G: AuthGateway> Submitter<G> {
    pub fn new(gateway: Arc<G>, stores: Stores, data_tx: mpsc::UnboundedSender<DataEvent>) -> Self {
        Self {
            gateway,
            stores,
            data_tx,
        }
    }

    pub async fn submit(&self, generation: u64, submission: Submission) {
        tracing::info!(
            "Submitting {} request (generation {})",
            submission.mode().label(),
            generation
        );

        let settlement = dispatch(self.gateway.as_ref(), &self.stores, submission).await;

        // The receiver is gone only during shutdown
        let _ = self.data_tx.send(DataEvent::SubmissionSettled {
            generation,
            settlement,
        });
    }
}
