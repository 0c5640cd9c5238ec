//! Background fetch execution.
//!
//! The UI thread never blocks on the network. It hands [`FetchJob`]s to a
//! [`FetchDispatcher`], keeps rendering, and drains [`FetchOutcome`]s on every tick.
//! Jobs are never cancelled; deciding whether an outcome is still wanted is the
//! state layer's job.

use crate::client::{NewsClient, ScholarshipClient};
use crate::model::{AppError, FetchError, NewsArticle, ResultPage, Scholarship, ScholarshipId};
use crate::state::{FetchCommand, FetchTicket};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use tokio::runtime::Runtime;
use tracing::{debug, warn};

/// A request the UI wants executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchJob {
    /// One catalog page, tagged with the controller's ticket.
    Scholarships(FetchCommand),
    /// Country names for the country filter.
    Countries,
    /// Featured scholarships for the home screen.
    TopScholarships,
    /// One full record for the detail screen.
    Detail(ScholarshipId),
    /// Headlines for the news screen.
    News,
}

/// The result of a [`FetchJob`].
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// A catalog page.
    Scholarships {
        /// Ticket the page was requested under.
        ticket: FetchTicket,
        /// Page or failure.
        result: Result<ResultPage, FetchError>,
    },
    /// Country list.
    Countries(Result<Vec<String>, FetchError>),
    /// Featured scholarships.
    TopScholarships(Result<Vec<Scholarship>, FetchError>),
    /// A detail record.
    Detail {
        /// Requested id.
        id: ScholarshipId,
        /// Record or failure.
        result: Result<Scholarship, FetchError>,
    },
    /// Headlines.
    News(Result<Vec<NewsArticle>, FetchError>),
}

/// Executes fetch jobs somewhere off the UI thread.
pub trait FetchDispatcher {
    /// Start a job. Must not block.
    fn dispatch(&mut self, job: FetchJob);

    /// Outcomes that completed since the last call, in completion order.
    fn drain(&mut self) -> Vec<FetchOutcome>;
}

/// Runs jobs on a multi-threaded tokio runtime and reports over an mpsc channel.
pub struct FetchWorker {
    runtime: Runtime,
    scholarships: ScholarshipClient,
    news: Option<NewsClient>,
    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
}

impl FetchWorker {
    /// Start the runtime. Fails only if tokio cannot create it.
    pub fn new(scholarships: ScholarshipClient, news: Option<NewsClient>) -> Result<Self, AppError> {
        let runtime = Runtime::new().map_err(|e| AppError::Runtime(e.to_string()))?;
        let (tx, rx) = mpsc::channel();
        Ok(Self {
            runtime,
            scholarships,
            news,
            tx,
            rx,
        })
    }

    async fn execute(
        job: FetchJob,
        scholarships: ScholarshipClient,
        news: Option<NewsClient>,
    ) -> Option<FetchOutcome> {
        let outcome = match job {
            FetchJob::Scholarships(command) => FetchOutcome::Scholarships {
                ticket: command.ticket,
                result: scholarships.fetch_scholarships(&command.request).await,
            },
            FetchJob::Countries => FetchOutcome::Countries(scholarships.fetch_countries().await),
            FetchJob::TopScholarships => {
                FetchOutcome::TopScholarships(scholarships.fetch_top_scholarships().await)
            }
            FetchJob::Detail(id) => FetchOutcome::Detail {
                id,
                result: scholarships.fetch_scholarship_by_id(id).await,
            },
            FetchJob::News => {
                let Some(news) = news else {
                    warn!("News job dispatched without a news endpoint");
                    return None;
                };
                FetchOutcome::News(news.fetch_headlines().await)
            }
        };
        Some(outcome)
    }
}

impl FetchDispatcher for FetchWorker {
    fn dispatch(&mut self, job: FetchJob) {
        debug!(?job, "Dispatching fetch");
        let tx = self.tx.clone();
        let scholarships = self.scholarships.clone();
        let news = self.news.clone();
        self.runtime.spawn(async move {
            if let Some(outcome) = Self::execute(job, scholarships, news).await {
                // Receiver gone means the UI has shut down.
                let _ = tx.send(outcome);
            }
        });
    }

    fn drain(&mut self) -> Vec<FetchOutcome> {
        let mut outcomes = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(outcome) => outcomes.push(outcome),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        outcomes
    }
}

/// Dispatcher that records jobs and replays queued outcomes. No I/O.
///
/// Drives the UI headlessly in tests.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    /// Every dispatched job, in order.
    pub jobs: Vec<FetchJob>,
    pending: Vec<FetchOutcome>,
}

impl RecordingDispatcher {
    /// Empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an outcome to be returned by the next `drain`.
    pub fn complete(&mut self, outcome: FetchOutcome) {
        self.pending.push(outcome);
    }
}

impl FetchDispatcher for RecordingDispatcher {
    fn dispatch(&mut self, job: FetchJob) {
        self.jobs.push(job);
    }

    fn drain(&mut self) -> Vec<FetchOutcome> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_dispatcher_records_and_replays() {
        let mut dispatcher = RecordingDispatcher::new();
        dispatcher.dispatch(FetchJob::Countries);
        dispatcher.complete(FetchOutcome::Countries(Ok(vec!["Japan".to_string()])));

        assert_eq!(dispatcher.jobs, vec![FetchJob::Countries]);
        assert_eq!(dispatcher.drain().len(), 1);
        assert!(dispatcher.drain().is_empty());
    }

    #[test]
    fn worker_reports_network_failure() {
        // Port 9 (discard) on localhost is closed in test environments.
        let client = ScholarshipClient::new("http://127.0.0.1:9/api");
        let mut worker = FetchWorker::new(client, None).unwrap();
        worker.dispatch(FetchJob::Countries);

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(10);
        let outcome = loop {
            if let Some(outcome) = worker.drain().pop() {
                break outcome;
            }
            assert!(std::time::Instant::now() < deadline, "worker never reported");
            std::thread::sleep(std::time::Duration::from_millis(20));
        };
        assert!(matches!(
            outcome,
            FetchOutcome::Countries(Err(FetchError::Network(_)))
        ));
    }
}
