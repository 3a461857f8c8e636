//! Background extraction.
//!
//! [`spawn_extraction`] runs one complete run (stop-word load plus the
//! two-pass scan) on its own thread. Progress and the final result come back
//! as [`ExtractionEvent`]s over a channel, in emission order. A consumer
//! that only renders the latest progress value may skip intermediate ones.

use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Receiver};
use tracing::warn;

use crate::config::ExtractorConfig;
use crate::errors::{Result, TagError};
use crate::nlp::stopwords::StopWordSet;
use crate::pipeline::artifacts::FrequencyMap;
use crate::pipeline::observer::ProgressSink;
use crate::pipeline::runner::{CancelToken, FrequencyExtractor};
use crate::source::LineSource;

/// Message sent from the extraction thread.
#[derive(Debug)]
pub enum ExtractionEvent {
    Progress(u8),
    Finished(Result<FrequencyMap>),
}

/// Inputs for one background run.
#[derive(Debug, Clone)]
pub struct ExtractionRequest<T, W> {
    pub text: T,
    pub stop_words: W,
    pub config: ExtractorConfig,
}

/// Handle to a running extraction.
#[derive(Debug)]
pub struct ExtractionHandle {
    events: Receiver<ExtractionEvent>,
    cancel: CancelToken,
    thread: JoinHandle<()>,
}

impl ExtractionHandle {
    /// Channel of progress and result events.
    pub fn events(&self) -> &Receiver<ExtractionEvent> {
        &self.events
    }

    /// Ask the run to stop at the next line.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// A token that cancels this run, for handing to another thread.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Forward progress to `sink` until the run finishes, then return its
    /// result.
    pub fn wait<P: ProgressSink + ?Sized>(self, sink: &mut P) -> Result<FrequencyMap> {
        let mut outcome = None;
        for event in self.events.iter() {
            match event {
                ExtractionEvent::Progress(p) => sink.on_progress(p),
                ExtractionEvent::Finished(result) => outcome = Some(result),
            }
        }

        if self.thread.join().is_err() {
            return Err(TagError::WorkerPanicked);
        }
        outcome.unwrap_or(Err(TagError::WorkerPanicked))
    }
}

/// Load the stop words and count the tags of `request.text` on a new thread.
pub fn spawn_extraction<T, W>(request: ExtractionRequest<T, W>) -> Result<ExtractionHandle>
where
    T: LineSource + Send + 'static,
    W: LineSource + Send + 'static,
{
    let (tx, rx) = channel::unbounded();
    let cancel = CancelToken::new();
    let worker_cancel = cancel.clone();

    let thread = thread::Builder::new()
        .name("tag-extract".to_string())
        .spawn(move || {
            let progress_tx = tx.clone();
            let mut sink = |p: u8| {
                // The receiver may already be gone; progress is best effort.
                let _ = progress_tx.send(ExtractionEvent::Progress(p));
            };

            let result = StopWordSet::load_with_language(
                &request.stop_words,
                request.config.language.as_deref(),
            )
            .and_then(|stop_words| {
                FrequencyExtractor::with_config(&request.config).extract_with_cancel(
                    &request.text,
                    &stop_words,
                    &mut sink,
                    &worker_cancel,
                )
            });

            if let Err(err) = &result {
                warn!(source = %request.text.name(), error = %err, "extraction failed");
            }
            let _ = tx.send(ExtractionEvent::Finished(result));
        })
        .map_err(|e| TagError::io("extraction worker", e))?;

    Ok(ExtractionHandle {
        events: rx,
        cancel,
        thread,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::observer::ProgressLog;
    use crate::source::{FileSource, InMemorySource};

    fn request(text: &str, stop: &str) -> ExtractionRequest<InMemorySource, InMemorySource> {
        ExtractionRequest {
            text: InMemorySource::new("text.txt", text),
            stop_words: InMemorySource::new("stop.txt", stop),
            config: ExtractorConfig::default(),
        }
    }

    #[test]
    fn test_background_run_delivers_progress_then_result() {
        let handle = spawn_extraction(request("The Cat sat on the mat.", "the\non\n")).unwrap();
        let mut log = ProgressLog::new();
        let freq = handle.wait(&mut log).unwrap();

        assert_eq!(freq.len(), 3);
        assert_eq!(freq.get("cat"), 1);
        assert_eq!(log.values, vec![10, 90, 95]);
    }

    #[test]
    fn test_stop_word_load_failure_surfaces() {
        let handle = spawn_extraction(ExtractionRequest {
            text: InMemorySource::new("text.txt", "words"),
            stop_words: FileSource::new("/no/such/stop.txt"),
            config: ExtractorConfig::default(),
        })
        .unwrap();

        let mut log = ProgressLog::new();
        let err = handle.wait(&mut log).unwrap_err();
        assert!(matches!(err, TagError::Io { .. }));
        assert!(log.values.is_empty());
    }

    #[test]
    fn test_language_list_is_merged() {
        let mut req = request("the whale and the sea", "whale\n");
        req.config = req.config.with_language("en");
        let freq = spawn_extraction(req)
            .unwrap()
            .wait(&mut crate::pipeline::observer::NoopSink)
            .unwrap();

        assert_eq!(freq.get("sea"), 1);
        assert_eq!(freq.get("whale"), 0);
        assert_eq!(freq.get("the"), 0);
    }

    #[test]
    fn test_cancel_discards_partial_result() {
        let text = "lorem ipsum dolor\n".repeat(50_000);
        let handle = spawn_extraction(request(&text, "")).unwrap();
        handle.cancel();

        let result = handle.wait(&mut crate::pipeline::observer::NoopSink);
        // The thread may have finished before the flag was seen.
        match result {
            Err(TagError::Cancelled) => {}
            Ok(freq) => assert_eq!(freq.get("lorem"), 50_000),
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_events_channel_can_be_polled() {
        let handle = spawn_extraction(request("one two two", "")).unwrap();
        let mut finished = false;
        for event in handle.events().iter() {
            if let ExtractionEvent::Finished(result) = event {
                assert_eq!(result.unwrap().get("two"), 2);
                finished = true;
            }
        }
        assert!(finished);
    }
}
