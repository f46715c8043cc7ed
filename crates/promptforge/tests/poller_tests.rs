//! Polling loop behavior: fast path, fixed intervals, fatal query failures,
//! missing results and download errors, driven by a scripted API under a
//! paused tokio clock.

mod common;

use std::sync::Arc;
use std::time::Duration;

use promptforge::{
    progress_message, GenerationBroadcaster, GenerationError, GenerationPhase, VideoJobRunner,
    POLL_INTERVAL,
};

use common::{done_with_uri, done_without_result, pending, status_error, ScriptedVideoApi};

fn runner(api: Arc<ScriptedVideoApi>) -> (VideoJobRunner, GenerationBroadcaster) {
    let broadcaster = GenerationBroadcaster::default();
    let runner = VideoJobRunner::new(api, broadcaster.clone());
    (runner, broadcaster)
}

/// Drains all events currently buffered on the receiver.
fn drain(
    rx: &mut tokio::sync::broadcast::Receiver<promptforge::GenerationEvent>,
) -> Vec<promptforge::GenerationEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test(start_paused = true)]
async fn already_done_submission_skips_polling_entirely() {
    let api = Arc::new(
        ScriptedVideoApi::new(Ok(done_with_uri("operations/op1", "https://dl/video")))
            .with_download(Ok(b"video-bytes".to_vec())),
    );
    let (runner, broadcaster) = runner(api.clone());
    let mut rx = broadcaster.subscribe();

    let bytes = runner.run("job-1", "a fox, watercolor").await.unwrap();

    assert_eq!(bytes, b"video-bytes");
    assert_eq!(api.queries_made(), 0);
    assert_eq!(api.downloads_made(), 1);

    let phases: Vec<GenerationPhase> = drain(&mut rx).iter().map(|e| e.phase).collect();
    assert_eq!(
        phases,
        vec![
            GenerationPhase::Starting,
            GenerationPhase::Submitted,
            GenerationPhase::Downloading
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn polls_once_per_interval_until_done() {
    let api = Arc::new(
        ScriptedVideoApi::new(Ok(pending("operations/op1")))
            .with_queries([
                Ok(pending("operations/op1")),
                Ok(pending("operations/op1")),
                Ok(done_with_uri("operations/op1", "https://dl/video")),
            ])
            .with_download(Ok(b"final".to_vec())),
    );
    let (runner, broadcaster) = runner(api.clone());
    let mut rx = broadcaster.subscribe();

    let started = tokio::time::Instant::now();
    let bytes = runner.run("job-1", "prompt").await.unwrap();

    assert_eq!(bytes, b"final");
    assert_eq!(api.queries_made(), 3);
    // Three iterations, each waiting exactly one fixed interval.
    assert_eq!(started.elapsed(), 3 * POLL_INTERVAL);

    let events = drain(&mut rx);
    let poll_events: Vec<_> = events
        .iter()
        .filter(|e| e.phase == GenerationPhase::Polling)
        .collect();
    assert_eq!(poll_events.len(), 3);
    for (i, event) in poll_events.iter().enumerate() {
        let attempt = (i + 1) as u32;
        assert_eq!(event.attempt, Some(attempt));
        assert_eq!(event.message, progress_message(attempt));
    }
}

#[tokio::test(start_paused = true)]
async fn attempts_beyond_the_fifth_repeat_the_last_message() {
    let queries = (0..6)
        .map(|_| Ok(pending("operations/op1")))
        .chain([Ok(done_with_uri("operations/op1", "https://dl/video"))]);
    let api = Arc::new(
        ScriptedVideoApi::new(Ok(pending("operations/op1")))
            .with_queries(queries)
            .with_download(Ok(Vec::new())),
    );
    let (runner, broadcaster) = runner(api.clone());
    let mut rx = broadcaster.subscribe();

    runner.run("job-1", "prompt").await.unwrap();

    let events = drain(&mut rx);
    let messages: Vec<&str> = events
        .iter()
        .filter(|e| e.phase == GenerationPhase::Polling)
        .map(|e| e.message.as_str())
        .collect();

    assert_eq!(messages.len(), 7);
    assert_eq!(messages[4], progress_message(5));
    assert_eq!(messages[5], progress_message(5));
    assert_eq!(messages[6], progress_message(5));
    // The first four messages are all distinct from the repeated tail.
    assert!(messages[..4].iter().all(|m| *m != messages[4]));
}

#[tokio::test(start_paused = true)]
async fn query_failure_terminates_the_job_without_retry() {
    let api = Arc::new(
        ScriptedVideoApi::new(Ok(pending("operations/op1")))
            .with_queries([Err(status_error("503 Service Unavailable"))]),
    );
    let (runner, _broadcaster) = runner(api.clone());

    let err = runner.run("job-1", "prompt").await.unwrap_err();

    assert!(matches!(err, GenerationError::PollQuery(_)));
    assert_eq!(api.queries_made(), 1);
    assert_eq!(api.downloads_made(), 0);
}

#[tokio::test(start_paused = true)]
async fn submission_failure_is_distinct_from_poll_failure() {
    let api = Arc::new(ScriptedVideoApi::new(Err(status_error("400 Bad Request"))));
    let (runner, _broadcaster) = runner(api.clone());

    let err = runner.run("job-1", "prompt").await.unwrap_err();

    assert!(matches!(err, GenerationError::Submission(_)));
    assert_eq!(api.queries_made(), 0);
}

#[tokio::test(start_paused = true)]
async fn completion_without_result_link_is_an_error() {
    let api = Arc::new(
        ScriptedVideoApi::new(Ok(pending("operations/op1")))
            .with_queries([Ok(done_without_result("operations/op1"))]),
    );
    let (runner, _broadcaster) = runner(api.clone());

    let err = runner.run("job-1", "prompt").await.unwrap_err();

    assert!(matches!(err, GenerationError::MissingResult));
    assert_eq!(api.downloads_made(), 0);
}

#[tokio::test(start_paused = true)]
async fn download_failure_carries_the_status_text() {
    let api = Arc::new(
        ScriptedVideoApi::new(Ok(done_with_uri("operations/op1", "https://dl/video")))
            .with_download(Err(status_error("403 Forbidden"))),
    );
    let (runner, _broadcaster) = runner(api.clone());

    let err = runner.run("job-1", "prompt").await.unwrap_err();

    match err {
        GenerationError::Download { status } => assert_eq!(status, "403 Forbidden"),
        other => panic!("expected download error, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn custom_poll_interval_is_honored() {
    let api = Arc::new(
        ScriptedVideoApi::new(Ok(pending("operations/op1")))
            .with_queries([Ok(done_with_uri("operations/op1", "https://dl/video"))])
            .with_download(Ok(Vec::new())),
    );
    let broadcaster = GenerationBroadcaster::default();
    let runner = VideoJobRunner::new(api.clone(), broadcaster)
        .with_poll_interval(Duration::from_millis(50));

    let started = tokio::time::Instant::now();
    runner.run("job-1", "prompt").await.unwrap();

    assert_eq!(started.elapsed(), Duration::from_millis(50));
}
