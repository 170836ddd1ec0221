use std::time::Duration;
use tokio::task::JoinHandle;

/// Staged messages shown while a submission is in flight, one per stage
/// interval, no looping.
pub const LOADING_STAGES: [&str; 3] = [
    "Travelling to the future",
    "Listening to your future self",
    "Reflecting on your dreams",
];

pub const STAGE_INTERVAL: Duration = Duration::from_millis(1000);

/// Pure stage sequencer: yields each stage once, then stays exhausted.
#[derive(Debug)]
pub struct LoadingStages {
    stages: Vec<String>,
    next: usize,
}

impl LoadingStages {
    pub fn new(stages: Vec<String>) -> Self {
        Self { stages, next: 0 }
    }

    pub fn builtin() -> Self {
        Self::new(LOADING_STAGES.iter().map(|s| s.to_string()).collect())
    }

    pub fn advance(&mut self) -> Option<&str> {
        let stage = self.stages.get(self.next)?;
        self.next += 1;
        Some(stage)
    }

    pub fn into_stages(self) -> Vec<String> {
        self.stages
    }
}

/// Background task printing the loading stages while requests are in flight.
/// Aborted as soon as the submission settles.
pub struct LoadingIndicator {
    handle: JoinHandle<()>,
}

impl LoadingIndicator {
    pub fn start(stages: Vec<String>, interval: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut stages = LoadingStages::new(stages);
            while let Some(stage) = stages.advance() {
                println!("   ✨ {}...", stage);
                tokio::time::sleep(interval).await;
            }
        });
        Self { handle }
    }

    pub fn finish(self) {
        self.handle.abort();
    }
}
