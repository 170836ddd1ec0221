use crate::core::controller::FlowController;
use crate::core::loading::{LoadingIndicator, LoadingStages, STAGE_INTERVAL};
use crate::domain::model::FlowState;
use crate::domain::ports::{ConfigProvider, DreamService};
use crate::utils::error::Result;
use std::io::Write as _;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

pub const DEFAULT_PLACEHOLDERS: [&str; 5] = [
    "Travel the world and explore cultures",
    "Write a bestselling novel one day",
    "Build a sustainable future for all",
    "Start a business that inspires change",
    "Master the art of cooking gourmet meals",
];

const REVEAL_WORD_DELAY: Duration = Duration::from_millis(40);

/// Interactive terminal session around the flow controller. Input is not read
/// while a submission is in flight, so submissions never overlap.
pub struct Session<D: DreamService, C: ConfigProvider> {
    controller: FlowController<D>,
    config: C,
}

impl<D: DreamService, C: ConfigProvider> Session<D, C> {
    pub fn new(controller: FlowController<D>, config: C) -> Self {
        Self { controller, config }
    }

    pub async fn run(&mut self) -> Result<()> {
        self.probe_health().await;
        self.print_banner();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            prompt("💭 > ")?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            let line = line.trim().to_string();

            match line.as_str() {
                // Enter on an empty line re-submits a prefilled random dream.
                "" => {
                    if self.controller.input_text().is_empty() {
                        continue;
                    }
                    if !self.submit(None, &mut lines).await? {
                        break;
                    }
                }
                ":quit" | ":q" => break,
                ":random" => self.generate_random().await,
                text => {
                    if !self.submit(Some(text), &mut lines).await? {
                        break;
                    }
                }
            }
        }

        println!("🌙 Sweet dreams.");
        Ok(())
    }

    /// Warn-only availability probe; the flow still runs if the service is down.
    async fn probe_health(&self) {
        match self.controller.service().health().await {
            Ok(()) => tracing::info!("✅ Dream service is reachable"),
            Err(e) => {
                tracing::warn!("🔶 Dream service health check failed: {}", e);
                println!("🔶 The dream service looks unavailable right now. You can still try.");
            }
        }
    }

    fn print_banner(&self) {
        println!();
        println!("✨ What Are Your Dreams In Life? ✨");
        println!();
        println!("Type your dream and press Enter. :random prefills one, :quit leaves.");
        println!("For example:");
        for placeholder in self.placeholders() {
            println!("  - {}", placeholder);
        }
        println!();
    }

    fn placeholders(&self) -> Vec<String> {
        let configured = self.config.placeholders();
        if configured.is_empty() {
            DEFAULT_PLACEHOLDERS.iter().map(|s| s.to_string()).collect()
        } else {
            configured.to_vec()
        }
    }

    fn loading_stages(&self) -> Vec<String> {
        let configured = self.config.loading_states();
        if configured.is_empty() {
            LoadingStages::builtin().into_stages()
        } else {
            configured.to_vec()
        }
    }

    async fn generate_random(&mut self) {
        if self.controller.on_generate_random().await {
            println!("🎲 {}", self.controller.input_text());
            self.print_word_count();
            println!("   Press Enter on an empty line to submit it, or type your own.");
        } else {
            println!("🔶 Could not fetch a random dream. Try again or type your own.");
        }
    }

    /// Runs one full submission. Returns `false` when the user quit from the
    /// keep-dreaming prompt.
    async fn submit(
        &mut self,
        text: Option<&str>,
        lines: &mut Lines<BufReader<Stdin>>,
    ) -> Result<bool> {
        if let Some(text) = text {
            self.controller.on_input_change(text);
        }
        self.print_word_count();

        if self.controller.is_exceeded() {
            self.controller.on_submit().await;
            self.show_feedback().await;
            return Ok(true);
        }

        let indicator = LoadingIndicator::start(self.loading_stages(), STAGE_INTERVAL);
        self.controller.on_submit().await;
        indicator.finish();

        match self.controller.flow_state() {
            FlowState::Reveal => {
                if let Some(reflection) = self.controller.reflection() {
                    reveal(reflection).await?;
                }
                println!();
                prompt("🌙 Press Enter to keep dreaming, or :quit to leave > ")?;
                if let Some(line) = lines.next_line().await? {
                    if matches!(line.trim(), ":quit" | ":q") {
                        return Ok(false);
                    }
                }
                self.controller.on_reset();
                self.print_banner();
            }
            FlowState::InvalidFeedback => self.show_feedback().await,
            FlowState::Input => {
                println!("🔶 Something went wrong on our side. Your dream is safe, try again.");
            }
            FlowState::Loading => unreachable!("submission settled"),
        }

        Ok(true)
    }

    async fn show_feedback(&mut self) {
        if let Some(feedback) = self.controller.feedback() {
            println!("❗ {}", feedback.message);
        }
        self.controller.auto_dismiss_feedback().await;
    }

    fn print_word_count(&self) {
        let marker = if self.controller.is_exceeded() {
            "❗"
        } else {
            "  "
        };
        println!(
            "{} {}/{} words",
            marker,
            self.controller.word_count(),
            self.controller.max_words()
        );
    }
}

fn prompt(text: &str) -> Result<()> {
    print!("{}", text);
    std::io::stdout().flush()?;
    Ok(())
}

/// Word-by-word reveal of the reflection text.
async fn reveal(text: &str) -> Result<()> {
    println!();
    for word in text.split_whitespace() {
        print!("{} ", word);
        std::io::stdout().flush()?;
        tokio::time::sleep(REVEAL_WORD_DELAY).await;
    }
    println!();
    Ok(())
}
