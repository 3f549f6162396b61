//! The jury: three independent persona evaluators.
//!
//! Each juror wraps the shared model client with its steering instruction and
//! exposes the same contract: some case input in, opaque commentary out.
//! Jurors never see each other's output, so the orchestrator is free to call
//! them in any order or all at once.

use crate::providers::ModelClient;
use anyhow::Context;
use async_trait::async_trait;
use rand::Rng;
use std::sync::Arc;

/// Which seat on the jury a persona occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JurorKind {
    Skeptic,
    Doctor,
    Gambler,
}

/// Uniform juror capability: (persona, input) -> commentary text.
#[async_trait]
pub trait Juror: Send + Sync {
    fn name(&self) -> &'static str;

    /// Produce this juror's free-text opinion for the given case input. What
    /// the input means is persona-specific; the Gambler ignores it entirely.
    async fn evaluate(&self, input: &str) -> anyhow::Result<String>;
}

fn steering_of(instruction: &str) -> Option<&str> {
    (!instruction.is_empty()).then_some(instruction)
}

/// Cynical Vegas bouncer. Input: the face analysis text (or the no-photo
/// notice). Frames its opinion as REAL vs FAKE desperation.
pub struct Skeptic {
    client: Arc<dyn ModelClient>,
    steering: String,
}

impl Skeptic {
    pub fn new(client: Arc<dyn ModelClient>, steering: String) -> Self {
        Self { client, steering }
    }
}

#[async_trait]
impl Juror for Skeptic {
    fn name(&self) -> &'static str {
        "The Skeptic"
    }

    async fn evaluate(&self, input: &str) -> anyhow::Result<String> {
        let prompt = format!(
            "Here is the face analysis from our security cameras:\n\n{input}\n\n\
             Based on this evidence, deliver your verdict. Are they REAL desperate or FAKE desperate?"
        );
        let reply = self
            .client
            .complete(steering_of(&self.steering), &prompt)
            .await
            .context("the Skeptic failed to appear")?;
        Ok(reply.text)
    }
}

/// Overly dramatic medical professional. Input: the plea text. Frames its
/// opinion as CRITICAL vs STABLE urgency.
pub struct Doctor {
    client: Arc<dyn ModelClient>,
    steering: String,
}

impl Doctor {
    pub fn new(client: Arc<dyn ModelClient>, steering: String) -> Self {
        Self { client, steering }
    }
}

#[async_trait]
impl Juror for Doctor {
    fn name(&self) -> &'static str {
        "The Doctor"
    }

    async fn evaluate(&self, input: &str) -> anyhow::Result<String> {
        let prompt = format!(
            "A patient has submitted the following plea for bathroom access:\n\n\
             \"{input}\"\n\n\
             Provide your medical diagnosis and urgency assessment. Be dramatic."
        );
        let reply = self
            .client
            .complete(steering_of(&self.steering), &prompt)
            .await
            .context("the Doctor failed to appear")?;
        Ok(reply.text)
    }
}

/// Atmospheric luck readings the Gambler opens with, picked uniformly.
pub const LUCK_LINES: [&str; 6] = [
    "The dice are hot tonight.",
    "I just saw a black cat. Bad omen.",
    "Someone just hit the jackpot on floor 3. Good vibes.",
    "Mercury is in retrograde. Tread carefully.",
    "I found a penny heads-up this morning. Lucky day.",
    "The cards have been cold all night.",
];

/// Pick one luck line. Takes the Rng so tests can seed the draw.
pub fn pick_luck_line<R: Rng>(rng: &mut R) -> &'static str {
    LUCK_LINES[rng.gen_range(0..LUCK_LINES.len())]
}

/// Superstitious card player. Ignores the case entirely; consults fate and
/// frames its opinion as IN vs OUT.
pub struct Gambler {
    client: Arc<dyn ModelClient>,
    steering: String,
}

impl Gambler {
    pub fn new(client: Arc<dyn ModelClient>, steering: String) -> Self {
        Self { client, steering }
    }
}

#[async_trait]
impl Juror for Gambler {
    fn name(&self) -> &'static str {
        "The Gambler"
    }

    async fn evaluate(&self, _input: &str) -> anyhow::Result<String> {
        let luck = pick_luck_line(&mut rand::thread_rng());
        let prompt = format!(
            "It's time to make your call. {luck}\n\n\
             Should this person get bathroom access? Consult your gambling instincts and deliver your verdict."
        );
        let reply = self
            .client
            .complete(steering_of(&self.steering), &prompt)
            .await
            .context("the Gambler failed to appear")?;
        Ok(reply.text)
    }
}
