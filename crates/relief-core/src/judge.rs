//! The Pit Boss: consults the full jury, then synthesizes a verdict.
//!
//! Consulting all three jurors is a hard precondition of synthesis here: the
//! orchestrator invokes each juror itself (concurrently — no juror consumes
//! another's output) and hands the judge model their labeled transcripts, so
//! a verdict can never be produced from a partial jury.

use crate::jury::Juror;
use crate::providers::ModelClient;
use std::sync::Arc;
use tracing::debug;

/// What the case narrative says when no photo accompanied the plea. Also the
/// input the Skeptic deliberates on in that case.
pub const NO_PHOTO_NOTICE: &str = "None provided. No photo submitted.";

pub struct JudgeOrchestrator {
    client: Arc<dyn ModelClient>,
    steering: String,
    skeptic: Arc<dyn Juror>,
    doctor: Arc<dyn Juror>,
    gambler: Arc<dyn Juror>,
}

impl JudgeOrchestrator {
    pub fn new(
        client: Arc<dyn ModelClient>,
        steering: String,
        skeptic: Arc<dyn Juror>,
        doctor: Arc<dyn Juror>,
        gambler: Arc<dyn Juror>,
    ) -> Self {
        Self {
            client,
            steering,
            skeptic,
            doctor,
            gambler,
        }
    }

    /// Run one full deliberation and return the judge's raw text, which is
    /// expected (not trusted) to end with the verdict JSON. Any juror or
    /// judge call failure propagates to the Court boundary.
    pub async fn deliberate(
        &self,
        plea: &str,
        face_analysis: Option<&str>,
    ) -> anyhow::Result<String> {
        let skeptic_input = face_analysis.unwrap_or(NO_PHOTO_NOTICE);

        let (skeptic, doctor, gambler) = tokio::join!(
            self.skeptic.evaluate(skeptic_input),
            self.doctor.evaluate(plea),
            self.gambler.evaluate(""),
        );
        let (skeptic, doctor, gambler) = (skeptic?, doctor?, gambler?);
        debug!(
            skeptic_len = skeptic.len(),
            doctor_len = doctor.len(),
            gambler_len = gambler.len(),
            "jury consulted"
        );

        let narrative = build_case_narrative(plea, face_analysis);
        let prompt = build_synthesis_prompt(&narrative, &skeptic, &doctor, &gambler);
        let steering = (!self.steering.is_empty()).then_some(self.steering.as_str());
        let reply = self.client.complete(steering, &prompt).await?;
        Ok(reply.text)
    }
}

fn build_case_narrative(plea: &str, face_analysis: Option<&str>) -> String {
    let evidence = match face_analysis {
        Some(analysis) => format!("FACE ANALYSIS FROM SECURITY CAMERAS:\n{analysis}"),
        None => format!("VISUAL EVIDENCE: {NO_PHOTO_NOTICE}"),
    };
    format!(
        "A desperate soul seeks bathroom access at Lucky Loo Casino.\n\n\
         USER'S PLEA: \"{plea}\"\n\n\
         {evidence}"
    )
}

fn build_synthesis_prompt(narrative: &str, skeptic: &str, doctor: &str, gambler: &str) -> String {
    format!(
        "{narrative}\n\n\
         The jury has deliberated. Their opinions:\n\n\
         THE SKEPTIC:\n{skeptic}\n\n\
         THE DOCTOR:\n{doctor}\n\n\
         THE GAMBLER:\n{gambler}\n\n\
         Weigh their opinions and deliver your FINAL VERDICT.\n\
         Remember: Your output MUST end with valid JSON in this format:\n\
         {{\n\
         \x20   \"verdict\": \"GRANTED\" or \"DENIED\",\n\
         \x20   \"reasoning\": \"Your summary\",\n\
         \x20   \"roast\": \"Your one-liner\",\n\
         \x20   \"jury_votes\": {{\"skeptic\": \"REAL/FAKE\", \"doctor\": \"CRITICAL/STABLE\", \"gambler\": \"IN/OUT\"}}\n\
         }}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jury::{Doctor, Gambler, Skeptic};
    use crate::providers::fake::FakeClient;

    fn orchestrator(client: Arc<FakeClient>) -> JudgeOrchestrator {
        JudgeOrchestrator::new(
            client.clone(),
            "You are the Pit Boss.".into(),
            Arc::new(Skeptic::new(client.clone(), String::new())),
            Arc::new(Doctor::new(client.clone(), String::new())),
            Arc::new(Gambler::new(client, String::new())),
        )
    }

    #[tokio::test]
    async fn synthesis_prompt_carries_all_three_transcripts() {
        let client = Arc::new(FakeClient::with_replies([
            "opinion alpha",
            "opinion bravo",
            "opinion charlie",
            "The court rules. {\"verdict\": \"GRANTED\"}",
        ]));
        let judge = orchestrator(client.clone());
        let raw = judge.deliberate("Let me in!", None).await.unwrap();
        assert!(raw.contains("GRANTED"));

        let prompts = client.seen_prompts();
        assert_eq!(prompts.len(), 4);
        let synthesis = prompts.last().unwrap();
        assert!(synthesis.contains("THE SKEPTIC:"));
        assert!(synthesis.contains("THE DOCTOR:"));
        assert!(synthesis.contains("THE GAMBLER:"));
        for opinion in ["opinion alpha", "opinion bravo", "opinion charlie"] {
            assert!(synthesis.contains(opinion), "missing {opinion}");
        }
        assert!(synthesis.contains("USER'S PLEA: \"Let me in!\""));
        assert!(synthesis.contains("VISUAL EVIDENCE:"));
    }

    #[tokio::test]
    async fn face_analysis_replaces_the_no_photo_notice() {
        let client = Arc::new(FakeClient::with_replies(["a", "b", "c", "{}"]));
        let judge = orchestrator(client.clone());
        judge
            .deliberate("plea", Some("Clenched jaw, real panic."))
            .await
            .unwrap();
        let synthesis = client.seen_prompts().pop().unwrap();
        assert!(synthesis.contains("FACE ANALYSIS FROM SECURITY CAMERAS:"));
        assert!(synthesis.contains("Clenched jaw, real panic."));
        assert!(!synthesis.contains("VISUAL EVIDENCE:"));
    }

    #[tokio::test]
    async fn a_missing_juror_aborts_the_deliberation() {
        let client = Arc::new(FakeClient::failing("switchboard on fire"));
        let judge = orchestrator(client);
        let err = judge.deliberate("plea", None).await.unwrap_err();
        assert!(format!("{err:#}").contains("failed to appear"));
    }
}
