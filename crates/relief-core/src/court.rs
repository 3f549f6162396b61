//! The Court of Relief: top-level orchestration entry point.
//!
//! Precedence is load-bearing: demo mode short-circuits before the mock
//! check (stage demos need determinism even on machines configured for mock
//! runs), and only then does the live deliberation path run. Whatever
//! happens, the Court returns a well-formed verdict.

use crate::config::CourtConfig;
use crate::judge::JudgeOrchestrator;
use crate::jury::{Doctor, Gambler, Skeptic};
use crate::mock::mock_ruling;
use crate::model::{
    DoctorVote, FaceImage, GamblerVote, JuryVotes, ReliefCase, Ruling, SkepticVote, Verdict,
};
use crate::providers::anthropic::AnthropicClient;
use crate::providers::ModelClient;
use crate::steering::SteeringLibrary;
use crate::verdict::{error_verdict, resolve_verdict};
use crate::vision::scan_face;
use std::sync::Arc;
use tracing::{info, warn};

/// Process-wide court: model client, steering, jury, and judge, built once
/// and shared read-only across requests.
pub struct Court {
    config: CourtConfig,
    client: Arc<dyn ModelClient>,
    judge: JudgeOrchestrator,
}

impl Court {
    pub fn new(
        config: CourtConfig,
        client: Arc<dyn ModelClient>,
        steering: SteeringLibrary,
    ) -> Self {
        let judge = JudgeOrchestrator::new(
            client.clone(),
            steering.judge,
            Arc::new(Skeptic::new(client.clone(), steering.skeptic)),
            Arc::new(Doctor::new(client.clone(), steering.doctor)),
            Arc::new(Gambler::new(client.clone(), steering.gambler)),
        );
        Self {
            config,
            client,
            judge,
        }
    }

    /// Convene from environment config with the live client and the steering
    /// templates on disk.
    pub fn from_env() -> Self {
        let config = CourtConfig::from_env();
        let steering = SteeringLibrary::load(&config.steering_dir);
        let client = Arc::new(AnthropicClient::new(&config));
        info!(model = %config.model_id, "convening the Court of Relief");
        Self::new(config, client, steering)
    }

    /// Hear one case and return the verdict. Total by contract.
    pub async fn convene(&self, case: &ReliefCase) -> Verdict {
        if case.demo_mode {
            info!("demo mode: the Court has been rigged");
            return demo_verdict();
        }

        let use_mock = case.mock_mode.unwrap_or(self.config.mock_mode);
        if use_mock {
            info!("mock mode: pre-written responses, no model calls");
            return mock_ruling(None, &mut rand::thread_rng());
        }

        match self.deliberate_live(case).await {
            Ok(raw) => resolve_verdict(&raw),
            Err(err) => {
                warn!(err = %format!("{err:#}"), "deliberation failed");
                error_verdict(&err)
            }
        }
    }

    async fn deliberate_live(&self, case: &ReliefCase) -> anyhow::Result<String> {
        let face_analysis = match &case.face_image {
            Some(image) => {
                info!("analyzing face evidence");
                let scan = scan_face(self.client.as_ref(), image).await;
                info!(verdict = ?scan.verdict, "vision result");
                Some(scan.analysis)
            }
            None => None,
        };

        info!("the Court is now in session");
        self.judge
            .deliberate(&case.plea, face_analysis.as_deref())
            .await
    }
}

/// The fixed stage-demo verdict: always favorable, no model involved.
pub fn demo_verdict() -> Verdict {
    Verdict {
        verdict: Ruling::Granted,
        reasoning: "DEMO MODE: The Court has been rigged in your favor.".into(),
        roast: "Jackpot! The Porcelain Gods recognize a VIP when they see one.".into(),
        jury_votes: JuryVotes {
            skeptic: SkepticVote::Real,
            doctor: DoctorVote::Critical,
            gambler: GamblerVote::In,
        },
    }
}

/// Entry-call contract for external collaborators: run one full deliberation
/// against the given court.
pub async fn run_court_of_relief(
    court: &Court,
    plea: impl Into<String>,
    image: Option<FaceImage>,
    demo_mode: bool,
    mock_mode: Option<bool>,
) -> Verdict {
    let case = ReliefCase {
        plea: plea.into(),
        face_image: image,
        demo_mode,
        mock_mode,
    };
    court.convene(&case).await
}
