//! Vision evaluation: scoring a face photo for desperation signals.
//!
//! Two rubrics run against the same vision-capable model. [`scan_face`] is
//! what the Court uses: a free-text noir read with a REAL/FAKE token the
//! evaluator scans for. [`desperation_report`] asks for a structured JSON
//! report instead. Both swallow every failure into a safe default — a caller
//! never sees an error from this module.

use crate::model::FaceImage;
use crate::providers::ModelClient;
use crate::verdict::extract_json_object;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Whether the camera believes the desperation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FaceVerdict {
    Real,
    Fake,
}

/// Free-text vision read consumed by the Skeptic's prompt.
#[derive(Debug, Clone)]
pub struct FaceScan {
    pub verdict: FaceVerdict,
    pub analysis: String,
}

/// Structured desperation report (the JSON-rubric variant).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesperationReport {
    pub is_desperate: bool,
    pub confidence: u8,
    pub emotions_detected: Vec<String>,
    pub physical_signs: Vec<String>,
    pub analysis: String,
}

const FACE_RUBRIC: &str = "You are a cynical Vegas bouncer analyzing this person's face for signs of BATHROOM DESPERATION.

Look for GENUINE desperation signs:
- Wide, panicked eyes
- Clenched jaw, grimacing
- Sweat on forehead
- Pained or distressed expression
- Tense facial muscles

Look for FAKE desperation signs:
- Relaxed expression trying to look distressed
- Smiling or laughing
- Calm, relaxed features
- Obviously \"acting\"

Respond in this exact format:
VERDICT: [REAL/FAKE]
CONFIDENCE: [HIGH/MEDIUM/LOW]
ANALYSIS: [One cynical sentence about what you see, in noir detective style]";

const DESPERATION_RUBRIC: &str = "You are analyzing a face for signs of BATHROOM DESPERATION.

Look for these indicators of GENUINE desperation:
- Wide, panicked eyes
- Clenched jaw or grimacing
- Sweat on forehead
- Pained expression
- Tense facial muscles

Look for these indicators of FAKE desperation:
- Relaxed expression trying to look distressed
- Smiling or laughing
- Calm, relaxed eyebrows
- \"Acting\" rather than genuine distress

Respond with ONLY this JSON format (no other text):
{
    \"is_desperate\": true/false,
    \"confidence\": 0-100,
    \"emotions_detected\": [\"list\", \"of\", \"emotions\"],
    \"physical_signs\": [\"list\", \"of\", \"observed\", \"signs\"],
    \"analysis\": \"Brief one-sentence assessment in a cynical Vegas bouncer tone\"
}";

/// Run the noir rubric once. The verdict is REAL iff the reply contains the
/// `VERDICT: REAL` token, case-insensitively; any call failure degrades to
/// FAKE with the error embedded in the analysis text.
pub async fn scan_face(client: &dyn ModelClient, image: &FaceImage) -> FaceScan {
    match client.complete_vision(None, image, FACE_RUBRIC).await {
        Ok(reply) => {
            let is_real = reply.text.to_uppercase().contains("VERDICT: REAL");
            FaceScan {
                verdict: if is_real {
                    FaceVerdict::Real
                } else {
                    FaceVerdict::Fake
                },
                analysis: reply.text,
            }
        }
        Err(err) => {
            warn!(%err, "vision analysis failed");
            FaceScan {
                verdict: FaceVerdict::Fake,
                analysis: format!(
                    "Couldn't see your face clearly. Assuming you're faking it. Error: {err}"
                ),
            }
        }
    }
}

/// Run the JSON rubric once. An unparseable reply yields the unclear-image
/// default; a failed call yields the zero-confidence error default.
pub async fn desperation_report(client: &dyn ModelClient, image: &FaceImage) -> DesperationReport {
    match client.complete_vision(None, image, DESPERATION_RUBRIC).await {
        Ok(reply) => extract_json_object(&reply.text)
            .and_then(|segment| serde_json::from_str(segment).ok())
            .unwrap_or_else(|| DesperationReport {
                is_desperate: false,
                confidence: 50,
                emotions_detected: vec!["unknown".into()],
                physical_signs: vec!["unable to analyze".into()],
                analysis: "The image was unclear. Assuming you're faking it.".into(),
            }),
        Err(err) => {
            warn!(%err, "vision analysis failed");
            DesperationReport {
                is_desperate: false,
                confidence: 0,
                emotions_detected: vec!["error".into()],
                physical_signs: vec!["analysis_failed".into()],
                analysis: format!("Technical difficulties. Error: {err}"),
            }
        }
    }
}

/// Sniff a media type from the leading characters of a base64 payload.
/// Unrecognized prefixes fall back to JPEG.
pub fn sniff_media_type(base64: &str) -> &'static str {
    if base64.starts_with("/9j/") {
        "image/jpeg"
    } else if base64.starts_with("iVBORw") {
        "image/png"
    } else if base64.starts_with("R0lGOD") {
        "image/gif"
    } else if base64.starts_with("UklGR") {
        "image/webp"
    } else {
        "image/jpeg"
    }
}

/// Canned desperation reports for offline runs.
pub fn mock_desperation_report<R: Rng>(force_desperate: Option<bool>, rng: &mut R) -> DesperationReport {
    let desperate = DesperationReport {
        is_desperate: true,
        confidence: 92,
        emotions_detected: vec!["fear".into(), "distress".into(), "urgency".into()],
        physical_signs: vec![
            "wide eyes".into(),
            "clenched jaw".into(),
            "visible sweat".into(),
        ],
        analysis: "Those eyes don't lie. This one's about to burst.".into(),
    };
    let composed = DesperationReport {
        is_desperate: false,
        confidence: 85,
        emotions_detected: vec!["calm".into(), "amusement".into()],
        physical_signs: vec!["relaxed brow".into(), "slight smile".into()],
        analysis: "Nice try, but that smirk says 'Instagram content', not 'emergency'.".into(),
    };
    match force_desperate {
        Some(true) => desperate,
        Some(false) => composed,
        None => {
            if rng.gen_bool(0.5) {
                desperate
            } else {
                composed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::fake::FakeClient;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn image() -> FaceImage {
        FaceImage::new("/9j/FAKEDATA")
    }

    #[test]
    fn sniffs_media_types_from_base64_prefixes() {
        assert_eq!(sniff_media_type("/9j/AAAA"), "image/jpeg");
        assert_eq!(sniff_media_type("iVBORw0KGgo"), "image/png");
        assert_eq!(sniff_media_type("R0lGODlh"), "image/gif");
        assert_eq!(sniff_media_type("UklGRh4A"), "image/webp");
        assert_eq!(sniff_media_type("Qk02AAAA"), "image/jpeg");
    }

    #[tokio::test]
    async fn scan_face_reads_the_verdict_token_case_insensitively() {
        let client = FakeClient::with_replies([
            "VERDICT: REAL\nCONFIDENCE: HIGH\nANALYSIS: Those eyes have seen things.",
        ]);
        let scan = scan_face(&client, &image()).await;
        assert_eq!(scan.verdict, FaceVerdict::Real);

        let client = FakeClient::with_replies(["verdict: real, no doubt about it"]);
        let scan = scan_face(&client, &image()).await;
        assert_eq!(scan.verdict, FaceVerdict::Real);

        let client = FakeClient::with_replies(["VERDICT: FAKE\nANALYSIS: Pure theater."]);
        let scan = scan_face(&client, &image()).await;
        assert_eq!(scan.verdict, FaceVerdict::Fake);
    }

    #[tokio::test]
    async fn scan_face_swallows_call_failures() {
        let client = FakeClient::failing("socket fell over");
        let scan = scan_face(&client, &image()).await;
        assert_eq!(scan.verdict, FaceVerdict::Fake);
        assert!(scan.analysis.contains("Error:"));
        assert!(scan.analysis.contains("socket fell over"));
    }

    #[tokio::test]
    async fn desperation_report_parses_embedded_json() {
        let client = FakeClient::with_replies([
            r#"Here you go: {"is_desperate": true, "confidence": 88, "emotions_detected": ["panic"], "physical_signs": ["sweat"], "analysis": "He's not acting."}"#,
        ]);
        let report = desperation_report(&client, &image()).await;
        assert!(report.is_desperate);
        assert_eq!(report.confidence, 88);
        assert_eq!(report.emotions_detected, vec!["panic"]);
    }

    #[tokio::test]
    async fn desperation_report_defaults_on_garbage_reply() {
        let client = FakeClient::with_replies(["I refuse to answer in JSON today."]);
        let report = desperation_report(&client, &image()).await;
        assert!(!report.is_desperate);
        assert_eq!(report.confidence, 50);
        assert_eq!(report.physical_signs, vec!["unable to analyze"]);
    }

    #[tokio::test]
    async fn desperation_report_marks_call_failures() {
        let client = FakeClient::failing("auth expired");
        let report = desperation_report(&client, &image()).await;
        assert!(!report.is_desperate);
        assert_eq!(report.confidence, 0);
        assert_eq!(report.emotions_detected, vec!["error"]);
        assert!(report.analysis.contains("auth expired"));
    }

    #[test]
    fn mock_reports_honor_the_force_flag() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(mock_desperation_report(Some(true), &mut rng).is_desperate);
        assert!(!mock_desperation_report(Some(false), &mut rng).is_desperate);
    }
}
