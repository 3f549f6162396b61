//! Core data model: the case put before the Court and the verdict it returns.

use serde::{Deserialize, Serialize};

/// The final ruling. The Court never returns anything outside these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Ruling {
    Granted,
    Denied,
}

/// The Skeptic's recorded vote.
///
/// Unrecognized strings from the judge model deserialize to `Unknown` rather
/// than failing the whole verdict parse; the same holds for the other votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum SkepticVote {
    Real,
    Fake,
    Error,
    #[default]
    #[serde(other)]
    Unknown,
}

/// The Doctor's recorded vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum DoctorVote {
    Critical,
    Stable,
    Error,
    #[default]
    #[serde(other)]
    Unknown,
}

/// The Gambler's recorded vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum GamblerVote {
    In,
    Out,
    Error,
    #[default]
    #[serde(other)]
    Unknown,
}

/// How each juror voted, as summarized by the judge. Always exactly three
/// entries, on every code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct JuryVotes {
    #[serde(default)]
    pub skeptic: SkepticVote,
    #[serde(default)]
    pub doctor: DoctorVote,
    #[serde(default)]
    pub gambler: GamblerVote,
}

impl JuryVotes {
    pub fn all_unknown() -> Self {
        Self::default()
    }

    pub fn all_error() -> Self {
        Self {
            skeptic: SkepticVote::Error,
            doctor: DoctorVote::Error,
            gambler: GamblerVote::Error,
        }
    }
}

/// The sole externally observable output of the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub verdict: Ruling,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub roast: String,
    #[serde(default)]
    pub jury_votes: JuryVotes,
}

/// A face photo as submitted by the caller: an opaque base64 payload. The
/// core only sniffs its media type and forwards it to the vision model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceImage {
    pub base64: String,
}

impl FaceImage {
    pub fn new(base64: impl Into<String>) -> Self {
        Self {
            base64: base64.into(),
        }
    }
}

/// One case put before the Court. Built fresh per request, dropped after the
/// verdict is returned.
#[derive(Debug, Clone)]
pub struct ReliefCase {
    pub plea: String,
    pub face_image: Option<FaceImage>,
    /// Stage-presentation mode: short-circuits to a fixed favorable verdict.
    pub demo_mode: bool,
    /// Explicit mock override; `None` falls back to the process-wide default.
    pub mock_mode: Option<bool>,
}

impl ReliefCase {
    pub fn new(plea: impl Into<String>) -> Self {
        Self {
            plea: plea.into(),
            face_image: None,
            demo_mode: false,
            mock_mode: None,
        }
    }

    pub fn with_face_image(mut self, image: FaceImage) -> Self {
        self.face_image = Some(image);
        self
    }
}

/// One reply from the external model collaborator.
#[derive(Debug, Clone)]
pub struct ModelReply {
    pub text: String,
    pub provider: &'static str,
    pub model: String,
}
