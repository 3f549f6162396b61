//! Persona steering templates, loaded once at process start.

use std::fs;
use std::path::Path;
use tracing::warn;

pub const SKEPTIC_TEMPLATE: &str = "juror_skeptic.md";
pub const DOCTOR_TEMPLATE: &str = "juror_doctor.md";
pub const GAMBLER_TEMPLATE: &str = "juror_gambler.md";
pub const JUDGE_TEMPLATE: &str = "judge_pitboss.md";

/// The four persona instructions. A missing template file leaves that
/// persona with an empty instruction; loading never fails.
#[derive(Debug, Clone, Default)]
pub struct SteeringLibrary {
    pub skeptic: String,
    pub doctor: String,
    pub gambler: String,
    pub judge: String,
}

impl SteeringLibrary {
    pub fn load(dir: &Path) -> Self {
        Self {
            skeptic: read_or_empty(dir, SKEPTIC_TEMPLATE),
            doctor: read_or_empty(dir, DOCTOR_TEMPLATE),
            gambler: read_or_empty(dir, GAMBLER_TEMPLATE),
            judge: read_or_empty(dir, JUDGE_TEMPLATE),
        }
    }
}

fn read_or_empty(dir: &Path, name: &str) -> String {
    let path = dir.join(name);
    match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            warn!(
                template = name,
                path = %path.display(),
                %err,
                "steering template missing, persona runs uninstructed"
            );
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_present_templates_and_defaults_missing_ones() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SKEPTIC_TEMPLATE), "You are the Skeptic.").unwrap();
        fs::write(dir.path().join(JUDGE_TEMPLATE), "You are the Pit Boss.").unwrap();

        let lib = SteeringLibrary::load(dir.path());
        assert_eq!(lib.skeptic, "You are the Skeptic.");
        assert_eq!(lib.judge, "You are the Pit Boss.");
        assert!(lib.doctor.is_empty());
        assert!(lib.gambler.is_empty());
    }

    #[test]
    fn missing_directory_yields_empty_library() {
        let lib = SteeringLibrary::load(Path::new("/nonexistent/steering"));
        assert!(lib.skeptic.is_empty());
        assert!(lib.doctor.is_empty());
        assert!(lib.gambler.is_empty());
        assert!(lib.judge.is_empty());
    }
}
