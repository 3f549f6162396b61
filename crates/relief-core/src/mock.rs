//! Canned content for offline runs: pre-written jury opinions and two fixed
//! verdict templates. No model calls, no case inspection — just the house
//! voice on tap.

use crate::jury::JurorKind;
use crate::model::{DoctorVote, GamblerVote, JuryVotes, Ruling, SkepticVote, Verdict};
use rand::seq::SliceRandom;
use rand::Rng;

pub const MOCK_SKEPTIC_REAL: [&str; 2] = [
    "VERDICT: REAL\nCONFIDENCE: HIGH\nREASONING: Those eyes don't lie. I've seen that look a thousand times at the Bellagio buffet aftermath. This one's genuine.",
    "VERDICT: REAL\nCONFIDENCE: MEDIUM\nREASONING: Something in the way they're clenching their jaw... I've been doing this too long to be fooled. They're hurting.",
];

pub const MOCK_SKEPTIC_FAKE: [&str; 2] = [
    "VERDICT: FAKE\nCONFIDENCE: HIGH\nREASONING: Nice try, sweetheart. That smile says 'Instagram photo op,' not 'bathroom emergency.' I wasn't born yesterday.",
    "VERDICT: FAKE\nCONFIDENCE: MEDIUM\nREASONING: Twenty years on The Strip, and I know a bluff when I see one. Those relaxed shoulders scream 'I'm fine.'",
];

pub const MOCK_DOCTOR_CRITICAL: [&str; 2] = [
    "DIAGNOSIS: Acute Vesicular Hyperpressure Syndrome (AVHS)\nURGENCY: CRITICAL\nRECOMMENDATION: Grant access\nMEDICAL OPINION: The patient exhibits textbook Stage 4 Bladder Rebellion. Delay could result in... *dramatic pause* ...catastrophic public humiliation.",
    "DIAGNOSIS: Terminal Sphincter Fatigue with Secondary Urgency Cascade\nURGENCY: CRITICAL\nRECOMMENDATION: Grant access\nMEDICAL OPINION: I've seen this before in my years at Vegas General. The desperation markers are off the charts. This is a CODE BROWN situation.",
];

pub const MOCK_DOCTOR_STABLE: [&str; 2] = [
    "DIAGNOSIS: Mild Inconvenience Syndrome\nURGENCY: STABLE\nRECOMMENDATION: Deny access\nMEDICAL OPINION: The patient shows no signs of genuine distress. Vital signs are stable. They can hold it.",
    "DIAGNOSIS: Attention-Seeking Bladder Dramatics (ASBD)\nURGENCY: STABLE\nRECOMMENDATION: Deny access\nMEDICAL OPINION: This is a textbook case of exaggeration. No medical intervention required.",
];

pub const MOCK_GAMBLER_IN: [&str; 2] = [
    "THE CARDS SAY: LET THEM IN\nLUCKY NUMBER: 7\nGAMBLER'S WISDOM: I just felt a hot streak coming on. When Lady Luck whispers, you listen. Today's their day.",
    "THE CARDS SAY: LET THEM IN\nLUCKY NUMBER: 21\nGAMBLER'S WISDOM: Natural blackjack energy in the room. The cosmic dice have spoken. Let 'em through.",
];

pub const MOCK_GAMBLER_OUT: [&str; 2] = [
    "THE CARDS SAY: SEND THEM PACKING\nLUCKY NUMBER: 13\nGAMBLER'S WISDOM: Snake eyes. Double zeros. The house always wins, and right now, the house says no.",
    "THE CARDS SAY: SEND THEM PACKING\nLUCKY NUMBER: 4\nGAMBLER'S WISDOM: Bad juju in the air tonight. Mercury's in retrograde. Can't risk it.",
];

/// The fixed favorable template.
pub fn granted_template() -> Verdict {
    Verdict {
        verdict: Ruling::Granted,
        reasoning: "The Skeptic detected genuine terror. The Doctor diagnosed critical bladder failure. The Gambler's dice rolled lucky sevens.".into(),
        roast: "Jackpot, kid. The Porcelain Gods smile upon you today. Don't make me regret this.".into(),
        jury_votes: JuryVotes {
            skeptic: SkepticVote::Real,
            doctor: DoctorVote::Critical,
            gambler: GamblerVote::In,
        },
    }
}

/// The fixed unfavorable template.
pub fn denied_template() -> Verdict {
    Verdict {
        verdict: Ruling::Denied,
        reasoning: "The Skeptic saw through your act. The Doctor says you'll live. The Gambler drew snake eyes on your behalf.".into(),
        roast: "House wins, tourist. Find a Starbucks and buy a coffee like everyone else. This ain't your lucky day.".into(),
        jury_votes: JuryVotes {
            skeptic: SkepticVote::Fake,
            doctor: DoctorVote::Stable,
            gambler: GamblerVote::Out,
        },
    }
}

/// Pick a mock ruling: forced when `force_win` is set, 50/50 otherwise.
pub fn mock_ruling<R: Rng>(force_win: Option<bool>, rng: &mut R) -> Verdict {
    match force_win {
        Some(true) => granted_template(),
        Some(false) => denied_template(),
        None => {
            if rng.gen_bool(0.5) {
                granted_template()
            } else {
                denied_template()
            }
        }
    }
}

/// Pick a canned opinion for one juror: favorable, unfavorable, or any.
pub fn mock_juror_opinion<R: Rng>(
    juror: JurorKind,
    favorable: Option<bool>,
    rng: &mut R,
) -> &'static str {
    let (good, bad): (&[&'static str], &[&'static str]) = match juror {
        JurorKind::Skeptic => (&MOCK_SKEPTIC_REAL, &MOCK_SKEPTIC_FAKE),
        JurorKind::Doctor => (&MOCK_DOCTOR_CRITICAL, &MOCK_DOCTOR_STABLE),
        JurorKind::Gambler => (&MOCK_GAMBLER_IN, &MOCK_GAMBLER_OUT),
    };
    let pool: Vec<&'static str> = match favorable {
        Some(true) => good.to_vec(),
        Some(false) => bad.to_vec(),
        None => good.iter().chain(bad.iter()).copied().collect(),
    };
    pool.choose(rng).copied().unwrap_or(good[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn forced_rulings_are_fixed() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            mock_ruling(Some(true), &mut rng).verdict,
            Ruling::Granted
        );
        assert_eq!(
            mock_ruling(Some(false), &mut rng).verdict,
            Ruling::Denied
        );
    }

    #[test]
    fn unforced_rulings_cover_both_outcomes() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut granted = 0usize;
        let mut denied = 0usize;
        for _ in 0..64 {
            match mock_ruling(None, &mut rng).verdict {
                Ruling::Granted => granted += 1,
                Ruling::Denied => denied += 1,
            }
        }
        assert!(granted > 0, "never granted across 64 trials");
        assert!(denied > 0, "never denied across 64 trials");
    }

    #[test]
    fn mock_verdicts_keep_the_template_shape() {
        for template in [granted_template(), denied_template()] {
            let json = serde_json::to_value(&template).unwrap();
            let obj = json.as_object().unwrap();
            assert_eq!(obj.len(), 4);
            for key in ["verdict", "reasoning", "roast", "jury_votes"] {
                assert!(obj.contains_key(key), "missing {key}");
            }
            let votes = json["jury_votes"].as_object().unwrap();
            assert_eq!(votes.len(), 3);
            for key in ["skeptic", "doctor", "gambler"] {
                assert!(votes.contains_key(key), "missing {key}");
            }
        }
    }

    #[test]
    fn juror_opinions_respect_the_favorable_flag() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..16 {
            let op = mock_juror_opinion(JurorKind::Skeptic, Some(true), &mut rng);
            assert!(op.contains("VERDICT: REAL"));
            let op = mock_juror_opinion(JurorKind::Doctor, Some(false), &mut rng);
            assert!(op.contains("URGENCY: STABLE"));
            let op = mock_juror_opinion(JurorKind::Gambler, Some(true), &mut rng);
            assert!(op.contains("LET THEM IN"));
        }
    }

    #[test]
    fn unforced_juror_opinions_draw_from_both_pools() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..128 {
            seen.insert(mock_juror_opinion(JurorKind::Gambler, None, &mut rng));
        }
        assert!(seen.iter().any(|op| op.contains("LET THEM IN")));
        assert!(seen.iter().any(|op| op.contains("SEND THEM PACKING")));
    }
}
