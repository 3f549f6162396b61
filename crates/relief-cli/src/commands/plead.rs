use crate::args::PleadArgs;
use relief_core::model::{Ruling, Verdict};
use relief_core::{run_court_of_relief, Court};

pub async fn cmd_plead(args: PleadArgs) -> anyhow::Result<i32> {
    let court = Court::from_env();

    let image = args
        .image
        .as_deref()
        .map(super::load_face_image)
        .transpose()?;
    let mock_override = if args.mock {
        Some(true)
    } else if args.live {
        Some(false)
    } else {
        None
    };

    let verdict = run_court_of_relief(&court, args.plea, image, args.demo, mock_override).await;
    print_verdict(&verdict);
    Ok(exit_code(verdict.verdict))
}

fn exit_code(ruling: Ruling) -> i32 {
    match ruling {
        Ruling::Granted => 0,
        Ruling::Denied => 1,
    }
}

fn print_verdict(verdict: &Verdict) {
    let emoji = match verdict.verdict {
        Ruling::Granted => "✅",
        Ruling::Denied => "❌",
    };
    let bar = "=".repeat(60);
    println!();
    println!("{bar}");
    println!("{emoji} VERDICT: {}", vote_label(&verdict.verdict));
    println!("{bar}");
    println!();
    println!("🎲 JURY VOTES:");
    println!("   The Skeptic: {}", vote_label(&verdict.jury_votes.skeptic));
    println!("   The Doctor:  {}", vote_label(&verdict.jury_votes.doctor));
    println!("   The Gambler: {}", vote_label(&verdict.jury_votes.gambler));
    println!();
    println!("📋 REASONING:");
    println!("   {}", verdict.reasoning);
    println!();
    println!("🎤 THE PIT BOSS SAYS:");
    println!("   \"{}\"", verdict.roast);
    println!("{bar}");
}

fn vote_label(value: &impl std::fmt::Debug) -> String {
    format!("{value:?}").to_uppercase()
}
