use crate::args::ScanArgs;
use relief_core::config::CourtConfig;
use relief_core::providers::anthropic::AnthropicClient;
use relief_core::vision::desperation_report;

pub async fn cmd_scan(args: ScanArgs) -> anyhow::Result<i32> {
    let config = CourtConfig::from_env();
    let client = AnthropicClient::new(&config);
    let image = super::load_face_image(&args.image)?;

    let report = desperation_report(&client, &image).await;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(i32::from(!report.is_desperate))
}
