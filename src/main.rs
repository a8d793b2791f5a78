//! Main application entry point (CLI binary).
//!
//! A thin demo around the `partner_placements` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing every SDK event
//!
//! All core functionality is implemented in the library crate.

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;

use partner_placements::initialization::init_logger_with;
use partner_placements::{
    CurrencyValue, LogEvent, MerchantConfiguration, Opt, Order, PartnerEvent,
    PlacementConfiguration, PlacementData, PlacementsSdk, RtpsData, StaticTokenProvider,
};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();
    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let sdk = PlacementsSdk::new(opt.sdk_config()).context("Failed to initialize SDK")?;
    let merchant = MerchantConfiguration::default();
    let order = opt.price.map(|price| Order {
        total_price: Some(CurrencyValue::usd(price)),
        ..Default::default()
    });

    let events: Arc<Mutex<Vec<PartnerEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&events);
    let sink = Arc::new(move |event: PartnerEvent| {
        print_event(&event);
        if let Ok(mut seen) = recorder.lock() {
            seen.push(event);
        }
    });

    if opt.rtps {
        let config = PlacementConfiguration::Rtps(RtpsData {
            order,
            location_type: opt.location,
            mock_response: opt.mock_response,
            prescreen_id: opt.prescreen_id,
        });
        let tokens = StaticTokenProvider(opt.verification_token.clone());
        sdk.silent_rtps_request(&merchant, &config, &tokens, sink)
            .await;
        return Ok(());
    }

    let config = PlacementConfiguration::Placement(PlacementData {
        financing_type: opt.financing_type,
        location_type: opt.location,
        placement_id: opt.placement_id.clone(),
        dom_id: None,
        order,
    });

    if !opt.open_experience {
        sdk.register_placements(&merchant, &config, sink).await;
        return Ok(());
    }

    sdk.open_experience_for_placement(&merchant, &config, sink.clone())
        .await;
    let popup = events.lock().ok().and_then(|seen| {
        seen.iter().find_map(|event| match event {
            PartnerEvent::RenderPopup(model) => Some(model.clone()),
            _ => None,
        })
    });
    if let Some(popup) = popup.filter(|p| p.primary_action.content_fetch_id.is_some()) {
        if let Some(web_view) = sdk
            .fetch_web_view_placement(&merchant, &config, &popup, sink)
            .await
        {
            println!(
                "{} follow-up content for '{}' ({} bytes of HTML)",
                "➡️".cyan(),
                web_view.model.primary_action.label,
                web_view.html_content.len()
            );
        }
    }
    Ok(())
}

fn print_event(event: &PartnerEvent) {
    match event {
        PartnerEvent::RenderTextPlacement(response) => println!(
            "{} inline placements: {} placement(s), {} content entr(ies)",
            "✅".green(),
            response.placements.len(),
            response.placement_content.len()
        ),
        PartnerEvent::RenderPopup(model) => println!(
            "{} overlay: {} [{}]",
            "✅".green(),
            model.title.as_deref().unwrap_or("(untitled)"),
            model.primary_action.label
        ),
        PartnerEvent::ChallengeCompleted => println!("{} challenge completed", "✅".green()),
        PartnerEvent::ChallengeCancelled => println!("{} challenge cancelled", "⚠️".yellow()),
        PartnerEvent::PrescreenResult(result) => println!(
            "{} prescreen: id={:?} return code={:?}",
            "✅".green(),
            result.prescreen_id,
            result.return_code
        ),
        PartnerEvent::SdkError(error) => eprintln!("{} {}", "❌".red(), error),
        PartnerEvent::Log(LogEvent::Request(request)) => {
            println!("{} {} {}", "-->".blue(), request.method, request.url)
        }
        PartnerEvent::Log(LogEvent::ChallengeLoadFailed {
            original_url,
            message,
        }) => eprintln!("{} challenge page {}: {}", "⚠️".yellow(), original_url, message),
        PartnerEvent::Log(LogEvent::Response(response)) => match response.status {
            Some(status) => println!("{} {} {}", "<--".blue(), status, response.url),
            None => println!(
                "{} {} {}",
                "<--".blue(),
                response.url,
                response.error.as_deref().unwrap_or("no response")
            ),
        },
    }
}
