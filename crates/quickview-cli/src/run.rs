//! Command handlers. Each builds a fresh widget for one run; failures the
//! widget already showed as notices are still returned so the exit code
//! reflects them.

use std::time::Duration;

use quickview_core::AppConfig;
use quickview_storefront::StorefrontClient;
use quickview_widget::{OpenOutcome, QuickView, SubmitOutcome, WidgetSettings};

use crate::terminal::TerminalView;

type TerminalQuickView = QuickView<StorefrontClient, TerminalView>;

fn build_quick_view(config: &AppConfig) -> anyhow::Result<TerminalQuickView> {
    let client = StorefrontClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build storefront client: {e}"))?;
    Ok(QuickView::new(
        client,
        TerminalView::default(),
        WidgetSettings::from_config(config),
    ))
}

async fn open(qv: &TerminalQuickView, handle: &str) -> anyhow::Result<()> {
    match qv.open(handle).await? {
        OpenOutcome::Opened => Ok(()),
        OpenOutcome::Busy => anyhow::bail!("another product is still loading"),
    }
}

pub(crate) async fn run_show(config: &AppConfig, handle: &str) -> anyhow::Result<()> {
    let qv = build_quick_view(config)?;
    open(&qv, handle).await?;
    println!("{}", qv.view().render());
    Ok(())
}

/// Opens `handle`, applies `selections` to slots 0.. in order, and submits.
///
/// With `wait`, the delayed label revert and auto-close run before returning.
pub(crate) async fn run_add(
    config: &AppConfig,
    handle: &str,
    selections: &[String],
    wait: bool,
) -> anyhow::Result<()> {
    let qv = build_quick_view(config)?;
    open(&qv, handle).await?;

    for (slot, value) in selections.iter().enumerate() {
        qv.select(slot, value)?;
    }
    println!("{}", qv.view().render());

    match qv.submit().await? {
        SubmitOutcome::Added(receipt) => {
            let ids: Vec<String> = receipt.items.iter().map(|i| i.id.to_string()).collect();
            println!("added to cart: [{}]", ids.join(", "));
            if receipt.bonus.is_some() {
                println!("bonus item included");
            }
        }
        SubmitOutcome::Busy => anyhow::bail!("a submit is already in progress"),
    }

    if wait {
        run_scheduled(&qv).await;
    }
    Ok(())
}

/// Runs deferred actions at their delays, measured from now.
async fn run_scheduled(qv: &TerminalQuickView) {
    let mut scheduled = qv.view().take_scheduled();
    scheduled.sort_by_key(|(after, _)| *after);

    let mut elapsed = Duration::ZERO;
    for (after, action) in scheduled {
        tokio::time::sleep(after.saturating_sub(elapsed)).await;
        elapsed = elapsed.max(after);
        tracing::debug!(?action, "running deferred action");
        qv.run_deferred(action);
    }
}

pub(crate) async fn run_cart(config: &AppConfig) -> anyhow::Result<()> {
    let client = StorefrontClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build storefront client: {e}"))?;
    let cart = client.fetch_cart().await?;
    println!("cart: {} item(s)", cart.item_count);
    Ok(())
}
