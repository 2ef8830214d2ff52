//! Pair engine walkthrough.
//!
//! Seeds a pool between two assets held in an in-memory bank, trades in
//! both directions with exact-in and exact-out swaps, reads prices, and
//! withdraws the provider's position.
//!
//! # Run
//!
//! ```bash
//! cargo run --example pair_engine
//! ```

use std::sync::Arc;

use pairswap::prelude::*;

const WAD: u128 = 1_000_000_000_000_000_000;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== Pair engine (x · y = k, no fee) ===\n");

    // ── 1. Host capabilities ────────────────────────────────────────────
    let usd = AssetId::from_bytes([0x01; 32]);
    let eth = AssetId::from_bytes([0x02; 32]);
    let provider = AccountId::from_bytes([0x11; 32]);
    let trader = AccountId::from_bytes([0x22; 32]);
    let custody = AccountId::from_bytes([0xCC; 32]);

    let bank = InMemoryBank::new();
    bank.mint(&usd, &provider, Amount::new(5_000_000 * WAD))?;
    bank.mint(&eth, &provider, Amount::new(2_000 * WAD))?;
    bank.mint(&usd, &trader, Amount::new(100_000 * WAD))?;

    let clock = ManualClock::new(Timestamp::from_secs(1_700_000_000));
    let deadline = clock.now().saturating_add_secs(600);
    let sink = Arc::new(RecordingSink::new());

    let config = EngineConfig::default_with_custody(custody)?;
    let engine = PairEngine::new(config, bank, clock)?.with_event_sink(sink.clone());
    println!("Custody account: {}", config.custody());

    // ── 2. Seed the USD/ETH pool ────────────────────────────────────────
    let shares = engine.add_liquidity(
        provider,
        &AddLiquidity {
            asset_x: eth,
            asset_y: usd,
            amount_x: Amount::new(1_000 * WAD),
            amount_y: Amount::new(3_000_000 * WAD),
            min_x: Amount::ZERO,
            min_y: Amount::ZERO,
            recipient: provider,
            deadline,
        },
    )?;
    let (reserve_eth, reserve_usd) = engine.reserves(eth, usd)?;
    println!("\n--- Seed ---");
    println!("  Shares minted: {shares}");
    println!("  Reserve ETH:   {reserve_eth}");
    println!("  Reserve USD:   {reserve_usd}");
    println!("  ETH in USD:    {}", engine.get_price(eth, usd)?);

    // ── 3. Sell 30 000 USD for ETH ──────────────────────────────────────
    let amount_in = Amount::new(30_000 * WAD);
    let preview = engine.quote_swap(usd, eth, amount_in)?;
    let received = engine.swap_exact_in(
        trader,
        &SwapExactIn {
            asset_in: usd,
            asset_out: eth,
            amount_in,
            amount_out_min: preview,
            recipient: trader,
            deadline,
        },
    )?;
    println!("\n--- Swap exact in: {amount_in} USD ---");
    println!("  Quoted:        {preview}");
    println!("  Received ETH:  {received}");
    println!("  ETH in USD:    {}", engine.get_price(eth, usd)?);

    // ── 4. Buy exactly 1 ETH more ───────────────────────────────────────
    let amount_out = Amount::new(WAD);
    let cost = engine.quote_swap_exact_out(usd, eth, amount_out)?;
    let paid = engine.swap_exact_out(
        trader,
        &SwapExactOut {
            asset_in: usd,
            asset_out: eth,
            amount_out,
            amount_in_max: cost,
            recipient: trader,
            deadline,
        },
    )?;
    println!("\n--- Swap exact out: {amount_out} ETH ---");
    println!("  Paid USD:      {paid}");

    // ── 5. Slippage protection ──────────────────────────────────────────
    let greedy = SwapExactIn {
        asset_in: usd,
        asset_out: eth,
        amount_in: Amount::new(1_000 * WAD),
        amount_out_min: Amount::new(WAD),
        recipient: trader,
        deadline,
    };
    match engine.swap_exact_in(trader, &greedy) {
        Err(err) => println!("\nGreedy swap rejected: {err}"),
        Ok(out) => println!("\nGreedy swap unexpectedly filled: {out}"),
    }

    // ── 6. Withdraw everything ──────────────────────────────────────────
    let held = engine.share_balance(usd, eth, provider)?;
    let (out_usd, out_eth) = engine.remove_liquidity(
        provider,
        &RemoveLiquidity {
            asset_x: usd,
            asset_y: eth,
            shares: held,
            min_x: Amount::ZERO,
            min_y: Amount::ZERO,
            recipient: provider,
            deadline,
        },
    )?;
    println!("\n--- Remove liquidity ---");
    println!("  Burned:        {held}");
    println!("  USD returned:  {out_usd}");
    println!("  ETH returned:  {out_eth}");
    println!("  Pool reserves: {:?}", engine.reserves(usd, eth)?);

    // ── 7. Event log ────────────────────────────────────────────────────
    println!("\n--- Events ---");
    for event in sink.events() {
        println!("  {event:?}");
    }

    Ok(())
}
