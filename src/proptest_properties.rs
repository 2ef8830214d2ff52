//! Property-based tests using `proptest` for pool invariants.
//!
//! 1. **Output bound and monotonicity**: `quote_output < reserve_out`,
//!    non-decreasing in `amount_in`.
//! 2. **Inverse quote**: `quote_input` is the smallest sufficient input.
//! 3. **Product preservation**: swaps never decrease `reserve_low × reserve_high`.
//! 4. **Liquidity round trip**: add then remove never returns more than
//!    deposited.
//! 5. **Share accounting**: total shares equal the sum of balances.
//! 6. **Swap reversibility**: a round trip never gains value.

#![allow(clippy::panic)]

use proptest::prelude::*;

use crate::config::EngineConfig;
use crate::domain::{
    AccountId, AddLiquidity, Amount, AssetId, AssetPairKey, RemoveLiquidity, Shares, SwapExactIn,
    Timestamp,
};
use crate::engine::PairEngine;
use crate::host::{InMemoryBank, ManualClock};
use crate::math::{quote_input, quote_output};
use crate::traits::{LiquidityManager, SwapEngine};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

type Engine = PairEngine<InMemoryBank, ManualClock>;

const FUNDING: u128 = 1_000_000_000_000_000_000_000_000_000_000; // 10^30

fn asset_a() -> AssetId {
    AssetId::from_bytes([1u8; 32])
}

fn asset_b() -> AssetId {
    AssetId::from_bytes([2u8; 32])
}

fn account(tag: u8) -> AccountId {
    AccountId::from_bytes([tag; 32])
}

fn pair() -> AssetPairKey {
    let Ok(key) = AssetPairKey::new(asset_a(), asset_b()) else {
        panic!("distinct assets");
    };
    key
}

fn make_engine(accounts: &[AccountId]) -> Engine {
    let bank = InMemoryBank::new();
    for who in accounts {
        for asset in [asset_a(), asset_b()] {
            let Ok(()) = bank.mint(&asset, who, Amount::new(FUNDING)) else {
                panic!("mint");
            };
        }
    }
    let Ok(config) = EngineConfig::default_with_custody(account(0xCC)) else {
        panic!("valid config");
    };
    let Ok(engine) = PairEngine::new(config, bank, ManualClock::new(Timestamp::from_secs(0))) else {
        panic!("engine");
    };
    engine
}

fn deposit(x: AssetId, y: AssetId, ax: u128, ay: u128, who: AccountId) -> AddLiquidity {
    AddLiquidity {
        asset_x: x,
        asset_y: y,
        amount_x: Amount::new(ax),
        amount_y: Amount::new(ay),
        min_x: Amount::ZERO,
        min_y: Amount::ZERO,
        recipient: who,
        deadline: Timestamp::MAX,
    }
}

fn sell(asset_in: AssetId, asset_out: AssetId, amount: u128, who: AccountId) -> SwapExactIn {
    SwapExactIn {
        asset_in,
        asset_out,
        amount_in: Amount::new(amount),
        amount_out_min: Amount::ZERO,
        recipient: who,
        deadline: Timestamp::MAX,
    }
}

fn seeded(ra: u128, rb: u128, accounts: &[AccountId]) -> Engine {
    let engine = make_engine(accounts);
    let Ok(_) = engine.add_liquidity(accounts[0], &deposit(asset_a(), asset_b(), ra, rb, accounts[0]))
    else {
        panic!("seed");
    };
    engine
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserves from dust-sized to 10^12 whole 18-decimal units.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    prop_oneof![
        1_000u128..=10_000_000u128,
        1_000_000_000_000_000_000u128..=1_000_000_000_000_000_000_000_000_000_000u128,
    ]
}

fn trade_strategy() -> impl Strategy<Value = Vec<(bool, u128)>> {
    prop::collection::vec((any::<bool>(), 1u128..=1_000_000_000_000_000_000_000u128), 1..12)
}

// ---------------------------------------------------------------------------
// Property 1: Output bound and monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_output_below_reserve_and_monotonic(
        rin in reserve_strategy(),
        rout in reserve_strategy(),
        a in 1u128..=FUNDING,
        b in 1u128..=FUNDING,
    ) {
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        let Ok(out_small) = quote_output(Amount::new(small), Amount::new(rin), Amount::new(rout)) else {
            return Err(TestCaseError::fail("quote for small input"));
        };
        let Ok(out_large) = quote_output(Amount::new(large), Amount::new(rin), Amount::new(rout)) else {
            return Err(TestCaseError::fail("quote for large input"));
        };
        prop_assert!(out_large < Amount::new(rout));
        prop_assert!(
            out_small <= out_large,
            "output must not decrease: {} > {}",
            out_small, out_large
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: Inverse quote
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_quote_input_is_minimal(
        rin in reserve_strategy(),
        rout in reserve_strategy(),
        fraction in 1u128..=999u128,
    ) {
        let want = (rout / 1_000 * fraction).max(1);
        if want >= rout { return Ok(()); }
        let (rin, rout) = (Amount::new(rin), Amount::new(rout));

        let Ok(needed) = quote_input(Amount::new(want), rin, rout) else {
            return Ok(());
        };
        let Ok(got) = quote_output(needed, rin, rout) else {
            return Err(TestCaseError::fail("forward quote"));
        };
        prop_assert!(got >= Amount::new(want), "needed {} only yields {}", needed, got);

        if needed.get() > 1 {
            let Ok(short) = quote_output(Amount::new(needed.get() - 1), rin, rout) else {
                return Err(TestCaseError::fail("forward quote"));
            };
            prop_assert!(short < Amount::new(want), "{} is not minimal", needed);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Product preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swaps_never_decrease_product(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        trades in trade_strategy(),
    ) {
        let trader = account(0x22);
        let engine = seeded(ra, rb, &[account(0x11), trader]);
        let mut last = engine.ledger().snapshot(&pair()).invariant();

        for (a_to_b, amount) in trades {
            let request = if a_to_b {
                sell(asset_a(), asset_b(), amount, trader)
            } else {
                sell(asset_b(), asset_a(), amount, trader)
            };
            // Dust trades are rejected; the pool must be unchanged then.
            let _ = engine.swap_exact_in(trader, &request);
            let now = engine.ledger().snapshot(&pair()).invariant();
            prop_assert!(now >= last, "product decreased: {:?} < {:?}", now, last);
            last = now;
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Liquidity round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_add_remove_never_profits(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in 1u128..=FUNDING / 10,
        db in 1u128..=FUNDING / 10,
    ) {
        let lp = account(0x33);
        let engine = seeded(ra, rb, &[account(0x11), lp]);

        let Ok(minted) = engine.add_liquidity(lp, &deposit(asset_a(), asset_b(), da, db, lp)) else {
            return Ok(());
        };
        let paid_a = FUNDING - engine.transfer().balance_of(&asset_a(), &lp).get();
        let paid_b = FUNDING - engine.transfer().balance_of(&asset_b(), &lp).get();

        let request = RemoveLiquidity {
            asset_x: asset_a(),
            asset_y: asset_b(),
            shares: minted,
            min_x: Amount::ZERO,
            min_y: Amount::ZERO,
            recipient: lp,
            deadline: Timestamp::MAX,
        };
        let Ok((got_a, got_b)) = engine.remove_liquidity(lp, &request) else {
            return Err(TestCaseError::fail("removing freshly minted shares"));
        };
        prop_assert!(got_a.get() <= paid_a, "asset a: got {} > paid {}", got_a, paid_a);
        prop_assert!(got_b.get() <= paid_b, "asset b: got {} > paid {}", got_b, paid_b);

        // Pool ratio is unchanged up to rounding retained by the pool.
        let Ok((after_a, after_b)) = engine.reserves(asset_a(), asset_b()) else {
            return Err(TestCaseError::fail("reserves"));
        };
        prop_assert!(after_a.get() >= ra && after_b.get() >= rb);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Share accounting
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_total_shares_equal_balances(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        ops in prop::collection::vec((0usize..3, any::<bool>(), 1u128..=FUNDING / 100), 1..16),
    ) {
        let holders = [account(0x11), account(0x12), account(0x13)];
        let engine = seeded(ra, rb, &holders);

        for (who, add, amount) in ops {
            let holder = holders[who];
            if add {
                let _ = engine.add_liquidity(
                    holder,
                    &deposit(asset_b(), asset_a(), amount, amount, holder),
                );
            } else {
                let Ok(held) = engine.share_balance(asset_a(), asset_b(), holder) else {
                    return Err(TestCaseError::fail("balance"));
                };
                let burn = Shares::new(held.get().min(amount));
                let _ = engine.remove_liquidity(holder, &RemoveLiquidity {
                    asset_x: asset_a(),
                    asset_y: asset_b(),
                    shares: burn,
                    min_x: Amount::ZERO,
                    min_y: Amount::ZERO,
                    recipient: holder,
                    deadline: Timestamp::MAX,
                });
            }

            let mut sum = 0u128;
            for h in holders {
                let Ok(s) = engine.share_balance(asset_a(), asset_b(), h) else {
                    return Err(TestCaseError::fail("balance"));
                };
                sum += s.get();
            }
            let snapshot = engine.ledger().snapshot(&pair());
            prop_assert_eq!(snapshot.total_shares.get(), sum);
            if !snapshot.total_shares.is_zero() {
                prop_assert!(snapshot.has_liquidity());
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6: Swap reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_round_trip_loses_value(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        divisor in 2u128..=10_000u128,
    ) {
        let trader = account(0x22);
        let engine = seeded(ra, rb, &[account(0x11), trader]);
        let swap_in = (ra / divisor).max(1);

        let Ok(received) = engine.swap_exact_in(trader, &sell(asset_a(), asset_b(), swap_in, trader)) else {
            return Ok(());
        };
        let Ok(back) = engine.swap_exact_in(trader, &sell(asset_b(), asset_a(), received.get(), trader)) else {
            return Ok(());
        };
        prop_assert!(
            back.get() <= swap_in,
            "round-trip should not gain: back={} > original={}",
            back, swap_in
        );
    }
}
