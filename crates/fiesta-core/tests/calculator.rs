//! End-to-end checks of the calculator through its public API.

use fiesta_core::pricing::{quality_bonus, trend_factor};
use fiesta_core::{
    compute_price, convert_currency, market_tips, quote, tip_messages, CharacterClass, Copper,
    Item, ItemStats, MarketTip, MarketTrend, PriceBreakdown, Rarity, Stat, TrendDirection,
};

fn item_with(f: impl FnOnce(&mut Item)) -> Item {
    let mut item = Item::default();
    f(&mut item);
    item
}

#[test]
fn neutral_items_only_scale_with_level() {
    for level in [1u32, 10, 37, 99, 100, 150] {
        for base_price in [1u64, 100, 12_345] {
            let item = item_with(|i| {
                i.level = level;
                i.base_price = base_price;
            });
            let expected = (base_price as f64 * (1.0 + level as f64 / 100.0)).round() as u64;
            assert_eq!(compute_price(&item, None).amount(), expected);
        }
    }
}

#[test]
fn basic_example_prices_at_101() {
    assert_eq!(compute_price(&Item::default(), None), Copper::new(101));
}

#[test]
fn rarity_scales_price() {
    let prices: Vec<u64> = Rarity::ALL
        .into_iter()
        .map(|rarity| {
            let item = item_with(|i| {
                i.base_price = 1_000;
                i.level = 100;
                i.rarity = rarity;
            });
            compute_price(&item, None).amount()
        })
        .collect();
    assert_eq!(prices, vec![2_000, 3_000, 5_000, 8_000]);
}

#[test]
fn stats_bonus_cap_is_exactly_three_times() {
    let capped = item_with(|i| {
        i.base_price = 10_000;
        i.stats = ItemStats::default()
            .with(Stat::Damage, 200)
            .with(Stat::Strength, 200);
    });
    let bare = item_with(|i| i.base_price = 10_000);

    let ratio = compute_price(&capped, None).amount() as f64 / compute_price(&bare, None).amount() as f64;
    assert!((ratio - 3.0).abs() < 1e-3);
}

#[test]
fn quality_curve_matches_reference_points() {
    assert!((quality_bonus(50.0) - 1.0).abs() < 1e-12);
    assert!((quality_bonus(49.999_999) - 1.0).abs() < 1e-6);
    assert!((quality_bonus(80.0) - 1.5).abs() < 1e-12);
    assert!((quality_bonus(95.0) - 3.0).abs() < 1e-12);
    assert!((quality_bonus(100.0) - 5.0).abs() < 1e-12);
}

#[test]
fn market_trend_is_clamped() {
    let hot = MarketTrend::new(200.0, 1.0, TrendDirection::Rising);
    let cold = MarketTrend::new(1.0, 200.0, TrendDirection::Falling);
    let empty = MarketTrend::new(100.0, 0.0, TrendDirection::Stable);

    assert_eq!(trend_factor(&hot), 3.0);
    assert_eq!(trend_factor(&cold), 0.5);
    assert_eq!(trend_factor(&empty), 3.0);

    let item = item_with(|i| {
        i.base_price = 1_000;
        i.level = 100;
    });
    assert_eq!(compute_price(&item, Some(&hot)).amount(), 6_000);
    assert_eq!(compute_price(&item, Some(&cold)).amount(), 1_000);
    assert_eq!(compute_price(&item, Some(&MarketTrend::balanced())).amount(), 2_000);
}

#[test]
fn currency_breakdown_reconstructs_price() {
    let coins = convert_currency(Copper::new(1_234_567));
    assert_eq!((coins.gems, coins.gold, coins.silver, coins.copper), (1, 23, 45, 67));

    let mut amount = 1u64;
    while amount < u64::MAX / 7 {
        assert_eq!(convert_currency(Copper::new(amount)).total_copper().amount(), amount);
        amount = amount * 7 + 3;
    }
}

#[test]
fn endgame_joker_item_gets_six_tips() {
    let item = item_with(|i| {
        i.enhancement = 8;
        i.quality = 97.0;
        i.level = 120;
        i.class_restriction = Some(CharacterClass::Joker);
    });

    let tips = market_tips(&item, Copper::new(2_000_000));
    assert_eq!(
        tips,
        vec![
            MarketTip::HighEnhancement,
            MarketTip::PremiumStats,
            MarketTip::DpsClassDemand,
            MarketTip::SellInGems,
            MarketTip::EndgameDemand,
            MarketTip::CollectorsItem,
        ]
    );
    assert_eq!(tip_messages(&item, Copper::new(2_000_000)).len(), 6);
}

#[test]
fn pricing_does_not_mutate_item() {
    let item = item_with(|i| {
        i.rarity = Rarity::Legendary;
        i.enhancement = 9;
        i.quality = 100.0;
    });
    let before = item.clone();
    let _ = quote(&item, Some(&MarketTrend::new(150.0, 90.0, TrendDirection::Rising)));
    assert_eq!(item, before);
}

#[test]
fn quote_from_json_record() {
    let json = r#"{
        "id": "dragon-sword",
        "name": "Dragon Sword",
        "type": "weapon",
        "level": 100,
        "basePrice": 1000,
        "rarity": "epic",
        "classRestriction": "gladiator",
        "stats": { "damage": 40, "strength": 20 },
        "enhancement": 2,
        "quality": 50
    }"#;

    let item = Item::from_json(json).unwrap();
    let breakdown = PriceBreakdown::compute(&item, None);

    // 1000 × 2.0 × (1 + 0.6 + 0.18) × 1.5 × 2.5 × 1.3 × 1.0
    assert!((breakdown.stats_bonus - 0.78).abs() < 1e-12);
    assert_eq!(breakdown.price.amount(), 17_355);

    let quote = quote(&item, None);
    assert_eq!(quote.price, breakdown.price);
    assert_eq!(
        quote.tips,
        vec![MarketTip::DpsClassDemand, MarketTip::EndgameDemand]
    );
}

#[test]
fn invalid_json_records_are_rejected() {
    assert!(Item::from_json(r#"{ "quality": 101 }"#).is_err());
    assert!(Item::from_json(r#"{ "rarity": "mythic" }"#).is_err());
    assert!(Item::from_json(r#"{ "level": -3 }"#).is_err());
    assert!(Item::from_json(r#"{ "basePrice": 0 }"#).is_err());
}
