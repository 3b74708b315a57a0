//! Text rendering of a price quote.
//!
//! ```text
//! Shadow Blade [legendary weapon, Lv 120, +8]
//! Price:    1,234,567 copper
//! Coins:    1 gems 23 gold 45 silver 67 copper
//! Quality:  Blue stats - premium! (97%)
//!
//! Tips:
//!   - Very high enhancement - top price possible!
//! ```

use fiesta_core::{Item, PriceQuote};

const UNNAMED: &str = "Unnamed item";

/// Formats the result card for a terminal.
pub fn render_text(item: &Item, quote: &PriceQuote, show_breakdown: bool) -> String {
    let mut lines = vec![
        headline(item),
        format!("Price:    {}", quote.price),
        format!("Coins:    {}", quote.currency),
        format!("Quality:  {} ({}%)", quote.quality_tier, item.quality),
    ];

    if show_breakdown {
        let breakdown = &quote.breakdown;
        lines.push(String::new());
        lines.push("Breakdown:".to_string());
        lines.push(format!("  {:<12} {}", "base", breakdown.base_price));
        for (stage, factor) in breakdown.stages() {
            lines.push(format!("  {:<12} x{:.4}", stage, factor));
        }
        lines.push(format!("  {:<12} {:.2}", "unrounded", breakdown.unrounded));
    }

    if !quote.tips.is_empty() {
        lines.push(String::new());
        lines.push("Tips:".to_string());
        for tip in &quote.tips {
            lines.push(format!("  - {}", tip));
        }
    }

    lines.join("\n")
}

fn headline(item: &Item) -> String {
    let name = if item.name.trim().is_empty() {
        UNNAMED
    } else {
        item.name.trim()
    };

    let mut details = format!("{} {}, Lv {}", item.rarity, item.item_type, item.level);
    if item.enhancement > 0 {
        details.push_str(&format!(", +{}", item.enhancement));
    }
    if let Some(class) = item.class_restriction {
        details.push_str(&format!(", {} only", class));
    }

    format!("{} [{}]", name, details)
}

// =============================================================================
// Unit Tests
// =============================================================================
