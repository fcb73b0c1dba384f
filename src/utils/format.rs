//! Display helpers for skip records. Everything here is pure.

use crate::models::skip::Skip;

/// Sizes with a photo in the public folder, ascending.
const SKIP_IMAGES: [(u32, &str); 10] = [
    (4, "4-yarder-skip.jpg"),
    (5, "5-yarder-skip.jpg"),
    (6, "6-yarder-skip.jpg"),
    (8, "8-yarder-skip.jpg"),
    (10, "10-yarder-skip.jpg"),
    (12, "12-yarder-skip.jpg"),
    (14, "14-yarder-skip.jpg"),
    (16, "16-yarder-skip.jpg"),
    (20, "20-yarder-skip.jpg"),
    (40, "40-yarder-skip.jpg"),
];

/// Image path for a skip. Unmapped sizes use the closest mapped size; on a
/// tie the smaller one wins.
pub fn skip_image_url(skip: &Skip) -> String {
    image_for_size(skip.size)
}

fn image_for_size(size: u32) -> String {
    let file = SKIP_IMAGES
        .iter()
        .find(|(mapped, _)| *mapped == size)
        .or_else(|| {
            SKIP_IMAGES
                .iter()
                .min_by_key(|(mapped, _)| mapped.abs_diff(size))
        })
        .map_or("4-yarder-skip.jpg", |(_, file)| *file);

    format!("/{file}")
}

pub fn format_hire_period(skip: &Skip) -> String {
    match skip.hire_period_days {
        1 => "1 day".to_string(),
        7 => "1 week".to_string(),
        14 => "2 weeks".to_string(),
        21 => "3 weeks".to_string(),
        28 => "4 weeks".to_string(),
        days => format!("{days} days"),
    }
}

/// Short marketing blurb keyed on capacity band.
pub fn capacity_description(skip: &Skip) -> &'static str {
    match skip.size {
        0..=4 => "Perfect for small household clearouts and garden waste",
        5..=6 => "Ideal for bathroom renovations and small building projects",
        7..=8 => "Great for kitchen renovations and medium household clearouts",
        9..=12 => "Suitable for large home renovations and construction projects",
        13..=16 => "Perfect for major building work and large-scale clearouts",
        17..=20 => "Ideal for commercial projects and extensive renovations",
        _ => "Perfect for large commercial and industrial projects",
    }
}

/// Hire length plus placement and waste restrictions, joined with bullets.
pub fn usage_notes(skip: &Skip) -> String {
    let mut notes = vec![format!("{} day hire period", skip.hire_period_days)];
    notes.push(if skip.allowed_on_road {
        "Road placement allowed".to_string()
    } else {
        "Private property only".to_string()
    });
    if skip.allows_heavy_waste {
        notes.push("Heavy waste accepted".to_string());
    }
    if skip.forbidden {
        notes.push("Special restrictions apply".to_string());
    }
    notes.join(" • ")
}

/// Formats an amount as pounds sterling, en-GB style: `£1,234.50`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "amount is made non-negative and rounded to pence first"
)]
pub fn format_price(amount: f64) -> String {
    let pence = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && pence > 0 { "-" } else { "" };
    format!("{sign}£{}.{:02}", group_thousands(pence / 100), pence % 100)
}

/// Drops the pence when the amount is whole: `240` or `240.50`.
pub fn format_compact_price(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}

pub fn availability_label(count: usize) -> String {
    if count == 1 {
        "1 Skip Available".to_string()
    } else {
        format!("{count} Skips Available")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
