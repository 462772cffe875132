//! Test fixtures and factory functions for day files.

use serde_json::json;

/// A well-formed day: 4 cards of 6 questions, `Q<card>-<question>?`.
pub fn day_content(date: &str) -> String {
    (0..24)
        .map(|i| {
            format!(
                "{date}\t{}\tTopic {}\tSub {}\tQ{}-{}?\tA{}-{}\tcard{}.png\n",
                i + 1,
                i / 6,
                i % 6,
                i / 6,
                i % 6,
                i / 6,
                i % 6,
                i / 6
            )
        })
        .collect()
}

/// The literal well-formed line repeated for a whole day.
pub fn repeated_day() -> String {
    "2025-04-24\t1\tHistory\tAncient\tWho?\tCaesar\timg1.png\n".repeat(24)
}

/// A day whose sixth line is missing its image field.
pub fn day_with_short_line(date: &str) -> String {
    let mut lines: Vec<String> = day_content(date).lines().map(String::from).collect();
    lines[5] = format!("{date}\t6\tTopic\tSub\tQuestion?\tAnswer");
    lines.join("\n")
}

/// A day with only two cards.
pub fn truncated_day(date: &str) -> String {
    day_content(date).lines().take(12).collect::<Vec<_>>().join("\n")
}

/// Body of a load request.
pub fn load_request(date: &str) -> serde_json::Value {
    json!({ "date": date })
}
