// ============================================
// Similarity Signals (相似度信号)
// ============================================
//
// Three independent, stateless signals for a (target, candidate) pair:
// - Tag similarity: Jaccard index over lower-cased tag sets
// - Category boost: fixed bonus on exact category match
// - Price similarity: min/max price ratio scaled to a cap

use crate::models::Category;
use std::collections::HashSet;

/// Lower-case and deduplicate a tag list
pub fn normalize_tags(tags: &[String]) -> HashSet<String> {
    tags.iter().map(|t| t.to_lowercase()).collect()
}

/// Jaccard similarity of two tag lists, case-insensitive
///
/// Two empty sets score 0.0.
pub fn tag_similarity(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }

    let set_a = normalize_tags(a);
    let set_b = normalize_tags(b);

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Raw bonus when both items share a category
pub fn category_boost(a: Category, b: Category, boost: f64) -> f64 {
    if a == b {
        boost
    } else {
        0.0
    }
}

/// Price proximity in [0, max_contribution]
///
/// When the larger price is zero both items are free and count as identical.
pub fn price_similarity(price_a: f64, price_b: f64, max_contribution: f64) -> f64 {
    if !price_a.is_finite() || !price_b.is_finite() {
        return 0.0;
    }

    let max_price = price_a.max(price_b);
    let min_price = price_a.min(price_b);

    if max_price <= 0.0 {
        return max_contribution;
    }

    let ratio = (min_price / max_price).clamp(0.0, 1.0);
    ratio * max_contribution
}
