use product_recommendation::services::similarity::tag_similarity;
use product_recommendation::{recommend, trending, Category, Item, ScoringWeights};
use proptest::prelude::*;
use std::collections::HashSet;

const CATEGORIES: [Category; 4] = [
    Category::Electronics,
    Category::Books,
    Category::Sports,
    Category::Toys,
];

fn tag_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-dA-D]{1,2}", 0..6)
}

fn item_strategy() -> impl Strategy<Value = Item> {
    (
        "[a-z]{1,3}",
        0..CATEGORIES.len(),
        0.0f64..500.0,
        tag_list(),
        0.0f64..=5.0,
        0u32..1000,
    )
        .prop_map(|(id, category, price, tags, rating, reviews)| {
            Item::new(id, "item", CATEGORIES[category], price)
                .with_tags(tags)
                .with_stock(1)
                .with_rating(rating, reviews)
        })
}

proptest! {
    #[test]
    fn jaccard_is_symmetric(a in tag_list(), b in tag_list()) {
        prop_assert_eq!(tag_similarity(&a, &b), tag_similarity(&b, &a));
    }

    #[test]
    fn jaccard_in_unit_range(a in tag_list(), b in tag_list()) {
        let sim = tag_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&sim));
    }

    #[test]
    fn jaccard_identical_non_empty_is_one(a in prop::collection::vec("[a-z]{1,4}", 1..6)) {
        let upper: Vec<String> = a.iter().map(|t| t.to_uppercase()).collect();
        prop_assert!((tag_similarity(&a, &upper) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn default_score_in_unit_range(target in item_strategy(), candidate in item_strategy()) {
        let weights = ScoringWeights::default();
        let score = weights.score(&target, &candidate).total();
        prop_assert!(score >= 0.0);
        prop_assert!(score <= weights.max_score() + 1e-9, "score {} exceeds max", score);
    }

    #[test]
    fn recommend_output_is_ordered_and_unique(
        target in item_strategy(),
        candidates in prop::collection::vec(item_strategy(), 0..25),
        count in 1i64..12,
        threshold in 0.0f64..0.8,
    ) {
        let ranked = recommend(&target, &candidates, count, None, Some(threshold)).unwrap();

        prop_assert!(ranked.len() as i64 <= count);
        prop_assert!(ranked.iter().all(|c| c.item.id != target.id));

        let unique: HashSet<&str> = ranked.iter().map(|c| c.id()).collect();
        prop_assert_eq!(unique.len(), ranked.len());

        // Qualified prefix sorted by score, then id; backfill tail same category
        let split = ranked.iter().position(|c| c.score < threshold).unwrap_or(ranked.len());
        for pair in ranked[..split].windows(2) {
            prop_assert!(
                pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score && pair[0].id() < pair[1].id())
            );
        }
        for c in &ranked[split..] {
            prop_assert!(c.score < threshold);
            prop_assert_eq!(c.item.category, target.category);
        }

        // Expected pools from first-occurrence, non-target candidates
        let weights = ScoringWeights::default();
        let mut seen = HashSet::new();
        let pool: Vec<(f64, &Item)> = candidates
            .iter()
            .filter(|c| c.id != target.id && seen.insert(c.id.as_str()))
            .map(|c| (weights.score(&target, c).total(), c))
            .collect();
        let qualified = pool.iter().filter(|(s, _)| *s >= threshold).count();
        let mut leftovers: Vec<(f64, &str)> = pool
            .iter()
            .filter(|(s, c)| *s < threshold && c.category == target.category)
            .map(|(s, c)| (*s, c.id.as_str()))
            .collect();
        leftovers.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));

        let limit = count as usize;
        prop_assert_eq!(ranked.len(), limit.min(qualified + leftovers.len()));
        prop_assert_eq!(split, qualified.min(limit));

        let tail: Vec<&str> = ranked[split..].iter().map(|c| c.id()).collect();
        let expected_tail: Vec<&str> = leftovers
            .iter()
            .take(limit - split)
            .map(|(_, id)| *id)
            .collect();
        prop_assert_eq!(tail, expected_tail);
    }

    #[test]
    fn trending_output_is_ordered(
        candidates in prop::collection::vec(item_strategy(), 0..25),
        count in 1i64..12,
    ) {
        let ranked = trending(&candidates, count).unwrap();

        prop_assert_eq!(ranked.len(), candidates.len().min(count as usize));
        for pair in ranked.windows(2) {
            prop_assert!(
                pair[0].rating > pair[1].rating
                    || (pair[0].rating == pair[1].rating && pair[0].num_reviews >= pair[1].num_reviews)
            );
        }
    }
}
