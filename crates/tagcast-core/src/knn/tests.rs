#[cfg(test)]
#[allow(clippy::module_inception)]
mod tests {
    use crate::catalog::{Catalog, CatalogEntry, TagSet};
    use crate::error::TagcastError;
    use crate::knn::{predict, Engagement, KnnPredictor, Query};
    use crate::similarity::jaccard_distance;

    fn two_video_catalog() -> Catalog {
        Catalog::new(vec![
            CatalogEntry::new("v1", ["dance"], 100, 10, 1),
            CatalogEntry::new("v2", ["dance", "fun"], 200, 20, 2),
        ])
    }

    fn ids<'a>(prediction: &'a crate::knn::Prediction<'_>) -> Vec<&'a str> {
        prediction
            .neighbours
            .iter()
            .map(|n| n.entry.id.as_str())
            .collect()
    }

    const TAG_POOL: [&str; 15] = [
        "dance", "funny", "cat", "dog", "challenge", "meme", "food", "travel", "fitness",
        "makeup", "gaming", "tutorial", "music", "comedy", "sports",
    ];

    /// Deterministic catalog with a small vocabulary, so distance ties are common
    fn generated_catalog(n: usize) -> Catalog {
        (0..n)
            .map(|i| {
                let tag_count = 1 + i % 4;
                let tags = (0..tag_count).map(|j| TAG_POOL[(i * 7 + j * 3) % TAG_POOL.len()]);
                let views = 1_000 + (i as u64 * 7_919) % 1_000_000;
                CatalogEntry::new(
                    format!("{}", i + 1),
                    tags,
                    views,
                    views / 10,
                    views / 50,
                )
            })
            .collect()
    }

    #[test]
    fn test_exact_match_ranks_first() {
        let catalog = two_video_catalog();
        let query = Query::parse(2, "dance", ';').unwrap();

        let prediction = predict(&catalog, &query).unwrap();

        assert_eq!(ids(&prediction), vec!["v1", "v2"]);
        assert_eq!(prediction.neighbours[0].distance, 0.0);
        assert_eq!(prediction.neighbours[1].distance, 0.5);
        assert_eq!(
            prediction.predicted,
            Engagement {
                views: 150,
                likes: 15,
                comments: 1
            }
        );
    }

    #[test]
    fn test_unrelated_query_ties_keep_catalog_order() {
        let catalog = two_video_catalog();
        let query = Query::parse(2, "unrelated", ';').unwrap();

        let prediction = predict(&catalog, &query).unwrap();

        assert_eq!(ids(&prediction), vec!["v1", "v2"]);
        assert!(prediction.neighbours.iter().all(|n| n.distance == 1.0));
        assert_eq!(prediction.predicted.views, 150);
        assert_eq!(prediction.predicted.likes, 15);
        assert_eq!(prediction.predicted.comments, 1);
    }

    #[test]
    fn test_k_larger_than_catalog_is_clamped() {
        let catalog = two_video_catalog();
        let query = Query::parse(5, "dance", ';').unwrap();

        let prediction = predict(&catalog, &query).unwrap();

        assert_eq!(prediction.k(), 2);
        assert_eq!(prediction.requested_k, 5);
        assert_eq!(prediction.catalog_size, 2);
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let catalog = Catalog::default();
        let query = Query::parse(1, "dance", ';').unwrap();

        let err = predict(&catalog, &query).unwrap_err();
        assert!(matches!(err, TagcastError::EmptyDataset { .. }));
        assert!(KnnPredictor::new(&catalog).is_err());
    }

    #[test]
    fn test_empty_query_tags_rejected_before_scan() {
        let err = Query::parse(2, "", ';').unwrap_err();
        assert!(matches!(err, TagcastError::InvalidArgument(_)));
    }

    #[test]
    fn test_single_neighbour() {
        let catalog = two_video_catalog();
        let query = Query::parse(1, "fun", ';').unwrap();

        let prediction = predict(&catalog, &query).unwrap();

        assert_eq!(ids(&prediction), vec!["v2"]);
        assert_eq!(prediction.predicted.views, 200);
    }

    #[test]
    fn test_result_shape_invariants() {
        let catalog = generated_catalog(200);

        for k in [1, 3, 10, 199, 200, 500] {
            for raw in ["dance", "cat;dog", "music;comedy;sports", "nothing"] {
                let query = Query::parse(k, raw, ';').unwrap();
                let prediction = predict(&catalog, &query).unwrap();

                assert_eq!(prediction.k(), (k as usize).min(catalog.len()));

                for pair in prediction.neighbours.windows(2) {
                    assert!(
                        pair[0].distance <= pair[1].distance,
                        "neighbours out of order for k={} query={}",
                        k,
                        raw
                    );
                }

                for n in &prediction.neighbours {
                    assert!(std::ptr::eq(n.entry, &catalog.entries()[n.index]));
                    assert_eq!(n.distance, jaccard_distance(query.tags(), &n.entry.tags));
                }
            }
        }
    }

    #[test]
    fn test_partial_selection_matches_full_stable_sort() {
        let catalog = generated_catalog(500);
        let query = Query::parse(25, "dance;meme;food", ';').unwrap();

        let prediction = predict(&catalog, &query).unwrap();

        let mut expected: Vec<(f64, usize)> = catalog
            .iter()
            .enumerate()
            .map(|(i, e)| (jaccard_distance(query.tags(), &e.tags), i))
            .collect();
        // sort_by is stable, so equal distances stay in catalog order
        expected.sort_by(|a, b| a.0.total_cmp(&b.0));
        expected.truncate(25);

        let actual: Vec<(f64, usize)> = prediction
            .neighbours
            .iter()
            .map(|n| (n.distance, n.index))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_repeated_queries_are_identical() {
        let catalog = generated_catalog(300);
        let query = Query::parse(12, "gaming;tutorial", ';').unwrap();

        let first = predict(&catalog, &query).unwrap();
        let second = predict(&catalog, &query).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_predictor_reused_across_queries() {
        let catalog = two_video_catalog();
        let predictor = KnnPredictor::new(&catalog).unwrap();

        let a = predictor.predict(&Query::parse(1, "dance", ';').unwrap());
        let b = predictor.predict(&Query::parse(1, "fun", ';').unwrap());

        assert_eq!(ids(&a), vec!["v1"]);
        assert_eq!(ids(&b), vec!["v2"]);
    }

    #[test]
    fn test_empty_entry_tags_are_fully_distant() {
        let catalog = Catalog::new(vec![
            CatalogEntry::new("blank", TagSet::new(), 10, 1, 0),
            CatalogEntry::new("cat", ["cat"], 20, 2, 0),
        ]);
        let query = Query::parse(2, "cat", ';').unwrap();

        let prediction = predict(&catalog, &query).unwrap();

        assert_eq!(ids(&prediction), vec!["cat", "blank"]);
        assert_eq!(prediction.neighbours[1].distance, 1.0);
    }

    #[test]
    fn test_catalog_shared_across_threads() {
        let catalog = generated_catalog(400);
        let queries = ["dance", "cat;dog", "fitness;makeup", "travel"];

        let expected: Vec<Engagement> = queries
            .iter()
            .map(|raw| {
                let query = Query::parse(7, raw, ';').unwrap();
                predict(&catalog, &query).unwrap().predicted
            })
            .collect();

        let catalog_ref = &catalog;
        let actual: Vec<Engagement> = std::thread::scope(|scope| {
            let handles: Vec<_> = queries
                .iter()
                .map(|raw| {
                    scope.spawn(move || {
                        let query = Query::parse(7, raw, ';').unwrap();
                        predict(catalog_ref, &query).unwrap().predicted
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(actual, expected);
    }
}
