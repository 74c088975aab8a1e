//! Metric emission from the cache store.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use brezza::cache::{CacheConfig, CatalogStore, METRIC_CACHE_HIT, METRIC_CACHE_MISS};
use brezza::domain::entities::CategoryRecord;
use brezza::generator::Corpus;
use metrics_util::debugging::DebuggingRecorder;

#[tokio::test]
async fn store_paths_emit_expected_metric_keys() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let store = CatalogStore::new(&CacheConfig::default());
    let corpus = Corpus::generate(123, 5);
    let categories: Arc<[CategoryRecord]> = Arc::from(corpus.categories.clone());

    metrics::with_local_recorder(&recorder, || {
        assert!(store.get_categories().is_none()); // miss
        store.set_categories(categories, Duration::from_secs(60));
        assert!(store.get_categories().is_some()); // hit
        assert!(store.get_post_list(Some("design")).is_none()); // miss
    });

    let names: HashSet<String> = snapshotter
        .snapshot()
        .into_vec()
        .into_iter()
        .map(|(key, _, _, _)| key.key().name().to_string())
        .collect();

    assert!(names.contains(METRIC_CACHE_HIT));
    assert!(names.contains(METRIC_CACHE_MISS));
}
