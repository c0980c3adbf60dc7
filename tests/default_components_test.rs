//! Integration tests for the built-in default components and their
//! substitution at build time.

use async_trait::async_trait;
use enginekit::prelude::*;
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[derive(Debug)]
struct StubSource;

#[async_trait]
impl DataSource<usize, Vec<String>, String, String> for StubSource {
    async fn read_training(&self) -> Result<(Vec<String>, usize)> {
        Ok((vec!["view item-1".to_string()], 1))
    }

    async fn read_eval(&self) -> Result<EvalStream<String, String>> {
        Ok(Box::pin(futures::stream::empty()))
    }
}

fn source() -> Arc<dyn DataSource<usize, Vec<String>, String, String>> {
    Arc::new(StubSource)
}

#[derive(Debug)]
struct TaggedAlgorithm {
    tag: &'static str,
}

#[async_trait]
impl Algorithm<Vec<String>, String, String> for TaggedAlgorithm {
    async fn predict(&self, _data: &Vec<String>, query: &String) -> Result<String> {
        Ok(format!("{}:{query}", self.tag))
    }
}

fn algorithm(tag: &'static str) -> Arc<dyn Algorithm<Vec<String>, String, String>> {
    Arc::new(TaggedAlgorithm { tag })
}

#[tokio::test]
async fn test_default_preparator_returns_input_unchanged() {
    let engine = EngineBuilder::new()
        .with_data_source(source())
        .with_default_preparator()
        .with_algorithm("tagged", algorithm("one"))
        .with_default_serving()
        .build()
        .unwrap();

    let training = vec!["view item-1".to_string(), "view item-2".to_string()];
    let prepared = engine.preparator().prepare(training.clone()).await.unwrap();
    assert_eq!(prepared, training);
}

#[tokio::test]
async fn test_default_serving_returns_first_present_prediction() {
    let engine = EngineBuilder::new()
        .with_data_source(source())
        .with_algorithm("tagged", algorithm("one"))
        .with_default_serving()
        .build()
        .unwrap();

    let predictions = vec![None, Some("X".to_string()), Some("Y".to_string())];
    let served = engine
        .serving()
        .serve(&"q".to_string(), predictions)
        .await
        .unwrap();
    assert_eq!(served, "X");
}

#[tokio::test]
async fn test_default_serving_with_no_predictions_fails() {
    let engine = EngineBuilder::new()
        .with_data_source(source())
        .with_algorithm("tagged", algorithm("one"))
        .with_default_serving()
        .build()
        .unwrap();

    let err = engine
        .serving()
        .serve(&"q".to_string(), vec![])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Serving { .. }));

    let err = engine
        .serving()
        .serve(&"q".to_string(), vec![None, None])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Serving { .. }));
}

#[tokio::test]
async fn test_implicit_defaults_are_applied_at_build() {
    // Neither the preparator nor the serving slot is touched: build()
    // resolves both to the built-in defaults instead of failing.
    let engine = EngineBuilder::new()
        .with_data_source(source())
        .with_algorithm("tagged", algorithm("one"))
        .build()
        .unwrap();

    let info = engine.info();
    assert!(info.preparator.contains("IdentityPreparator"));
    assert!(info.serving.contains("FirstServing"));

    let training = vec!["view item-1".to_string()];
    let prepared = engine.preparator().prepare(training.clone()).await.unwrap();
    assert_eq!(prepared, training);

    let served = engine
        .serving()
        .serve(&"q".to_string(), vec![Some("X".to_string())])
        .await
        .unwrap();
    assert_eq!(served, "X");
}

fn assert_shareable<T: Send + Sync>(_value: &T) {}

#[tokio::test]
async fn test_built_engine_is_shareable_across_tasks() {
    let engine = EngineBuilder::new()
        .with_data_source(source())
        .with_algorithm("tagged", algorithm("one"))
        .build()
        .unwrap();

    assert_shareable(&engine);

    let mut handles = Vec::new();
    for _ in 0..4 {
        let engine = engine.clone();
        handles.push(tokio::spawn(async move {
            let (training, _) = engine.data_source().read_training().await.unwrap();
            let tagged = engine.algorithms().get("tagged").unwrap();
            let prediction = tagged.predict(&training, &"q".to_string()).await.unwrap();
            engine
                .serving()
                .serve(&"q".to_string(), vec![Some(prediction)])
                .await
                .unwrap()
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), "one:q");
    }
}
