use typifier::{categories, dataset, Pipeline, ClassifierError};

fn training_data_path() -> String {
    format!("{}/data/training.csv", env!("CARGO_MANIFEST_DIR"))
}

fn train_sample_pipeline() -> Result<Pipeline, Box<dyn std::error::Error>> {
    let examples = dataset::load_csv(training_data_path())?;
    Ok(Pipeline::builder().add_examples(examples)?.build()?)
}

#[test]
fn test_sample_data_covers_category_table() -> Result<(), Box<dyn std::error::Error>> {
    let examples = dataset::load_csv(training_data_path())?;
    let labels = dataset::labels(&examples);
    assert_eq!(labels.len(), categories::len());
    for label in &labels {
        assert!(categories::is_known(label), "label '{}' missing from table", label);
    }
    Ok(())
}

#[test]
fn test_every_emittable_label_has_uuid() -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = train_sample_pipeline()?;
    for label in pipeline.labels() {
        assert!(categories::lookup(label).is_some(), "no uuid for '{}'", label);
    }
    Ok(())
}

#[test]
fn test_training_products_mostly_recovered() -> Result<(), Box<dyn std::error::Error>> {
    let examples = dataset::load_csv(training_data_path())?;
    let pipeline = Pipeline::builder().add_examples(examples.clone())?.build()?;

    let mut correct = 0;
    for example in &examples {
        if pipeline.predict(&example.product)? == example.label {
            correct += 1;
        }
    }
    let accuracy = correct as f64 / examples.len() as f64;
    assert!(accuracy >= 0.8, "training accuracy too low: {:.2}", accuracy);
    Ok(())
}

#[test]
fn test_sanity_products_get_known_labels() -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = train_sample_pipeline()?;
    for product in ["margarine", "shampoo", "müsli", "fertigsuppe", "babyflasche"] {
        let (label, scores) = pipeline.predict_with_scores(product)?;
        assert!(pipeline.labels().contains(&label));
        assert_eq!(scores.len(), pipeline.labels().len());
    }
    Ok(())
}

#[test]
fn test_classification_ignores_case() -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = train_sample_pipeline()?;
    for product in ["Butter", "KAFFEE", "Spaghetti"] {
        assert_eq!(pipeline.predict(product)?, pipeline.predict(&product.to_lowercase())?);
    }
    Ok(())
}

#[test]
fn test_unmapped_labels_still_train() -> Result<(), ClassifierError> {
    let pipeline = Pipeline::builder()
        .add_examples(vec![
            ("fernseher", "electronics"),
            ("kopfhörer", "electronics"),
            ("puppe", "toys"),
            ("teddybär", "toys"),
        ])?
        .build()?;
    let label = pipeline.predict("kopfhörer")?;
    assert!(categories::uuid_for(&label).is_none());
    Ok(())
}
