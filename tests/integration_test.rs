// Integration tests for shoptrend
use shoptrend::prelude::*;
use shoptrend::{assemble, encode};
use shoptrend_artifacts::CLASSIFIER_FILE;

/// The original shopping-trends column order.
const FEATURE_ORDER: [&str; 17] = [
    "Age",
    "Gender",
    "Item Purchased",
    "Category",
    "Purchase Amount (USD)",
    "Location",
    "Size",
    "Color",
    "Season",
    "Review Rating",
    "Payment Method",
    "Shipping Type",
    "Discount Applied",
    "Promo Code Used",
    "Previous Purchases",
    "Preferred Payment Method",
    "Frequency of Purchases",
];

fn fixture_encoders() -> EncoderSet {
    let mut encoders = EncoderSet::new();
    let mut insert = |name: &str, classes: &[&str]| {
        encoders.insert(name.to_string(), CategoricalEncoder::fit(classes.iter().copied()));
    };

    insert("Gender", &["Female", "Male"]);
    insert("Item Purchased", &["Blouse", "Jacket", "Sweater"]);
    insert("Category", &["Accessories", "Apparel", "Footwear"]);
    insert("Location", &["California", "New York", "Texas"]);
    insert("Size", &["L", "M", "S"]);
    insert("Color", &["Black", "Blue", "Red"]);
    insert("Season", &["Fall", "Spring", "Summer", "Winter"]);
    insert("Payment Method", &["Cash", "Credit Card", "PayPal"]);
    insert("Shipping Type", &["Express", "Standard"]);
    insert("Discount Applied", &["No", "Yes"]);
    insert("Promo Code Used", &["No", "Yes"]);
    insert("Preferred Payment Method", &["Cash", "Credit Card", "PayPal"]);
    insert("Frequency of Purchases", &["Annually", "Monthly", "Weekly"]);
    insert("Subscription Status", &["No", "Yes"]);
    encoders
}

/// A raw training row: only age and purchase amount vary, every other
/// field sits on the value the default table would pick, so the fitted
/// scaler and classifier behave predictably in assertions.
fn raw_row(schema: &FeatureSchema, defaults: &DefaultValueTable, age: f32, amount: f32) -> FeatureRecord {
    let user = FeatureRecord::new()
        .with("Age", age)
        .with("Purchase Amount (USD)", amount);
    assemble(&user, schema, defaults).unwrap()
}

/// Build a small fitted bundle the way the offline training collaborator
/// would: encode raw rows, fit the scaler on them, fit KNN on the scaled
/// rows. Young customers subscribe, older ones do not.
fn fixture_bundle() -> ArtifactBundle {
    let encoders = fixture_encoders();
    let schema = FeatureSchema::from_order(FEATURE_ORDER, &encoders);
    let defaults = DefaultValueTable::derive(
        &schema,
        &encoders,
        &DefaultsConfig::shopping_trends(),
    );

    let training = [
        (20.0, 30.0, "Yes"),
        (22.0, 35.0, "Yes"),
        (25.0, 40.0, "Yes"),
        (60.0, 90.0, "No"),
        (62.0, 95.0, "No"),
        (65.0, 100.0, "No"),
    ];

    let target = &encoders["Subscription Status"];
    let mut rows = Vec::new();
    let mut labels = Vec::new();
    for (age, amount, status) in training {
        let record = raw_row(&schema, &defaults, age, amount);
        rows.push(encode(&record, &encoders, &schema).unwrap().as_slice().to_vec());
        labels.push(target.encode(status).unwrap());
    }

    let scaler = StandardScaler::fit(&rows).unwrap();
    let scaled: Vec<Vector> = rows
        .iter()
        .map(|row| scaler.transform(&Vector::from_slice(row)).unwrap())
        .collect();
    let classifier = KnnClassifier::new(3, scaled, labels).unwrap();

    ArtifactBundle {
        classifier,
        scaler,
        encoders,
        feature_order: FEATURE_ORDER.iter().map(|s| s.to_string()).collect(),
    }
}

fn example_inputs() -> FeatureRecord {
    FeatureRecord::new()
        .with("Age", 30.0f32)
        .with("Gender", "Female")
        .with("Category", "Apparel")
        .with("Purchase Amount (USD)", 50.0f32)
        .with("Payment Method", "Credit Card")
}

#[test]
fn test_example_scenario_through_saved_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    fixture_bundle().save(dir.path()).unwrap();

    let bundle = ArtifactBundle::load(dir.path()).unwrap();
    let predictor = bundle.into_predictor(PredictorConfig::default()).unwrap();

    let prediction = predictor.predict(&example_inputs()).unwrap();
    // Age 30 / $50 sits with the young cluster; all three neighbors agree.
    assert_eq!(prediction.label, "Yes");
    assert_eq!(prediction.confidence, Some(1.0));
}

#[test]
fn test_identical_requests_are_idempotent() {
    let predictor = fixture_bundle()
        .into_predictor(PredictorConfig::default())
        .unwrap();

    let first = predictor.predict(&example_inputs()).unwrap();
    let second = predictor.predict(&example_inputs()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_closure_over_input_vocabularies() {
    let bundle = fixture_bundle();
    let genders: Vec<String> = bundle.encoders["Gender"].classes().to_vec();
    let categories: Vec<String> = bundle.encoders["Category"].classes().to_vec();
    let payments: Vec<String> = bundle.encoders["Payment Method"].classes().to_vec();
    let target: Vec<String> = bundle.encoders["Subscription Status"].classes().to_vec();

    let predictor = bundle.into_predictor(PredictorConfig::default()).unwrap();

    for gender in &genders {
        for category in &categories {
            for payment in &payments {
                for age in [18.0f32, 45.0, 70.0] {
                    let inputs = FeatureRecord::new()
                        .with("Age", age)
                        .with("Gender", gender.as_str())
                        .with("Category", category.as_str())
                        .with("Purchase Amount (USD)", 50.0f32)
                        .with("Payment Method", payment.as_str());

                    let prediction = predictor.predict(&inputs).unwrap();
                    assert!(
                        target.contains(&prediction.label),
                        "label {} not in target vocabulary",
                        prediction.label
                    );
                }
            }
        }
    }
}

#[test]
fn test_assembly_is_complete_and_user_values_win() {
    let bundle = fixture_bundle();
    let schema = bundle.schema();
    let defaults = DefaultValueTable::derive(
        &schema,
        &bundle.encoders,
        &DefaultsConfig::shopping_trends(),
    );

    let user = example_inputs().with("Season", "Winter");
    let record = assemble(&user, &schema, &defaults).unwrap();

    assert_eq!(record.len(), schema.len());
    // User-supplied values beat defaults for overlapping keys.
    assert_eq!(
        record.get("Season").and_then(FeatureValue::as_text),
        Some("Winter")
    );
    // Non-collected slots come from the default table.
    assert_eq!(
        record.get("Review Rating").and_then(FeatureValue::as_number),
        Some(3.5)
    );
    assert_eq!(
        record.get("Previous Purchases").and_then(FeatureValue::as_number),
        Some(1.0)
    );
    assert_eq!(
        record.get("Shipping Type").and_then(FeatureValue::as_text),
        Some("Express")
    );
}

#[test]
fn test_out_of_vocabulary_yields_error_not_prediction() {
    let predictor = fixture_bundle()
        .into_predictor(PredictorConfig::default())
        .unwrap();

    let inputs = example_inputs().with("Category", "Spaceships");
    let response = predictor.respond(&inputs);

    assert!(!response.is_success());
    assert!(response.prediction().is_none());

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["errorKind"], "out_of_vocabulary");
    assert!(json["message"].as_str().unwrap().contains("Spaceships"));
}

#[test]
fn test_missing_required_field_without_default() {
    // Age is user-collected and has no default; omitting it simulates the
    // schema-drift case and must name the field, not crash.
    let predictor = fixture_bundle()
        .into_predictor(PredictorConfig::default())
        .unwrap();

    let inputs = FeatureRecord::new()
        .with("Gender", "Female")
        .with("Category", "Apparel")
        .with("Purchase Amount (USD)", 50.0f32)
        .with("Payment Method", "Credit Card");

    let err = predictor.predict(&inputs).unwrap_err();
    assert!(matches!(err, Error::MissingFeature(ref name) if name == "Age"));

    let response = predictor.respond(&inputs);
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["errorKind"], "missing_feature");
    assert!(json["message"].as_str().unwrap().contains("Age"));
}

#[test]
fn test_missing_artifact_fails_fast_and_is_named() {
    let dir = tempfile::tempdir().unwrap();
    fixture_bundle().save(dir.path()).unwrap();
    std::fs::remove_file(dir.path().join(CLASSIFIER_FILE)).unwrap();

    let err = ArtifactBundle::load(dir.path()).unwrap_err();
    assert!(matches!(err, ArtifactError::NotFound { .. }));
    assert_eq!(err.artifact(), CLASSIFIER_FILE);
}

#[test]
fn test_empty_artifact_directory_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    assert!(ArtifactBundle::load(dir.path()).is_err());
}

/// A classifier with point prediction only, standing in for a model that
/// exposes no probability estimates.
struct PointOnly(KnnClassifier);

impl Classifier for PointOnly {
    fn input_dim(&self) -> usize {
        self.0.input_dim()
    }

    fn predict(&self, input: &Vector) -> shoptrend::Result<u32> {
        self.0.predict(input)
    }
}

#[test]
fn test_confidence_absent_without_probability_capability() {
    let bundle = fixture_bundle();
    let schema = bundle.schema();
    let predictor = Predictor::new(
        schema,
        bundle.encoders,
        bundle.scaler,
        Box::new(PointOnly(bundle.classifier)),
        PredictorConfig::default(),
    )
    .unwrap();

    assert!(!predictor.supports_confidence());
    let prediction = predictor.predict(&example_inputs()).unwrap();
    assert_eq!(prediction.label, "Yes");
    assert_eq!(prediction.confidence, None);

    // Absent means omitted on the wire, not reported as zero.
    let json = serde_json::to_value(&prediction).unwrap();
    assert!(json.get("confidence").is_none());
}
