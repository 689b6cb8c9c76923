#![cfg(feature = "serde")]

use approx::assert_relative_eq;
use natality_rs::prelude::*;

fn rows() -> Vec<Observation<f64>> {
    (0..30)
        .map(|i| {
            let h = 30.0 + (i % 7) as f64;
            let m = 100.0 + ((i * 13) % 11) as f64 * 20.0;
            Observation::new(format!("C{}", i % 6))
                .with("weekly_hours", h)
                .with("maternity_per_capita", m)
                .with("year", 2015.0 + (i % 5) as f64)
                .with("birth_rate_per_thousand", 12.0 - 0.1 * h + 0.004 * m)
        })
        .collect()
}

#[test]
fn test_trained_model_json_round_trip() {
    let model = Regression::new()
        .features(&["weekly_hours", "maternity_per_capita"])
        .build()
        .unwrap()
        .fit(&rows())
        .unwrap();

    let json = serde_json::to_string(&model).unwrap();
    let restored: TrainedModel<f64> = serde_json::from_str(&json).unwrap();

    let input = [("weekly_hours", 33.0), ("maternity_per_capita", 180.0)];
    assert_relative_eq!(
        model.predict(&input, true).unwrap(),
        restored.predict(&input, true).unwrap(),
        epsilon = 1e-9
    );
    assert_eq!(restored.feature_names, model.feature_names);
}

#[test]
fn test_observation_from_json() {
    let json = r#"{"entity":"SE","fields":{"weekly_hours":31.0,"year":2022.0}}"#;
    let obs: Observation<f64> = serde_json::from_str(json).unwrap();
    assert_eq!(obs.entity, "SE");
    assert_eq!(obs.year(), Some(2022.0));
}
