use natality_rs::prelude::*;
use natality_rs::{DEFAULT_SEED, DEFAULT_TEST_FRACTION, prediction_input};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    input: InputData,
    params: Params,
    #[serde(skip_deserializing)]
    result: ResultData,
}

#[derive(Debug, Deserialize, Serialize)]
struct InputData {
    observations: Vec<Observation<f64>>,
}

#[derive(Debug, Deserialize, Serialize)]
struct Params {
    #[serde(default)]
    features: Option<Vec<String>>,
    #[serde(default)]
    target: Option<String>,
    #[serde(default = "default_test_fraction")]
    test_fraction: f64,
    #[serde(default = "default_seed")]
    seed: u64,
    #[serde(default)]
    predict: Vec<PredictRequest>,
    #[serde(default)]
    preferences: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    strategy: ScoringStrategy,
    #[serde(default)]
    exclude: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize)]
struct PredictRequest {
    entity: String,
    year: f64,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct ResultData {
    model: Option<TrainedModel<f64>>,
    predictions: BTreeMap<String, f64>,
    recommendation: Option<Recommendation<f64>>,
    error: Option<String>,
}

fn default_test_fraction() -> f64 {
    DEFAULT_TEST_FRACTION
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn main() -> Result<(), Box<dyn Error>> {
    let input_dir = Path::new("../output/fixtures");
    let output_dir = Path::new("../output/natality_rs");

    if !input_dir.exists() {
        eprintln!(
            "Input directory {:?} does not exist. Export fixtures first.",
            input_dir
        );
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            if let Some(file_name) = path.file_name() {
                println!("Processing {:?}", file_name);
                process_file(&path, &output_dir.join(file_name))?;
            }
        }
    }

    Ok(())
}

fn process_file(input_path: &Path, output_path: &Path) -> Result<(), Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    if let Err(err) = run(&mut data) {
        println!("  {}: {}", data.name, err);
        data.result.error = Some(err.to_string());
    }

    fs::write(output_path, serde_json::to_string_pretty(&data)?)?;
    Ok(())
}

fn run(data: &mut ValidationData) -> Result<(), NatalityError> {
    let observations = &data.input.observations;
    let params = &data.params;

    let mut builder = Regression::new()
        .test_fraction(params.test_fraction)
        .seed(params.seed);
    if let Some(features) = &params.features {
        builder = builder.features(features);
    }
    if let Some(target) = &params.target {
        builder = builder.target(target.as_str());
    }
    let regression = builder.build()?;
    let model = regression.fit(observations)?;

    for request in &params.predict {
        let input = prediction_input(
            observations,
            &request.entity,
            request.year,
            regression.base_fields(),
        )?;
        let value = model.predict(&input, true)?;
        data.result
            .predictions
            .insert(format!("{}-{}", request.entity, request.year), value);
    }
    println!("{}", model);
    data.result.model = Some(model);

    if let Some(preferences) = &params.preferences {
        let ranker = Ranker::new()
            .strategy(params.strategy)
            .exclude(&params.exclude)
            .build()?;
        let recommendation = ranker.recommend(observations, preferences)?;
        println!("{}", recommendation);
        data.result.recommendation = Some(recommendation);
    }

    Ok(())
}
