use std::env;

use anyhow::Context;
use annet::{Dataset, NetConfig, TrainingConfig, training::Trainer};
use log::info;

fn xnor() -> annet::Result<Dataset> {
    #[rustfmt::skip]
    let data = vec![
        1., 0., 1.,
        1., 1., 0.,
        0., 0., 0.,
        0., 1., 1.,
    ];

    Dataset::new(data, 2, 1)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Optionally read the session from a JSON file, otherwise train the XNOR network
    let config = match env::args().nth(1) {
        Some(path) => TrainingConfig::from_json_file(&path)
            .with_context(|| format!("failed to load training config from '{path}'"))?,
        None => TrainingConfig {
            network: NetConfig::new(0.01, 2, 2, 2, 1)?,
            iterations: 5,
            seed: None,
        },
    };

    let dataset = xnor()?;
    let mut trainer = Trainer::from_config(&config)?;
    let losses = trainer.train(&dataset)?;

    if let (Some(first), Some(last)) = (losses.first(), losses.last()) {
        info!("cost went from {first} to {last}");
    }

    let x = dataset.x();
    let y_pred = trainer.network().predict(x)?;
    for (x, p) in x.rows().into_iter().zip(y_pred.rows()) {
        println!("{x} -> {p:.4}");
    }

    Ok(())
}
