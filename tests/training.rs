use annet::{NetConfig, Network};
use ndarray::{Array2, ArrayView2, array};
use rand::{SeedableRng, rngs::StdRng};

fn xnor() -> (Array2<f64>, Array2<f64>) {
    let x = array![[1., 0.], [1., 1.], [0., 0.], [0., 1.]];
    let y = array![[1.], [0.], [0.], [1.]];
    (x, y)
}

fn and() -> (Array2<f64>, Array2<f64>) {
    let x = array![[0., 0.], [0., 1.], [1., 0.], [1., 1.]];
    let y = array![[0.], [0.], [0.], [1.]];
    (x, y)
}

fn mean_cost_after(
    config: NetConfig,
    x: ArrayView2<f64>,
    y: ArrayView2<f64>,
    iterations: usize,
    seeds: &[u64],
) -> f64 {
    let total: f64 = seeds
        .iter()
        .map(|&seed| {
            let mut net = Network::new(config).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            net.train(x, y, iterations, &mut rng).unwrap();
            net.cost(x, y).unwrap()
        })
        .sum();

    total / seeds.len() as f64
}

#[test]
fn xnor_scenario() {
    let config = NetConfig::new(0.01, 2, 2, 2, 1).unwrap();
    let mut net = Network::new(config).unwrap();
    let shapes = net.params().shapes();
    assert_eq!(shapes, [(2, 3), (2, 3), (1, 3)]);

    let mut rng = StdRng::seed_from_u64(2024);
    let (x, y) = xnor();

    net.randomize(&mut rng);
    let trace = net.forward(x.view()).unwrap();
    assert_eq!(trace.prediction().dim(), (4, 1));

    let before = net.cost(x.view(), y.view()).unwrap();
    net.train(x.view(), y.view(), 5, &mut rng).unwrap();
    let after = net.cost(x.view(), y.view()).unwrap();

    assert!(before.is_finite() && before > 0.);
    assert!(after.is_finite() && after > 0.);
    assert_eq!(net.params().shapes(), shapes);
}

#[test]
fn one_hidden_layer_boundary() {
    let config = NetConfig::new(0.1, 2, 4, 1, 1).unwrap();
    let mut net = Network::new(config).unwrap();
    assert_eq!(net.params().len(), 2);

    let (x, y) = xnor();
    let mut rng = StdRng::seed_from_u64(9);
    net.randomize(&mut rng);

    let trace = net.forward(x.view()).unwrap();
    let grads = net.backprop(&trace, y.view()).unwrap();
    assert_eq!(grads.len(), 2);
    assert_eq!(grads.shapes(), net.params().shapes());

    net.train(x.view(), y.view(), 10, &mut rng).unwrap();
}

#[test]
fn cost_decreases_on_average_with_more_iterations() {
    let config = NetConfig::new(0.5, 2, 3, 1, 1).unwrap();
    let (x, y) = and();
    let seeds = [0, 1, 2, 3, 4];

    let costs: Vec<_> = [0, 10, 100, 500, 2000]
        .into_iter()
        .map(|iterations| mean_cost_after(config, x.view(), y.view(), iterations, &seeds))
        .collect();

    for pair in costs.windows(2) {
        assert!(pair[1] <= pair[0] + 1e-12, "costs: {costs:?}");
    }

    assert!(costs[costs.len() - 1] < costs[0], "costs: {costs:?}");
}

#[test]
fn learns_and() {
    let config = NetConfig::new(1., 2, 4, 1, 1).unwrap();
    let mut net = Network::new(config).unwrap();
    let (x, y) = and();

    net.train(x.view(), y.view(), 5000, &mut StdRng::seed_from_u64(11))
        .unwrap();

    let y_pred = net.predict(x.view()).unwrap();
    for (p, t) in y_pred.iter().zip(y.iter()) {
        assert!((p - t).abs() < 0.5, "predicted {y_pred:?} for {y:?}");
    }
}

#[test]
fn wide_network_predictions_never_reach_zero_or_one() {
    let config = NetConfig::new(0.01, 2, 400, 1, 1).unwrap();
    let mut net = Network::new(config).unwrap();
    net.randomize(&mut StdRng::seed_from_u64(0));
    let x = array![[1., 1.], [1., 1.], [1., 1.], [1., 1.]];
    let y = array![[0.], [1.], [0.], [1.]];

    let y_pred = net.predict(x.view()).unwrap();
    assert!(
        y_pred.iter().all(|&p| p > 0. && p < 1.),
        "not in open (0, 1): {y_pred:?}"
    );

    let cost = net.cost(x.view(), y.view()).unwrap();
    assert!(cost.is_finite() && cost > 0.);
}
