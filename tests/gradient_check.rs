use annet::{NetConfig, Network};
use ndarray::{Array2, ArrayView2};
use ndarray_rand::RandomExt;
use rand::{SeedableRng, distr::StandardUniform, rngs::StdRng};

const H: f64 = 1e-5;
const TOL: f64 = 1e-4;

/// Largest absolute difference between `backprop` and centered finite differences of `cost`.
fn max_gradient_error(net: &mut Network, x: ArrayView2<f64>, y: ArrayView2<f64>) -> f64 {
    let trace = net.forward(x).unwrap();
    let grads = net.backprop(&trace, y).unwrap();
    let mut max_err: f64 = 0.;

    for i in 0..net.params().len() {
        let w = net.params()[i].clone();

        for (idx, &analytic) in grads[i].indexed_iter() {
            let mut shifted = w.clone();
            shifted[idx] += H;
            net.set_params(i, shifted.clone()).unwrap();
            let cost_plus = net.cost(x, y).unwrap();

            shifted[idx] -= 2. * H;
            net.set_params(i, shifted).unwrap();
            let cost_minus = net.cost(x, y).unwrap();

            let numeric = (cost_plus - cost_minus) / (2. * H);
            max_err = max_err.max((numeric - analytic).abs());
        }

        net.set_params(i, w).unwrap();
    }

    max_err
}

#[test]
fn backprop_matches_finite_differences() {
    let architectures = [
        // (input, hidden, hidden_layers, output)
        (2, 2, 1, 1),
        (3, 4, 1, 2),
        (2, 3, 2, 1),
        (4, 3, 3, 3),
        (1, 5, 4, 2),
    ];

    for (seed, (input, hidden, hidden_layers, output)) in architectures.into_iter().enumerate() {
        let mut rng = StdRng::seed_from_u64(seed as u64);
        let config = NetConfig::new(0.1, input, hidden, hidden_layers, output).unwrap();
        let mut net = Network::new(config).unwrap();
        net.randomize(&mut rng);

        let x: Array2<f64> = Array2::random_using((6, input), StandardUniform, &mut rng);
        let y: Array2<f64> = Array2::random_using((6, output), StandardUniform, &mut rng);
        let y = y.mapv(f64::round);

        let err = max_gradient_error(&mut net, x.view(), y.view());
        assert!(
            err < TOL,
            "architecture {:?}: max gradient error {err}",
            (input, hidden, hidden_layers, output)
        );
    }
}
