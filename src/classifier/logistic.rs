/// Hyperparameters for gradient-descent training.
#[derive(Debug, Clone)]
pub struct GdConfig {
    pub learning_rate: f64,
    pub max_epochs: usize,
    pub l2_lambda: f64,
    pub convergence_eps: f64,
}

impl Default for GdConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            max_epochs: 1000,
            l2_lambda: 1e-4,
            convergence_eps: 1e-6,
        }
    }
}

/// Binary logistic regression trained by full-batch gradient descent.
///
/// Weights start at zero and no randomness is involved, so training is
/// deterministic for a fixed feature matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegression {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl LogisticRegression {
    pub fn fit(features: &[Vec<f64>], labels: &[u8], config: &GdConfig) -> Self {
        let n_samples = features.len();
        let n_features = features.first().map_or(0, Vec::len);
        let mut weights = vec![0.0; n_features];
        let mut bias = 0.0;

        if n_samples == 0 {
            return Self { weights, bias };
        }

        let n = n_samples as f64;
        let mut previous_loss = f64::INFINITY;

        for _ in 0..config.max_epochs {
            let mut weight_grads = vec![0.0; n_features];
            let mut bias_grad = 0.0;
            let mut loss = 0.0;

            for (x, &label) in features.iter().zip(labels) {
                let predicted = sigmoid(dot(&weights, x) + bias);
                let target = f64::from(label);
                let error = predicted - target;

                for (grad, &feature) in weight_grads.iter_mut().zip(x) {
                    *grad += error * feature;
                }
                bias_grad += error;

                let p = predicted.clamp(1e-15, 1.0 - 1e-15);
                loss -= target * p.ln() + (1.0 - target) * (1.0 - p).ln();
            }

            for (weight, grad) in weights.iter_mut().zip(&weight_grads) {
                *weight -= config.learning_rate * (grad / n + config.l2_lambda * *weight);
            }
            bias -= config.learning_rate * bias_grad / n;

            loss /= n;
            if (previous_loss - loss).abs() < config.convergence_eps {
                break;
            }
            previous_loss = loss;
        }

        Self { weights, bias }
    }

    pub fn predict_probability(&self, features: &[f64]) -> f64 {
        sigmoid(dot(&self.weights, features) + self.bias)
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Numerically stable sigmoid; never overflows for extreme inputs.
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let ez = z.exp();
        ez / (1.0 + ez)
    }
}
