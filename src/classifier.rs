use log::{debug, trace};
use ndarray::aview1;

use crate::{
    MentalHealthStatus, Prediction, SampleVector,
    arch::{
        DEFAULT_PARAMS, INPUTS, NetworkParams, OUTPUTS,
        activations::ActFn,
        layers::{Dense, Softmax},
    },
    features::{self, HrvHistory},
    normalize::Normalizer,
};

/// Weight of the raw HRV reading in the blended HRV feature.
pub const HRV_WEIGHT: f32 = 0.7;

/// Weight of the history's SDNN in the blended HRV feature.
pub const SDNN_WEIGHT: f32 = 0.3;

/// A non-normal class has to exceed this probability for its prediction to be trusted.
pub const CONFIDENCE_THRESHOLD: f32 = 0.4;

/// Fixed-weight 5→8→4 perceptron classifying physiological readings.
///
/// Each prediction pushes the HRV reading into the instance's history before running the
/// network, so calls are not independent: the history is the only mutable state and methods
/// that touch it take `&mut self`.
#[derive(Debug, Clone)]
pub struct MentalHealthNN {
    normalizer: Normalizer<'static>,
    hidden: Dense<'static>,
    output: Dense<'static>,
    softmax: Softmax,
    history: HrvHistory,
}

impl MentalHealthNN {
    /// Creates a classifier with the reference parameters and an empty history.
    pub fn new() -> Self {
        Self::with_params(&DEFAULT_PARAMS)
    }

    /// Creates a classifier over an alternate parameter set.
    pub fn with_params(params: &'static NetworkParams) -> Self {
        Self {
            normalizer: Normalizer::new(&params.norm),
            hidden: Dense::new(&params.w1, &params.b1, Some(ActFn::relu())),
            output: Dense::new(&params.w2, &params.b2, None),
            softmax: Softmax,
            history: HrvHistory::new(),
        }
    }

    pub fn history(&self) -> &HrvHistory {
        &self.history
    }

    /// Classifies one reading.
    ///
    /// Returns `Normal` unless one of the non-normal classes is confident, see `decide`.
    pub fn predict(
        &mut self,
        eda_tonic: f32,
        eda_phasic: f32,
        bpm: f32,
        hrv: f32,
        lux: f32,
    ) -> MentalHealthStatus {
        let probabilities = self.prediction_probabilities(eda_tonic, eda_phasic, bpm, hrv, lux);
        decide(&probabilities)
    }

    /// Runs the network on one reading and returns the raw class distribution.
    ///
    /// The confidence threshold is not applied, so the most probable class here may differ
    /// from what `predict` would have returned for the same reading.
    pub fn prediction_probabilities(
        &mut self,
        eda_tonic: f32,
        eda_phasic: f32,
        bpm: f32,
        hrv: f32,
        lux: f32,
    ) -> [f32; OUTPUTS] {
        let hrv = self.blend_hrv(hrv);
        let x = self
            .normalizer
            .normalize_array([eda_tonic, eda_phasic, bpm, hrv, lux]);

        self.forward(x)
    }

    /// Runs a single pass and returns both the decision and the distribution it was taken on.
    pub fn classify(&mut self, sample: &SampleVector) -> Prediction {
        let probabilities = self.prediction_probabilities(
            sample.eda_tonic,
            sample.eda_phasic,
            sample.bpm,
            sample.hrv,
            sample.lux,
        );

        Prediction::new(decide(&probabilities), probabilities)
    }

    /// Pushes `hrv` into the history and mixes it with the history's SDNN.
    fn blend_hrv(&mut self, hrv: f32) -> f32 {
        self.history.push(hrv);

        let sdnn = features::sdnn(self.history.samples());
        // not a network input, only traced
        let lf_hf = features::lf_hf_ratio(self.history.samples());
        trace!(sdnn = sdnn, lf_hf = lf_hf; "hrv history updated");

        HRV_WEIGHT * hrv + SDNN_WEIGHT * sdnn
    }

    /// Makes a forward pass over already normalized features.
    ///
    /// # Arguments
    /// * `x` - The normalized features in input order.
    ///
    /// # Returns
    /// The softmax distribution over the four classes.
    pub fn forward(&self, x: [f32; INPUTS]) -> [f32; OUTPUTS] {
        let hidden = self.hidden.forward(aview1(&x));
        let logits = self.output.forward(hidden.view());
        let distribution = self.softmax.forward(logits.view());

        let mut probabilities = [0.; OUTPUTS];
        probabilities
            .iter_mut()
            .zip(distribution.iter())
            .for_each(|(p, &d)| *p = d);

        trace!("probabilities {probabilities:?}");
        probabilities
    }
}

impl Default for MentalHealthNN {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a class distribution to a status.
///
/// When none of the non-normal classes exceeds `CONFIDENCE_THRESHOLD` the answer is `Normal`
/// whatever `Normal`'s own probability is. Otherwise the most probable class wins, `Normal`
/// included, and ties go to the lowest index.
pub fn decide(probabilities: &[f32; OUTPUTS]) -> MentalHealthStatus {
    let confident = probabilities[1..]
        .iter()
        .any(|&p| p > CONFIDENCE_THRESHOLD);

    if !confident {
        debug!("low confidence, falling back to normal");
        return MentalHealthStatus::Normal;
    }

    let (max_index, _) = probabilities
        .iter()
        .enumerate()
        .skip(1)
        .fold((0, probabilities[0]), |(max_index, max_p), (i, &p)| {
            if p > max_p { (i, p) } else { (max_index, max_p) }
        });

    MentalHealthStatus::ALL[max_index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::{HIDDEN, Normalization, activations::relu};

    /// Every weight zero: the logits are the output biases, whatever the input.
    static BIAS_ONLY: NetworkParams = NetworkParams {
        w1: [[0.; HIDDEN]; INPUTS],
        b1: [0.; HIDDEN],
        w2: [[0.; OUTPUTS]; HIDDEN],
        b2: [0., 2., 0., 0.],
        norm: [Normalization::new(0., 1.); INPUTS],
    };

    /// Stress logit is `relu(eda_tonic)`, the rest is zero.
    static TONIC_TO_STRESS: NetworkParams = NetworkParams {
        w1: {
            let mut w1 = [[0.; HIDDEN]; INPUTS];
            w1[0][0] = 1.;
            w1
        },
        b1: [0.; HIDDEN],
        w2: {
            let mut w2 = [[0.; OUTPUTS]; HIDDEN];
            w2[0][1] = 1.;
            w2
        },
        b2: [0.; OUTPUTS],
        norm: [Normalization::new(0., 1.); INPUTS],
    };

    /// Straight loops over the reference tables.
    fn reference_forward(params: &NetworkParams, input: [f32; INPUTS]) -> [f32; OUTPUTS] {
        let mut hidden = [0.; HIDDEN];
        for (i, h) in hidden.iter_mut().enumerate() {
            *h = params.b1[i];
            for (j, x) in input.iter().enumerate() {
                *h += x * params.w1[j][i];
            }
            *h = relu(*h);
        }

        let mut output = [0.; OUTPUTS];
        let mut sum_exp = 0.;
        for (i, o) in output.iter_mut().enumerate() {
            *o = params.b2[i];
            for (j, h) in hidden.iter().enumerate() {
                *o += h * params.w2[j][i];
            }
            *o = o.exp();
            sum_exp += *o;
        }
        output.iter_mut().for_each(|o| *o /= sum_exp);

        output
    }

    #[test]
    fn decide_falls_back_to_normal_on_low_confidence() {
        assert_eq!(decide(&[0.01, 0.33, 0.33, 0.33]), MentalHealthStatus::Normal);
        assert_eq!(decide(&[0.7, 0.1, 0.1, 0.1]), MentalHealthStatus::Normal);
        assert_eq!(decide(&[0.2, 0.4, 0.4, 0.0]), MentalHealthStatus::Normal);
    }

    #[test]
    fn decide_picks_the_confident_class() {
        assert_eq!(decide(&[0.1, 0.5, 0.2, 0.2]), MentalHealthStatus::Stress);
        assert_eq!(decide(&[0.1, 0.2, 0.5, 0.2]), MentalHealthStatus::Anxiety);
        assert_eq!(decide(&[0.05, 0.05, 0.45, 0.45]), MentalHealthStatus::Anxiety);
        assert_eq!(decide(&[0.1, 0.1, 0.1, 0.7]), MentalHealthStatus::Depression);
    }

    #[test]
    fn decide_lets_normal_win_the_argmax() {
        assert_eq!(decide(&[0.55, 0.41, 0.02, 0.02]), MentalHealthStatus::Normal);
    }

    #[test]
    fn decide_breaks_ties_towards_the_lowest_index() {
        assert_eq!(decide(&[0.45, 0.45, 0.05, 0.05]), MentalHealthStatus::Normal);
    }

    #[test]
    fn forward_matches_reference_loops() {
        let nn = MentalHealthNN::new();
        for x in [
            [0.; INPUTS],
            [1., -1., 0.5, -0.5, 2.],
            [-4., 4., 10., -2., 15.],
            [0.25, 3., -1.75, 0.591, -1.3],
        ] {
            assert_eq!(nn.forward(x), reference_forward(&DEFAULT_PARAMS, x), "x={x:?}");
        }
    }

    #[test]
    fn forward_distribution_is_a_probability_vector() {
        let nn = MentalHealthNN::new();
        let p = nn.forward([3., -2., 1.5, 0.2, -0.9]);
        let sum: f32 = p.iter().sum();

        assert!((sum - 1.).abs() < 1e-5);
        assert!(p.iter().all(|&p| (0. ..=1.).contains(&p)));
    }

    #[test]
    fn bias_only_network_ignores_the_input() {
        let mut nn = MentalHealthNN::with_params(&BIAS_ONLY);
        let e2 = 2f32.exp();
        let expected = e2 / (e2 + 3.);

        for sample in [[0.; INPUTS], [512., 0., 75., 65., 250.], [-9., 9., -9., 9., -9.]] {
            let p = nn.classify(&SampleVector::from_array(sample));
            assert_eq!(p.status, MentalHealthStatus::Stress);
            assert!((p.probability_of(MentalHealthStatus::Stress) - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn hidden_layer_rectifies() {
        let mut nn = MentalHealthNN::with_params(&TONIC_TO_STRESS);

        assert_eq!(nn.predict(2., 0., 0., 0., 0.), MentalHealthStatus::Stress);

        // relu(-2) = 0: every logit is zero and the distribution is uniform
        let p = nn.prediction_probabilities(-2., 0., 0., 0., 0.);
        assert_eq!(p, [0.25; OUTPUTS]);
        assert_eq!(decide(&p), MentalHealthStatus::Normal);
    }

    #[test]
    fn every_entry_point_pushes_the_history_once() {
        let mut nn = MentalHealthNN::new();

        nn.predict(512., 0., 75., 10., 250.);
        nn.prediction_probabilities(512., 0., 75., 20., 250.);
        nn.classify(&SampleVector::new(512., 0., 75., 30., 250.));

        assert_eq!(nn.history().cursor(), 3);
        assert_eq!(&nn.history().samples()[..3], &[10., 20., 30.]);
    }

    #[test]
    fn classify_agrees_with_predict() {
        let sample = SampleVector::new(0., 200., 140., 10., 3000.);
        let mut a = MentalHealthNN::new();
        let mut b = MentalHealthNN::new();
        let mut c = MentalHealthNN::new();

        let prediction = a.classify(&sample);
        let [eda_tonic, eda_phasic, bpm, hrv, lux] = sample.as_array();
        let status = b.predict(eda_tonic, eda_phasic, bpm, hrv, lux);
        let probabilities = c.prediction_probabilities(eda_tonic, eda_phasic, bpm, hrv, lux);

        assert_eq!(prediction.status, status);
        assert_eq!(prediction.probabilities, probabilities);
        assert_eq!(prediction.status, decide(&probabilities));
    }
}
