use ndarray::{Array1, ArrayView1};

/// Normalizes a vector of logits into a probability distribution.
///
/// Logits are exponentiated as given (no max subtraction) and divided by the sum of the
/// exponentials taken in index order, mirroring the reference firmware.
#[derive(Clone, Copy, Debug, Default)]
pub struct Softmax;

impl Softmax {
    pub fn forward(&self, z: ArrayView1<f32>) -> Array1<f32> {
        let exps = z.mapv(f32::exp);
        let sum = exps.iter().fold(0., |acc, &e| acc + e);

        exps.mapv_into(|e| e / sum)
    }
}
