use ndarray::{Array1, ArrayView1, ArrayView2, aview1, aview2};

use crate::arch::activations::ActFn;

/// A fully connected layer over borrowed parameter tables.
///
/// The layer never owns or mutates its parameters, it only views them. Weighted sums are
/// accumulated input by input starting from the bias, so results are reproducible bit for bit
/// against the reference firmware loops.
#[derive(Clone, Debug)]
pub struct Dense<'a> {
    weights: ArrayView2<'a, f32>,
    biases: ArrayView1<'a, f32>,
    act_fn: Option<ActFn>,
}

impl<'a> Dense<'a> {
    /// Creates a new `Dense` layer.
    ///
    /// # Arguments
    /// * `weights` - The weight table, indexed `[input][output]`.
    /// * `biases` - One bias per output.
    /// * `act_fn` - The activation applied to the weighted sums, if any.
    ///
    /// # Returns
    /// A new `Dense` instance.
    pub fn new<const IN: usize, const OUT: usize>(
        weights: &'a [[f32; OUT]; IN],
        biases: &'a [f32; OUT],
        act_fn: Option<ActFn>,
    ) -> Self {
        Self {
            weights: aview2(&weights[..]),
            biases: aview1(&biases[..]),
            act_fn,
        }
    }

    /// Returns the `(inputs, outputs)` dimension of this layer.
    pub fn dim(&self) -> (usize, usize) {
        self.weights.dim()
    }

    /// Makes a forward pass through the layer.
    ///
    /// # Arguments
    /// * `x` - The input activations, one per layer input.
    ///
    /// # Returns
    /// The (activated) weighted sums, one per layer output.
    pub fn forward(&self, x: ArrayView1<f32>) -> Array1<f32> {
        let (dim_in, dim_out) = self.dim();
        debug_assert_eq!(x.len(), dim_in);

        Array1::from_shape_fn(dim_out, |i| {
            let z = self
                .weights
                .column(i)
                .iter()
                .zip(x.iter())
                .fold(self.biases[i], |acc, (&w, &x)| acc + x * w);

            match &self.act_fn {
                Some(act_fn) => act_fn.f(z),
                None => z,
            }
        })
    }
}
