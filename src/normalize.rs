use crate::{
    SampleVector,
    arch::{INPUTS, Normalization},
};

/// Z-scores samples against fixed reference statistics.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    norm: &'a [Normalization; INPUTS],
}

impl<'a> Normalizer<'a> {
    pub fn new(norm: &'a [Normalization; INPUTS]) -> Self {
        Self { norm }
    }

    /// Scales each feature to `(value - mean) / std`, keeping the input order.
    ///
    /// No clipping is applied.
    pub fn normalize_array(&self, x: [f32; INPUTS]) -> [f32; INPUTS] {
        let mut z = x;
        z.iter_mut()
            .zip(self.norm)
            .for_each(|(z, n)| *z = (*z - n.mean) / n.std);

        z
    }

    pub fn normalize(&self, sample: &SampleVector) -> SampleVector {
        self.normalize_array(sample.as_array()).into()
    }
}
