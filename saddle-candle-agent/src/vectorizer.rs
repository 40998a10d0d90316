//! Observation vectorizers.
use crate::{util::arrayd_to_tensor, Device};
use anyhow::Result;
use candle_core::Tensor;
use ndarray::ArrayD;
use num_traits::AsPrimitive;
use saddle_core::{error::SaddleError, ObsVectorizer};
use std::marker::PhantomData;

/// Stacks n-dimensional array observations into one `f32` tensor batch.
///
/// Each observation must have exactly the configured shape; the output is a
/// tensor of shape `(batch, *out_shape)`.
pub struct ArrayObsVectorizer<T> {
    shape: Vec<usize>,
    device: candle_core::Device,
    phantom: PhantomData<T>,
}

impl<T> ArrayObsVectorizer<T> {
    /// Creates a vectorizer producing tensors of shape `(batch, *shape)`.
    pub fn new(shape: &[usize], device: Device) -> Self {
        Self {
            shape: shape.to_vec(),
            device: device.into(),
            phantom: PhantomData,
        }
    }
}

impl<T> ObsVectorizer for ArrayObsVectorizer<T>
where
    T: Copy + AsPrimitive<f32> + 'static,
{
    type Obs = ArrayD<T>;
    type Output = Tensor;

    fn out_shape(&self) -> &[usize] {
        &self.shape
    }

    fn to_vecs(&self, observations: &[&ArrayD<T>]) -> Result<Tensor> {
        let mut tensors = Vec::with_capacity(observations.len());
        for obs in observations.iter() {
            if obs.shape() != self.shape.as_slice() {
                return Err(SaddleError::ObsShapeMismatch {
                    expected: self.shape.clone(),
                    actual: obs.shape().to_vec(),
                }
                .into());
            }
            tensors.push(arrayd_to_tensor::<T, f32>(obs, &self.device)?);
        }
        Ok(Tensor::stack(&tensors, 0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::ArrayObsVectorizer;
    use crate::Device;
    use ndarray::{ArrayD, IxDyn};
    use saddle_core::{error::SaddleError, ObsVectorizer};

    #[test]
    fn test_stacking() {
        let vectorizer = ArrayObsVectorizer::<f32>::new(&[2, 3], Device::Cpu);
        let a = ArrayD::from_elem(IxDyn(&[2, 3]), 1.0f32);
        let b = ArrayD::from_elem(IxDyn(&[2, 3]), 2.0f32);
        let t = vectorizer.to_vecs(&[&a, &b]).unwrap();
        assert_eq!(t.dims(), &[2, 2, 3]);
    }

    #[test]
    fn test_shape_mismatch() {
        let vectorizer = ArrayObsVectorizer::<f32>::new(&[4], Device::Cpu);
        let bad = ArrayD::from_elem(IxDyn(&[5]), 0.0f32);
        let err = vectorizer.to_vecs(&[&bad]).unwrap_err();
        match err.downcast_ref::<SaddleError>() {
            Some(SaddleError::ObsShapeMismatch { expected, actual }) => {
                assert_eq!(expected, &vec![4]);
                assert_eq!(actual, &vec![5]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_integer_observations() {
        let vectorizer = ArrayObsVectorizer::<u8>::new(&[2], Device::Cpu);
        let a = ArrayD::from_shape_vec(IxDyn(&[2]), vec![1u8, 255]).unwrap();
        let t = vectorizer.to_vecs(&[&a]).unwrap();
        assert_eq!(t.to_vec2::<f32>().unwrap()[0], vec![1.0, 255.0]);
    }
}
