//! Utilities.
use anyhow::Result;
use candle_core::{Device, Tensor, WithDType};
use candle_nn::VarMap;
use ndarray::ArrayD;
use num_traits::AsPrimitive;

/// Interface for handling output dimensions.
pub trait OutDim {
    /// Returns the output dimension.
    fn get_out_dim(&self) -> usize;

    /// Sets the output dimension.
    fn set_out_dim(&mut self, v: usize);
}

/// Converts an n-dimensional array into a tensor on the given device.
pub fn arrayd_to_tensor<T1, T2>(a: &ArrayD<T1>, device: &Device) -> Result<Tensor>
where
    T1: Copy + AsPrimitive<T2>,
    T2: WithDType,
{
    let v: Vec<T2> = a.iter().map(|e| e.as_()).collect();
    Ok(Tensor::from_vec(v, a.shape(), device)?)
}

/// Multiplies every variable of `varmap` whose name starts with one of
/// `prefixes` by `scale`, in place.
///
/// Variables are identified by their names, so the caller must know the
/// prefixes under which the network registered its parameters.
pub fn scale_vars(varmap: &VarMap, prefixes: &[&str], scale: f64) -> Result<()> {
    let vars = varmap.data().lock().unwrap();
    for (name, var) in vars.iter() {
        if prefixes.iter().any(|p| name.starts_with(p)) {
            let scaled = (scale * var.as_tensor())?;
            var.set(&scaled)?;
        }
    }
    Ok(())
}
