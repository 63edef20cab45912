use ndarray::{ArrayBase, DataMut, Dimension};

/// Clamp every sample to the normalized [0, 1] range in place.
///
/// NaN samples are left as NaN.
pub fn clamp_unit_inplace<S, D>(data: &mut ArrayBase<S, D>)
where
    S: DataMut<Elem = f32>,
    D: Dimension,
{
    data.mapv_inplace(|v| v.clamp(0.0, 1.0));
}

/// Returns `true` if every sample lies in [0, 1].
pub fn is_unit_range<S, D>(data: &ArrayBase<S, D>) -> bool
where
    S: ndarray::Data<Elem = f32>,
    D: Dimension,
{
    data.iter().all(|v| (0.0..=1.0).contains(v))
}
