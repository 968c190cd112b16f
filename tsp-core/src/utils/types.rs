/// Alias to a scalar floating type.
///
/// NOTE: Prefer `f64` as the default floating type: distance accumulation over long tours
/// loses noticeable precision with `f32` and no performance benefits were found.
pub type Float = f64;
