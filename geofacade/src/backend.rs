use crate::{Clustering, Measurement, Predicates, Transformation};

/// Everything a [`crate::Facade`] needs from its geometry engine.
pub trait Backend: Measurement + Transformation + Predicates + Clustering {}

impl<T: Measurement + Transformation + Predicates + Clustering> Backend for T {}

/// The default backend: haversine measurements, and the `geo` crate for hulls, unions,
/// buffers, predicates and clustering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeoBackend;
