use crate::GeoBackend;
use anyhow::{Result, anyhow};
use geo::{Dbscan, KMeans};
use geofacade_geometry::PointGeometry;

/// Groups points into clusters. Labels are returned in input order.
pub trait Clustering {
	/// Density-based clustering. Points with fewer than `min_points` neighbours (themselves
	/// included) within `epsilon` coordinate units are noise and get `None`.
	fn dbscan(&self, points: &[PointGeometry], epsilon: f64, min_points: usize) -> Vec<Option<usize>>;

	/// Partitions the points into `k` clusters labelled `0..k`. Fails when `k` is zero or exceeds
	/// the number of points.
	fn kmeans(&self, points: &[PointGeometry], k: usize) -> Result<Vec<usize>>;
}

fn multi_point(points: &[PointGeometry]) -> geo::MultiPoint {
	geo::MultiPoint::new(points.iter().map(PointGeometry::to_geo).collect())
}

impl Clustering for GeoBackend {
	fn dbscan(&self, points: &[PointGeometry], epsilon: f64, min_points: usize) -> Vec<Option<usize>> {
		multi_point(points).dbscan(epsilon, min_points)
	}

	fn kmeans(&self, points: &[PointGeometry], k: usize) -> Result<Vec<usize>> {
		multi_point(points)
			.kmeans(k)
			.map_err(|e| anyhow!("k-means clustering of {} points failed: {e}", points.len()))
	}
}
