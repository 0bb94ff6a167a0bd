//! Bucketing GeoJSON features.
//!
//! Reads a FeatureCollection (or a single Feature or Geometry), files every
//! feature under its bucket and returns the counts. A feature that cannot be
//! bucketed is logged and counted as skipped unless the configuration asks to
//! stop at the first failure.

use crate::config::Config;
use crate::error::{BucketError, Result};
use crate::geometry::Bucketer;
use crate::stats::{BucketStats, SharedBucketStats};
use geo::{Coord, Geometry, LineString, Point, Polygon};
use geojson::{Feature, FeatureCollection, GeoJson, Value};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::time::Instant;

fn position_to_coord(position: &[f64]) -> Result<Coord> {
    if position.len() < 2 {
        return Err(BucketError::InvalidInput(
            "Coordinate must have at least 2 values".to_string(),
        ));
    }
    Ok(Coord {
        x: position[0],
        y: position[1],
    })
}

fn line_string(positions: &[Vec<f64>]) -> Result<LineString> {
    positions
        .iter()
        .map(|position| position_to_coord(position))
        .collect::<Result<Vec<_>>>()
        .map(LineString::from)
}

/// Converts a GeoJSON geometry into a geo geometry.
///
/// Only Point, LineString and Polygon are supported; multi-part geometries and
/// collections return `Ok(None)`.
pub fn geometry_from_geojson(geometry: &geojson::Geometry) -> Result<Option<Geometry>> {
    let converted = match &geometry.value {
        Value::Point(position) => Geometry::Point(Point::from(position_to_coord(position)?)),
        Value::LineString(positions) => Geometry::LineString(line_string(positions)?),
        Value::Polygon(rings) => {
            let Some((exterior, interiors)) = rings.split_first() else {
                return Err(BucketError::InvalidInput(
                    "Polygon must have at least one ring".to_string(),
                ));
            };
            let interiors = interiors
                .iter()
                .map(|ring| line_string(ring))
                .collect::<Result<Vec<_>>>()?;
            Geometry::Polygon(Polygon::new(line_string(exterior)?, interiors))
        }
        Value::MultiPoint(_) => return unsupported("MultiPoint"),
        Value::MultiLineString(_) => return unsupported("MultiLineString"),
        Value::MultiPolygon(_) => return unsupported("MultiPolygon"),
        Value::GeometryCollection(_) => return unsupported("GeometryCollection"),
    };
    Ok(Some(converted))
}

fn unsupported(kind: &str) -> Result<Option<Geometry>> {
    warn!("{} geometries are not bucketed", kind);
    Ok(None)
}

/// Bucket path for a single feature; `Ok(None)` when it has nothing to bucket.
fn bucket_feature(feature: &Feature, bucketer: &Bucketer) -> Result<Option<String>> {
    let Some(geometry) = &feature.geometry else {
        debug!("feature has no geometry");
        return Ok(None);
    };
    match geometry_from_geojson(geometry)? {
        Some(geometry) => bucketer.bucket_for_geometry(&geometry),
        None => Ok(None),
    }
}

fn tally(
    outcome: Result<Option<String>>,
    index: usize,
    stats: &SharedBucketStats,
    skip_invalid: bool,
) -> Result<()> {
    match outcome {
        Ok(Some(bucket)) => stats.record(bucket),
        Ok(None) => stats.record_skipped(),
        Err(e) if skip_invalid => {
            warn!("feature {}: {}", index, e);
            stats.record_skipped();
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

/// Buckets every feature in a collection.
///
/// Honors `max_features`, `parallel` and `skip_invalid` from `config`; the
/// bucketer's precision is used as is.
pub fn bucket_features(
    features: &[Feature],
    bucketer: &Bucketer,
    config: &Config,
) -> Result<BucketStats> {
    let started = Instant::now();
    let limit = config.max_features.unwrap_or(features.len()).min(features.len());
    let features = &features[..limit];
    let stats = SharedBucketStats::new();

    if config.parallel {
        features
            .par_iter()
            .enumerate()
            .try_for_each(|(index, feature)| {
                tally(
                    bucket_feature(feature, bucketer),
                    index,
                    &stats,
                    config.skip_invalid,
                )
            })?;
    } else {
        for (index, feature) in features.iter().enumerate() {
            tally(
                bucket_feature(feature, bucketer),
                index,
                &stats,
                config.skip_invalid,
            )?;
        }
    }

    let stats = stats.into_inner();
    info!(
        "Bucketed {} features into {} buckets ({} skipped) in {:.3?}",
        limit,
        stats.len(),
        stats.skipped(),
        started.elapsed()
    );
    Ok(stats)
}

/// Buckets a GeoJSON document: a FeatureCollection, a Feature or a Geometry.
///
/// # Examples
///
/// ```rust
/// use geobucket::{Config, ingest::bucket_geojson_str};
///
/// let json = r#"{
///   "type": "FeatureCollection",
///   "features": [
///     {"type": "Feature", "properties": {},
///      "geometry": {"type": "Point", "coordinates": [-5.6, 42.6]}},
///     {"type": "Feature", "properties": {},
///      "geometry": {"type": "Point", "coordinates": [-5.6, 42.6]}}
///   ]
/// }"#;
///
/// let stats = bucket_geojson_str(json, &Config::default())?;
/// assert_eq!(stats.count("e/z/s"), 2);
/// # Ok::<(), geobucket::BucketError>(())
/// ```
pub fn bucket_geojson_str(json: &str, config: &Config) -> Result<BucketStats> {
    config.validate()?;
    let bucketer = Bucketer::new(config.precision)?;

    let features = match json.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(FeatureCollection { features, .. }) => features,
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(geometry) => vec![Feature::from(geometry)],
    };
    debug!("parsed {} features", features.len());

    bucket_features(&features, &bucketer, config)
}

/// Reads and buckets a GeoJSON file.
pub fn bucket_geojson_file<P: AsRef<Path>>(path: P, config: &Config) -> Result<BucketStats> {
    let path = path.as_ref();
    info!("Reading {}", path.display());
    let json = fs::read_to_string(path)?;
    bucket_geojson_str(&json, config)
}
