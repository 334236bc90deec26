use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use crs::{CrsError, Projection};
use geom::{LonLat, Pt2D, Ring, UnitFmt};

use crate::{Misclosure, MisclosureReport, SurveyLine, Traverse};

/// One lot as submitted: raw survey line strings, in traverse order. The first line is the
/// tie-line leg from the reference monument to the point-of-beginning; the rest trace the
/// parcel boundary. Identity is stable across edits; missing id/name get defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LotInput {
    pub id: Option<String>,
    pub name: Option<String>,
    pub lines: Vec<String>,
}

/// Everything computed for one successfully-plotted lot, in geographic coordinates ready for
/// map display, plus the diagnostic reports.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParcelGeometry {
    pub pob: LonLat,
    /// Reference monument, then point-of-beginning.
    pub tie_line: Vec<LonLat>,
    /// Closed for display: the first vertex is repeated as the last whenever the lot has more
    /// than one boundary vertex, regardless of misclosure.
    pub boundary: Vec<LonLat>,
    /// None when the boundary has a single vertex (a tie-line-only lot).
    pub misclosure: Option<MisclosureReport>,
    pub area: AreaReport,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaReport {
    pub sqm: String,
    pub hectares: String,
}

/// Per-lot result. A failure in one lot never aborts its siblings, so this is a value, not a
/// propagated error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LotOutcome {
    Success(ParcelGeometry),
    Nodata { message: String },
    Error { message: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LotReport {
    pub lot_id: String,
    pub lot_name: String,
    #[serde(flatten)]
    pub outcome: LotOutcome,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    Success,
    SuccessWithErrors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlotResponse {
    pub status: OverallStatus,
    /// The reference monument in geographic coordinates, when it could be transformed.
    pub reference_marker: Option<LonLat>,
    pub lots: Vec<LotReport>,
}

/// Plots one lot's traverse from the reference monument. Blank lines are skipped; a lot with
/// no remaining lines is `Nodata`, which is valid (it plots only the reference point).
pub fn plot_lot(
    proj: &Projection,
    reference: Pt2D,
    lot_name: &str,
    raw_lines: &[String],
    fmt: &UnitFmt,
) -> LotOutcome {
    let lines: Vec<&str> = raw_lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();
    if lines.is_empty() {
        return LotOutcome::Nodata {
            message: format!("Lot '{}' has no survey lines.", lot_name),
        };
    }

    match build_parcel(proj, reference, &lines, fmt) {
        Ok(parcel) => LotOutcome::Success(parcel),
        Err(err) => {
            warn!("lot '{}' failed: {:#}", lot_name, err);
            LotOutcome::Error {
                message: format!("Lot '{}': {:#}", lot_name, err),
            }
        }
    }
}

fn build_parcel(
    proj: &Projection,
    reference: Pt2D,
    lines: &[&str],
    fmt: &UnitFmt,
) -> Result<ParcelGeometry> {
    let mut legs = Vec::with_capacity(lines.len());
    for (idx, raw) in lines.iter().enumerate() {
        let which = if idx == 0 {
            "tie-line to POB"
        } else {
            "parcel boundary"
        };
        legs.push(
            SurveyLine::parse(raw)
                .with_context(|| format!("invalid {} (line {}): {}", which, idx + 1, raw))?,
        );
    }

    let traverse = Traverse::walk(reference, &legs);
    // The first vertex after the tie-line leg is the point-of-beginning; the boundary runs on
    // from there. The reference monument itself is not part of the parcel.
    let boundary_proj = &traverse.points()[1..];
    let pob = boundary_proj[0];

    // Always computed raw, before the ring is forced shut.
    let misclosure = if boundary_proj.len() >= 2 {
        Some(Misclosure::between(pob, traverse.terminus()).report(fmt))
    } else {
        None
    };

    let mut closed = boundary_proj.to_vec();
    if closed.len() > 1 && closed[0] != *closed.last().unwrap() {
        closed.push(pob);
    }

    // Area comes from the projected ring; geographic degrees would make it meaningless.
    let area_sqm = Ring::maybe_new(closed.clone())
        .map(|ring| ring.area_sqm())
        .unwrap_or(0.0);

    // Reproject only after closure-forcing, so the displayed ring is closed too.
    let reference_ll = proj
        .to_lonlat(reference)
        .context("transforming reference monument")?;
    let mut boundary = Vec::with_capacity(closed.len());
    for (idx, pt) in closed.iter().enumerate() {
        boundary.push(
            proj.to_lonlat(*pt)
                .with_context(|| format!("transforming boundary vertex {}", idx + 1))?,
        );
    }
    let pob_ll = boundary[0];

    Ok(ParcelGeometry {
        pob: pob_ll,
        tie_line: vec![reference_ll, pob_ll],
        boundary,
        misclosure,
        area: AreaReport {
            sqm: fmt.square_meters(area_sqm),
            hectares: fmt.hectares(area_sqm),
        },
    })
}

/// Plots every lot in one request against the same reference monument and target CRS. Lots
/// are processed independently and sequentially; the only request-level failure is a CRS that
/// can't be resolved at all.
pub fn plot_lots(
    epsg: u32,
    reference: Pt2D,
    lots: &[LotInput],
    fmt: &UnitFmt,
) -> Result<PlotResponse, CrsError> {
    let proj = Projection::from_epsg(epsg)?;

    let reference_marker = match proj.to_lonlat(reference) {
        Ok(ll) => Some(ll),
        Err(err) => {
            warn!("couldn't plot the reference marker: {}", err);
            None
        }
    };

    let mut reports = Vec::with_capacity(lots.len());
    for (idx, lot) in lots.iter().enumerate() {
        let lot_id = lot.id.clone().unwrap_or_else(|| {
            warn!("lot at index {} is missing an id", idx);
            format!("lot-{}", idx)
        });
        let lot_name = lot
            .name
            .clone()
            .unwrap_or_else(|| format!("Lot {}", idx + 1));
        let outcome = plot_lot(&proj, reference, &lot_name, &lot.lines, fmt);
        reports.push(LotReport {
            lot_id,
            lot_name,
            outcome,
        });
    }

    let status = if reports
        .iter()
        .all(|r| matches!(r.outcome, LotOutcome::Success(_)))
    {
        OverallStatus::Success
    } else {
        OverallStatus::SuccessWithErrors
    };
    Ok(PlotResponse {
        status,
        reference_marker,
        lots: reports,
    })
}
