use crate::aspects::{Aspect, AspectCalculator};
use crate::ephemeris::{EphemerisSnapshot, RawBody};
use crate::error::ChartError;
use crate::houses::{resolve_houses, HouseSet};
use crate::layout::{ChartLayout, ChartLayoutEngine, LayoutSettings};
use crate::zodiac::{Body, PlanetPosition, Sign};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Domain facts for one birth instant and place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    pub instant: DateTime<Utc>,
    /// Sign on the first house cusp; `None` without houses.
    pub ascendant: Option<Sign>,
    pub sun_sign: Option<Sign>,
    pub moon_sign: Option<Sign>,
    pub planets: Vec<PlanetPosition>,
    pub houses: Option<HouseSet>,
    pub aspects: Vec<Aspect>,
}

impl NatalChart {
    /// Normalize an oracle snapshot into chart facts.
    ///
    /// Non-finite longitudes are rejected up front; cusps, when present, must
    /// number at least twelve.
    pub fn from_snapshot(snapshot: &EphemerisSnapshot) -> Result<Self, ChartError> {
        let planets = snapshot
            .bodies
            .iter()
            .map(body_position)
            .collect::<Result<Vec<_>, _>>()?;

        let houses = match &snapshot.cusps {
            Some(cusps) => {
                if let Some(bad) = cusps.iter().position(|c| !c.is_finite()) {
                    return Err(ChartError::NonFiniteLongitude {
                        body: format!("house {}", bad + 1),
                        value: cusps[bad],
                    });
                }
                Some(resolve_houses(cusps)?)
            }
            None => {
                warn!("snapshot for {} has no house cusps; chart has no ascendant", snapshot.instant);
                None
            }
        };

        let aspects = AspectCalculator::new().detect_aspects(&planets);
        debug!(
            "natal chart for {}: {} planets, {} aspects, houses: {}",
            snapshot.instant,
            planets.len(),
            aspects.len(),
            houses.is_some()
        );

        Ok(Self {
            instant: snapshot.instant,
            ascendant: houses.as_ref().map(HouseSet::ascendant),
            sun_sign: sign_of(&planets, Body::Sun),
            moon_sign: sign_of(&planets, Body::Moon),
            planets,
            houses,
            aspects,
        })
    }

    pub fn ascendant(&self) -> Option<Sign> {
        self.ascendant
    }

    /// House (1..=12) each planet falls in, when houses are known.
    pub fn planet_houses(&self) -> Vec<(String, u8)> {
        match &self.houses {
            Some(houses) => self
                .planets
                .iter()
                .map(|p| (p.planet.clone(), houses.house_of(p.absolute_longitude())))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Chart geometry for one render pass. Without houses the wheel is
    /// rotated to Aries and carries no cusp spokes.
    pub fn layout(&self, chart_size: f64, settings: &LayoutSettings) -> Result<ChartLayout, ChartError> {
        let engine = ChartLayoutEngine::new(settings.clone());
        let layout = match &self.houses {
            Some(houses) => engine.layout_with_houses(houses, &self.planets, chart_size)?,
            None => engine.layout(Sign::Aries, &self.planets, chart_size)?,
        };

        if layout.glyphs.len() != self.planets.len() {
            warn!(
                "layout placed {} of {} planets",
                layout.glyphs.len(),
                self.planets.len()
            );
        }
        Ok(layout)
    }
}

fn sign_of(planets: &[PlanetPosition], body: Body) -> Option<Sign> {
    planets
        .iter()
        .find(|p| p.body() == Some(body))
        .map(|p| p.sign)
}

fn body_position(body: &RawBody) -> Result<PlanetPosition, ChartError> {
    if !body.longitude.is_finite() {
        return Err(ChartError::NonFiniteLongitude {
            body: body.name.clone(),
            value: body.longitude,
        });
    }
    Ok(PlanetPosition::from_longitude(
        body.name.clone(),
        body.longitude,
        body.retrograde,
    ))
}
