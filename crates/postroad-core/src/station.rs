//! Station catalog: the named reference locations a journey runs between.
//!
//! Each station pairs a climate vector with a vernacular building style
//! ("building gene"), map placement, and an opaque model asset reference.
//! The catalog is built once — from the builtin dataset or from a JSON
//! registry document — and never mutated afterwards. Everything except the
//! climate vector is opaque data carried through to the presentation layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::climate::ClimateVector;
use crate::coords::{LatLon, ScenePosition};

/// A reference location on the journey map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Stable identifier; unique within a catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Localized display name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_name: Option<String>,
    /// Authored placement in the stylized map scene.
    pub position: ScenePosition,
    /// Real-world coordinates, if the station maps to an actual place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<LatLon>,
    pub climate: ClimateVector,
    /// The vernacular style this station represents.
    pub building_gene: String,
    pub description: String,
    pub region: String,
    /// Opaque asset reference; never interpreted by the core.
    pub model_path: String,
}

/// Failure loading a station registry document.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid station registry JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate station id `{id}` in registry")]
    DuplicateId { id: String },
}

/// An ordered, immutable set of stations with id lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationCatalog {
    stations: Vec<Station>,
}

impl StationCatalog {
    /// Build a catalog from an explicit station list, rejecting duplicate ids.
    pub fn new(stations: Vec<Station>) -> Result<Self, CatalogError> {
        for (n, a) in stations.iter().enumerate() {
            if stations[n + 1..].iter().any(|b| b.id == a.id) {
                return Err(CatalogError::DuplicateId { id: a.id.clone() });
            }
        }
        Ok(Self { stations })
    }

    /// Parse the external registry format: a JSON array of station records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let stations: Vec<Station> = serde_json::from_str(json)?;
        Self::new(stations)
    }

    /// Look a station up by id.
    pub fn get(&self, id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    /// Stations in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn station(
    id: &str,
    name: &str,
    local_name: &str,
    position: [f32; 3],
    coords: Option<(f64, f64)>,
    climate: ClimateVector,
    building_gene: &str,
    description: &str,
    region: &str,
    model_path: &str,
) -> Station {
    Station {
        id: id.to_owned(),
        name: name.to_owned(),
        local_name: Some(local_name.to_owned()),
        position: ScenePosition::from(position),
        coords: coords.map(|(lat, lon)| LatLon::new(lat, lon)),
        climate,
        building_gene: building_gene.to_owned(),
        description: description.to_owned(),
        region: region.to_owned(),
        model_path: model_path.to_owned(),
    }
}

impl StationCatalog {
    /// The builtin dataset: nineteen stations spanning China's vernacular
    /// building regions, from the water towns of Jiangnan to the Tibetan
    /// plateau.
    pub fn builtin() -> Self {
        let c = ClimateVector::new;
        Self {
            stations: vec![
                station(
                    "suzhou", "Suzhou", "苏州驿", [-4.0, 0.3, 4.0],
                    Some((31.30, 120.62)),
                    c(1200.0, 82.0, 16.0, 5.0, 0.55, 1.0),
                    "raised-beam frame",
                    "Courtyards that gather the rain of four roofs into the sky well.",
                    "Jiangnan", "models/suzhou_house_1.glb",
                ),
                station(
                    "huizhou", "Huizhou", "徽州驿", [-2.0, 0.8, 2.0],
                    Some((29.87, 118.44)),
                    c(1500.0, 78.0, 15.0, 200.0, 0.5, 3.0),
                    "carved-brick horse-head wall",
                    "Whitewashed walls, dark tile, stepped gables against fire.",
                    "Wannan", "models/huizhou_house_1.glb",
                ),
                station(
                    "fujian", "Yongding", "永定驿", [-3.0, 0.5, -1.0],
                    Some((24.72, 116.73)),
                    c(1800.0, 85.0, 20.0, 300.0, 0.6, 9.0),
                    "circular tulou",
                    "A fortress of rammed earth, one clan living within the ring.",
                    "Minxi", "models/tulou.glb",
                ),
                station(
                    "pingyao", "Pingyao", "平遥驿", [3.0, 1.2, 3.0],
                    Some((37.20, 112.18)),
                    c(450.0, 55.0, 10.0, 800.0, 0.75, 5.0),
                    "cave-dwelling vault",
                    "Thick walls and flat roofs standing against the wind-blown dust.",
                    "Jinzhong", "models/yaodong.glb",
                ),
                station(
                    "yanan", "Yan'an", "延安驿", [4.0, 1.5, 1.0],
                    Some((36.59, 109.49)),
                    c(350.0, 45.0, 9.0, 1000.0, 0.8, 4.0),
                    "loess cave dwelling",
                    "Carved into the hillside, warm in winter and cool in summer.",
                    "Shaanbei", "models/yaodong.glb",
                ),
                station(
                    "dali", "Dali", "大理驿", [0.0, 2.0, -3.0],
                    Some((25.69, 100.16)),
                    c(1000.0, 70.0, 15.0, 2000.0, 0.7, 2.0),
                    "three halls, one screen wall",
                    "Bai courtyard houses whose screen walls greet the guest.",
                    "West Yunnan", "models/tuzhangfang.glb",
                ),
                station(
                    "lhasa", "Lhasa", "拉萨驿", [2.0, 2.5, -4.0],
                    Some((29.65, 91.14)),
                    c(200.0, 35.0, 8.0, 3650.0, 0.9, 6.0),
                    "stone blockhouse",
                    "Dry-stone towers holding their warmth against the plateau cold.",
                    "Tibet", "models/diaofang.glb",
                ),
                station(
                    "kashgar", "Kashgar", "喀什驿", [5.0, 1.8, -2.0],
                    Some((39.47, 75.99)),
                    c(100.0, 30.0, 12.0, 1200.0, 0.85, 7.0),
                    "raw-earth dwelling",
                    "Flat roofs and thick earthen walls around an inner court.",
                    "South Xinjiang", "models/gaotai_house.glb",
                ),
                station(
                    "beijing", "Beijing", "北京驿", [1.0, 0.5, 4.0],
                    Some((39.90, 116.41)),
                    c(600.0, 55.0, 12.0, 50.0, 0.65, 6.0),
                    "siheyuan courtyard",
                    "The main hall faces south; four wings enclose the court.",
                    "Jingji", "models/siheyuan.glb",
                ),
                station(
                    "fenghuang", "Fenghuang", "凤凰驿", [-1.0, 0.6, 1.0],
                    Some((27.95, 109.60)),
                    c(1400.0, 80.0, 17.0, 300.0, 0.5, 2.0),
                    "stilted house",
                    "Half-raised on posts between the mountain and the river.",
                    "Xiangxi", "models/diaojiaolou.glb",
                ),
                station(
                    "weihai", "Weihai", "威海驿", [0.0, 0.3, 5.0],
                    Some((37.51, 122.12)),
                    c(700.0, 70.0, 12.0, 20.0, 0.6, 3.0),
                    "seaweed-thatched house",
                    "Seagrass roofs over stone walls, weathering the coastal wind.",
                    "Jiaodong", "models/haicaofang.glb",
                ),
                station(
                    "xishuangbanna", "Xishuangbanna", "版纳驿", [-1.0, 1.5, -4.0],
                    Some((22.01, 100.80)),
                    c(1600.0, 88.0, 22.0, 600.0, 0.55, 1.0),
                    "bamboo stilt house",
                    "Dai bamboo houses raised off the damp, open to the breeze.",
                    "South Yunnan", "models/zhulou.glb",
                ),
                station(
                    "xilingol", "Xilingol", "草原驿", [3.0, 1.0, 5.0],
                    Some((43.93, 116.09)),
                    c(300.0, 40.0, 2.0, 1000.0, 0.8, 1.0),
                    "ger",
                    "A felt dome that follows the water and the grass.",
                    "Mongolia", "models/ger.glb",
                ),
                station(
                    "guangzhou", "Guangzhou", "广州驿", [-3.0, 0.3, -3.0],
                    Some((23.13, 113.26)),
                    c(1800.0, 82.0, 22.0, 10.0, 0.55, 3.0),
                    "wok-ear house",
                    "Wok-handle gables crowning the roofline of the Lingnan south.",
                    "Lingnan", "models/wok_ear_house.glb",
                ),
                station(
                    "turpan", "Turpan", "吐鲁番驿", [5.0, 0.8, 0.0],
                    Some((42.95, 89.19)),
                    c(50.0, 25.0, 14.0, -50.0, 0.95, 4.0),
                    "aywan house",
                    "Adobe flat roofs with a skylit central hall for the heat.",
                    "East Xinjiang", "models/aywan.glb",
                ),
                station(
                    "yizhan", "Ancient Post", "古驿站", [1.0, 1.0, 0.0],
                    None,
                    c(500.0, 50.0, 12.0, 500.0, 0.7, 5.0),
                    "post station",
                    "A courier pavilion on the official road, relaying the dispatches.",
                    "Central Plains", "models/post_station.glb",
                ),
                station(
                    "hangzhou", "Hangzhou", "杭州驿", [-5.0, 0.3, 3.0],
                    Some((30.27, 120.16)),
                    c(1400.0, 78.0, 17.0, 10.0, 0.55, 1.0),
                    "raised-beam frame",
                    "Garden dwellings in the manner of the West Lake.",
                    "Jiangnan", "models/suzhou_house_2.glb",
                ),
                station(
                    "wuyuan", "Wuyuan", "婺源驿", [-2.0, 0.9, 0.0],
                    Some((29.25, 117.86)),
                    c(1600.0, 80.0, 16.0, 250.0, 0.5, 3.0),
                    "carved-brick horse-head wall",
                    "White walls and dark pavilions above the rapeseed fields.",
                    "Ganbei", "models/huizhou_house_2.glb",
                ),
                station(
                    "wuxi", "Wuxi", "无锡驿", [-4.0, 0.3, 5.0],
                    Some((31.49, 120.31)),
                    c(1100.0, 80.0, 16.0, 8.0, 0.55, 1.0),
                    "raised-beam frame",
                    "Water-town households on the shore of Lake Tai.",
                    "Jiangnan", "models/suzhou_house_3.glb",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = StationCatalog::builtin();
        assert_eq!(catalog.len(), 19);
        // Re-validating through the constructor exercises the duplicate check.
        let revalidated = StationCatalog::new(catalog.iter().cloned().collect());
        assert!(revalidated.is_ok());
    }

    #[test]
    fn lookup_by_id() {
        let catalog = StationCatalog::builtin();
        let suzhou = catalog.get("suzhou").expect("suzhou present");
        assert_eq!(suzhou.climate.rainfall, 1200.0);
        assert_eq!(suzhou.climate.defense, 1.0);
        assert!(catalog.get("atlantis").is_none());
    }

    #[test]
    fn names_may_repeat_but_ids_may_not() {
        let catalog = StationCatalog::builtin();
        // Three Jiangnan stations share a building gene; ids stay distinct.
        let genes: Vec<&str> = catalog
            .iter()
            .filter(|s| s.building_gene == "raised-beam frame")
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(genes, vec!["suzhou", "hangzhou", "wuxi"]);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let a = StationCatalog::builtin().get("suzhou").unwrap().clone();
        let mut b = a.clone();
        b.name = "Suzhou again".to_owned();
        let err = StationCatalog::new(vec![a, b]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { ref id } if id == "suzhou"));
    }

    #[test]
    fn registry_json_round_trips() {
        let catalog = StationCatalog::builtin();
        let stations: Vec<&Station> = catalog.iter().collect();
        let json = serde_json::to_string(&stations).expect("serialize");
        let reloaded = StationCatalog::from_json(&json).expect("reload");
        assert_eq!(reloaded, catalog);
    }

    #[test]
    fn registry_json_minimal_record() {
        // local_name and coords are optional in the registry format.
        let json = r#"[{
            "id": "somewhere",
            "name": "Somewhere",
            "position": { "x": 0.0, "y": 0.0, "z": 0.0 },
            "climate": { "rainfall": 100.0, "humidity": 50.0, "temperature": 10.0,
                         "altitude": 0.0, "sunlight": 0.5, "defense": 0.0 },
            "building_gene": "none",
            "description": "",
            "region": "nowhere",
            "model_path": "models/none.glb"
        }]"#;
        let catalog = StationCatalog::from_json(json).expect("parse");
        let s = catalog.get("somewhere").unwrap();
        assert!(s.local_name.is_none());
        assert!(s.coords.is_none());
    }

    #[test]
    fn malformed_registry_is_a_parse_error() {
        let err = StationCatalog::from_json("[{\"id\": 12}]").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
