use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::anchor::Anchor;
use crate::math::curve::exponentialdecaycurve::ExponentialDecayCurve;
use crate::math::curve::logisticdecaycurve::{
    LogisticDecayCurve,
    DEFAULT_MAX_TIME
};
use crate::math::curve::piecewiselineardecaycurve::PiecewiseLinearDecayCurve;
use crate::model::constantratedecay::{
    ConstantRateDecay,
    DEFAULT_DAILY_RATE
};
use crate::model::decaymodel::DecayModel;

use super::managererror::ManagerError;

#[derive(Deserialize)]
struct NamedJsonObject {
    name: String
}

fn default_daily_rate() -> f64 {
    DEFAULT_DAILY_RATE
}

fn default_max_time() -> f64 {
    DEFAULT_MAX_TIME
}

/// JSON 中的模型設定，以 `"model"` 欄位區分種類，例如：
///
/// ```json
/// { "name": "booking", "model": "piecewise_linear",
///   "anchors": [{ "x": 1, "y": 0.95 }, { "x": 8, "y": 0.01 }] }
/// ```
#[derive(Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
enum DecayModelJsonProp {
    Baseline {
        #[serde(default = "default_daily_rate")]
        rate: f64
    },
    Exponential {
        anchor_time: f64,
        anchor_value: f64,
        #[serde(default)]
        min_constraint: f64
    },
    Logistic {
        anchors: Vec<Anchor>,
        #[serde(default = "default_max_time")]
        max_time: f64
    },
    PiecewiseLinear {
        anchors: Vec<Anchor>
    }
}

impl DecayModelJsonProp {
    fn build(self) -> Result<DecayModel, ManagerError> {
        let model = match self {
            DecayModelJsonProp::Baseline { rate } => {
                DecayModel::from(ConstantRateDecay::new(rate)?)
            },
            DecayModelJsonProp::Exponential { anchor_time, anchor_value, min_constraint } => {
                DecayModel::from(ExponentialDecayCurve::with_min_constraint(anchor_time, anchor_value, min_constraint)?)
            },
            DecayModelJsonProp::Logistic { anchors, max_time } => {
                DecayModel::from(LogisticDecayCurve::with_max_time(max_time, &anchors)?)
            },
            DecayModelJsonProp::PiecewiseLinear { anchors } => {
                DecayModel::from(PiecewiseLinearDecayCurve::new(&anchors)?)
            }
        };
        Ok(model)
    }
}

/// 以名稱管理 decay 模型。
///
/// 模型建構後不可變，`get` 回傳共享的 `Arc`。
#[derive(Default)]
pub struct DecayModelManager {
    map: HashMap<String, Arc<DecayModel>>
}

impl DecayModelManager {
    pub fn new() -> DecayModelManager {
        DecayModelManager { map: HashMap::new() }
    }

    pub fn insert(&mut self, name: String, model: DecayModel) {
        debug!(name = name.as_str(), kind = model.kind(), "registered decay model");
        self.map.insert(name, Arc::new(model));
    }

    pub fn get(&self, name: &str) -> Result<Arc<DecayModel>, ManagerError> {
        self.map
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn insert_obj_from_json(&mut self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = serde_json::from_value(json_value.clone())?;
        let prop: DecayModelJsonProp = serde_json::from_value(json_value)?;
        let model = prop.build()?;
        self.insert(named_object.name, model);
        Ok(())
    }

    pub fn insert_obj_from_json_vec(&mut self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }

    /// 讀取單一物件或物件陣列
    pub fn from_reader<R: Read>(&mut self, mut reader: R) -> Result<(), ManagerError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        let json_value: serde_json::Value = serde_json::from_str(&content)?;
        match json_value {
            serde_json::Value::Array(json_array) => self.insert_obj_from_json_vec(&json_array),
            _ => self.insert_obj_from_json(json_value)
        }
    }
}
