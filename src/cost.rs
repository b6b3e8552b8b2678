//! 电网扩展模式的边代价模型。
//!
//! 边权 = 材料费 + 安装费 + 线损费，三项都是简化的估算标注，不做潮流计算：
//!
//! * 材料费 `material = m · d`；
//! * 安装费 `installation = k · d^α`（α 默认 1.5，长线路施工难度非线性增长）；
//! * 线损：输送功率 `P = min(cap(a), cap(b))` kW，线电压 `V = min(volt(a), volt(b))` kV，
//!   电流 `I = P / (√3 · V)` A，电阻 `R = r · d` Ω，
//!   `loss_kw = 3 · I² · R / 1000`，线损费 `loss = loss_kw · c`。
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::structure::{Category, Vertex, Weight};

#[derive(Debug, Error, PartialEq)]
pub enum CostError {
    #[error("cost parameter `{name}` must be finite and non-negative, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("category `{category}` needs a finite, positive voltage, got {value}")]
    InvalidVoltage { category: Category, value: f64 },
    #[error("category `{category}` needs a finite, non-negative capacity, got {value}")]
    InvalidCapacity { category: Category, value: f64 },
}

/// Base electrical attributes derived from a [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub capacity_kw: f64,
    pub voltage_kv: f64,
}

impl CategorySpec {
    pub const fn new(capacity_kw: f64, voltage_kv: f64) -> Self {
        Self {
            capacity_kw,
            voltage_kv,
        }
    }
}

/// Explicit mapping from every category to its base capacity and voltage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTable {
    #[serde(default = "default_generator")]
    pub generator: CategorySpec,
    #[serde(default = "default_substation")]
    pub substation: CategorySpec,
    #[serde(default = "default_transformer")]
    pub transformer: CategorySpec,
    #[serde(default = "default_consumer")]
    pub consumer: CategorySpec,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self {
            generator: default_generator(),
            substation: default_substation(),
            transformer: default_transformer(),
            consumer: default_consumer(),
        }
    }
}

impl CategoryTable {
    pub fn spec(&self, category: Category) -> CategorySpec {
        match category {
            Category::Generator => self.generator,
            Category::Substation => self.substation,
            Category::Transformer => self.transformer,
            Category::Consumer => self.consumer,
        }
    }

    pub fn validate(&self) -> Result<(), CostError> {
        for category in Category::ALL {
            let spec = self.spec(category);
            if !spec.capacity_kw.is_finite() || spec.capacity_kw < 0.0 {
                return Err(CostError::InvalidCapacity {
                    category,
                    value: spec.capacity_kw,
                });
            }
            if !spec.voltage_kv.is_finite() || spec.voltage_kv <= 0.0 {
                return Err(CostError::InvalidVoltage {
                    category,
                    value: spec.voltage_kv,
                });
            }
        }
        Ok(())
    }
}

fn default_generator() -> CategorySpec {
    CategorySpec::new(5000.0, 33.0)
}

fn default_substation() -> CategorySpec {
    CategorySpec::new(2000.0, 11.0)
}

fn default_transformer() -> CategorySpec {
    CategorySpec::new(500.0, 11.0)
}

fn default_consumer() -> CategorySpec {
    CategorySpec::new(100.0, 0.4)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostConfig {
    #[serde(default = "default_material_cost_per_unit")]
    pub material_cost_per_unit: f64,
    #[serde(default = "default_installation_base")]
    pub installation_base: f64,
    #[serde(default = "default_installation_exponent")]
    pub installation_exponent: f64,
    #[serde(default = "default_resistance_per_unit")]
    pub resistance_per_unit: f64,
    #[serde(default = "default_loss_cost_per_kw")]
    pub loss_cost_per_kw: f64,
    /// Category assumed for vertices added without one.
    #[serde(default = "default_category")]
    pub default_category: Category,
    #[serde(default)]
    pub categories: CategoryTable,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            material_cost_per_unit: default_material_cost_per_unit(),
            installation_base: default_installation_base(),
            installation_exponent: default_installation_exponent(),
            resistance_per_unit: default_resistance_per_unit(),
            loss_cost_per_kw: default_loss_cost_per_kw(),
            default_category: default_category(),
            categories: CategoryTable::default(),
        }
    }
}

fn default_material_cost_per_unit() -> f64 {
    12.0
}

fn default_installation_base() -> f64 {
    4.0
}

fn default_installation_exponent() -> f64 {
    1.5
}

fn default_resistance_per_unit() -> f64 {
    0.0005
}

fn default_loss_cost_per_kw() -> f64 {
    50.0
}

fn default_category() -> Category {
    Category::Consumer
}

/// Per-edge cost annotation kept alongside the weight in cost mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub material: Weight,
    pub installation: Weight,
    pub loss_kw: f64,
    pub loss: Weight,
    pub total: Weight,
}

/// Validated cost model. Only constructible through [`CostModel::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct CostModel {
    config: CostConfig,
}

impl CostModel {
    pub fn new(config: CostConfig) -> Result<Self, CostError> {
        let params = [
            ("material_cost_per_unit", config.material_cost_per_unit),
            ("installation_base", config.installation_base),
            ("installation_exponent", config.installation_exponent),
            ("resistance_per_unit", config.resistance_per_unit),
            ("loss_cost_per_kw", config.loss_cost_per_kw),
        ];
        for (name, value) in params {
            if !value.is_finite() || value < 0.0 {
                return Err(CostError::InvalidParameter { name, value });
            }
        }
        config.categories.validate()?;
        Ok(Self { config })
    }

    pub fn spec_of(&self, vertex: &Vertex) -> CategorySpec {
        let category = vertex.category.unwrap_or(self.config.default_category);
        self.config.categories.spec(category)
    }

    pub fn breakdown(&self, a: &Vertex, b: &Vertex, distance: Weight) -> CostBreakdown {
        let cfg = &self.config;
        let (sa, sb) = (self.spec_of(a), self.spec_of(b));

        let material = cfg.material_cost_per_unit * distance;
        let installation = cfg.installation_base * distance.powf(cfg.installation_exponent);

        let load_kw = sa.capacity_kw.min(sb.capacity_kw);
        let voltage_kv = sa.voltage_kv.min(sb.voltage_kv);
        let current = load_kw / (3f64.sqrt() * voltage_kv);
        let resistance = cfg.resistance_per_unit * distance;
        let loss_kw = 3.0 * current * current * resistance / 1000.0;
        let loss = loss_kw * cfg.loss_cost_per_kw;

        CostBreakdown {
            material,
            installation,
            loss_kw,
            loss,
            total: material + installation + loss,
        }
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            config: CostConfig::default(),
        }
    }
}
