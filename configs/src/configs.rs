use crate::{AppConfigs, MetricConfigs};

#[derive(Debug, Clone, Default)]
pub struct Configs {
    pub app: AppConfigs,
    pub metric: MetricConfigs,
}
