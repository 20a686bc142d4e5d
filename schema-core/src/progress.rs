use std::fmt;
use tracing::info;

/// 比对流程的阶段标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    ConnectSource,
    ConnectTarget,
    ListTables,
    Compare,
    Generate,
}

impl Phase {
    pub const TOTAL: usize = 5;

    pub fn step(&self) -> usize {
        match self {
            Phase::ConnectSource => 1,
            Phase::ConnectTarget => 2,
            Phase::ListTables => 3,
            Phase::Compare => 4,
            Phase::Generate => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::ConnectSource => "连接源数据库(本地)...",
            Phase::ConnectTarget => "连接目标数据库(远程)...",
            Phase::ListTables => "获取表列表...",
            Phase::Compare => "比较表结构...",
            Phase::Generate => "生成SQL脚本...",
        }
    }

    pub fn report(&self) {
        info!("{}", self);
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}] {}", self.step(), Self::TOTAL, self.label())
    }
}
