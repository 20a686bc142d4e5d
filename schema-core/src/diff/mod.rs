mod differ;
mod statement;


// 重新导出公共接口
pub use differ::diff_table;
pub use statement::{ColumnDefinition, DifferenceStatement};
