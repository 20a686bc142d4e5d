// 同步脚本组装模块
//
// 把两边的表划分为缺失、共有、多出三类，
// 对共有表做列级比较，最终输出一份可审阅的 SQL 脚本。

mod assembler;
mod session;
mod types;

pub use assembler::assemble_script;
pub use session::compare_catalogs;
pub use types::{ReconciliationScript, ScriptHeader, SummaryCounts, TablePartition};
